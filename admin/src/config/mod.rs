pub mod admin_config;
pub mod error;

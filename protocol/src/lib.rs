pub mod framework;
pub mod object;
pub mod registry;

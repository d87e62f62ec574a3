pub mod model;
pub mod writables;

pub mod map;
pub mod mechanism;
pub mod resolver;
pub mod state;

pub mod library;
pub mod palette;

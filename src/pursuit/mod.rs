pub mod models;
pub mod spy;
pub mod types;
pub mod utils;

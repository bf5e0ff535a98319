//! 外部API連携

pub mod spoonacular;

pub use spoonacular::{describe_js_error, SpoonacularClient};

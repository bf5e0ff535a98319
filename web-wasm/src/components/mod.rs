//! UIコンポーネント

pub mod header;
pub mod search_bar;
pub mod category_grid;
pub mod recipe_grid;
pub mod recipe_detail;
pub mod loading_overlay;

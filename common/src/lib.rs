//! Recipe Browser Common Library
//!
//! ブラウザ(WASM)とネイティブテストで共有される型・状態・表示ロジック

pub mod types;
pub mod error;
pub mod config;
pub mod endpoint;
pub mod parser;
pub mod catalog;
pub mod source;
pub mod state;
pub mod render;

pub use types::{Ingredient, RecipeDetail, RecipeId, RecipeSummary, SearchResponse};
pub use error::{Error, Result};
pub use config::{ApiConfig, API_KEY_ENV, PAGE_SIZE};
pub use endpoint::{detail_url, search_url, SearchQuery};
pub use parser::{check_status, parse_detail_response, parse_search_response};
pub use catalog::{category_title, search_title, Category, TrendingTag, FEATURED_CATEGORIES, TRENDING_TAGS};
pub use source::{execute, RecipeSource, Request, RequestKind, Response};
pub use state::{BrowserState, DetailContent, RequestToken, ResultsContent, ViewMode};
pub use render::{
    render_card, render_detail, render_recipe, render_results, CardView, DetailPanel, DetailView,
    ResultsView,
};

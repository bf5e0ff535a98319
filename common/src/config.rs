//! API接続設定
//!
//! APIキーはソースに埋め込まず、ビルド時の環境変数 `RECIPE_API_KEY` から取得する。
//! ネイティブ環境（テスト等）では実行時の同名環境変数も参照する。

use std::fmt;

use crate::error::{Error, Result};

/// APIキーの環境変数名
pub const API_KEY_ENV: &str = "RECIPE_API_KEY";

/// Spoonacular recipes エンドポイントのベースURL
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// 1回の検索で取得する件数（ページングなし）
pub const PAGE_SIZE: u32 = 12;

#[derive(Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub page_size: u32,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            page_size: PAGE_SIZE,
        }
    }

    /// ベースURLを差し替える（末尾の `/` は除去）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 環境変数からAPIキーを読み込む
    ///
    /// 優先順位:
    /// 1. ビルド時の `RECIPE_API_KEY`
    /// 2. 実行時の `RECIPE_API_KEY`（WASM以外）
    pub fn from_build_env() -> Result<Self> {
        let key = option_env!("RECIPE_API_KEY")
            .map(str::to_string)
            .or_else(runtime_api_key);
        Self::from_key(key)
    }

    fn from_key(key: Option<String>) -> Result<Self> {
        match key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(Error::Config(format!("{} is not set", API_KEY_ENV))),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_key() -> Option<String> {
    None
}

// APIキーはログに出さない
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .finish()
    }
}

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// HTTPステータス異常・通信失敗
    #[error("{0}")]
    RequestFailed(String),

    /// 正常なレスポンスだが該当レシピなし
    #[error("No recipes found")]
    EmptyResult,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// HTTPステータスからエラーを生成
    pub fn from_status(status: u16, context: &str) -> Self {
        Error::RequestFailed(format!("{} (HTTP {})", context, status))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

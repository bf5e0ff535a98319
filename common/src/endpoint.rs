//! APIリクエストURLの組み立て

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ApiConfig;
use crate::types::RecipeId;

// クエリ値でエスケープしない文字（RFC 3986 unreserved）
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 一覧取得の条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// フリーテキスト検索
    Text(String),
    /// 料理ジャンル（cuisine）で絞り込み
    Cuisine(String),
}

impl SearchQuery {
    fn param(&self) -> (&'static str, &str) {
        match self {
            SearchQuery::Text(text) => ("query", text),
            SearchQuery::Cuisine(cuisine) => ("cuisine", cuisine),
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// complexSearch のURL
pub fn search_url(config: &ApiConfig, query: &SearchQuery) -> String {
    let (name, value) = query.param();
    format!(
        "{}/complexSearch?{}={}&number={}&apiKey={}",
        config.base_url,
        name,
        encode(value),
        config.page_size,
        encode(&config.api_key),
    )
}

/// information（詳細）のURL
pub fn detail_url(config: &ApiConfig, id: RecipeId) -> String {
    format!(
        "{}/{}/information?includeNutrition=false&apiKey={}",
        config.base_url,
        id,
        encode(&config.api_key),
    )
}

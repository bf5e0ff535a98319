//! APIレスポンスパーサー
//!
//! HTTPステータスの判定と、レスポンス本文（JSON）のパースを行う。
//! 2xx 以外の本文はパースしない。

use crate::error::{Error, Result};
use crate::types::{RecipeDetail, RecipeSummary, SearchResponse};

/// HTTPステータスを判定（2xx以外は RequestFailed）
///
/// # Arguments
/// * `ok` - fetch Response の `ok`（2xx なら true）
/// * `status` - HTTPステータスコード
/// * `context` - エラーメッセージの先頭に付ける文言
pub fn check_status(ok: bool, status: u16, context: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::from_status(status, context))
    }
}

/// complexSearch の本文をパース
///
/// # Returns
/// * `Ok(Vec<RecipeSummary>)` - パース成功（0件もOk）
/// * `Err(Error::Json)` - JSONとして不正
pub fn parse_search_response(body: &str) -> Result<Vec<RecipeSummary>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.results)
}

/// information の本文をパース
pub fn parse_detail_response(body: &str) -> Result<RecipeDetail> {
    Ok(serde_json::from_str(body)?)
}

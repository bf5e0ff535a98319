//! レシピ取得元の抽象化
//!
//! ブラウザでは fetch、テストではインメモリ実装を差し込む。

use crate::endpoint::SearchQuery;
use crate::error::{Error, Result};
use crate::state::RequestToken;
use crate::types::{RecipeDetail, RecipeId, RecipeSummary};

/// レシピAPIへのアクセス
///
/// WASMの Future は Send ではないため Send 境界は付けない。
#[allow(async_fn_in_trait)]
pub trait RecipeSource {
    /// 一覧取得（PAGE_SIZE 件まで）
    async fn search_recipes(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>>;

    /// 詳細取得
    async fn recipe_detail(&self, id: RecipeId) -> Result<RecipeDetail>;
}

/// 発行済みリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub token: RequestToken,
    pub kind: RequestKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    Recipes(SearchQuery),
    Detail(RecipeId),
}

/// リクエスト結果
#[derive(Debug)]
pub enum Response {
    Recipes(Result<Vec<RecipeSummary>>),
    Detail(Result<RecipeDetail>),
}

/// 0件を EmptyResult に変換
pub fn require_results(results: Vec<RecipeSummary>) -> Result<Vec<RecipeSummary>> {
    if results.is_empty() {
        Err(Error::EmptyResult)
    } else {
        Ok(results)
    }
}

/// リクエストを実行して結果を返す
pub async fn execute<S: RecipeSource>(source: &S, request: &Request) -> Response {
    match &request.kind {
        RequestKind::Recipes(query) => {
            let outcome = source.search_recipes(query).await.and_then(require_results);
            Response::Recipes(outcome)
        }
        RequestKind::Detail(id) => Response::Detail(source.recipe_detail(*id).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_results_empty() {
        assert!(matches!(require_results(vec![]), Err(Error::EmptyResult)));
    }

    #[test]
    fn test_require_results_non_empty() {
        let results = vec![RecipeSummary { id: 1, ..Default::default() }];
        assert_eq!(require_results(results).unwrap().len(), 1);
    }
}

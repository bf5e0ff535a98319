//! Spoonacular API連携（ブラウザ fetch）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request as FetchRequest, RequestInit, RequestMode, Response as FetchResponse};

use recipe_browser_common::{
    check_status, detail_url, parse_detail_response, parse_search_response, search_url,
    ApiConfig, Error, RecipeDetail, RecipeId, RecipeSource, RecipeSummary, Result, SearchQuery,
};

/// fetch ベースの RecipeSource
#[derive(Clone, Debug)]
pub struct SpoonacularClient {
    config: ApiConfig,
}

impl SpoonacularClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// ビルド時の環境変数から生成
    ///
    /// キーが無くても画面は動かす（各リクエストがAPI側で拒否されエラー表示になる）。
    pub fn from_build_env() -> Self {
        let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
            log::error!("{}; recipe requests will be rejected", e);
            ApiConfig::new("")
        });
        Self::new(config)
    }
}

/// JS側の例外をメッセージ文字列に変換
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn transport_error(context: &str, value: JsValue) -> Error {
    Error::RequestFailed(format!("{}: {}", context, describe_js_error(&value)))
}

/// GETして本文テキストを返す（2xx以外は本文を読まずにエラー）
async fn get_text(url: &str, context: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = FetchRequest::new_with_str_and_init(url, &opts)
        .map_err(|e| transport_error(context, e))?;

    let window = web_sys::window()
        .ok_or_else(|| Error::RequestFailed(format!("{}: window is not available", context)))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| transport_error(context, e))?;
    let resp: FetchResponse = resp_value
        .dyn_into()
        .map_err(|e| transport_error(context, e))?;

    check_status(resp.ok(), resp.status(), context)?;

    let body = resp.text().map_err(|e| transport_error(context, e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| transport_error(context, e))?;
    text.as_string()
        .ok_or_else(|| Error::RequestFailed(format!("{}: response body is not text", context)))
}

impl RecipeSource for SpoonacularClient {
    async fn search_recipes(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>> {
        let context = match query {
            SearchQuery::Text(_) => "Search failed",
            SearchQuery::Cuisine(_) => "Failed to fetch recipes",
        };

        let body = get_text(&search_url(&self.config, query), context).await?;
        parse_search_response(&body)
    }

    async fn recipe_detail(&self, id: RecipeId) -> Result<RecipeDetail> {
        let context = "Failed to load recipe details";
        let body = get_text(&detail_url(&self.config, id), context).await?;
        parse_detail_response(&body)
    }
}

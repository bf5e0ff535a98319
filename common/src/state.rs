//! 画面状態とコントローラ
//!
//! 画面遷移:
//! Welcome --検索/カテゴリ--> ResultsList --カード選択--> RecipeDetail --戻る--> ResultsList or Welcome
//!
//! 通信を伴う遷移は `begin_*` でリクエストを発行し、結果を `complete` で反映する。
//! 最後に発行したリクエスト以外の結果は破棄する。

use log::{debug, info, warn};

use crate::catalog::{category_title, search_title};
use crate::endpoint::SearchQuery;
use crate::error::{Error, Result};
use crate::source::{execute, RecipeSource, Request, RequestKind, Response};
use crate::types::{RecipeDetail, RecipeId, RecipeSummary};

/// 表示中のページ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Welcome,
    ResultsList,
    RecipeDetail,
}

/// リクエスト識別子（発行順に単調増加）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

/// 結果エリアの内容
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsContent {
    #[default]
    Idle,
    Loaded(Vec<RecipeSummary>),
    Empty,
    Failed(String),
}

/// 詳細エリアの内容
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailContent {
    #[default]
    Empty,
    Loaded(RecipeDetail),
    Failed(String),
}

/// アプリケーションの状態
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    mode: ViewMode,
    loading: bool,
    results_title: String,
    results: ResultsContent,
    detail: DetailContent,
    current_category: Option<String>,
    categories_visible: bool,
    last_issued: RequestToken,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Welcome,
            loading: false,
            results_title: String::new(),
            results: ResultsContent::Idle,
            detail: DetailContent::Empty,
            current_category: None,
            categories_visible: true,
            last_issued: RequestToken::default(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results_title(&self) -> &str {
        &self.results_title
    }

    pub fn results(&self) -> &ResultsContent {
        &self.results
    }

    pub fn detail(&self) -> &DetailContent {
        &self.detail
    }

    pub fn current_category(&self) -> Option<&str> {
        self.current_category.as_deref()
    }

    pub fn categories_visible(&self) -> bool {
        self.categories_visible
    }

    fn issue(&mut self) -> RequestToken {
        self.last_issued = RequestToken(self.last_issued.0 + 1);
        self.last_issued
    }

    fn begin_results(&mut self, title: String, query: SearchQuery) -> Request {
        let token = self.issue();
        self.mode = ViewMode::ResultsList;
        self.loading = true;
        self.categories_visible = false;
        self.detail = DetailContent::Empty;
        // 見出しと結果は常に同じリクエストのもの
        self.results = ResultsContent::Idle;
        self.results_title = title;
        Request {
            token,
            kind: RequestKind::Recipes(query),
        }
    }

    /// フリーテキスト検索を開始する（空文字なら何もしない）
    pub fn begin_search(&mut self, text: &str) -> Option<Request> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }

        info!("recipe search: query={:?}", query);
        self.current_category = None;
        Some(self.begin_results(search_title(query), SearchQuery::Text(query.to_string())))
    }

    /// カテゴリ一覧を開始する（空文字なら何もしない）
    pub fn begin_category(&mut self, category: &str) -> Option<Request> {
        let category = category.trim();
        if category.is_empty() {
            return None;
        }

        info!("recipe category: cuisine={:?}", category);
        self.current_category = Some(category.to_string());
        Some(self.begin_results(
            category_title(category),
            SearchQuery::Cuisine(category.to_string()),
        ))
    }

    /// 詳細表示を開始する
    ///
    /// 応答を待たずに詳細ページへ切り替える。
    pub fn begin_detail(&mut self, id: RecipeId) -> Request {
        info!("recipe detail: id={}", id);
        let token = self.issue();
        self.mode = ViewMode::RecipeDetail;
        self.loading = true;
        self.categories_visible = false;
        self.detail = DetailContent::Empty;
        Request {
            token,
            kind: RequestKind::Detail(id),
        }
    }

    /// リクエスト結果を反映する
    ///
    /// 最新でないリクエストの結果は破棄して false を返す。
    pub fn complete(&mut self, token: RequestToken, response: Response) -> bool {
        if token != self.last_issued {
            debug!("discarding stale response: {:?} (latest {:?})", token, self.last_issued);
            return false;
        }

        self.loading = false;
        match response {
            Response::Recipes(outcome) => self.apply_results(outcome),
            Response::Detail(outcome) => self.apply_detail(outcome),
        }
        true
    }

    fn apply_results(&mut self, outcome: Result<Vec<RecipeSummary>>) {
        self.results = match outcome {
            Ok(recipes) if recipes.is_empty() => ResultsContent::Empty,
            Ok(recipes) => ResultsContent::Loaded(recipes),
            Err(Error::EmptyResult) => ResultsContent::Empty,
            Err(e) => {
                warn!("recipe list request failed: {}", e);
                ResultsContent::Failed(e.to_string())
            }
        };
    }

    fn apply_detail(&mut self, outcome: Result<RecipeDetail>) {
        self.detail = match outcome {
            Ok(recipe) => DetailContent::Loaded(recipe),
            Err(e) => {
                warn!("recipe detail request failed: {}", e);
                DetailContent::Failed(e.to_string())
            }
        };
    }

    /// 詳細ページから一覧（またはトップ）へ戻る
    ///
    /// 通信中の詳細リクエストは無効化する。
    pub fn go_back(&mut self) {
        if self.mode != ViewMode::RecipeDetail {
            return;
        }

        self.issue();
        self.loading = false;
        self.detail = DetailContent::Empty;
        self.categories_visible = true;
        self.mode = match self.results {
            ResultsContent::Idle => ViewMode::Welcome,
            _ => ViewMode::ResultsList,
        };
    }

    async fn run<S: RecipeSource>(&mut self, source: &S, request: Request) {
        let response = execute(source, &request).await;
        self.complete(request.token, response);
    }

    /// 検索して結果を反映する
    pub async fn search<S: RecipeSource>(&mut self, source: &S, text: &str) {
        if let Some(request) = self.begin_search(text) {
            self.run(source, request).await;
        }
    }

    /// カテゴリ一覧を取得して結果を反映する
    pub async fn browse_category<S: RecipeSource>(&mut self, source: &S, category: &str) {
        if let Some(request) = self.begin_category(category) {
            self.run(source, request).await;
        }
    }

    /// 詳細を取得して結果を反映する
    pub async fn view_detail<S: RecipeSource>(&mut self, source: &S, id: RecipeId) {
        let request = self.begin_detail(id);
        self.run(source, request).await;
    }
}

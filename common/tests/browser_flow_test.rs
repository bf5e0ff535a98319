//! 画面遷移フローテスト
//!
//! インメモリの RecipeSource で検索→一覧→詳細→戻るの流れを検証

use std::cell::RefCell;
use std::collections::HashMap;

use recipe_browser_common::{
    render_detail, render_results, BrowserState, DetailPanel, Error, Ingredient, RecipeDetail,
    RecipeId, RecipeSource, RecipeSummary, Result, ResultsView, SearchQuery, ViewMode,
};

/// 呼び出し履歴を記録するテスト用ソース
#[derive(Default)]
struct FakeSource {
    lists: HashMap<String, std::result::Result<Vec<RecipeSummary>, String>>,
    details: HashMap<RecipeId, RecipeDetail>,
    calls: RefCell<Vec<String>>,
}

impl FakeSource {
    fn with_list(mut self, key: &str, recipes: Vec<RecipeSummary>) -> Self {
        self.lists.insert(key.to_string(), Ok(recipes));
        self
    }

    fn with_list_error(mut self, key: &str, message: &str) -> Self {
        self.lists.insert(key.to_string(), Err(message.to_string()));
        self
    }

    fn with_detail(mut self, id: RecipeId, detail: RecipeDetail) -> Self {
        self.details.insert(id, detail);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl RecipeSource for FakeSource {
    async fn search_recipes(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>> {
        let key = match query {
            SearchQuery::Text(text) => format!("query={}", text),
            SearchQuery::Cuisine(cuisine) => format!("cuisine={}", cuisine),
        };
        self.calls.borrow_mut().push(key.clone());

        match self.lists.get(&key) {
            Some(Ok(recipes)) => Ok(recipes.clone()),
            Some(Err(message)) => Err(Error::RequestFailed(message.clone())),
            None => Err(Error::RequestFailed("network error".into())),
        }
    }

    async fn recipe_detail(&self, id: RecipeId) -> Result<RecipeDetail> {
        self.calls.borrow_mut().push(format!("detail={}", id));
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::from_status(404, "Failed to load recipe details"))
    }
}

fn summaries(n: u64) -> Vec<RecipeSummary> {
    (1..=n)
        .map(|id| RecipeSummary {
            id,
            title: format!("Dish {}", id),
            image: format!("https://img.example/{}.jpg", id),
            ready_in_minutes: if id % 2 == 0 { Some(20) } else { None },
            servings: Some(4),
        })
        .collect()
}

fn detail_with_ingredients() -> RecipeDetail {
    RecipeDetail {
        title: "Dish 3".into(),
        image: "https://img.example/3.jpg".into(),
        ready_in_minutes: Some(40),
        servings: Some(2),
        aggregate_likes: Some(17),
        extended_ingredients: vec![
            Ingredient { amount: 2.0, unit: "cups".into(), name: "flour".into() },
            Ingredient { amount: 0.5, unit: "tsp".into(), name: "salt".into() },
            Ingredient { amount: 3.0, unit: "large".into(), name: "eggs".into() },
        ],
        instructions: Some("<ol><li>Mix.</li><li>Bake.</li></ol>".into()),
    }
}

#[tokio::test]
async fn test_blank_search_issues_no_request() {
    let source = FakeSource::default();
    let mut state = BrowserState::new();

    state.search(&source, "  ").await;

    assert!(source.calls().is_empty());
    assert_eq!(state.mode(), ViewMode::Welcome);
}

#[tokio::test]
async fn test_search_renders_one_card_per_result() {
    let source = FakeSource::default().with_list("query=soup", summaries(5));
    let mut state = BrowserState::new();

    state.search(&source, "soup").await;

    assert_eq!(source.calls(), vec!["query=soup"]);
    assert_eq!(state.mode(), ViewMode::ResultsList);
    assert!(!state.is_loading());
    match render_results(state.results()) {
        ResultsView::Cards(cards) => {
            assert_eq!(cards.len(), 5);
            assert_eq!(cards[0].title, "Dish 1");
            assert_eq!(cards[0].time_label, "N/A mins");
            assert_eq!(cards[1].time_label, "20 mins");
            assert_eq!(cards[1].servings_label, "4 servings");
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_without_results_shows_no_results_panel() {
    let source = FakeSource::default().with_list("query=pasta", vec![]);
    let mut state = BrowserState::new();

    state.search(&source, "pasta").await;

    assert!(!state.is_loading());
    match render_results(state.results()) {
        ResultsView::NoResults { heading, .. } => assert_eq!(heading, "No Recipes Found"),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_category_with_twelve_results() {
    let source = FakeSource::default().with_list("cuisine=italian", summaries(12));
    let mut state = BrowserState::new();

    state.browse_category(&source, "italian").await;

    assert_eq!(state.results_title(), "Italian Recipes");
    match render_results(state.results()) {
        ResultsView::Cards(cards) => assert_eq!(cards.len(), 12),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_request_shows_error_with_message() {
    let source = FakeSource::default().with_list_error("query=cake", "Search failed (HTTP 402)");
    let mut state = BrowserState::new();

    state.search(&source, "cake").await;

    assert!(!state.is_loading());
    match render_results(state.results()) {
        ResultsView::Error { message, retry, .. } => {
            assert!(message.contains("Search failed (HTTP 402)"));
            assert!(retry);
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_new_search_replaces_previous_results() {
    let source = FakeSource::default()
        .with_list("query=soup", summaries(5))
        .with_list("cuisine=thai", summaries(2));
    let mut state = BrowserState::new();

    state.search(&source, "soup").await;
    state.browse_category(&source, "thai").await;

    assert_eq!(state.results_title(), "Thai Recipes");
    match render_results(state.results()) {
        ResultsView::Cards(cards) => assert_eq!(cards.len(), 2),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_select_card_loads_detail() {
    let source = FakeSource::default()
        .with_list("query=bread", summaries(3))
        .with_detail(3, detail_with_ingredients());
    let mut state = BrowserState::new();

    state.search(&source, "bread").await;
    state.view_detail(&source, 3).await;

    assert_eq!(source.calls(), vec!["query=bread", "detail=3"]);
    assert_eq!(state.mode(), ViewMode::RecipeDetail);
    assert!(!state.is_loading());
    match render_detail(state.detail()) {
        DetailPanel::Recipe(view) => {
            assert_eq!(view.ingredients, vec!["2 cups flour", "0.5 tsp salt", "3 large eggs"]);
            assert_eq!(view.likes_label, "17 likes");
            assert_eq!(view.instructions, "Mix.\nBake.");
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[tokio::test]
async fn test_detail_failure_shows_inline_error() {
    let source = FakeSource::default().with_list("query=bread", summaries(1));
    let mut state = BrowserState::new();

    state.search(&source, "bread").await;
    state.view_detail(&source, 99).await;

    assert_eq!(state.mode(), ViewMode::RecipeDetail);
    assert!(!state.is_loading());
    match render_detail(state.detail()) {
        DetailPanel::Error { heading, message } => {
            assert_eq!(heading, "Error Loading Recipe");
            assert!(message.contains("404"));
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[tokio::test]
async fn test_back_returns_to_results_without_detail() {
    let source = FakeSource::default()
        .with_list("query=bread", summaries(3))
        .with_detail(3, detail_with_ingredients());
    let mut state = BrowserState::new();

    state.search(&source, "bread").await;
    state.view_detail(&source, 3).await;
    state.go_back();

    assert_eq!(state.mode(), ViewMode::ResultsList);
    assert!(!state.is_loading());
    assert_eq!(render_detail(state.detail()), DetailPanel::Empty);
    match render_results(state.results()) {
        ResultsView::Cards(cards) => assert_eq!(cards.len(), 3),
        other => panic!("unexpected view: {:?}", other),
    }
}

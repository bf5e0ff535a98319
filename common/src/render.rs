//! 表示用ビューモデル
//!
//! 取得データ → 画面表示の変換のみを行う純粋関数群。
//! 通信や状態変更は行わない。欠損値はプレースホルダに置き換える。

use scraper::{ElementRef, Html, Node};

use crate::state::{DetailContent, ResultsContent};
use crate::types::{Ingredient, RecipeDetail, RecipeId, RecipeSummary};

/// 時間・人数が無いときの表示
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_INSTRUCTIONS: &str = "No instructions available";
pub const NO_RESULTS_HEADING: &str = "No Recipes Found";
pub const NO_RESULTS_HINT: &str = "Try a different search term or category";
pub const ERROR_HEADING: &str = "Error";
pub const DETAIL_ERROR_HEADING: &str = "Error Loading Recipe";

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
const DEFAULT_DETAIL_ERROR_MESSAGE: &str = "Failed to load recipe details";

/// レシピカード1枚分
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    pub time_label: String,
    pub servings_label: String,
}

/// 結果エリアの表示内容
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// まだ何も検索していない
    Idle,
    Cards(Vec<CardView>),
    NoResults { heading: String, hint: String },
    /// retry が true ならページ再読み込みボタンを出す
    Error { heading: String, message: String, retry: bool },
}

/// 詳細画面のレシピ本体
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub image: String,
    pub time_label: String,
    pub servings_label: String,
    pub likes_label: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// 詳細エリアの表示内容
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPanel {
    Empty,
    Recipe(DetailView),
    Error { heading: String, message: String },
}

// 0 も未設定として扱う
fn count_or_na(value: Option<u32>) -> String {
    match value {
        Some(v) if v > 0 => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn non_empty_or(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

pub fn render_card(recipe: &RecipeSummary) -> CardView {
    CardView {
        id: recipe.id,
        title: plain_title(&recipe.title),
        image: recipe.image.clone(),
        time_label: format!("{} mins", count_or_na(recipe.ready_in_minutes)),
        servings_label: format!("{} servings", count_or_na(recipe.servings)),
    }
}

pub fn render_results(content: &ResultsContent) -> ResultsView {
    match content {
        ResultsContent::Idle => ResultsView::Idle,
        ResultsContent::Loaded(recipes) if recipes.is_empty() => no_results(),
        ResultsContent::Loaded(recipes) => {
            ResultsView::Cards(recipes.iter().map(render_card).collect())
        }
        ResultsContent::Empty => no_results(),
        ResultsContent::Failed(message) => ResultsView::Error {
            heading: ERROR_HEADING.to_string(),
            message: non_empty_or(message, DEFAULT_ERROR_MESSAGE),
            retry: true,
        },
    }
}

fn no_results() -> ResultsView {
    ResultsView::NoResults {
        heading: NO_RESULTS_HEADING.to_string(),
        hint: NO_RESULTS_HINT.to_string(),
    }
}

/// 分量の表示（2.0 → "2"）
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

/// 材料1行: "<amount> <unit> <name>"（単位が空なら省略）
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    let amount = format_amount(ingredient.amount);
    [amount.as_str(), ingredient.unit.trim(), ingredient.name.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 手順テキストをHTMLとして解釈し、テキストノードだけを取り出す
///
/// `<li>` `<p>` `<br>` などのブロック要素の区切りは改行になる。
pub fn instructions_text(instructions: Option<&str>) -> String {
    let Some(raw) = instructions else {
        return NO_INSTRUCTIONS.to_string();
    };

    let fragment = Html::parse_fragment(raw);
    let mut lines = Vec::new();
    let mut current = Vec::new();
    collect_text(&fragment.root_element(), &mut current, &mut lines);
    flush_line(&mut current, &mut lines);

    if lines.is_empty() {
        NO_INSTRUCTIONS.to_string()
    } else {
        lines.join("\n")
    }
}

fn collect_text(element: &ElementRef, current: &mut Vec<String>, lines: &mut Vec<String>) {
    let tag = element.value().name().to_ascii_lowercase();
    if matches!(tag.as_str(), "script" | "style") {
        return;
    }
    if tag == "br" {
        flush_line(current, lines);
        return;
    }

    let block = is_block_element(&tag);
    if block {
        flush_line(current, lines);
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if !normalized.is_empty() {
                    current.push(normalized);
                }
            }
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(&child_ref, current, lines);
                }
            }
            _ => {}
        }
    }

    if block {
        flush_line(current, lines);
    }
}

fn flush_line(current: &mut Vec<String>, lines: &mut Vec<String>) {
    if !current.is_empty() {
        lines.push(current.join(" "));
        current.clear();
    }
}

fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div" | "li" | "ol" | "ul" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "section"
            | "blockquote" | "pre" | "table" | "tr"
    )
}

/// タイトルの実体参照（`&amp;` など）をデコード
fn plain_title(title: &str) -> String {
    html_escape::decode_html_entities(title).into_owned()
}

pub fn render_recipe(recipe: &RecipeDetail) -> DetailView {
    DetailView {
        title: plain_title(&recipe.title),
        image: recipe.image.clone(),
        time_label: format!("{} mins", count_or_na(recipe.ready_in_minutes)),
        servings_label: format!("{} servings", count_or_na(recipe.servings)),
        likes_label: format!("{} likes", recipe.aggregate_likes.unwrap_or(0)),
        ingredients: recipe.extended_ingredients.iter().map(format_ingredient).collect(),
        instructions: instructions_text(recipe.instructions.as_deref()),
    }
}

pub fn render_detail(content: &DetailContent) -> DetailPanel {
    match content {
        DetailContent::Empty => DetailPanel::Empty,
        DetailContent::Loaded(recipe) => DetailPanel::Recipe(render_recipe(recipe)),
        DetailContent::Failed(message) => DetailPanel::Error {
            heading: DETAIL_ERROR_HEADING.to_string(),
            message: non_empty_or(message, DEFAULT_DETAIL_ERROR_MESSAGE),
        },
    }
}

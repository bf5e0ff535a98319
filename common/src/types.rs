//! レシピデータの型定義
//!
//! Spoonacular APIのレスポンスをそのまま受け取る型:
//! - RecipeSummary: 検索/カテゴリ一覧の1件（カード表示用）
//! - RecipeDetail: 詳細画面用（材料・手順を含む）
//! - SearchResponse: complexSearch のレスポンス全体

use serde::{Deserialize, Serialize};

/// レシピID
pub type RecipeId = u64;

/// 一覧表示用のレシピ概要
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
}

/// complexSearch のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub results: Vec<RecipeSummary>,
}

/// 材料1行分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

/// レシピ詳細（information エンドポイント）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDetail {
    pub title: String,
    pub image: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub aggregate_likes: Option<u32>,
    pub extended_ingredients: Vec<Ingredient>,
    pub instructions: Option<String>,
}

//! トップ画面の固定メニュー（トレンドタグ・カテゴリ）と見出し文言

/// カテゴリタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// API の cuisine パラメータ
    pub query: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// クイック検索タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingTag {
    /// 検索欄に入れる文字列
    pub query: &'static str,
    pub label: &'static str,
}

pub const FEATURED_CATEGORIES: &[Category] = &[
    Category { query: "italian", label: "Italian", icon: "🍝" },
    Category { query: "mexican", label: "Mexican", icon: "🌮" },
    Category { query: "chinese", label: "Chinese", icon: "🥡" },
    Category { query: "indian", label: "Indian", icon: "🍛" },
    Category { query: "japanese", label: "Japanese", icon: "🍣" },
    Category { query: "thai", label: "Thai", icon: "🍜" },
    Category { query: "french", label: "French", icon: "🥐" },
    Category { query: "mediterranean", label: "Mediterranean", icon: "🫒" },
];

pub const TRENDING_TAGS: &[TrendingTag] = &[
    TrendingTag { query: "pasta", label: "Pasta" },
    TrendingTag { query: "chicken", label: "Chicken" },
    TrendingTag { query: "salad", label: "Salad" },
    TrendingTag { query: "vegan", label: "Vegan" },
    TrendingTag { query: "dessert", label: "Dessert" },
    TrendingTag { query: "soup", label: "Soup" },
];

/// フリーテキスト検索の見出し
pub fn search_title(query: &str) -> String {
    format!("Results for \"{}\"", query)
}

/// カテゴリ一覧の見出し（先頭1文字を大文字化）
///
/// ```
/// use recipe_browser_common::category_title;
///
/// assert_eq!(category_title("italian"), "Italian Recipes");
/// ```
pub fn category_title(category: &str) -> String {
    let mut chars = category.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} Recipes", capitalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_title() {
        assert_eq!(category_title("italian"), "Italian Recipes");
        assert_eq!(category_title("Thai"), "Thai Recipes");
    }

    #[test]
    fn test_category_title_only_first_letter() {
        assert_eq!(category_title("middle eastern"), "Middle eastern Recipes");
    }

    #[test]
    fn test_category_title_empty() {
        assert_eq!(category_title(""), " Recipes");
    }

    #[test]
    fn test_search_title() {
        assert_eq!(search_title("pasta"), "Results for \"pasta\"");
    }

    #[test]
    fn test_featured_categories_are_lowercase_queries() {
        for category in FEATURED_CATEGORIES {
            assert_eq!(category.query, category.query.to_lowercase());
            assert_eq!(category_title(category.query), format!("{} Recipes", category.label));
        }
    }

    #[test]
    fn test_trending_tags_non_empty() {
        assert!(TRENDING_TAGS.iter().all(|tag| !tag.query.trim().is_empty()));
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Blog post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Technology,
    WebDevelopment,
    Career,
    Tutorials,
    Thoughts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::WebDevelopment,
        Category::Career,
        Category::Tutorials,
        Category::Thoughts,
    ];

    /// The kebab-case key used in URLs and documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::WebDevelopment => "web-development",
            Category::Career => "career",
            Category::Tutorials => "tutorials",
            Category::Thoughts => "thoughts",
        }
    }

    /// Human-readable label: first letter upper-cased, hyphens become spaces.
    pub fn display_name(&self) -> String {
        let spaced = self.as_str().replace('-', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseCategoryError(key.to_string()))
    }
}

/// Category constraint used by read queries. `all` is never stored on a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        if key.is_empty() || key.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        key.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Category::WebDevelopment.display_name(), "Web development");
        assert_eq!(Category::Technology.display_name(), "Technology");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "web-development".parse::<Category>().unwrap(),
            Category::WebDevelopment
        );
        assert!("all".parse::<Category>().is_err());
        assert!("machine-learning".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let filter: CategoryFilter = "all".parse().unwrap();
        assert_eq!(filter, CategoryFilter::All);
        assert!(Category::ALL.iter().all(|c| filter.matches(*c)));
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    }

    #[test]
    fn test_filter_only() {
        let filter: CategoryFilter = "career".parse().unwrap();
        assert!(filter.matches(Category::Career));
        assert!(!filter.matches(Category::Thoughts));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::WebDevelopment).unwrap();
        assert_eq!(json, "\"web-development\"");
    }
}

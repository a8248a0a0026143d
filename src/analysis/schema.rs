//! Shape of the analysis the model is asked to return.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single suggestion within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

/// Recommendations grouped by the four fixed categories.
///
/// Field names are the JSON keys of the model contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ux_recommendations: Vec<Recommendation>,
    pub design_recommendations: Vec<Recommendation>,
    pub seo_recommendations: Vec<Recommendation>,
    pub product_attractiveness_recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    pub fn recommendations(&self, category: Category) -> &[Recommendation] {
        match category {
            Category::Ux => &self.ux_recommendations,
            Category::Design => &self.design_recommendations,
            Category::Seo => &self.seo_recommendations,
            Category::ProductAttractiveness => &self.product_attractiveness_recommendations,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL
            .iter()
            .map(|c| self.recommendations(*c).len())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ux,
    Design,
    Seo,
    ProductAttractiveness,
}

impl Category {
    /// Display order.
    pub const ALL: [Category; 4] = [
        Category::Ux,
        Category::Design,
        Category::Seo,
        Category::ProductAttractiveness,
    ];

    /// JSON key in the model response.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Ux => "ux_recommendations",
            Category::Design => "design_recommendations",
            Category::Seo => "seo_recommendations",
            Category::ProductAttractiveness => "product_attractiveness_recommendations",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ux => "User Experience",
            Category::Design => "Web Design",
            Category::Seo => "SEO Optimization",
            Category::ProductAttractiveness => "Product Attractiveness",
        }
    }

    /// Short name used on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            Category::Ux => "ux",
            Category::Design => "design",
            Category::Seo => "seo",
            Category::ProductAttractiveness => "product",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Ux => 0,
            Category::Design => 1,
            Category::Seo => 2,
            Category::ProductAttractiveness => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ux" | "user-experience" => Ok(Category::Ux),
            "design" | "web-design" => Ok(Category::Design),
            "seo" => Ok(Category::Seo),
            "product" | "product-attractiveness" => Ok(Category::ProductAttractiveness),
            other => anyhow::bail!(
                "Unknown category: {} (expected one of: ux, design, seo, product)",
                other
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: format!("{} details", title),
        }
    }

    #[test]
    fn test_recommendations_by_category() {
        let result = AnalysisResult {
            ux_recommendations: vec![rec("nav")],
            design_recommendations: vec![],
            seo_recommendations: vec![rec("meta"), rec("sitemap")],
            product_attractiveness_recommendations: vec![],
        };
        assert_eq!(result.recommendations(Category::Ux)[0].title, "nav");
        assert!(result.recommendations(Category::Design).is_empty());
        assert_eq!(result.recommendations(Category::Seo).len(), 2);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_category_order_and_keys() {
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "ux_recommendations",
                "design_recommendations",
                "seo_recommendations",
                "product_attractiveness_recommendations"
            ]
        );
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("UX".parse::<Category>().unwrap(), Category::Ux);
        assert_eq!(
            "product".parse::<Category>().unwrap(),
            Category::ProductAttractiveness
        );
        let err = "pricing".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
    }

    #[test]
    fn test_category_alias_round_trips() {
        for c in Category::ALL {
            assert_eq!(c.alias().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_serialized_keys_match_contract() {
        let json = serde_json::to_value(AnalysisResult::default()).unwrap();
        for c in Category::ALL {
            assert!(json[c.key()].is_array(), "missing {}", c.key());
        }
    }
}

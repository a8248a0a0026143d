//! Tolerant parsing of the model's analysis response.
//!
//! The model is asked for bare JSON but sometimes wraps it in a markdown fence.
//! Parsing strips that fence, decodes the JSON, and checks the four-category
//! contract before anything typed is handed back.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::AnalysisError;
use super::schema::{AnalysisResult, Category, Recommendation};
use crate::util::preview;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```(?:json)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// Remove a markdown code fence wrapping the whole text, if there is one.
///
/// Text that is not fully enclosed by a fence is returned trimmed but otherwise
/// untouched. An empty fence is left as-is so it fails as invalid JSON.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    match FENCE_RE.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(inner) if !inner.as_str().is_empty() => inner.as_str().trim().to_string(),
        _ => trimmed.to_string(),
    }
}

/// Parse raw model output into an [`AnalysisResult`].
///
/// Every category key must be present and hold an array. In `strict` mode each
/// entry must also carry string `title` and `description` fields.
pub fn parse_analysis(text: &str, strict: bool) -> Result<AnalysisResult, AnalysisError> {
    let body = strip_code_fence(text);
    debug!("analysis response body: {}", preview(&body, 200));

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        warn!("analysis response is not JSON: {}", e);
        AnalysisError::InvalidJson(e)
    })?;

    let Some(map) = value.as_object() else {
        return Err(AnalysisError::structure("top-level value is not an object"));
    };

    let mut lists: [Vec<Recommendation>; 4] = Default::default();
    for category in Category::ALL {
        let items = map
            .get(category.key())
            .and_then(Value::as_array)
            .ok_or_else(|| AnalysisError::structure(category.key()))?;
        lists[category.index()] = read_recommendations(category, items, strict)?;
    }

    let [ux, design, seo, product] = lists;
    Ok(AnalysisResult {
        ux_recommendations: ux,
        design_recommendations: design,
        seo_recommendations: seo,
        product_attractiveness_recommendations: product,
    })
}

fn read_recommendations(
    category: Category,
    items: &[Value],
    strict: bool,
) -> Result<Vec<Recommendation>, AnalysisError> {
    if strict {
        return items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value::<Recommendation>(item.clone())
                    .map_err(|_| AnalysisError::structure(format!("{}[{}]", category.key(), i)))
            })
            .collect();
    }

    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let Some(obj) = item.as_object() else {
                warn!("dropping non-object entry {}[{}]", category.key(), i);
                return None;
            };
            let field = |name: &str| {
                obj.get(name)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            Some(Recommendation {
                title: field("title"),
                description: field("description"),
            })
        })
        .collect())
}

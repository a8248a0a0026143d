//! Text rendering of analysis results with collapsible category sections.

use console::{style, Emoji};

use crate::analysis::schema::{AnalysisResult, Category, Recommendation};

static USER: Emoji = Emoji("👤 ", "");
static SCREEN: Emoji = Emoji("🖥️  ", "");
static MAGNIFIER: Emoji = Emoji("🔍 ", "");
static BAG: Emoji = Emoji("🛍️  ", "");
static CROSSMARK: Emoji = Emoji("❌ ", "");

pub const EMPTY_CATEGORY_NOTE: &str =
    "No specific recommendations provided for this category or the category may not be applicable.";

pub const FOOTER: &str = "Always verify AI-generated suggestions with professional expertise.";

const EXPANDED: &str = "▾";
const COLLAPSED: &str = "▸";

fn icon(category: Category) -> &'static Emoji<'static, 'static> {
    match category {
        Category::Ux => &USER,
        Category::Design => &SCREEN,
        Category::Seo => &MAGNIFIER,
        Category::ProductAttractiveness => &BAG,
    }
}

/// Per-category expanded/collapsed flags. Every section starts expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionToggles {
    expanded: [bool; 4],
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            expanded: [true; 4],
        }
    }
}

impl SectionToggles {
    pub fn is_expanded(&self, category: Category) -> bool {
        self.expanded[category.index()]
    }

    pub fn set(&mut self, category: Category, expanded: bool) {
        self.expanded[category.index()] = expanded;
    }

    /// Flip one section; returns its new state.
    pub fn toggle(&mut self, category: Category) -> bool {
        let slot = &mut self.expanded[category.index()];
        *slot = !*slot;
        *slot
    }

    pub fn expand_all(&mut self) {
        self.expanded = [true; 4];
    }

    pub fn collapse_all(&mut self) {
        self.expanded = [false; 4];
    }
}

pub fn render_results(
    result: &AnalysisResult,
    analyzed_url: &str,
    toggles: &SectionToggles,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        style("Analysis Results for:").cyan().bold()
    ));
    out.push_str(&format!("{}\n", style(analyzed_url).blue()));

    for category in Category::ALL {
        out.push('\n');
        render_section(
            &mut out,
            category,
            result.recommendations(category),
            toggles.is_expanded(category),
        );
    }

    out.push_str(&format!("\n{}\n", style(FOOTER).dim()));
    out
}

fn render_section(out: &mut String, category: Category, recs: &[Recommendation], expanded: bool) {
    let chevron = if expanded { EXPANDED } else { COLLAPSED };
    out.push_str(&format!(
        "{} {}{} {}\n",
        style(chevron).dim(),
        icon(category),
        style(category.label()).cyan().bold(),
        style(format!("({})", recs.len())).dim()
    ));

    if !expanded {
        return;
    }

    if recs.is_empty() {
        out.push_str(&format!("  {}\n", style(EMPTY_CATEGORY_NOTE).dim()));
        return;
    }

    for (i, rec) in recs.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, style(&rec.title).bold()));
        for line in rec.description.lines() {
            out.push_str(&format!("     {}\n", line));
        }
    }
}

pub fn render_error(message: &str) -> String {
    format!("{}{}", CROSSMARK, style(message).red())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, description: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn sample() -> AnalysisResult {
        AnalysisResult {
            ux_recommendations: vec![rec("Improve navigation", "Simplify the top menu.")],
            design_recommendations: vec![],
            seo_recommendations: vec![
                rec("Add meta description", "Missing on the home page."),
                rec("Use alt text", "Images lack alt attributes.\nStart with the hero image."),
            ],
            product_attractiveness_recommendations: vec![],
        }
    }

    fn plain(f: impl FnOnce() -> String) -> String {
        console::set_colors_enabled(false);
        f()
    }

    #[test]
    fn test_toggles_default_expanded() {
        let toggles = SectionToggles::default();
        assert!(Category::ALL.iter().all(|c| toggles.is_expanded(*c)));
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut toggles = SectionToggles::default();
        assert!(!toggles.toggle(Category::Seo));
        assert!(!toggles.is_expanded(Category::Seo));
        assert!(toggles.is_expanded(Category::Ux));
        assert!(toggles.toggle(Category::Seo));

        toggles.collapse_all();
        assert!(!toggles.is_expanded(Category::Design));
        toggles.expand_all();
        assert_eq!(toggles, SectionToggles::default());
    }

    #[test]
    fn test_render_header_and_sections_in_order() {
        let toggles = SectionToggles::default();
        let out = plain(|| render_results(&sample(), "https://example.com", &toggles));

        assert!(out.starts_with("Analysis Results for:\nhttps://example.com\n"));
        let positions: Vec<usize> = Category::ALL
            .iter()
            .map(|c| out.find(c.label()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("User Experience (1)"));
        assert!(out.contains("SEO Optimization (2)"));
        assert!(out.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_render_cards_and_empty_note() {
        let toggles = SectionToggles::default();
        let out = plain(|| render_results(&sample(), "https://example.com", &toggles));

        assert!(out.contains("  1. Improve navigation\n     Simplify the top menu.\n"));
        let alt_text = concat!(
            "  2. Use alt text\n",
            "     Images lack alt attributes.\n",
            "     Start with the hero image.\n",
        );
        assert!(out.contains(alt_text));
        // Design and Product are both empty
        assert_eq!(out.matches(EMPTY_CATEGORY_NOTE).count(), 2);
    }

    #[test]
    fn test_collapsed_section_hides_body() {
        let mut toggles = SectionToggles::default();
        toggles.set(Category::Seo, false);
        toggles.set(Category::Design, false);
        let out = plain(|| render_results(&sample(), "https://example.com", &toggles));

        assert!(!out.contains("Add meta description"));
        assert!(out.contains("SEO Optimization (2)"));
        assert!(out.contains(&format!("{} ", COLLAPSED)));
        assert_eq!(out.matches(EMPTY_CATEGORY_NOTE).count(), 1);
        assert!(out.contains("Improve navigation"));
    }

    #[test]
    fn test_render_error() {
        let out = plain(|| render_error("An unexpected error occurred."));
        assert!(out.ends_with("An unexpected error occurred."));
    }
}

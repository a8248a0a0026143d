// Prompt template for the website analysis request

use crate::analysis::schema::Category;

/// Build the single analysis prompt for `url`.
///
/// The JSON skeleton lists every category key so the model returns all four,
/// even when a category does not apply.
pub fn analysis_prompt(url: &str, custom_instructions: Option<&str>) -> String {
    let skeleton = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"  "{}": [{{"title": "Recommendation Title", "description": "Detailed description of the recommendation."}}]"#,
                c.key()
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let mut prompt = format!(
        r#"Analyze the website with the URL: {url}. Act as an expert web consultant.
Provide a detailed analysis and recommendations for improvement across the following categories:
1. User Experience (UX): usability, navigation, accessibility, and overall user satisfaction.
2. Web Design: aesthetics, visual hierarchy, branding consistency, and modern design principles.
3. SEO Optimization: search engine visibility, including on-page and technical SEO.
4. Product/Service Attractiveness: if the site offers products or services, how well they are presented to attract and convert visitors. Consider clarity of value proposition, calls to action, and presentation.

Format your response strictly as a JSON object with the following structure:
{{
{skeleton}
}}

If the website seems invalid or inaccessible from your perspective, or a category is not applicable (e.g., no clear products or services for "product_attractiveness_recommendations"), say so in a recommendation's description instead of omitting the category.
Ensure each category has at least one recommendation, even if it is a general best practice or a note about non-applicability.
Focus on actionable and specific advice. Return only the JSON object.
"#
    );

    let custom = custom_instructions.map(str::trim).unwrap_or_default();
    if !custom.is_empty() {
        prompt.push_str(&format!("\n## Additional Instructions\n\n{}\n", custom));
    }

    prompt
}

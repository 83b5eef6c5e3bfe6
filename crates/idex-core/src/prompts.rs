//! Prompt template for the deep-analysis identity lookup.

/// User prompt template: placeholder is replaced with the raw query text.
pub const DEEP_ANALYSIS_TEMPLATE: &str = r#"Perform a deep analysis for the identity: "{name}".

Step 1: Determine if "{name}" is a Person, Object, or Place.
Step 2: Search for and provide:
- A brief 2-sentence summary of the identity.
- A list of relevant academic papers, PDFs, or formal documents.
- A list of high-quality image sources, galleries, or photo records.
- A list of relevant videos (YouTube, Vimeo, educational archives).

Return the data in strict JSON format. Ensure all strings use black/high-contrast descriptive text."#;

/// Build the deep-analysis prompt with the given query text.
pub fn deep_analysis(name: &str) -> String {
    DEEP_ANALYSIS_TEMPLATE.replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_query_in_both_steps() {
        let p = deep_analysis("Voyager 1");
        assert_eq!(p.matches("Voyager 1").count(), 2);
        assert!(p.contains("Person, Object, or Place"));
    }
}

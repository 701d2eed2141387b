//! Prompt Builder
//!
//! Composes the system/user message pair sent to the completion
//! provider. Deterministic over its inputs; one `PromptPair` maps to
//! exactly one completion call.

use crate::template::Template;
use crate::types::{Result, TemplateParams};

/// The ordered two-message exchange for one completion call.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl PromptPair {
    /// Build the full pair for one request.
    pub fn build(
        template: &Template,
        params: &TemplateParams,
        language: &str,
        system_prompt: Option<&str>,
        feedback: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            system: build_system_message(language, system_prompt),
            user: build_user_message(template, params, language, feedback)?,
        })
    }
}

/// Produce the system instruction: output language, copywriter role, and
/// the policy that explicit user instructions override the default
/// guidance while the model may otherwise improvise beyond the template.
pub fn build_system_message(language: &str, extra_instructions: Option<&str>) -> String {
    let default = format!(
        "All outputs must be in {}. \
         You are a world-class marketing copywriter. \
         Produce concise, on-topic, well-structured marketing copy. \
         Make sure to take into consideration what works best on the chosen campaign type, \
         platforms, and audience whenever they are provided. \
         You don't have to follow the marketing campaign template examples given to the letter; \
         you can innovate and make the best out of your marketing knowledge and expertise. \
         Follow the details and instructions the user provides in the following lines to the \
         letter (if any) along with what is mentioned above. Otherwise execute what is given above.",
        language
    );

    match extra_instructions {
        Some(extra) if !extra.trim().is_empty() => {
            format!("{}\n\nAdditional instructions: {}", default, extra)
        }
        _ => default,
    }
}

/// Render the template and append the language instruction, plus a
/// revision instruction quoting the feedback verbatim when present.
pub fn build_user_message(
    template: &Template,
    params: &TemplateParams,
    language: &str,
    feedback: Option<&str>,
) -> Result<String> {
    let base = template.render(params)?;
    let mut content = format!("{} Please write this in {}.", base, language);
    if let Some(feedback) = feedback
        && !feedback.trim().is_empty()
    {
        content.push_str(&format!(" Feedback: '{}'. Revise accordingly.", feedback));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateRegistry;

    fn params() -> TemplateParams {
        TemplateParams {
            tone: "casual".to_string(),
            platform: "LinkedIn".to_string(),
            topic: "spring launch".to_string(),
            audience: "developers".to_string(),
        }
    }

    #[test]
    fn test_system_message_names_language() {
        let message = build_system_message("Spanish", None);
        assert!(message.starts_with("All outputs must be in Spanish."));
        assert!(message.contains("world-class marketing copywriter"));
        assert!(!message.contains("Additional instructions"));
    }

    #[test]
    fn test_system_message_appends_extra_instructions() {
        let message = build_system_message("English", Some("Never use emoji."));
        assert!(message.ends_with("Additional instructions: Never use emoji."));
    }

    #[test]
    fn test_system_message_ignores_blank_extra() {
        let message = build_system_message("English", Some("   "));
        assert!(!message.contains("Additional instructions"));
    }

    #[test]
    fn test_user_message_appends_language() {
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("social_media").unwrap();
        let message = build_user_message(template, &params(), "German", None).unwrap();
        assert!(message.contains("casual social media post for LinkedIn about spring launch"));
        assert!(message.ends_with("Please write this in German."));
    }

    #[test]
    fn test_user_message_quotes_feedback_verbatim() {
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("social_media").unwrap();
        let message =
            build_user_message(template, &params(), "English", Some("add emoji shorter")).unwrap();
        assert!(message.ends_with("Feedback: 'add emoji shorter'. Revise accordingly."));
    }

    #[test]
    fn test_user_message_skips_empty_feedback() {
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("social_media").unwrap();
        let message = build_user_message(template, &params(), "English", Some("")).unwrap();
        assert!(!message.contains("Feedback:"));
    }

    #[test]
    fn test_prompt_pair_is_deterministic() {
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("ppc_ads").unwrap();
        let a = PromptPair::build(template, &params(), "English", None, None).unwrap();
        let b = PromptPair::build(template, &params(), "English", None, None).unwrap();
        assert_eq!(a, b);
    }
}

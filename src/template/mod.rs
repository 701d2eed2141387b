//! Template Registry
//!
//! Fixed mapping from campaign-type key to a parameterized instruction
//! template with named `{slot}` placeholders. Templates encode structural
//! guidance for the model (sentence counts, hashtags, call to action);
//! nothing here enforces that structure mechanically.
//!
//! Slot names are validated when the registry is built, so a render can
//! only fail if a hand-built template slips past validation.

use regex::Regex;

use crate::types::{CopyError, Result, TemplateParams};

/// Slot names a template may reference.
pub const PARAM_SLOTS: &[&str] = &["tone", "platform", "topic", "audience"];

/// A parameterized instruction template for one campaign type.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    text: String,
    slots: Vec<String>,
}

impl Template {
    /// Parse a template, extracting and validating its slot names.
    fn parse(name: &str, text: &str) -> Result<Self> {
        let slot_pattern = Regex::new(r"\{([a-zA-Z_]+)\}")
            .map_err(|e| CopyError::Config(format!("invalid slot pattern: {}", e)))?;

        let mut slots = Vec::new();
        for capture in slot_pattern.captures_iter(text) {
            let slot = &capture[1];
            if !PARAM_SLOTS.contains(&slot) {
                return Err(CopyError::Config(format!(
                    "template '{}' references unknown slot '{{{}}}' (allowed: {})",
                    name,
                    slot,
                    PARAM_SLOTS.join(", ")
                )));
            }
            if !slots.iter().any(|s| s == slot) {
                slots.push(slot.to_string());
            }
        }

        Ok(Self {
            name: name.to_string(),
            text: text.to_string(),
            slots,
        })
    }

    /// Substitute parameters into the template.
    ///
    /// Empty strings are acceptable values; a slot with no binding at all
    /// fails with `TemplateRender`.
    pub fn render(&self, params: &TemplateParams) -> Result<String> {
        let mut rendered = self.text.clone();
        for slot in &self.slots {
            let value = params.get(slot).ok_or_else(|| CopyError::TemplateRender {
                campaign: self.name.clone(),
                slot: slot.clone(),
            })?;
            rendered = rendered.replace(&format!("{{{}}}", slot), value);
        }
        Ok(rendered)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }
}

/// Static registry of campaign templates. Loaded once, read-only after.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: Vec<Template>,
}

impl TemplateRegistry {
    /// Build a registry from (campaign type, template text) pairs,
    /// validating every slot name.
    pub fn from_entries(entries: &[(&str, &str)]) -> Result<Self> {
        let entries = entries
            .iter()
            .map(|(name, text)| Template::parse(name, text))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// The built-in campaign templates.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(&[
            (
                "social_media",
                "Create a {tone} social media post for {platform} about {topic}. \
                 Start with a thought-provoking question or statistic (1 sentence), \
                 highlight the main benefit (1 sentence), add a clear call to action, \
                 and finish with 2-3 relevant hashtags.",
            ),
            (
                "email_marketing",
                "Write a {tone} email promoting {topic} to {audience}. \
                 Use a compelling subject line (under 60 characters), open with a personalized greeting, \
                 highlight two key benefits in separate paragraphs, close with a strong call to action and professional sign-off, \
                 and include a P.S. reminding the reader to click the link.",
            ),
            (
                "ppc_ads",
                "Produce a {tone} PPC ad for {platform} about {topic} (max 90 characters). \
                 Write a persuasive headline (under 30 characters), include a one-line value proposition, \
                 and end with a direct call to action—do not wrap the copy in extra quotes.",
            ),
            (
                "content_marketing",
                "Draft a {tone} blog introduction for {topic}, aimed at {audience}. \
                 Begin with an engaging statistic or question, outline three key points as a bulleted list, \
                 and end with a transition sentence into the main article.",
            ),
            (
                "customer_retention",
                "Create a {tone} customer re-engagement message about {topic} for {audience}. \
                 Start by acknowledging their past engagement, mention an exclusive incentive (e.g. 20% off), \
                 close with a friendly reminder of how they can take the next step, and use one consistent emoji (e.g. 🌟).",
            ),
            (
                "seasonal_campaigns",
                "Write a {tone} seasonal marketing campaign post for {platform} about {topic}. \
                 Open with a festive greeting, tie the message to the season's themes, \
                 highlight one special offer or feature, and include one season-themed hashtag.",
            ),
            (
                "product_launch",
                "Draft a {tone} product launch announcement for {platform} about {topic}. \
                 Lead with a powerful headline, describe three standout features (one per sentence), \
                 and finish with a clear invitation using the placeholder <registration_link>.",
            ),
            (
                "crisis_management",
                "Compose a {tone} crisis response message for {platform} about {topic}. \
                 In two sentences: acknowledge the issue, express genuine empathy, outline corrective steps, \
                 and reassure the audience of your commitment.",
            ),
        ])
    }

    /// Resolve a campaign type to its template.
    pub fn lookup(&self, campaign_type: &str) -> Result<&Template> {
        self.entries
            .iter()
            .find(|t| t.name == campaign_type)
            .ok_or_else(|| CopyError::UnsupportedCampaignType(campaign_type.to_string()))
    }

    /// Registered campaign types, in registration order.
    pub fn campaign_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|t| t.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urgent_params() -> TemplateParams {
        TemplateParams {
            tone: "urgent".to_string(),
            platform: "Twitter".to_string(),
            topic: "winter sale".to_string(),
            audience: String::new(),
        }
    }

    #[test]
    fn test_builtin_has_all_campaign_types() {
        let registry = TemplateRegistry::builtin().unwrap();
        let types: Vec<_> = registry.campaign_types().collect();
        assert_eq!(
            types,
            vec![
                "social_media",
                "email_marketing",
                "ppc_ads",
                "content_marketing",
                "customer_retention",
                "seasonal_campaigns",
                "product_launch",
                "crisis_management",
            ]
        );
    }

    #[test]
    fn test_lookup_unknown_type() {
        let registry = TemplateRegistry::builtin().unwrap();
        let err = registry.lookup("billboards").unwrap_err();
        assert!(matches!(
            err,
            CopyError::UnsupportedCampaignType(ref t) if t == "billboards"
        ));
    }

    #[test]
    fn test_render_substitutes_slots() {
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("ppc_ads").unwrap();
        let rendered = template.render(&urgent_params()).unwrap();
        assert!(rendered.contains("urgent PPC ad for Twitter about winter sale"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_render_accepts_empty_values() {
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("email_marketing").unwrap();
        let rendered = template.render(&TemplateParams::default()).unwrap();
        // Empty string is a value, not a missing binding.
        assert!(rendered.contains("email promoting  to"));
    }

    #[test]
    fn test_unknown_slot_rejected_at_load() {
        let err = TemplateRegistry::from_entries(&[("bad", "Write about {subject}.")])
            .unwrap_err();
        assert!(err.to_string().contains("{subject}"));
    }

    #[test]
    fn test_registration_link_placeholder_is_not_a_slot() {
        // Angle-bracket placeholders pass through untouched.
        let registry = TemplateRegistry::builtin().unwrap();
        let template = registry.lookup("product_launch").unwrap();
        assert!(!template.slots().contains(&"registration_link".to_string()));
        let rendered = template.render(&urgent_params()).unwrap();
        assert!(rendered.contains("<registration_link>"));
    }

    #[test]
    fn test_slots_deduplicated() {
        let registry =
            TemplateRegistry::from_entries(&[("echo", "{topic} and again {topic}")]).unwrap();
        let template = registry.lookup("echo").unwrap();
        assert_eq!(template.slots(), ["topic"]);
        let mut params = TemplateParams::default();
        params.topic = "sales".to_string();
        assert_eq!(template.render(&params).unwrap(), "sales and again sales");
    }
}

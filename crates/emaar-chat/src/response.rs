//! Canned reply synthesis.
//!
//! Classifies a submitted message by keyword and returns one of a few
//! fixed structured payloads. Rules are checked in order and the first
//! match wins; the last rule has no keywords and always matches.

use crate::types::{PayloadSection, ReplyTopic, ResponsePayload};

// =============================================================================
// Rules
// =============================================================================

/// One classification rule: a keyword set and the payload it produces.
#[derive(Debug)]
pub struct ReplyRule {
    pub topic: ReplyTopic,
    /// Lowercase keywords; an empty set matches everything.
    pub keywords: &'static [&'static str],
    pub build: fn() -> ResponsePayload,
}

impl ReplyRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|k| lowered.contains(k))
    }
}

static RULES: &[ReplyRule] = &[
    ReplyRule {
        topic: ReplyTopic::Projects,
        keywords: &["property", "project"],
        build: projects_payload,
    },
    ReplyRule {
        topic: ReplyTopic::Technology,
        keywords: &["technology", "trends"],
        build: technology_payload,
    },
    ReplyRule {
        topic: ReplyTopic::About,
        keywords: &[],
        build: about_payload,
    },
];

// =============================================================================
// ResponseSynthesizer
// =============================================================================

/// Keyword-driven reply generator over an ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSynthesizer {
    rules: &'static [ReplyRule],
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSynthesizer {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    pub fn rules(&self) -> &[ReplyRule] {
        self.rules
    }

    fn select(&self, text: &str) -> &ReplyRule {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .unwrap_or(&RULES[RULES.len() - 1])
    }

    /// Topic the message is classified into.
    pub fn classify(&self, text: &str) -> ReplyTopic {
        self.select(text).topic
    }

    /// Build the structured reply for a submitted message.
    pub fn synthesize(&self, text: &str) -> ResponsePayload {
        let rule = self.select(text);
        tracing::debug!(topic = %rule.topic, "Reply synthesized");
        (rule.build)()
    }
}

/// Build the structured reply for `text` with the built-in rules.
pub fn synthesize(text: &str) -> ResponsePayload {
    ResponseSynthesizer::new().synthesize(text)
}

/// Plain-text body of an assistant record answering `text`.
pub fn reply_text(text: &str) -> String {
    format!("This is a response to: \"{}\"", text)
}

// =============================================================================
// Payloads
// =============================================================================

fn section(number: usize, title: &str, details: &[&str]) -> PayloadSection {
    PayloadSection {
        number: number.to_string(),
        title: title.to_string(),
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

fn projects_payload() -> ResponsePayload {
    ResponsePayload {
        title: "Here are some of EMAAR's featured residential projects:".to_string(),
        sections: vec![
            section(
                1,
                "St. Regis The Residences",
                &[
                    "Location: Downtown Dubai, next to Dubai Opera",
                    "Unit types: 1 to 4 bedroom apartments and penthouses",
                    "Amenities: butler service, infinity pool, residents' lounge",
                    "Status: off-plan with a flexible payment plan",
                ],
            ),
            section(
                2,
                "Burj Crown",
                &[
                    "Location: Downtown Dubai, Boulevard district",
                    "Unit types: studios to 3 bedroom apartments",
                    "Highlights: views of Burj Khalifa and The Dubai Fountain",
                    "Amenities: rooftop pool, fitness centre, children's play area",
                ],
            ),
            section(
                3,
                "The Address Residences Dubai Opera",
                &[
                    "Location: The Opera District, Downtown Dubai",
                    "Unit types: 1 to 4 bedroom serviced residences",
                    "Highlights: hotel-managed living with Address hotel facilities",
                    "Amenities: pool deck, spa, 24-hour concierge",
                ],
            ),
        ],
    }
}

fn technology_payload() -> ResponsePayload {
    ResponsePayload {
        title: "Technology trends shaping EMAAR communities:".to_string(),
        sections: vec![
            section(
                1,
                "Smart Home Integration",
                &[
                    "App-controlled lighting, climate and access",
                    "Energy monitoring for lower utility costs",
                    "Voice assistant support in new handovers",
                ],
            ),
            section(
                2,
                "Virtual Reality Tours",
                &[
                    "Walk through off-plan units before construction completes",
                    "Compare finishes and layouts remotely",
                    "Book viewings with a sales advisor from the tour",
                ],
            ),
            section(
                3,
                "Blockchain & Digital Payments",
                &[
                    "Digital title deeds registered with the Dubai Land Department",
                    "Online installment payments and receipts",
                    "Faster, paperless transfer of ownership",
                ],
            ),
        ],
    }
}

fn about_payload() -> ResponsePayload {
    ResponsePayload {
        title: "About EMAAR".to_string(),
        sections: vec![section(
            1,
            "EMAAR Properties",
            &[
                "Founded in 1997 and headquartered in Dubai",
                "Developer of Burj Khalifa, The Dubai Mall and Downtown Dubai",
                "Master communities include Dubai Hills Estate and Dubai Creek Harbour",
                "Ask about our latest projects or technology trends to learn more",
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_titles(payload: &ResponsePayload) -> Vec<&str> {
        payload.sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_property_keyword_yields_projects() {
        let payload = synthesize("Tell me about a new Property");
        assert_eq!(payload.sections.len(), 3);
        assert_eq!(
            section_titles(&payload),
            vec![
                "St. Regis The Residences",
                "Burj Crown",
                "The Address Residences Dubai Opera"
            ]
        );
    }

    #[test]
    fn test_project_keyword_yields_projects() {
        let synth = ResponseSynthesizer::new();
        assert_eq!(synth.classify("What are the latest projects?"), ReplyTopic::Projects);
        assert_eq!(synth.classify("PROJECT list"), ReplyTopic::Projects);
    }

    #[test]
    fn test_trends_keyword_yields_technology() {
        let payload = synthesize("latest tech trends");
        assert_eq!(payload.sections.len(), 3);
        assert_eq!(
            section_titles(&payload),
            vec![
                "Smart Home Integration",
                "Virtual Reality Tours",
                "Blockchain & Digital Payments"
            ]
        );
        assert_eq!(
            ResponseSynthesizer::new().classify("New Technology"),
            ReplyTopic::Technology
        );
    }

    #[test]
    fn test_projects_take_precedence_over_technology() {
        let synth = ResponseSynthesizer::new();
        assert_eq!(
            synth.classify("technology trends in property"),
            ReplyTopic::Projects
        );
    }

    #[test]
    fn test_unmatched_text_yields_about() {
        let payload = synthesize("hello");
        assert_eq!(payload.sections.len(), 1);
        assert_eq!(payload.title, "About EMAAR");
        assert_eq!(ResponseSynthesizer::new().classify(""), ReplyTopic::About);
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        assert_eq!(synthesize("hi"), synthesize("hi"));
        assert_eq!(synthesize("Property"), synthesize("project"));
    }

    #[test]
    fn test_sections_are_numbered_in_order() {
        for text in ["property", "trends", "hello"] {
            let payload = synthesize(text);
            for (i, s) in payload.sections.iter().enumerate() {
                assert_eq!(s.number, (i + 1).to_string());
                assert!(!s.details.is_empty());
            }
        }
    }

    #[test]
    fn test_last_rule_is_unconditional() {
        let synth = ResponseSynthesizer::new();
        let last = synth.rules().last().unwrap();
        assert!(last.keywords.is_empty());
        assert_eq!(last.topic, ReplyTopic::About);
    }

    #[test]
    fn test_reply_text() {
        assert_eq!(reply_text("hi"), "This is a response to: \"hi\"");
    }
}

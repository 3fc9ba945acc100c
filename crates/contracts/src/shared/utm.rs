use serde::{Deserialize, Serialize};

/// UTM-метки для ссылок в маркетинговых письмах
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

impl UtmParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, value: &str) -> Self {
        self.utm_source = Some(value.to_string());
        self
    }

    pub fn medium(mut self, value: &str) -> Self {
        self.utm_medium = Some(value.to_string());
        self
    }

    pub fn campaign(mut self, value: &str) -> Self {
        self.utm_campaign = Some(value.to_string());
        self
    }

    pub fn term(mut self, value: &str) -> Self {
        self.utm_term = Some(value.to_string());
        self
    }

    pub fn content(mut self, value: &str) -> Self {
        self.utm_content = Some(value.to_string());
        self
    }

    /// Non-empty parameters in canonical order; blank values are skipped
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("utm_source", &self.utm_source),
            ("utm_medium", &self.utm_medium),
            ("utm_campaign", &self.utm_campaign),
            ("utm_term", &self.utm_term),
            ("utm_content", &self.utm_content),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_skip_blank_values() {
        let params = UtmParams::new()
            .content("banner")
            .source("email")
            .medium("  ")
            .campaign("birthday");
        assert_eq!(
            params.pairs(),
            vec![
                ("utm_source", "email"),
                ("utm_campaign", "birthday"),
                ("utm_content", "banner"),
            ]
        );
        assert!(UtmParams::new().pairs().is_empty());
    }
}

use chrono::Weekday;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub utm: UtmConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableConfig {
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { page_size: 25 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Shorter search terms are ignored
    pub min_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_chars: 1 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    pub week_start: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
        }
    }
}

/// Default UTM values for links in email previews
#[derive(Debug, Deserialize, Clone)]
pub struct UtmConfig {
    pub source: String,
    pub medium: String,
}

impl Default for UtmConfig {
    fn default() -> Self {
        Self {
            source: "backoffice".to_string(),
            medium: "email".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

/// What the binary prints for every page
#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    /// Period token code; empty or unknown means no date constraint
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub site_id: Option<i64>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub format: RenderFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            period: "last-30-days".to_string(),
            site_id: None,
            search: String::new(),
            format: RenderFormat::Text,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[table]
page_size = 25

[search]
min_chars = 1

[calendar]
week_start = "monday"

[utm]
source = "backoffice"
medium = "email"

[render]
period = "last-30-days"
format = "text"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.table.page_size == 0 {
        anyhow::bail!("table.page_size must be greater than zero");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.search.min_chars, 1);
        assert_eq!(config.calendar.week_start, Weekday::Mon);
        assert_eq!(config.utm.source, "backoffice");
        assert_eq!(config.render.period, "last-30-days");
        assert_eq!(config.render.format, RenderFormat::Text);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[calendar]\nweek_start = \"sunday\"\n").unwrap();
        assert_eq!(config.calendar.week_start, Weekday::Sun);
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.render.site_id, None);
    }

    #[test]
    fn test_render_section() {
        let config = parse_config(
            "[render]\nperiod = \"this-week\"\nsite_id = 2\nsearch = \"dupont\"\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(config.render.site_id, Some(2));
        assert_eq!(config.render.search, "dupont");
        assert_eq!(config.render.format, RenderFormat::Json);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(parse_config("[table]\npage_size = 0\n").is_err());
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ошибки разбора периода
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Unrecognized period token: {0}")]
    UnrecognizedToken(String),
}

/// Named relative period offered in the date filter of every list page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PeriodToken {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    Last7Days,
    Last28Days,
    Last30Days,
    Last90Days,
    Last12Months,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
}

impl PeriodToken {
    /// Код токена, как он приходит из селекта периода
    pub fn code(&self) -> &'static str {
        match self {
            PeriodToken::Today => "today",
            PeriodToken::Yesterday => "yesterday",
            PeriodToken::ThisWeek => "this-week",
            PeriodToken::LastWeek => "last-week",
            PeriodToken::Last7Days => "last-7-days",
            PeriodToken::Last28Days => "last-28-days",
            PeriodToken::Last30Days => "last-30-days",
            PeriodToken::Last90Days => "last-90-days",
            PeriodToken::Last12Months => "last-12-months",
            PeriodToken::ThisMonth => "this-month",
            PeriodToken::LastMonth => "last-month",
            PeriodToken::ThisQuarter => "this-quarter",
            PeriodToken::LastQuarter => "last-quarter",
            PeriodToken::ThisYear => "this-year",
            PeriodToken::LastYear => "last-year",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PeriodToken::Today => "Today",
            PeriodToken::Yesterday => "Yesterday",
            PeriodToken::ThisWeek => "This week",
            PeriodToken::LastWeek => "Last week",
            PeriodToken::Last7Days => "Last 7 days",
            PeriodToken::Last28Days => "Last 28 days",
            PeriodToken::Last30Days => "Last 30 days",
            PeriodToken::Last90Days => "Last 90 days",
            PeriodToken::Last12Months => "Last 12 months",
            PeriodToken::ThisMonth => "This month",
            PeriodToken::LastMonth => "Last month",
            PeriodToken::ThisQuarter => "This quarter",
            PeriodToken::LastQuarter => "Last quarter",
            PeriodToken::ThisYear => "This year",
            PeriodToken::LastYear => "Last year",
        }
    }

    /// Get all available tokens, in the order the period select lists them
    pub fn all() -> &'static [PeriodToken] {
        &[
            PeriodToken::Today,
            PeriodToken::Yesterday,
            PeriodToken::ThisWeek,
            PeriodToken::LastWeek,
            PeriodToken::Last7Days,
            PeriodToken::Last28Days,
            PeriodToken::Last30Days,
            PeriodToken::Last90Days,
            PeriodToken::Last12Months,
            PeriodToken::ThisMonth,
            PeriodToken::LastMonth,
            PeriodToken::ThisQuarter,
            PeriodToken::LastQuarter,
            PeriodToken::ThisYear,
            PeriodToken::LastYear,
        ]
    }
}

impl FromStr for PeriodToken {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        PeriodToken::all()
            .iter()
            .copied()
            .find(|token| token.code() == code)
            .ok_or_else(|| PeriodError::UnrecognizedToken(s.to_string()))
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<PeriodToken> for String {
    fn from(token: PeriodToken) -> Self {
        token.code().to_string()
    }
}

impl TryFrom<String> for PeriodToken {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Concrete inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// What the user picked in the period control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodSelection {
    /// No date constraint
    #[default]
    All,
    Preset { token: PeriodToken },
    /// Passed through verbatim, without resolution
    Custom {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl PeriodSelection {
    pub fn preset(token: PeriodToken) -> Self {
        PeriodSelection::Preset { token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for token in PeriodToken::all() {
            assert_eq!(token.code().parse::<PeriodToken>(), Ok(*token));
        }
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            "last-3-days".parse::<PeriodToken>(),
            Err(PeriodError::UnrecognizedToken("last-3-days".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&PeriodSelection::preset(PeriodToken::Last28Days)).unwrap();
        assert_eq!(json, r#"{"kind":"preset","token":"last-28-days"}"#);
        let back: PeriodSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PeriodSelection::preset(PeriodToken::Last28Days));
    }
}

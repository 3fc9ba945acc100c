use serde::{Deserialize, Serialize};

/// Типы сценариев маркетинговой автоматизации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Поздравление с днём рождения
    Birthday,
    /// Напоминание о брошенной корзине
    CartAbandonment,
}

impl ScenarioKind {
    pub fn code(&self) -> &'static str {
        match self {
            ScenarioKind::Birthday => "birthday",
            ScenarioKind::CartAbandonment => "cart-abandonment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScenarioKind::Birthday => "Birthday email",
            ScenarioKind::CartAbandonment => "Abandoned cart reminder",
        }
    }
}

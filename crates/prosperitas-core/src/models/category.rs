//! Curriculum category enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of curriculum categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    /// Money psychology and self-management
    Mindset,

    /// Personal finance and budgeting
    Finance,

    /// Macroeconomics
    Economy,

    /// Markets and investing
    Investment,

    /// Entrepreneurship
    Business,

    /// Interest math and wealth building
    Math,
}

impl ModuleCategory {
    /// All categories in library order.
    pub const ALL: [ModuleCategory; 6] = [
        ModuleCategory::Mindset,
        ModuleCategory::Finance,
        ModuleCategory::Economy,
        ModuleCategory::Investment,
        ModuleCategory::Business,
        ModuleCategory::Math,
    ];

    /// Stable identifier used in persisted records and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleCategory::Mindset => "mindset",
            ModuleCategory::Finance => "finance",
            ModuleCategory::Economy => "economy",
            ModuleCategory::Investment => "investment",
            ModuleCategory::Business => "business",
            ModuleCategory::Math => "math",
        }
    }

    /// Human-readable label shown to learners.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleCategory::Mindset => "Mentalidade e Gestão",
            ModuleCategory::Finance => "Finanças Pessoais",
            ModuleCategory::Economy => "Economia",
            ModuleCategory::Investment => "Investimentos",
            ModuleCategory::Business => "Negócios e Empreendedorismo",
            ModuleCategory::Math => "Juros e Patrimônio",
        }
    }
}

impl FromStr for ModuleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ModuleCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| format!("Invalid category: {s}"))
    }
}

//! Specialised review focus selectable per conversation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewFocus {
    Performance,
    Security,
    BestPractices,
    Refactoring,
    Debug,
    Checklist,
    Beginner,
    Advanced,
}

impl ReviewFocus {
    pub const ALL: [ReviewFocus; 8] = [
        ReviewFocus::Performance,
        ReviewFocus::Security,
        ReviewFocus::BestPractices,
        ReviewFocus::Refactoring,
        ReviewFocus::Debug,
        ReviewFocus::Checklist,
        ReviewFocus::Beginner,
        ReviewFocus::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewFocus::Performance => "performance",
            ReviewFocus::Security => "security",
            ReviewFocus::BestPractices => "best-practices",
            ReviewFocus::Refactoring => "refactoring",
            ReviewFocus::Debug => "debug",
            ReviewFocus::Checklist => "checklist",
            ReviewFocus::Beginner => "beginner",
            ReviewFocus::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ReviewFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review focus: {0}")]
pub struct ParseFocusError(pub String);

impl FromStr for ReviewFocus {
    type Err = ParseFocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ReviewFocus::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| ParseFocusError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_and_snake_case() {
        assert_eq!(
            "best-practices".parse::<ReviewFocus>().unwrap(),
            ReviewFocus::BestPractices
        );
        assert_eq!(
            "Best_Practices".parse::<ReviewFocus>().unwrap(),
            ReviewFocus::BestPractices
        );
        assert_eq!("security".parse::<ReviewFocus>().unwrap(), ReviewFocus::Security);
    }

    #[test]
    fn rejects_unknown_focus() {
        assert!("style".parse::<ReviewFocus>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ReviewFocus::BestPractices).unwrap();
        assert_eq!(json, "\"best-practices\"");
    }
}

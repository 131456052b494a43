//! ValidationMode - How strictly inbound payloads are read

use serde::{Deserialize, Serialize};

/// Selects between corrected validation and parity with the legacy service
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// A field is present when supplied and not null; an update that keeps
    /// its own name is not a conflict.
    #[default]
    Strict,
    /// Presence follows JavaScript truthiness (`0`, `""`, `false` count as
    /// missing) and the update uniqueness check also matches the record
    /// being updated.
    Legacy,
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "legacy" => Ok(ValidationMode::Legacy),
            _ => Err(format!("Unknown validation mode: {}", s)),
        }
    }
}

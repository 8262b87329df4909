//! Parser configuration from environment variables

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do when several legal moves fit an utterance and nothing in it
/// says which one was meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Take the first candidate in legal-move order.
    #[default]
    FirstCandidate,
    /// Resolve to nothing so the caller can ask the player.
    Reject,
}

impl FromStr for AmbiguityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first_candidate" => Ok(AmbiguityPolicy::FirstCandidate),
            "reject" | "none" => Ok(AmbiguityPolicy::Reject),
            other => Err(format!("Unknown ambiguity policy: {other}")),
        }
    }
}

impl fmt::Display for AmbiguityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbiguityPolicy::FirstCandidate => f.write_str("first_candidate"),
            AmbiguityPolicy::Reject => f.write_str("reject"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParserConfig {
    /// Tie-break for ambiguous piece moves
    pub ambiguity_policy: AmbiguityPolicy,

    /// Optional JSON file with admin-defined voice commands
    pub commands_file: Option<PathBuf>,
}

impl ParserConfig {
    pub fn from_env() -> Self {
        Self {
            ambiguity_policy: env::var("VOICE_AMBIGUITY_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            commands_file: env::var("VOICE_COMMANDS_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("first".parse::<AmbiguityPolicy>(), Ok(AmbiguityPolicy::FirstCandidate));
        assert_eq!(" Reject ".parse::<AmbiguityPolicy>(), Ok(AmbiguityPolicy::Reject));
        assert!("maybe".parse::<AmbiguityPolicy>().is_err());
        assert_eq!(AmbiguityPolicy::default(), AmbiguityPolicy::FirstCandidate);
    }
}

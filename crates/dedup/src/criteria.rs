use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How strongly a pair of projects is believed to be the same
/// real-world site. Ordered so that sorting ascending yields
/// high → medium → low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("unknown confidence level: {value}")),
        }
    }
}

/// A named predicate evaluated for a pair, with an optional
/// human-readable value. Shown to the operator alongside the group;
/// never persisted. Unmatched criteria carry the observed value so a
/// reviewer can see how close the pair came.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCriterion {
    pub rule: String,
    pub matched: bool,
    pub value: Option<String>,
}

impl MatchCriterion {
    pub fn matched(rule: &str, value: Option<String>) -> Self {
        Self {
            rule: rule.to_string(),
            matched: true,
            value,
        }
    }

    pub fn unmatched(rule: &str, value: Option<String>) -> Self {
        Self {
            rule: rule.to_string(),
            matched: false,
            value,
        }
    }
}

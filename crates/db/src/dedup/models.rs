use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Dismissed,
    Confirmed,
    Merged,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dismissed => "dismissed",
            Self::Confirmed => "confirmed",
            Self::Merged => "merged",
        }
    }
}

impl FromStr for ReviewDecision {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dismissed" => Ok(Self::Dismissed),
            "confirmed" => Ok(Self::Confirmed),
            "merged" => Ok(Self::Merged),
            _ => Err(format!("unknown review decision: {value}")),
        }
    }
}

/// Normalize an unordered project pair so the smaller id is always first.
/// The pair key is what the unique constraint and the scanner's skip set
/// are built on.
pub fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A persisted operator decision on a candidate pair. Once a pair is
/// recorded it never reappears in scan output; re-review requires
/// deleting the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateReview {
    pub id: Uuid,
    pub project_a_id: Uuid,
    pub project_b_id: Uuid,
    pub decision: ReviewDecision,
    pub reason: Option<String>,
    pub reviewed_by: String,
    pub reviewed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReviewFilter {
    pub decision: Option<ReviewDecision>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total: i64,
    pub dismissed: i64,
    pub confirmed: i64,
    pub merged: i64,
    pub latest_reviewed_at: Option<DateTime<Utc>>,
}

/// Row counts moved during a merge, reported back to the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub documents_moved: u64,
    pub history_moved: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_orders_smaller_id_first() {
        let a = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let b = Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap();
        assert_eq!(pair_key(a, b), (a, b));
        assert_eq!(pair_key(b, a), (a, b));
    }

    #[test]
    fn decision_round_trips_through_str() {
        for d in [
            ReviewDecision::Dismissed,
            ReviewDecision::Confirmed,
            ReviewDecision::Merged,
        ] {
            assert_eq!(ReviewDecision::from_str(d.as_str()), Ok(d));
        }
        assert!(ReviewDecision::from_str("expired").is_err());
    }
}

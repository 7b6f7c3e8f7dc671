use helia_db::projects::models::ProjectSnapshot;

use crate::config::DedupConfig;
use crate::criteria::{Confidence, MatchCriterion};
use crate::text::{address_similarity, capacity_diff_pct, text_similarity};

/// Outcome of comparing one pair of snapshots.
///
/// `Excluded` means a hard-exclusion gate fired and the pair must never
/// be surfaced; `NoMatch` means no gate fired but no confidence level
/// was reached either. Low confidence is its own gate, not a catch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum PairVerdict {
    Excluded,
    NoMatch,
    Candidate {
        confidence: Confidence,
        criteria: Vec<MatchCriterion>,
    },
}

fn pct(similarity: f64) -> String {
    format!("{:.0}%", similarity * 100.0)
}

fn same_district(a: &ProjectSnapshot, b: &ProjectSnapshot) -> bool {
    match (&a.district, &b.district) {
        (Some(x), Some(y)) => {
            let x = x.trim();
            !x.is_empty() && x == y.trim()
        }
        _ => false,
    }
}

fn same_investor(a: &ProjectSnapshot, b: &ProjectSnapshot) -> bool {
    matches!((a.investor_id, b.investor_id), (Some(x), Some(y)) if x == y)
}

fn display_code_match(a: &ProjectSnapshot, b: &ProjectSnapshot) -> Option<String> {
    match (&a.site_code_display, &b.site_code_display) {
        (Some(x), Some(y)) => {
            let x = x.trim();
            if !x.is_empty() && x == y.trim() {
                Some(x.to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// The (investor code, intake year, sequence) triple matches only when
/// every component is present on both sides and equal. A null on either
/// side disqualifies this check alone, not the whole comparison.
fn investor_triple_match(a: &ProjectSnapshot, b: &ProjectSnapshot) -> Option<String> {
    match (
        (&a.investor_code, a.intake_year, a.sequence),
        (&b.investor_code, b.intake_year, b.sequence),
    ) {
        ((Some(code_a), Some(year_a), Some(seq_a)), (Some(code_b), Some(year_b), Some(seq_b)))
            if code_a == code_b && year_a == year_b && seq_a == seq_b =>
        {
            Some(format!("{code_a}-{year_a}-{seq_a:03}"))
        }
        _ => None,
    }
}

/// Compare one pair of snapshots, applying the gates strictly in
/// order: hard exclusions, high, medium, low.
pub fn evaluate_pair(
    config: &DedupConfig,
    a: &ProjectSnapshot,
    b: &ProjectSnapshot,
) -> PairVerdict {
    let t = &config.thresholds;

    let name_sim = text_similarity(&a.name, &b.name);
    let addr_sim = address_similarity(
        a.address.as_deref().unwrap_or(""),
        b.address.as_deref().unwrap_or(""),
    );
    let capacity_diff = capacity_diff_pct(a.capacity_kw, b.capacity_kw);

    // Hard exclusions: discarded entirely, never surfaced.
    if addr_sim < t.exclusion_text_floor && name_sim < t.exclusion_text_floor {
        return PairVerdict::Excluded;
    }
    if capacity_diff > t.exclusion_capacity_ceiling {
        return PairVerdict::Excluded;
    }
    if !same_district(a, b) {
        return PairVerdict::Excluded;
    }

    // High: identifier-level matches.
    let display_code = display_code_match(a, b);
    let triple = investor_triple_match(a, b);
    if display_code.is_some() || triple.is_some() {
        let criteria = vec![
            match &display_code {
                Some(code) => MatchCriterion::matched("display_code", Some(code.clone())),
                None => MatchCriterion::unmatched("display_code", None),
            },
            match &triple {
                Some(value) => MatchCriterion::matched("investor_triple", Some(value.clone())),
                None => MatchCriterion::unmatched("investor_triple", None),
            },
        ];
        return PairVerdict::Candidate {
            confidence: Confidence::High,
            criteria,
        };
    }

    let investor = same_investor(a, b);
    let capacity_close = capacity_diff <= t.corroborating_capacity;

    // Medium: a primary text-similarity condition, with corroborating
    // signals recorded but never sufficient on their own.
    let addr_primary = addr_sim >= t.medium_address;
    let name_primary = name_sim >= t.medium_name;
    if addr_primary || name_primary {
        let mut criteria = vec![
            MatchCriterion {
                rule: "address_similarity".to_string(),
                matched: addr_primary,
                value: Some(pct(addr_sim)),
            },
            MatchCriterion {
                rule: "name_similarity".to_string(),
                matched: name_primary,
                value: Some(pct(name_sim)),
            },
        ];
        if investor {
            criteria.push(MatchCriterion::matched("same_investor", None));
        }
        criteria.push(MatchCriterion::matched("same_district", a.district.clone()));
        if capacity_close {
            criteria.push(MatchCriterion::matched(
                "capacity_diff",
                Some(format!("{capacity_diff:.1}%")),
            ));
        }
        return PairVerdict::Candidate {
            confidence: Confidence::Medium,
            criteria,
        };
    }

    // Low: every corroborating signal at once, with both similarity
    // scores below the medium thresholds. The observed percentages are
    // recorded for the operator.
    if investor && capacity_close {
        let criteria = vec![
            MatchCriterion::matched("same_investor", None),
            MatchCriterion::matched("same_district", a.district.clone()),
            MatchCriterion::matched("capacity_diff", Some(format!("{capacity_diff:.1}%"))),
            MatchCriterion::unmatched("address_similarity", Some(pct(addr_sim))),
            MatchCriterion::unmatched("name_similarity", Some(pct(name_sim))),
        ];
        return PairVerdict::Candidate {
            confidence: Confidence::Low,
            criteria,
        };
    }

    PairVerdict::NoMatch
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helia_db::dedup::models::pair_key;
use helia_db::projects::models::ProjectSnapshot;

use crate::config::DedupConfig;
use crate::criteria::{Confidence, MatchCriterion};
use crate::engine::{evaluate_pair, PairVerdict};

/// An ephemeral cluster of candidate duplicates sharing one confidence
/// level. Recomputed from scratch on every scan; nothing here is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub confidence: Confidence,
    pub projects: Vec<ProjectSnapshot>,
    pub criteria: Vec<MatchCriterion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    pub projects_scanned: usize,
    pub pairs_compared: usize,
    pub pairs_skipped_reviewed: usize,
    pub pairs_excluded: usize,
    pub high_groups: usize,
    pub medium_groups: usize,
    pub low_groups: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub groups: Vec<DuplicateGroup>,
    pub stats: ScanStats,
}

fn add_to_group(group: &mut DuplicateGroup, a: &ProjectSnapshot, b: &ProjectSnapshot) {
    for snapshot in [a, b] {
        if !group.projects.iter().any(|p| p.id == snapshot.id) {
            group.projects.push(snapshot.clone());
        }
    }
}

fn union_criteria(existing: &mut Vec<MatchCriterion>, incoming: Vec<MatchCriterion>) {
    for criterion in incoming {
        if !existing.contains(&criterion) {
            existing.push(criterion);
        }
    }
}

/// Exhaustive pairwise scan over the snapshot set.
///
/// Pairs already reviewed are skipped before comparison. Classified
/// pairs merge greedily into the first existing group that shares a
/// project and the same confidence level; groups never merge across
/// confidence levels. Output is ordered high → medium → low, insertion
/// order within a level.
pub fn scan(
    config: &DedupConfig,
    projects: &[ProjectSnapshot],
    reviewed: &[(Uuid, Uuid)],
) -> ScanOutcome {
    let reviewed: HashSet<(Uuid, Uuid)> = reviewed.iter().map(|&(a, b)| pair_key(a, b)).collect();

    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut stats = ScanStats {
        projects_scanned: projects.len(),
        ..ScanStats::default()
    };

    for i in 0..projects.len() {
        for j in (i + 1)..projects.len() {
            let a = &projects[i];
            let b = &projects[j];

            if reviewed.contains(&pair_key(a.id, b.id)) {
                stats.pairs_skipped_reviewed += 1;
                continue;
            }
            stats.pairs_compared += 1;

            match evaluate_pair(config, a, b) {
                PairVerdict::Excluded => stats.pairs_excluded += 1,
                PairVerdict::NoMatch => {}
                PairVerdict::Candidate {
                    confidence,
                    criteria,
                } => {
                    let existing = groups.iter_mut().find(|g| {
                        g.confidence == confidence
                            && g.projects.iter().any(|p| p.id == a.id || p.id == b.id)
                    });
                    match existing {
                        Some(group) => {
                            add_to_group(group, a, b);
                            union_criteria(&mut group.criteria, criteria);
                        }
                        None => groups.push(DuplicateGroup {
                            confidence,
                            projects: vec![a.clone(), b.clone()],
                            criteria,
                        }),
                    }
                }
            }
        }
    }

    groups.sort_by_key(|g| g.confidence);

    for group in &groups {
        match group.confidence {
            Confidence::High => stats.high_groups += 1,
            Confidence::Medium => stats.medium_groups += 1,
            Confidence::Low => stats.low_groups += 1,
        }
    }

    ScanOutcome { groups, stats }
}

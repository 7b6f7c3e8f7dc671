use serde::{Deserialize, Serialize};

/// Thresholds for the pairwise comparison gates. Similarity values are
/// in 0.0..=1.0; capacity differences are percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Hard exclusion: discard the pair when both address and name
    /// similarity fall below this floor.
    pub exclusion_text_floor: f64,
    /// Hard exclusion: discard the pair when the capacity difference
    /// exceeds this percentage.
    pub exclusion_capacity_ceiling: f64,
    pub medium_address: f64,
    pub medium_name: f64,
    /// Capacity difference treated as a corroborating signal.
    pub corroborating_capacity: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            exclusion_text_floor: 0.40,
            exclusion_capacity_ceiling: 50.0,
            medium_address: 0.80,
            medium_name: 0.75,
            corroborating_capacity: 15.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DedupConfig {
    pub thresholds: Thresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_consistent() {
        let cfg = DedupConfig::default();
        let t = &cfg.thresholds;
        assert!(t.exclusion_text_floor < t.medium_name);
        assert!(t.exclusion_text_floor < t.medium_address);
        assert!(t.corroborating_capacity < t.exclusion_capacity_ceiling);
        assert!(t.medium_address <= 1.0 && t.medium_name <= 1.0);
    }
}

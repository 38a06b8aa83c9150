/// Discrepancy above which a sample counts as critical.
pub const CRITICALITY_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisProfile {
    pub criticality_threshold: f64,
}

impl AnalysisProfile {
    pub fn default_v1() -> Self {
        Self {
            criticality_threshold: CRITICALITY_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        let mut base = Self::default_v1();
        base.criticality_threshold = threshold;
        base
    }
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

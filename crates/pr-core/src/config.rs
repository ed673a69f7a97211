use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PrError, Result};

/// Reducer configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    /// Smallest target syllable count accepted at the command line.
    pub min_target: usize,
    pub weights: DistanceWeights,
}

/// Weights and penalties of the syllable distance.
///
/// Absence penalties apply when exactly one side of a comparison has the
/// component (onset, coda, second consonant, semivowel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceWeights {
    pub nucleus_weight: u32,
    pub onset_absence_penalty: u32,
    pub coda_absence_penalty: u32,
    pub cluster_absence_penalty: u32,
    pub semivowel_absence_penalty: u32,
    pub nasal_mismatch_penalty: u32,
}

impl Default for DistanceWeights {
    fn default() -> Self {
        Self {
            nucleus_weight: 2,
            onset_absence_penalty: 12,
            coda_absence_penalty: 12,
            cluster_absence_penalty: 6,
            semivowel_absence_penalty: 4,
            nasal_mismatch_penalty: 1,
        }
    }
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            min_target: 1,
            weights: DistanceWeights::default(),
        }
    }
}

impl ReducerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading reducer config");
        Self::from_json_str(&json)
    }

    /// Reject settings the reducer cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.min_target == 0 {
            return Err(PrError::Config("min_target must be at least 1".into()));
        }
        if self.weights.nucleus_weight == 0 {
            return Err(PrError::Config("weights.nucleus_weight must be at least 1".into()));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::minimum::DEFAULT_MIN_NEIGHBORS;
use crate::search::SearchConfig;

/// Parameters for locating the minimum of a fold and re-centering on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenteringConfig {
    /// Neighbors a candidate needs within the radius to be accepted.
    pub min_neighbors: usize,
    /// Fixed neighborhood radius. `None` estimates it from the raw fold.
    pub radius: Option<f64>,
}

impl Default for CenteringConfig {
    fn default() -> Self {
        Self {
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            radius: None,
        }
    }
}

impl CenteringConfig {
    pub fn validate(&self) -> Result<()> {
        match self.radius {
            Some(radius) if !(radius.is_finite() && radius > 0.0) => {
                Err(Error::InvalidRadius { radius })
            }
            _ => Ok(()),
        }
    }
}

/// Search and centering parameters of a full analysis.
///
/// ```rust
/// use lightcurve::{AnalysisConfig, SearchMode};
///
/// let config = AnalysisConfig::from_yaml_str("search:\n  mode: maximize\n")?;
/// assert_eq!(config.search.mode, SearchMode::Maximize);
/// assert_eq!(config.centering.min_neighbors, 10);
/// # Ok::<(), lightcurve::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub search: SearchConfig,
    pub centering: CenteringConfig,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.centering.validate()
    }

    /// Parses and validates a YAML document. Missing fields take defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yml::to_string(self)?)
    }
}

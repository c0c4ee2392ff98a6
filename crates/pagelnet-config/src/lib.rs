//! pagelnet-config — TOML application configuration.
//!
//! One file describes everything the process needs at startup: where the
//! network and matrix files live, where to bind, and the initial query values
//! the dashboard shows before the user touches anything.

use pagelnet_common::error::{PagelnetError, Result};
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::info;

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP bind settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Input file locations
    pub data: DataConfig,

    /// Initial dashboard query values
    #[serde(default)]
    pub defaults: QueryDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Paths to the GraphML network and the four precomputed heatmap tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Pagel results as a GraphML network
    pub network: PathBuf,
    /// Feature-vs-feature likelihood ratios
    pub feature_lr: PathBuf,
    /// Feature-vs-feature p-values
    pub feature_pval: PathBuf,
    /// Feature-vs-habitat likelihood ratios
    pub habitat_lr: PathBuf,
    /// Feature-vs-habitat p-values
    pub habitat_pval: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    /// Preselected focal node; the first known identifier when unset
    pub focal: Option<String>,
    pub depth: u32,
    pub lr_min: f64,
    pub p_max: f64,
    pub layout: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            focal: None,
            depth: 2,
            lr_min: 50.0,
            p_max: 0.05,
            layout: "grid".to_string(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PagelnetError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AppConfig = toml::from_str(&text)
            .map_err(|e| PagelnetError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.defaults.lr_min.is_finite() || self.defaults.lr_min < 0.0 {
            return Err(PagelnetError::Config(format!(
                "defaults.lr_min must be >= 0, got {}",
                self.defaults.lr_min
            )));
        }
        if !(0.0..=1.0).contains(&self.defaults.p_max) {
            return Err(PagelnetError::Config(format!(
                "defaults.p_max must lie in [0, 1], got {}",
                self.defaults.p_max
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> std::result::Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[data]
network = "data/pagel_results_as_network.graphml"
feature_lr = "data/profile_LR.csv"
feature_pval = "data/profile_pval.csv"
habitat_lr = "data/pagel_LR_featureVsHabitat.csv"
habitat_pval = "data/pagel_pvalue_featureVsHabitat.csv"
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: AppConfig = toml::from_str(MINIMAL).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.defaults.depth, 2);
        assert_eq!(config.defaults.lr_min, 50.0);
        assert_eq!(config.defaults.p_max, 0.05);
        assert_eq!(config.defaults.layout, "grid");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_defaults_rejected() {
        let text = format!("{MINIMAL}\n[defaults]\nfocal = \"AA893\"\ndepth = 1\nlr_min = 50.0\np_max = 1.5\nlayout = \"cose\"");
        let config: AppConfig = toml::from_str(&text).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config: AppConfig = toml::from_str(MINIMAL).unwrap();
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:3001".parse::<SocketAddr>().unwrap()
        );
    }
}

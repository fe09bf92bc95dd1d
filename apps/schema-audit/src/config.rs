//! Audit configuration
//!
//! Every field has a default, so an absent or partial `schema-audit.toml`
//! is valid. CLI flags override whatever is loaded here.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "schema-audit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// App directory to scan (default: "app")
    pub root_dir: PathBuf,
    /// File name that marks a page (default: "page.tsx")
    pub page_file_name: String,
    /// Where the JSON report is written (default: "reports/schema-audit.json")
    pub report_path: PathBuf,
    /// Routes listed per recommendation in console output (default: 20)
    pub listing_limit: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("app"),
            page_file_name: "page.tsx".to_string(),
            report_path: PathBuf::from("reports/schema-audit.json"),
            listing_limit: 20,
        }
    }
}

impl AuditConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// `schema-audit.toml` from the working directory, or defaults
    pub fn load_default() -> anyhow::Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = DEFAULT_CONFIG_FILE, "loading audit config");
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_CONFIG_FILE: &str = "entitymaker.toml";

/// Defaults for the command line, read from `entitymaker.toml`. Flags
/// always win over these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakerConfig {
    pub lang: String,
    pub plan: String,
    /// definition rows: convert physical names snake→Pascal
    pub snake_to_pascal: bool,
    pub worksheet: String,
    /// 1-based row where spreadsheet data starts
    pub first_row: usize,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            lang: "csharp".to_string(),
            plan: "summary".to_string(),
            snake_to_pascal: true,
            worksheet: "Definition".to_string(),
            first_row: 2,
        }
    }
}

impl MakerConfig {
    /// An explicit path must exist. Without one, `entitymaker.toml` in the
    /// working directory is used when present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(p) => Self::read(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.exists() { Self::read(p) } else { Ok(Self::default()) }
            }
        }
    }

    pub fn read(p: &Path) -> Result<Self> {
        let s = fs::read_to_string(p)?;
        let cfg: Self = toml::from_str(&s)?;
        tracing::info!(path = %p.display(), "loaded config");
        Ok(cfg)
    }
}

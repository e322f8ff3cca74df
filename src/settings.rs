use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{OttoError, Result};
use crate::refdata::ReferenceData;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub user_name: String,
    /// Optional path to a JSON reference-data override (suppliers, GL
    /// accounts, VAT codes for a specific administration).
    #[serde(default)]
    pub refdata_path: Option<String>,
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("otto")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| OttoError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Reference dataset for this run: the settings override when
/// configured and readable, the built-in fixture otherwise.
pub fn load_reference_data() -> ReferenceData {
    let settings = load_settings();
    if let Some(path) = settings.refdata_path {
        if let Ok(refdata) = ReferenceData::from_file(&PathBuf::from(&path)) {
            return refdata;
        }
        eprintln!("Warning: could not read refdata from {path}, using built-in set");
    }
    ReferenceData::builtin()
}

//! # Preferences
//!
//! The two settings a user changes from inside the journal: display name
//! and theme. They live in `<data_dir>/prefs.json` and survive restarts.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`).

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const PREFS_FILE: &str = "prefs.json";

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_name: Option<String>,
}

/// Load preferences, treating a missing or unreadable file as empty.
pub fn load(data_dir: &Path) -> Preferences {
    let path = data_dir.join(PREFS_FILE);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Preferences::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Preferences::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!("Ignoring malformed {}: {}", path.display(), e);
            Preferences::default()
        }
    }
}

pub fn save(data_dir: &Path, prefs: &Preferences) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(PREFS_FILE);
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(prefs)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &path)?;
    debug!("Preferences saved to {}", path.display());
    Ok(())
}

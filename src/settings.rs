use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::log_warn;
use crate::signature::Pen;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursSettings {
    /// Daily regular-hours cap in minutes; worked time beyond it counts as
    /// overtime.
    pub daily_cap_minutes: i64,
}

impl Default for HoursSettings {
    fn default() -> Self {
        Self {
            daily_cap_minutes: 480,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSettings {
    pub pen_width: f32,
    pub ink: [u8; 4],
    pub background: [u8; 4],
}

impl Default for SignatureSettings {
    fn default() -> Self {
        Self {
            pen_width: 2.5,
            ink: [17, 17, 17, 255],
            background: [255, 255, 255, 255],
        }
    }
}

impl SignatureSettings {
    pub fn pen(&self) -> Pen {
        Pen::new(self.pen_width, self.ink)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientSettings {
    // Each group defaults independently so a file written by an older
    // build keeps the groups it has.
    #[serde(default)]
    backend: BackendSettings,
    #[serde(default)]
    hours: HoursSettings,
    #[serde(default)]
    signature: SignatureSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<ClientSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(err) => {
                    log_warn!(
                        "Settings at {} are unreadable ({err}), starting from defaults",
                        path.display()
                    );
                    ClientSettings::default()
                }
            }
        } else {
            ClientSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn backend(&self) -> BackendSettings {
        self.data.read().unwrap().backend.clone()
    }

    pub fn hours(&self) -> HoursSettings {
        self.data.read().unwrap().hours.clone()
    }

    pub fn signature(&self) -> SignatureSettings {
        self.data.read().unwrap().signature.clone()
    }

    pub fn update_backend(&self, settings: BackendSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.backend = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    pub fn update_hours(&self, settings: HoursSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.hours = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    pub fn update_signature(&self, settings: SignatureSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.signature = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &ClientSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

impl SettingsStore {
    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: ClientSettings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = data;
        Ok(())
    }
}

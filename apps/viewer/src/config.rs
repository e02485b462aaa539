use std::{collections::HashMap, fs};

use roster_core::DEFAULT_DOCUMENT_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub document_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/".into(),
            document_path: DEFAULT_DOCUMENT_PATH.into(),
        }
    }
}

impl Settings {
    /// Command-line values win over file and environment values.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        document_path: Option<String>,
    ) -> Self {
        if let Some(v) = base_url {
            self.base_url = v;
        }
        if let Some(v) = document_path {
            self.document_path = v;
        }
        self
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("viewer.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("VIEWER_BASE_URL") {
        settings.base_url = v;
    }
    if let Ok(v) = std::env::var("APP__BASE_URL") {
        settings.base_url = v;
    }
    if let Ok(v) = std::env::var("APP__DOCUMENT_PATH") {
        settings.document_path = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("base_url") {
        settings.base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("document_path") {
        settings.document_path = v.clone();
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

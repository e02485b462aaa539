use std::{collections::HashMap, fs, path::PathBuf};

const DEFAULT_DATA_FILE: &str = "./data/students.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub data_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            data_file: DEFAULT_DATA_FILE.into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("DATA_FILE") {
        settings.data_file = v;
    }
    if let Ok(v) = std::env::var("APP__DATA_FILE") {
        settings.data_file = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("data_file") {
        settings.data_file = v.clone();
    }
}

/// Normalizes the configured data file; blank values fall back to the default.
pub fn resolve_data_file(raw_data_file: &str) -> PathBuf {
    let raw_data_file = raw_data_file.trim();
    if raw_data_file.is_empty() {
        return PathBuf::from(DEFAULT_DATA_FILE);
    }
    PathBuf::from(raw_data_file.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

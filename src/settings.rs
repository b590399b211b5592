use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // Appearance
    pub theme: Theme,

    // Sections
    pub show_forecast: bool,
    pub show_prices: bool,
    pub show_histogram: bool,
    pub show_statusbar: bool,

    // Forecast defaults (Lausanne, matching the sample data)
    pub default_city: String,
    pub default_latitude: f64,
    pub default_longitude: f64,

    // Prices
    pub coins: Vec<String>,
    pub fetch_prices_on_start: bool,

    // Histogram
    pub last_image: Option<PathBuf>,
    pub restore_last_image: bool,

    // Window state
    pub window_size: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,

            show_forecast: true,
            show_prices: true,
            show_histogram: true,
            show_statusbar: true,

            default_city: "Lausanne".to_string(),
            default_latitude: 46.52,
            default_longitude: 6.63,

            coins: vec!["bitcoin".to_string(), "ethereum".to_string()],
            fetch_prices_on_start: false,

            last_image: None,
            restore_last_image: true,

            window_size: (1200.0, 800.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Settings {
    pub fn load() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "vizlab", "VizLab") {
            let config_path = proj_dirs.config_dir().join("settings.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    match serde_json::from_str(&content) {
                        Ok(settings) => return settings,
                        Err(e) => log::warn!("Ignoring unreadable settings file: {}", e),
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "vizlab", "VizLab") {
            let config_dir = proj_dirs.config_dir();
            let _ = std::fs::create_dir_all(config_dir);
            let config_path = config_dir.join("settings.json");
            if let Ok(content) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(config_path, content);
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Top-level reader settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReaderSettings {
    pub general: GeneralSettings,
    pub appearance: AppearanceSettings,
    pub reading: ReadingSettings,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            appearance: AppearanceSettings::default(),
            reading: ReadingSettings::default(),
        }
    }
}

/// General reader settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub language: String,
    pub start_page: StartPage,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            start_page: StartPage::Categories,
        }
    }
}

/// Which page the reader opens on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StartPage {
    Categories,
    Saved,
    LastRead,
}

/// Appearance and visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub accent_color: String,
    pub font_size: u32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            accent_color: "#1f6feb".to_string(),
            font_size: 16,
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

/// Per-article reading experience settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingSettings {
    pub show_faq: bool,
    pub show_quiz: bool,
    pub show_related: bool,
    pub related_count: u32,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            show_faq: true,
            show_quiz: true,
            show_related: true,
            related_count: 3,
        }
    }
}

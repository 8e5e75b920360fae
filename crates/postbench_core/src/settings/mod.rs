//! Process-wide theme settings.
//!
//! # Responsibility
//! - Load the active theme name and color once at startup into an
//!   immutable snapshot.
//! - Write theme changes through to the settings store, producing a new
//!   snapshot that callers thread explicitly to consumers.
//!
//! # Invariants
//! - Missing keys fall back to fixed defaults (`wechat-post-1`,
//!   `tech_blue`); loading never fabricates partial state.
//! - An unknown stored color value degrades to the default color rather
//!   than failing the load.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings key for the active theme name.
pub const THEME_KEY: &str = "currentTheme";
/// Settings key for the active theme color.
pub const THEME_COLOR_KEY: &str = "currentThemeColor";

/// Default theme applied when no setting has been stored yet.
pub const DEFAULT_THEME: &str = "wechat-post-1";

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings store failure; any variant means the backing store refused
/// the read or write.
#[derive(Debug)]
pub enum SettingsError {
    Db(DbError),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for SettingsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Closed palette of theme accent colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    #[default]
    TechBlue,
    VibrantOrange,
    FreshGreen,
    ClassicRed,
    ElegantPurple,
}

impl ThemeColor {
    /// Stable wire/storage name for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TechBlue => "tech_blue",
            Self::VibrantOrange => "vibrant_orange",
            Self::FreshGreen => "fresh_green",
            Self::ClassicRed => "classic_red",
            Self::ElegantPurple => "elegant_purple",
        }
    }

    /// Parses a stored value, falling back to the default for unknown
    /// or stale values.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "tech_blue" => Self::TechBlue,
            "vibrant_orange" => Self::VibrantOrange,
            "fresh_green" => Self::FreshGreen,
            "classic_red" => Self::ClassicRed,
            "elegant_purple" => Self::ElegantPurple,
            _ => Self::default(),
        }
    }
}

/// Immutable snapshot of the active theme configuration.
///
/// Loaded once at startup; theme writes produce a fresh snapshot that
/// the caller threads to whoever renders with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    /// Active theme name.
    pub theme: String,
    /// Active theme accent color.
    pub theme_color: ThemeColor,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            theme_color: ThemeColor::default(),
        }
    }
}

/// Synchronous key-value store for theme settings.
pub trait SettingsStore {
    /// Loads the current snapshot, applying per-key defaults.
    fn load(&self) -> SettingsResult<ThemeSettings>;
    /// Persists a new active theme name.
    fn store_theme(&self, theme: &str) -> SettingsResult<()>;
    /// Persists a new active theme color.
    fn store_theme_color(&self, color: ThemeColor) -> SettingsResult<()>;
}

/// SQLite-backed settings store over the shared `settings` table.
pub struct SqliteSettingsStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsStore<'conn> {
    /// Constructs a settings store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_key(&self, key: &str) -> SettingsResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM settings WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_key(&self, key: &str, value: &str) -> SettingsResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

impl SettingsStore for SqliteSettingsStore<'_> {
    fn load(&self) -> SettingsResult<ThemeSettings> {
        let theme = self
            .read_key(THEME_KEY)?
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let theme_color = self
            .read_key(THEME_COLOR_KEY)?
            .map(|value| ThemeColor::parse_or_default(&value))
            .unwrap_or_default();

        Ok(ThemeSettings { theme, theme_color })
    }

    fn store_theme(&self, theme: &str) -> SettingsResult<()> {
        self.write_key(THEME_KEY, theme)
    }

    fn store_theme_color(&self, color: ThemeColor) -> SettingsResult<()> {
        self.write_key(THEME_COLOR_KEY, color.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeColor;

    #[test]
    fn color_names_round_trip() {
        for color in [
            ThemeColor::TechBlue,
            ThemeColor::VibrantOrange,
            ThemeColor::FreshGreen,
            ThemeColor::ClassicRed,
            ThemeColor::ElegantPurple,
        ] {
            assert_eq!(ThemeColor::parse_or_default(color.as_str()), color);
        }
    }

    #[test]
    fn unknown_color_falls_back_to_default() {
        assert_eq!(
            ThemeColor::parse_or_default("neon_pink"),
            ThemeColor::TechBlue
        );
    }
}

//! # Theme Persistence
//!
//! Loads and saves the [`GlyphTheme`] used to draw the network map. The theme
//! itself lives in `lib-core`; this module only handles the JSON file.

use crate::core::error::{AppError, Result};
use lib_core::topology::GlyphTheme;
use std::path::Path;

/// Read a theme file. A missing file yields the default theme.
pub fn load_from_file(path: &Path) -> Result<GlyphTheme> {
    if !path.exists() {
        return Ok(GlyphTheme::default());
    }
    let content = std::fs::read_to_string(path)?;
    let theme: GlyphTheme = serde_json::from_str(&content)?;
    theme.validate().map_err(AppError::Theme)?;
    Ok(theme)
}

/// Write a theme file, creating parent directories.
pub fn save_to_file(theme: &GlyphTheme, path: &Path) -> Result<()> {
    theme.validate().map_err(AppError::Theme)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(theme)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load settings, falling back to defaults on any error
pub fn load_or_default(path: &Path) -> GlyphTheme {
    match load_from_file(path) {
        Ok(theme) => {
            tracing::info!("Loaded glyph theme from {:?}", path);
            theme
        }
        Err(e) => {
            tracing::warn!("Failed to load glyph theme from {:?}: {}. Using defaults.", path, e);
            GlyphTheme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("rinlab-theme-test-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_file_is_default() {
        let theme = load_from_file(&scratch("absent.json")).unwrap();
        assert_eq!(theme, GlyphTheme::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("nested/theme.json");
        save_to_file(&GlyphTheme::ascii(), &path).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), GlyphTheme::ascii());
        let _ = std::fs::remove_dir_all(path.parent().and_then(Path::parent).unwrap());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = scratch("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_from_file(&path), Err(AppError::Theme(_))));
        assert_eq!(load_or_default(&path), GlyphTheme::default());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let mut theme = GlyphTheme::default();
        theme.active[0] = "too wide".to_string();
        let path = scratch("invalid.json");
        assert!(matches!(save_to_file(&theme, &path), Err(AppError::Theme(_))));
        assert!(!path.exists());
    }
}

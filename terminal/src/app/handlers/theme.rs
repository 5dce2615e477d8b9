//! # Theme Handlers
//!
//! `rinlab theme`: write a starter theme file or print the effective theme.

use crate::core::error::{AppError, Result};
use crate::ui::theme;
use lib_core::topology::GlyphTheme;
use std::path::Path;

/// Write the default (or ASCII) theme to `path`.
///
/// An existing file is left alone unless `force` is set.
pub fn init_theme(path: &Path, ascii: bool, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(AppError::Theme(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let glyphs = if ascii { GlyphTheme::ascii() } else { GlyphTheme::default() };
    theme::save_to_file(&glyphs, path)?;
    tracing::info!("Saved glyph theme to {:?}", path);
    Ok(())
}

/// Effective theme at `path` as pretty JSON
pub fn show_theme(path: &Path) -> Result<String> {
    let glyphs = theme::load_from_file(path)?;
    Ok(serde_json::to_string_pretty(&glyphs)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = std::env::temp_dir().join(format!("rinlab-init-{}", uuid::Uuid::new_v4()));
        let path = dir.join("theme.json");

        init_theme(&path, true, false).unwrap();
        assert!(show_theme(&path).unwrap().contains("+---+"));
        assert!(matches!(init_theme(&path, false, false), Err(AppError::Theme(_))));

        init_theme(&path, false, true).unwrap();
        assert_eq!(theme::load_from_file(&path).unwrap(), GlyphTheme::default());
        let _ = std::fs::remove_dir_all(dir);
    }
}

use gpui::App;

use crate::theme::{DEFAULT_THEME, Theme, ThemeExt};

/// Installs the built-in theme unless the application already set one.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(&DEFAULT_THEME);
    }
}

use gpui::App;

use crate::theme::{DEFAULT_THEME, Theme};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme, or the built-in one if none was set.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        match self.try_global::<Theme>() {
            Some(theme) => theme,
            None => &*DEFAULT_THEME,
        }
    }
}

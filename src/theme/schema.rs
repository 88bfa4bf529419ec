use std::{ops::Deref, sync::LazyLock};

use gpui::{Global, Rgba, SharedString};
use grid_css::Breakpoints;
use serde::{Deserialize, Serialize};

use super::deserializers::de_opacity;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    /// Absent breakpoints fall back to the built-in `xs` to `xxl` set.
    #[serde(default)]
    pub breakpoints: Breakpoints,
    pub grid: ThemeGrid,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path)).expect("built-in theme should be valid JSON")
            });
        )+
    };
}

generate_builtin_themes!(["../../themes/default.json", DEFAULT_THEME]);

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeGrid {
    /// Fill of each column.
    pub column: Rgba,
    /// Left and right edge of each column.
    pub border: Rgba,
    /// Opacity of the whole overlay, between 0 and 1.
    #[serde(deserialize_with = "de_opacity")]
    pub opacity: f32,
}

#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Grid overlay colors that resolve to theme-defined values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeGridColorKind {
    /// Fill of each column.
    #[assoc(resolve = cx.get_theme().grid.column)]
    Column,
    /// Column edges.
    #[assoc(resolve = cx.get_theme().grid.border)]
    Border,
}

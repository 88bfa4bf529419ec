//! A development overlay that draws a responsive column grid over a gpui
//! window, toggled with `ctrl-g`.
//!
//! Call [`init`] once, then mount a [`components::GridDebugger`] through
//! [`components::Root`] or render it yourself above your content.

pub mod primitives;

pub mod components;

pub mod theme;

mod utils;
pub use utils::LengthExt;

mod init;
pub use init::*;

pub use grid_css::{Breakpoint, Breakpoints, ResponsiveValue, Scalar};

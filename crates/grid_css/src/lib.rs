//! Responsive grid configuration resolved into CSS.
//!
//! A [`ResponsiveValue`] is either a single value, a list indexed by
//! ascending breakpoint, or a map from breakpoint name to value. The
//! [`resolve`] functions normalize it against a set of [`Breakpoints`],
//! the [`rules`] generators turn the per-breakpoint form into ordered
//! media-query-scoped declarations and [`GridStyleSheet`] assembles the
//! complete grid overlay stylesheet.

mod breakpoints;
pub use breakpoints::*;

mod value;
pub use value::*;

mod resolve;
pub use resolve::*;

pub mod rules;
pub use rules::{CssRule, Declaration};

mod sheet;
pub use sheet::*;

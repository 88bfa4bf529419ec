//! Media-query-scoped declarations generated from per-breakpoint values.
//!
//! Every generator returns its rules ordered ascending by breakpoint width so
//! that, in source order, wider breakpoints override narrower ones.

use std::fmt;

use indexmap::IndexMap;
use log::warn;

use crate::{Breakpoints, Scalar, Scope};

/// A single CSS declaration the grid overlay uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `column-gap`, the gutter between columns.
    ColumnGap(String),
    /// Horizontal padding equal to the gutter.
    SideMargins(String),
    /// `grid-template-columns: repeat(n, 1fr)`.
    Columns(u16),
    MaxWidth(String),
    /// Fixed overlay declarations that don't depend on configuration.
    Static(&'static str, &'static str),
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::ColumnGap(gap) => write!(f, "column-gap: {gap};"),
            Declaration::SideMargins(margin) => write!(f, "padding: 0 {margin};"),
            Declaration::Columns(count) => {
                write!(f, "grid-template-columns: repeat({count}, 1fr);")
            }
            Declaration::MaxWidth(width) => write!(f, "max-width: {width};"),
            Declaration::Static(property, value) => write!(f, "{property}: {value};"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub scope: Scope,
    pub declaration: Declaration,
}

impl CssRule {
    pub fn base(declaration: Declaration) -> Self {
        Self {
            scope: Scope::Base,
            declaration,
        }
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope.media_query() {
            Some(query) => write!(f, "{query} {{ {} }}", self.declaration),
            None => write!(f, "{}", self.declaration),
        }
    }
}

/// `column-gap` for every breakpoint in `map`.
pub fn gutters(map: &IndexMap<String, Scalar>, breakpoints: &Breakpoints) -> Vec<CssRule> {
    scoped_rules(map, breakpoints, |value| {
        Some(Declaration::ColumnGap(value.to_length_css()))
    })
}

/// Side padding matching the gutter for every breakpoint in `map`.
pub fn side_margins(map: &IndexMap<String, Scalar>, breakpoints: &Breakpoints) -> Vec<CssRule> {
    scoped_rules(map, breakpoints, |value| {
        Some(Declaration::SideMargins(value.to_length_css()))
    })
}

/// Column template for every breakpoint in `map`. Entries that aren't a
/// positive whole number are skipped.
pub fn num_cols(map: &IndexMap<String, Scalar>, breakpoints: &Breakpoints) -> Vec<CssRule> {
    scoped_rules(map, breakpoints, |value| match value.as_count() {
        Some(count) => Some(Declaration::Columns(count)),
        None => {
            warn!("grid debugger: `{value}` is not a column count, skipping rule");
            None
        }
    })
}

/// `max-width` for every breakpoint in `map`.
pub fn max_width(map: &IndexMap<String, Scalar>, breakpoints: &Breakpoints) -> Vec<CssRule> {
    scoped_rules(map, breakpoints, |value| {
        Some(Declaration::MaxWidth(value.to_length_css()))
    })
}

fn scoped_rules(
    map: &IndexMap<String, Scalar>,
    breakpoints: &Breakpoints,
    declare: impl Fn(&Scalar) -> Option<Declaration>,
) -> Vec<CssRule> {
    let mut rules: Vec<CssRule> = map
        .iter()
        .filter_map(|(key, value)| {
            let Some(scope) = breakpoints.scope_of(key) else {
                warn!("grid debugger: unknown breakpoint `{key}`, skipping rule");
                return None;
            };

            Some(CssRule {
                scope,
                declaration: declare(value)?,
            })
        })
        .collect();

    // Stable, so `default` keeps its place relative to a zero-width breakpoint.
    rules.sort_by(|a, b| a.scope.min_width().total_cmp(&b.scope.min_width()));
    rules
}

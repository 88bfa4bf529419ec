use log::warn;

use crate::{
    Breakpoints, CssRule, Declaration, Length, Resolved,
    rules::{gutters, max_width, num_cols, side_margins},
};

/// Declarations that turn the container into a fixed, click-through overlay.
pub const OVERLAY_DECLARATIONS: [(&str, &str); 11] = [
    ("display", "grid"),
    ("box-sizing", "content-box"),
    ("margin", "0 auto"),
    ("position", "fixed"),
    ("top", "0"),
    ("bottom", "0"),
    ("left", "0"),
    ("right", "0"),
    ("opacity", "0.6"),
    ("z-index", "1000"),
    ("pointer-events", "none"),
];

/// The full grid overlay stylesheet, as an ordered list of rules.
///
/// Later rules win over earlier ones when both apply, exactly like CSS
/// declarations of equal specificity.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyleSheet {
    rules: Vec<CssRule>,
}

impl GridStyleSheet {
    /// Assembles the stylesheet from resolved gutter, column and max-width values.
    ///
    /// A missing gutter or column descriptor contributes no rules.
    pub fn new(
        gutter: Option<&Resolved>,
        columns: Option<&Resolved>,
        max_width_value: &Resolved,
        breakpoints: &Breakpoints,
    ) -> Self {
        let mut rules: Vec<CssRule> = OVERLAY_DECLARATIONS
            .iter()
            .map(|&(property, value)| CssRule::base(Declaration::Static(property, value)))
            .collect();

        if let Some(count) = columns.and_then(Resolved::single) {
            match count.as_count() {
                Some(count) => rules.push(CssRule::base(Declaration::Columns(count))),
                None => warn!("grid debugger: `{count}` is not a column count, skipping rule"),
            }
        }

        match gutter {
            Some(Resolved::Single(gap)) => {
                rules.push(CssRule::base(Declaration::SideMargins(gap.to_length_css())));
                rules.push(CssRule::base(Declaration::ColumnGap(gap.to_length_css())));
            }
            Some(Resolved::Map(map)) => {
                rules.extend(side_margins(map, breakpoints));
                rules.extend(gutters(map, breakpoints));
            }
            None => {}
        }

        if let Some(map) = columns.and_then(Resolved::map) {
            rules.extend(num_cols(map, breakpoints));
        }

        match max_width_value {
            Resolved::Single(width) => {
                rules.push(CssRule::base(Declaration::MaxWidth(width.to_length_css())))
            }
            Resolved::Map(map) => rules.extend(max_width(map, breakpoints)),
        }

        Self { rules }
    }

    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    /// Renders the rules as CSS targeting `selector`.
    ///
    /// Consecutive rules sharing a scope are grouped into one block; source
    /// order is otherwise kept as is.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();
        let mut rules = self.rules.iter().peekable();

        while let Some(rule) = rules.next() {
            let mut block = vec![&rule.declaration];
            while let Some(next) = rules.next_if(|next| next.scope == rule.scope) {
                block.push(&next.declaration);
            }

            match rule.scope.media_query() {
                Some(query) => {
                    css.push_str(&format!("{query} {{\n  {selector} {{\n"));
                    for declaration in block {
                        css.push_str(&format!("    {declaration}\n"));
                    }
                    css.push_str("  }\n}\n");
                }
                None => {
                    css.push_str(&format!("{selector} {{\n"));
                    for declaration in block {
                        css.push_str(&format!("  {declaration}\n"));
                    }
                    css.push_str("}\n");
                }
            }
        }

        css
    }

    /// Applies every rule that matches `viewport_width`, in source order.
    pub fn cascade(&self, viewport_width: f32) -> ComputedGrid {
        let mut grid = ComputedGrid::default();

        for rule in self
            .rules
            .iter()
            .filter(|rule| rule.scope.applies_at(viewport_width))
        {
            match &rule.declaration {
                Declaration::Columns(count) => grid.columns = *count,
                Declaration::ColumnGap(gap) => apply_length(&mut grid.column_gap, gap),
                Declaration::SideMargins(margin) => apply_length(&mut grid.side_margin, margin),
                Declaration::MaxWidth(width) => apply_length(&mut grid.max_width, width),
                Declaration::Static(..) => {}
            }
        }

        grid
    }
}

fn apply_length(slot: &mut Length, value: &str) {
    match value.parse() {
        Ok(length) => *slot = length,
        Err(err) => warn!("grid debugger: {err}, skipping rule"),
    }
}

/// Grid values in effect at one viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedGrid {
    pub columns: u16,
    pub column_gap: Length,
    pub side_margin: Length,
    pub max_width: Length,
}

impl Default for ComputedGrid {
    fn default() -> Self {
        Self {
            columns: 0,
            column_gap: Length::Px(0.),
            side_margin: Length::Px(0.),
            max_width: Length::None,
        }
    }
}

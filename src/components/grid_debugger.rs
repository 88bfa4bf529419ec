use gpui::{
    App, Context, InteractiveElement, IntoElement, ParentElement, Pixels, Render, SharedString,
    Styled, Window, div, prelude::FluentBuilder,
};
use grid_css::{
    Breakpoints, ComputedGrid, GridStyleSheet, PropertyKind, Resolved, ResponsiveValue,
    resolve_or_skip,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    LengthExt,
    primitives::{DEFAULT_TOGGLE_KEYSTROKE, KeyToggleListener, parse_toggle_keystroke},
    theme::{ThemeExt, ThemeGridColorKind},
};

/// Selector the generated stylesheet targets.
pub const GRID_SELECTOR: &str = ".grid-debugger";

/// Configuration of a [`GridDebugger`].
///
/// Field names follow the usual web naming so the same JSON can describe the
/// grid of a web build: `{ "gutter": "16px", "numCols": [4, 8, 12] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Whether the overlay starts visible.
    #[serde(default)]
    pub show: bool,
    pub gutter: ResponsiveValue,
    #[serde(default)]
    pub max_width: Option<ResponsiveValue>,
    pub num_cols: ResponsiveValue,
    /// Overrides the breakpoints of the global theme.
    #[serde(default, alias = "theme")]
    pub breakpoints: Option<Breakpoints>,
    #[serde(default = "default_toggle_keystroke")]
    pub toggle_keystroke: SharedString,
}

fn default_toggle_keystroke() -> SharedString {
    DEFAULT_TOGGLE_KEYSTROKE.into()
}

impl GridConfig {
    pub fn new(gutter: impl Into<ResponsiveValue>, num_cols: impl Into<ResponsiveValue>) -> Self {
        Self {
            show: false,
            gutter: gutter.into(),
            max_width: None,
            num_cols: num_cols.into(),
            breakpoints: None,
            toggle_keystroke: default_toggle_keystroke(),
        }
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn gutter(mut self, gutter: impl Into<ResponsiveValue>) -> Self {
        self.gutter = gutter.into();
        self
    }

    pub fn num_cols(mut self, num_cols: impl Into<ResponsiveValue>) -> Self {
        self.num_cols = num_cols.into();
        self
    }

    pub fn max_width(mut self, max_width: impl Into<ResponsiveValue>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn toggle_keystroke(mut self, keystroke: impl Into<SharedString>) -> Self {
        self.toggle_keystroke = keystroke.into();
        self
    }
}

/// Column grid drawn over the whole window, shown and hidden with a keystroke.
///
/// The debugger listens for its toggle keystroke from the moment it is
/// created until it is dropped or [`stop_listening`](Self::stop_listening)
/// is called. Configuration problems are logged and the
/// offending values skipped; they never stop the overlay from rendering.
///
/// # Example
///
/// ```ignore
/// let grid = cx.new(|cx| {
///     GridDebugger::new(
///         GridConfig::new("16px", [4u32, 8, 12].into_iter().collect::<ResponsiveValue>())
///             .max_width("1200px"),
///         cx,
///     )
/// });
/// ```
pub struct GridDebugger {
    config: GridConfig,
    visible: bool,
    listener: Option<KeyToggleListener>,
    stylesheet: GridStyleSheet,
    /// Breakpoints `stylesheet` was resolved against.
    resolved_for: Breakpoints,
}

impl GridDebugger {
    pub fn new(config: GridConfig, cx: &mut Context<Self>) -> Self {
        let listener = parse_toggle_keystroke(&config.toggle_keystroke).map(|keystroke| {
            let this = cx.weak_entity();
            KeyToggleListener::start(keystroke, cx, move |_window, cx| {
                let _ = this.update(cx, |this, cx| this.toggle(cx));
            })
        });

        let resolved_for = config
            .breakpoints
            .clone()
            .unwrap_or_else(|| cx.get_theme().breakpoints.clone());
        let stylesheet = build_stylesheet(&config, &resolved_for);

        Self {
            visible: config.show,
            config,
            listener,
            stylesheet,
            resolved_for,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self, cx: &mut Context<Self>) {
        self.set_visible(!self.visible, cx);
    }

    pub fn set_visible(&mut self, visible: bool, cx: &mut Context<Self>) {
        if self.visible == visible {
            return;
        }

        self.visible = visible;
        debug!(
            "grid debugger {}",
            if visible { "shown" } else { "hidden" }
        );
        cx.notify();
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Stops reacting to the toggle keystroke. The current visibility is kept.
    pub fn stop_listening(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.stop();
        }
    }

    /// Breakpoints from the config, or else from the global theme.
    pub fn breakpoints(&self, cx: &App) -> Breakpoints {
        match &self.config.breakpoints {
            Some(breakpoints) => breakpoints.clone(),
            None => cx.get_theme().breakpoints.clone(),
        }
    }

    /// The stylesheet resolved when the breakpoints in effect last changed.
    pub fn stylesheet(&self) -> &GridStyleSheet {
        &self.stylesheet
    }

    /// The stylesheet as CSS, for use in a web build of the same layout.
    pub fn css(&self) -> String {
        self.stylesheet.to_css(GRID_SELECTOR)
    }

    /// Grid values in effect for a viewport `viewport_width` wide.
    pub fn computed(&self, viewport_width: Pixels) -> ComputedGrid {
        self.stylesheet.cascade(viewport_width.to_f64() as f32)
    }

    /// Re-resolves the config if the theme's breakpoints changed since the
    /// stylesheet was built.
    pub fn refresh_stylesheet(&mut self, cx: &App) {
        let current = match &self.config.breakpoints {
            Some(breakpoints) => breakpoints,
            None => &cx.get_theme().breakpoints,
        };

        if *current != self.resolved_for {
            let current = current.clone();
            self.stylesheet = build_stylesheet(&self.config, &current);
            self.resolved_for = current;
        }
    }
}

fn build_stylesheet(config: &GridConfig, breakpoints: &Breakpoints) -> GridStyleSheet {
    let gutter = resolve_or_skip(&config.gutter, breakpoints, PropertyKind::Length, "gutter");
    let columns = resolve_or_skip(
        &config.num_cols,
        breakpoints,
        PropertyKind::Columns,
        "numCols",
    );
    let max_width = config
        .max_width
        .as_ref()
        .and_then(|max_width| {
            resolve_or_skip(max_width, breakpoints, PropertyKind::Length, "maxWidth")
        })
        .unwrap_or_else(Resolved::none);

    GridStyleSheet::new(gutter.as_ref(), columns.as_ref(), &max_width, breakpoints)
}

impl Render for GridDebugger {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.refresh_stylesheet(cx);
        let grid = self
            .visible
            .then(|| self.computed(window.viewport_size().width));

        div()
            .id("grid-debugger")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .when_some(grid, |this, grid| this.child(render_columns(&grid, cx)))
    }
}

fn render_columns(grid: &ComputedGrid, cx: &App) -> impl IntoElement {
    let column_color = ThemeGridColorKind::Column.resolve(cx);
    let border_color = ThemeGridColorKind::Border.resolve(cx);

    // Padding sits outside the max-width box, matching `box-sizing: content-box`.
    div()
        .id("grid-debugger-overlay")
        .size_full()
        .flex()
        .justify_center()
        .opacity(cx.get_theme().grid.opacity)
        .when_some(grid.side_margin.to_definite(), |this, margin| {
            this.pl(margin).pr(margin)
        })
        .child(
            div()
                .id("grid-debugger-columns")
                .debug_selector(|| "grid-debugger-columns".into())
                .w_full()
                .h_full()
                .flex()
                .flex_row()
                .when_some(grid.max_width.to_definite(), |this, max_width| {
                    this.max_w(max_width)
                })
                .when_some(grid.column_gap.to_definite(), |this, gap| this.gap(gap))
                .children((0..grid.columns).map(|index| {
                    div()
                        .debug_selector(move || format!("grid-column-{index}"))
                        .flex_1()
                        .h_full()
                        .bg(column_color)
                        .border_l_1()
                        .border_r_1()
                        .border_color(border_color)
                })),
        )
}

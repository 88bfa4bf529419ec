use gpui::{
    AnyView, AppContext, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    Styled, Window, div, prelude::FluentBuilder,
};

use crate::components::{GridConfig, GridDebugger};

/// Root is the top-level view that renders a child view and, when mounted,
/// a [`GridDebugger`] in front of it.
///
/// # Example
///
/// ```ignore
/// cx.open_window(options, |window, cx| {
///     cx.new(|cx| {
///         let mut root = Root::new(your_main_view, window, cx);
///         root.mount_grid(GridConfig::new("16px", 12u32), cx);
///         root
///     })
/// });
/// ```
pub struct Root {
    view: AnyView,
    grid: Option<Entity<GridDebugger>>,
}

impl Root {
    /// Creates a new Root with the given child view.
    pub fn new(view: impl Into<AnyView>, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            view: view.into(),
            grid: None,
        }
    }

    /// Mounts a grid debugger above the view, replacing any mounted before.
    pub fn mount_grid(&mut self, config: GridConfig, cx: &mut Context<Self>) -> Entity<GridDebugger> {
        let grid = cx.new(|cx| GridDebugger::new(config, cx));
        self.grid = Some(grid.clone());
        cx.notify();
        grid
    }

    /// Unmounts the grid debugger. Returns true if one was mounted.
    ///
    /// The debugger stops listening for its keystroke right away, even if
    /// other handles to it are still alive.
    pub fn unmount_grid(&mut self, cx: &mut Context<Self>) -> bool {
        let Some(grid) = self.grid.take() else {
            return false;
        };

        grid.update(cx, |grid, _cx| grid.stop_listening());
        cx.notify();
        true
    }

    pub fn grid(&self) -> Option<&Entity<GridDebugger>> {
        self.grid.as_ref()
    }
}

impl Render for Root {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("root")
            .size_full()
            .relative()
            // Render main child view
            .child(self.view.clone())
            // Render the grid on top
            .when_some(self.grid.clone(), |this, grid| {
                this.child(
                    div()
                        .id("root-grid-layer")
                        .absolute()
                        .top_0()
                        .left_0()
                        .size_full()
                        .child(grid),
                )
            })
    }
}

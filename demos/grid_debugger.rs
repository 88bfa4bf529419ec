use gpui::{
    App, AppContext, Application, Bounds, Context, IntoElement, ParentElement, Render, Styled,
    Window, WindowBounds, WindowOptions, div, px, rgb, size,
};

use gpui_grid_debugger::{
    ResponsiveValue,
    components::{GridConfig, Root},
};

struct Page;

impl Render for Page {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(rgb(0xffffff))
            .text_color(rgb(0x202020))
            .flex()
            .flex_col()
            .justify_center()
            .items_center()
            .gap(px(12.))
            .child("Press ctrl-g to toggle the grid.")
            .child("Resize the window to watch the columns follow the breakpoints.")
    }
}

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        gpui_grid_debugger::init(cx);

        let config = GridConfig::new(
            ResponsiveValue::map([("xs", "12px"), ("md", "20px"), ("xl", "24px")]),
            [4u32, 8, 8, 12].into_iter().collect::<ResponsiveValue>(),
        )
        .max_width("1280px")
        .show(true);

        let bounds = Bounds::centered(None, size(px(1024.), px(720.)), cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| {
                let page = cx.new(|_cx| Page);
                cx.new(|cx| {
                    let mut root = Root::new(page, window, cx);
                    let grid = root.mount_grid(config, cx);
                    log::debug!("grid stylesheet:\n{}", grid.read(cx).css());
                    root
                })
            },
        )
        .unwrap();

        cx.activate(true);
    });
}

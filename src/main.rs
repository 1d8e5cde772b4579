mod app;

use eframe::egui;

use app::SidebarApp;
use learning_sidebar::net::fetch::DEFAULT_ORIGIN;

fn main() {
    env_logger::init();

    // The page the widget is embedded on; deep links ride its query string,
    // e.g. `learning-sidebar "/docs/intro?sidebar=learning-center/topic-2"`.
    let page_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("/docs/intro"));
    let origin =
        std::env::var("SIDEBAR_ORIGIN").unwrap_or_else(|_| String::from(DEFAULT_ORIGIN));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Learning Center Sidebar",
        options,
        Box::new(move |cc| {
            let app = SidebarApp::new(&page_url, origin, &cc.egui_ctx)?;
            Ok(Box::new(app))
        }),
    )
    .expect("Failed to start the sidebar shell");
}

//! `SidebarApp` — the egui shell standing in for the page that embeds the
//! learning-center widget.
//!
//! The shell owns the toolbar (back/forward, address bar, toggle), the
//! slide-out panel, and the async fetch lifecycle. All widget decisions are
//! delegated to `SidebarController`; the shell only performs fetches and
//! renders state. Methods are split across the sibling sub-modules:
//!
//! - `navigation` — async fragment-fetch lifecycle
//! - `toolbar`    — address bar and history controls
//! - `panel`      — the slide-out panel and fragment rendering

pub mod navigation;
pub mod panel;
pub mod toolbar;

use std::sync::mpsc;

use eframe::egui;

use learning_sidebar::net::fetch::FetchError;
use learning_sidebar::sidebar::surface::{InitError, PanelControls, PanelModel, PanelSurface};
use learning_sidebar::sidebar::SidebarController;

/// Completed fetch, tagged with the fragment path it answers.
pub type FetchOutcome = (String, Result<String, FetchError>);

// ─── Application state ───────────────────────────────────────────────────────

pub struct SidebarApp {
    pub controller: SidebarController<PanelModel>,
    /// Origin fragment fetches are issued against.
    pub origin: String,
    /// Cloned into each fetch thread. The channel stays open for the app's
    /// lifetime so overlapping fetches all deliver (last-write-wins).
    fetch_tx: mpsc::Sender<FetchOutcome>,
    fetch_rx: mpsc::Receiver<FetchOutcome>,
    /// Fetches started but not yet delivered.
    pub in_flight: usize,
}

impl SidebarApp {
    /// Build the shell on the page at `page_url`. A `sidebar` query
    /// parameter on the page URL opens the panel immediately.
    pub fn new(page_url: &str, origin: String, ctx: &egui::Context) -> Result<Self, InitError> {
        let panel = PanelModel::bind(PanelControls::standard())?;
        let mut controller = SidebarController::new(panel, page_url);
        let deep_link = controller.restore_deep_link();

        let (fetch_tx, fetch_rx) = mpsc::channel();
        let mut app = Self {
            controller,
            origin,
            fetch_tx,
            fetch_rx,
            in_flight: 0,
        };

        if let Some(req) = deep_link {
            app.request_fragment(req, ctx);
        }
        Ok(app)
    }

    /// Placeholder for the embedding page's own content.
    fn draw_page(&self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.heading(self.controller.page_path());
            ui.add_space(8.0);
            ui.label("Host page content. Open the learning center from the toolbar.");
        });
    }
}

impl eframe::App for SidebarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        if self.controller.surface().is_expanded() {
            egui::SidePanel::right("learning-sidebar")
                .default_width(360.0)
                .show(ctx, |ui| {
                    self.draw_panel(ui, ctx);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_page(ui);
        });
    }
}

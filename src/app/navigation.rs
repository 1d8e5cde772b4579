//! Fetch lifecycle for `SidebarApp`.
//!
//! Fragments load fire-and-forget: `request_fragment` spawns a thread and
//! returns immediately, `check_fetch` drains completed results in arrival
//! order each frame. Nothing is cancelled; when loads overlap, the content
//! container reflects whichever resolved last.

use eframe::egui;

use learning_sidebar::net::fetch::fetch_fragment;
use learning_sidebar::sidebar::FragmentRequest;

use super::SidebarApp;

impl SidebarApp {
    /// Start an async fragment fetch without blocking the UI thread.
    pub fn request_fragment(&mut self, req: FragmentRequest, ctx: &egui::Context) {
        let tx = self.fetch_tx.clone();
        let ctx = ctx.clone();
        let origin = self.origin.clone();
        let path = req.path;

        self.in_flight += 1;
        log::debug!("Fetching sidebar fragment {}", path);

        std::thread::spawn(move || {
            let result = fetch_fragment(&origin, &path).map(|r| r.html);
            let _ = tx.send((path, result));
            ctx.request_repaint();
        });
    }

    /// Poll completed fetches and deliver them to the controller.
    pub fn check_fetch(&mut self) {
        while let Ok((path, result)) = self.fetch_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.controller.apply_fetch(&path, result);
        }
    }
}

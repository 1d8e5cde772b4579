//! Toolbar rendering for `SidebarApp`.
//!
//! Draws the back/forward controls, the address bar, and the
//! learning-center toggle.

use eframe::egui;

use learning_sidebar::sidebar::surface::PanelSurface;

use super::SidebarApp;

impl SidebarApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Back / Forward deliver popstate to the controller.
            let can_back = self.controller.history().can_go_back();
            let can_fwd = self.controller.history().can_go_forward();
            if ui
                .add_enabled(
                    can_back,
                    egui::Button::new("\u{25C0}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                if let Some(req) = self.controller.go_back() {
                    self.request_fragment(req, ctx);
                }
            }
            if ui
                .add_enabled(
                    can_fwd,
                    egui::Button::new("\u{25B6}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                if let Some(req) = self.controller.go_forward() {
                    self.request_fragment(req, ctx);
                }
            }

            // Address bar. The widget owns it; the shell only displays it.
            let address = self.controller.address_bar().to_string();
            ui.add_sized(
                [ui.available_width() - 190.0, 24.0],
                egui::Label::new(egui::RichText::new(address).monospace()).truncate(),
            );

            // Learning-center toggle; the marker mirrors aria-expanded.
            let label = if self.controller.surface().aria_expanded() {
                "Learning center \u{25B4}"
            } else {
                "Learning center \u{25BE}"
            };
            if ui.button(label).clicked() {
                if let Some(req) = self.controller.toggle() {
                    self.request_fragment(req, ctx);
                }
            }

            if self.in_flight > 0 {
                ui.spinner();
            }
        });
    }
}

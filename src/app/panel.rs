//! The slide-out learning-center panel.
//!
//! Renders the fetched fragment as egui widgets. Anchors carrying the
//! `data-sidebar` marker load in-panel through the controller; ordinary
//! anchors are real hyperlinks and navigate normally.

use eframe::egui;

use learning_sidebar::fragment::FragmentNode;
use learning_sidebar::sidebar::surface::PanelSurface;

use super::SidebarApp;

impl SidebarApp {
    /// Render the panel body: header with close control, then the fragment.
    pub fn draw_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.heading("Learning center");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2715}").clicked() {
                    self.controller.close();
                }
            });
        });
        ui.separator();

        // First load still in flight: nothing to show yet.
        if self.in_flight > 0 && self.controller.surface().content_is_empty() {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        }

        let mut clicked: Option<String> = None;
        let tree = self.controller.surface().content_tree();
        egui::ScrollArea::vertical().show(ui, |ui| {
            render_fragment_node(ui, tree, &mut clicked);
        });

        if let Some(href) = clicked {
            let req = self.controller.load_content(&href);
            self.request_fragment(req, ctx);
        }
    }
}

// ─── Fragment rendering ──────────────────────────────────────────────────────

/// Recursively render a `FragmentNode` tree using egui widgets.
fn render_fragment_node(ui: &mut egui::Ui, node: &FragmentNode, clicked: &mut Option<String>) {
    match node.tag.as_str() {
        "h1" | "h2" => {
            let text = node.collect_text();
            if !text.is_empty() {
                ui.heading(egui::RichText::new(text).size(20.0).strong());
                ui.add_space(6.0);
            }
        }
        "h3" | "h4" | "h5" | "h6" => {
            let text = node.collect_text();
            if !text.is_empty() {
                ui.heading(egui::RichText::new(text).size(16.0));
                ui.add_space(4.0);
            }
        }
        "p" => {
            if contains_anchor(node) {
                ui.horizontal_wrapped(|ui| render_children(ui, node, clicked));
            } else {
                let text = node.collect_text();
                if !text.is_empty() {
                    ui.label(text);
                }
            }
            ui.add_space(8.0);
        }
        "li" => {
            ui.horizontal_wrapped(|ui| {
                ui.label("  \u{2022}");
                if contains_anchor(node) {
                    render_children(ui, node, clicked);
                } else {
                    ui.label(node.collect_text());
                }
            });
        }
        "a" => {
            let text = node.collect_text();
            if !text.is_empty() {
                if let Some(href) = node.sidebar_href() {
                    // In-panel link: default navigation suppressed, the
                    // controller loads it into the container instead.
                    let rt = egui::RichText::new(&text)
                        .color(egui::Color32::from_rgb(0, 100, 200))
                        .underline();
                    let link = ui.add(egui::Label::new(rt).sense(egui::Sense::click()));
                    if link.clicked() {
                        *clicked = Some(href.to_string());
                    }
                    link.on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(href);
                } else if let Some(href) = node.href() {
                    // Ordinary link: navigates normally.
                    ui.hyperlink_to(text, href);
                } else {
                    ui.label(text);
                }
            }
        }
        "hr" => {
            ui.separator();
        }
        "br" => {
            ui.add_space(4.0);
        }
        "img" => {
            ui.colored_label(egui::Color32::GRAY, "[Image]");
        }
        _ => {
            // Text-only nodes
            if node.tag.is_empty() && !node.text.is_empty() {
                ui.label(node.text.trim());
            }
            // Recurse into children for container elements
            render_children(ui, node, clicked);
        }
    }
}

fn render_children(ui: &mut egui::Ui, node: &FragmentNode, clicked: &mut Option<String>) {
    for child in &node.children {
        render_fragment_node(ui, child, clicked);
    }
}

fn contains_anchor(node: &FragmentNode) -> bool {
    node.tag == "a" || node.children.iter().any(contains_anchor)
}

#![cfg(feature = "egui")]

use std::time::Instant;

use eframe::egui::{self, Align, Align2, Color32, FontId, Layout, RichText, Sense, Vec2};
use eframe::egui::collapsing_header::CollapsingState;

use crate::model::{Category, UtilityGroup};
use crate::view::SheetView;

use super::state::CheatsheetApp;
use super::text::{gradient_stops, highlight_query_job};

const VERSION_LABEL: &str = "v4.0";
const GITHUB_URL: &str = "https://github.com/tailwindlabs/tailwindcss";
const SHORTCUT_HINT: &str = "⌘K";
const CARD_MIN_WIDTH: f32 = 360.0;

pub(super) fn update(app: &mut CheatsheetApp, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    let now = Instant::now();

    // Ctrl/Cmd+K: focus search. Consumed so no widget sees it.
    let (command, k) = ctx.input(|i| (i.modifiers.command, i.key_pressed(egui::Key::K)));
    if k && app.view.handle_shortcut(command, 'k') {
        ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::K));
    }

    app.view.tick(now);
    if let Some(delay) = app.view.pending_delay(now) {
        ctx.request_repaint_after(delay);
    }

    // Visuals are only pushed on change; setting them per frame forces repaints.
    let theme = app.view.theme();
    if app.applied_theme != Some(theme) {
        ctx.set_visuals(if theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        app.applied_theme = Some(theme);
    }

    let mut toggle_theme = false;
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Tailwind CSS").strong());
            ui.label(RichText::new(VERSION_LABEL).weak());
            ui.label(RichText::new("•").weak());
            ui.label(RichText::new("Cheatsheet").strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let icon = if theme.is_dark() { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                    toggle_theme = true;
                }
                ui.hyperlink_to("GitHub", GITHUB_URL);
            });
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("🔍");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.search_text)
                    .hint_text("Search...")
                    .desired_width(320.0),
            );
            if resp.changed() {
                app.view.on_input(app.search_text.clone(), now);
                if let Some(delay) = app.view.pending_delay(now) {
                    ctx.request_repaint_after(delay);
                }
            }
            if app.view.take_focus_request() {
                resp.request_focus();
            }
            ui.label(RichText::new(SHORTCUT_HINT).small().weak());
        });
        ui.add_space(6.0);
    });
    if toggle_theme {
        app.view.toggle_theme();
    }

    // Expansion from a new query is applied once; afterwards the user may
    // toggle groups freely until the next recompute.
    let generation = app.view.recomputations();
    let sync_open = app.synced_generation != Some(generation);
    app.synced_generation = Some(generation);

    let view = &app.view;
    egui::CentralPanel::default().show(ctx, |ui| {
        let categories = &view.visible().categories;
        if categories.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No matching utilities").weak());
            });
            return;
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            let columns = ((ui.available_width() / CARD_MIN_WIDTH) as usize).clamp(1, 3);
            ui.columns(columns, |cols| {
                for (cat_idx, cat) in categories.iter().enumerate() {
                    let ui = &mut cols[cat_idx % columns];
                    category_card(ui, view, cat, cat_idx, sync_open);
                    ui.add_space(12.0);
                }
            });
        });
    });
}

fn category_card(ui: &mut egui::Ui, view: &SheetView, cat: &Category, cat_idx: usize, sync_open: bool) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::ZERO).show(ui, |ui| {
        ui.set_width(ui.available_width());
        gradient_header(ui, cat);
        for (group_idx, g) in cat.groups.iter().enumerate() {
            let id = ui.make_persistent_id(("utility-group", cat_idx, group_idx, &g.title));
            group_panel(ui, view, g, id, sync_open);
            ui.separator();
        }
    });
}

fn gradient_header(ui: &mut egui::Ui, cat: &Category) {
    let (from, to) = gradient_stops(&cat.color_tag);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 36.0), Sense::hover());
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), to);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), from);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    let painter = ui.painter();
    painter.add(egui::Shape::mesh(mesh));
    painter.text(
        rect.left_center() + Vec2::new(12.0, 0.0),
        Align2::LEFT_CENTER,
        &cat.title,
        FontId::proportional(17.0),
        Color32::WHITE,
    );
}

fn group_panel(ui: &mut egui::Ui, view: &SheetView, g: &UtilityGroup, id: egui::Id, sync_open: bool) {
    let dark = view.theme().is_dark();
    let query = view.applied_query().as_str();
    let title_color = if dark {
        Color32::from_gray(209)
    } else {
        Color32::from_gray(55)
    };
    let class_color = if dark {
        Color32::from_rgb(96, 165, 250)
    } else {
        Color32::from_rgb(37, 99, 235)
    };

    let mut state = CollapsingState::load_with_default_open(ui.ctx(), id, false);
    if sync_open {
        state.set_open(view.is_expanded(g));
    }
    state
        .show_header(ui, |ui| {
            ui.label(highlight_query_job(&g.title, query, title_color));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.hyperlink_to(RichText::new("Docs ↗").small(), view.docs_url(g));
            });
        })
        .body(|ui| {
            if let Some(d) = &g.description {
                ui.label(RichText::new(d).weak());
                ui.add_space(4.0);
            }
            egui::Grid::new(id.with("entries"))
                .num_columns(2)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for e in &g.entries {
                        ui.label(highlight_query_job(&e.name, query, class_color));
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(&e.css).monospace().size(12.0).weak());
                            if let Some(v) = &e.annotation {
                                ui.label(RichText::new(v).small().weak());
                            }
                        });
                        ui.end_row();
                    }
                });
        });
}

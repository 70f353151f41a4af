//! Toolbar and tile grid rendering

use super::App;
use crate::theme;
use crate::ui::components::labeled_checkbox;
use crate::ui::tile::TileConfig;
use eframe::egui;
use std::collections::HashSet;

impl App {
    pub(crate) fn render_toolbar(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal_centered(|ui| {
            if labeled_checkbox(ui, &mut self.allows_multiple_selection, "Multiple selection") {
                self.grid
                    .set_allows_multiple_selection(self.allows_multiple_selection);
            }

            if labeled_checkbox(ui, &mut self.green_cover, "Green cover") {
                self.grid.set_config(self.cover_config());
            }

            ui.add_space(theme::SPACING_LG);

            let has_selection = !self.grid.selected_indices().is_empty();
            if ui
                .add_enabled(has_selection, theme::button("Clear selection"))
                .clicked()
            {
                self.grid.clear_selection(now);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} of {} selected",
                        self.grid.selected_indices().len(),
                        self.grid.item_count()
                    ))
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
                );
            });
        });
    }

    /// Configured tile settings, with the green preset's cover when toggled on
    fn cover_config(&self) -> TileConfig {
        let configured = self.settings.tile.clone();
        if self.green_cover {
            TileConfig {
                cover_color: TileConfig::green().cover_color,
                ..configured
            }
        } else {
            configured
        }
    }

    pub(crate) fn render_grid_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: f64) {
        let tile_size = self.settings.tile_size();
        let mut drawn = HashSet::new();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .id_salt("tile_grid_scroll")
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);

                    for index in 0..self.grid.item_count() {
                        let (rect, response) =
                            ui.allocate_exact_size(tile_size, egui::Sense::click());
                        if !ui.is_rect_visible(rect) {
                            continue;
                        }
                        drawn.insert(index);

                        // Touch-down arrives on press; the toggle follows on release
                        let pressed = response.contains_pointer()
                            && ui.input(|i| i.pointer.primary_pressed());
                        if pressed {
                            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                                self.grid.touch_down(index, (pos - rect.min).to_pos2());
                            }
                        }
                        if response.clicked() {
                            self.grid.toggle(index, now);
                        }
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }

                        self.paint_tile(ui, ctx, index, rect, now);
                    }
                });
            });

        // Tiles that scrolled out are reset; selection survives in the grid
        for index in self.visible_tiles.difference(&drawn) {
            self.grid.recycle(*index);
        }
        self.visible_tiles = drawn;
    }

    fn paint_tile(
        &mut self,
        ui: &egui::Ui,
        ctx: &egui::Context,
        index: usize,
        rect: egui::Rect,
        now: f64,
    ) {
        let needs_texture = self
            .grid
            .tile(index)
            .is_none_or(|tile| tile.image().is_none());
        let texture = needs_texture.then(|| self.load_tile_texture(ctx, index));

        let local_bounds = egui::Rect::from_min_size(egui::Pos2::ZERO, rect.size());
        let Some(tile) = self.grid.layout(index, local_bounds, now) else {
            return;
        };
        if texture.is_some() {
            tile.set_image(texture);
        }
        if tile.take_needs_redraw() {
            ctx.request_repaint();
        }

        let painter = ui.painter_at(rect);
        let origin = rect.min.to_vec2();
        painter.rect_filled(rect, 0.0, theme::BG_ELEVATED);

        if let Some(image) = tile.image() {
            let content = tile.content_rect(now).translate(origin);
            let uv = aspect_fill_uv(image.size_vec2(), content.size());
            painter.image(image.id(), content, uv, egui::Color32::WHITE);
        }

        painter.add(tile.mask(now).to_shape(rect.min, tile.cover_fill()));

        if tile.is_selected() {
            ui.painter().rect_stroke(
                rect,
                theme::RADIUS_DEFAULT,
                egui::Stroke::new(theme::STROKE_DEFAULT, theme::TILE_BORDER_SELECTED),
                egui::StrokeKind::Outside,
            );
        }

        painter.text(
            rect.left_bottom() + egui::vec2(theme::SPACING_MD, -theme::SPACING_MD),
            egui::Align2::LEFT_BOTTOM,
            format!("#{}", index + 1),
            egui::FontId::proportional(theme::FONT_CAPTION),
            theme::TEXT_PRIMARY,
        );
    }
}

/// UV window that crops the image to fill `target` without distortion.
fn aspect_fill_uv(image: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let w = target_aspect / image_aspect;
        egui::Rect::from_min_max(egui::pos2((1.0 - w) / 2.0, 0.0), egui::pos2((1.0 + w) / 2.0, 1.0))
    } else {
        let h = image_aspect / target_aspect;
        egui::Rect::from_min_max(egui::pos2(0.0, (1.0 - h) / 2.0), egui::pos2(1.0, (1.0 + h) / 2.0))
    }
}

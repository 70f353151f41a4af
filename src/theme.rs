//! Centralized theme constants for Ripple Tiles
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Tile cover
// =============================================================================
pub const COVER_GREEN: Color32 = Color32::from_rgb(0x00, 0xc8, 0x53); // green-a700
pub const TILE_BORDER_SELECTED: Color32 = Color32::from_rgba_premultiplied(0x1F, 0x95, 0x86, 0xB3); // teal-400 70% alpha

/// Gradient stops for tiles without an image
pub const PLACEHOLDER_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x38, 0xbd, 0xf8), // sky-400
    Color32::from_rgb(0x34, 0xd3, 0x99), // emerald-400
    Color32::from_rgb(0xfb, 0xbf, 0x24), // amber-400
    Color32::from_rgb(0xfb, 0x92, 0x3c), // orange-400
    Color32::from_rgb(0xf4, 0x72, 0xb6), // pink-400
    Color32::from_rgb(0x81, 0x8c, 0xf8), // indigo-400
];

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const CHECKBOX_SIZE: f32 = 18.0;
pub const TOOLBAR_HEIGHT: f32 = 44.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                weak_bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

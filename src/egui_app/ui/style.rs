use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Colors used across the widget.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_window: Color32,
    pub bg_surface: Color32,
    pub bg_input: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub on_brand: Color32,
    pub brand: Color32,
    pub danger: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_window: Color32::from_rgb(18, 18, 20),
        bg_surface: Color32::from_rgb(30, 30, 33),
        bg_input: Color32::from_rgb(41, 41, 46),
        outline: Color32::from_rgb(52, 52, 58),
        text_primary: Color32::from_rgb(225, 225, 230),
        text_secondary: Color32::from_rgb(142, 142, 150),
        on_brand: Color32::from_rgb(250, 250, 252),
        brand: Color32::from_rgb(130, 87, 229),
        danger: Color32::from_rgb(226, 110, 110),
        success: Color32::from_rgb(102, 176, 136),
    }
}

/// Apply the widget palette to egui's dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_window;
    visuals.panel_fill = palette.bg_window;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.brand;
    visuals.extreme_bg_color = palette.bg_input;
    visuals.faint_bg_color = palette.bg_surface;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.danger;
    visuals.selection.bg_fill = palette.brand.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, palette.brand);
    visuals.widgets.noninteractive.bg_fill = palette.bg_surface;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    style_widget(&mut visuals.widgets.inactive, &palette);
    style_widget(&mut visuals.widgets.hovered, &palette);
    style_widget(&mut visuals.widgets.active, &palette);
    style_widget(&mut visuals.widgets.open, &palette);
    visuals.window_corner_radius = CornerRadius::same(6);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn style_widget(vis: &mut WidgetVisuals, palette: &Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_surface;
    vis.weak_bg_fill = palette.bg_surface;
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

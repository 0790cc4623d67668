use eframe::egui::{
    self, CentralPanel, Color32, FontId, Painter, PointerButton, Pos2, Rect, Stroke,
    ViewportBuilder, ViewportCommand, ViewportId, vec2,
};

use crate::clock::display::ClockDisplay;

const BACKGROUND: Color32 = Color32::BLACK;
const MARGIN: f32 = 16.0;
const ATLAS_SHARE: f32 = 0.5;
const BOLD_SPREAD: f32 = 0.012;
const INITIAL_SIZE: [f32; 2] = [960.0, 320.0];
const SNOW: Color32 = Color32::from_rgb(244, 248, 255);
const COAL: Color32 = Color32::from_rgb(24, 24, 28);
const CARROT: Color32 = Color32::from_rgb(255, 140, 40);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayEvent {
    Idle,
    CloseRequested,
}

pub fn viewport_id(serial: u64) -> ViewportId {
    ViewportId::from_hash_of(("clock_display", serial))
}

pub fn show_display(ctx: &egui::Context, display: &mut ClockDisplay) -> DisplayEvent {
    let builder = ViewportBuilder::default()
        .with_title(display.kind().title())
        .with_inner_size(INITIAL_SIZE);
    ctx.show_viewport_immediate(viewport_id(display.serial()), builder, |ctx, _class| {
        draw_display(ctx, display)
    })
}

fn draw_display(ctx: &egui::Context, display: &mut ClockDisplay) -> DisplayEvent {
    if ctx.input(|i| i.pointer.button_double_clicked(PointerButton::Primary)) {
        display.toggle_overlay();
    }

    let [r, g, b] = display.face().color.rgb();
    let color = Color32::from_rgb(r, g, b);
    let layout_pt = layout_font_size(
        display.font_size_pt(),
        ctx.input(|i| i.max_texture_side),
        ctx.pixels_per_point(),
    );
    let font = FontId::proportional(layout_pt);
    let spread = layout_pt * BOLD_SPREAD;

    CentralPanel::default()
        .frame(egui::Frame::default().fill(BACKGROUND))
        .show(ctx, |ui| {
            let painter = ui.painter();
            let galley = painter.layout_no_wrap(display.face().text.clone(), font, color);
            if display.take_fit_request() {
                let size = galley.size() + vec2((MARGIN + spread) * 2.0, MARGIN * 2.0);
                ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
            }

            let area = ui.max_rect();
            let origin = area.center() - galley.size() / 2.0;
            for dx in [-spread, 0.0, spread] {
                painter.galley(origin + vec2(dx, 0.0), galley.clone(), color);
            }

            if display.overlay_visible() {
                draw_snowman(painter, area);
            }
        });

    if ctx.input(|i| i.viewport().close_requested()) {
        DisplayEvent::CloseRequested
    } else {
        DisplayEvent::Idle
    }
}

// Glyphs larger than the font atlas panic in epaint.
fn layout_font_size(requested: f32, max_texture_side: usize, pixels_per_point: f32) -> f32 {
    let limit = max_texture_side as f32 / pixels_per_point.max(1.0) * ATLAS_SHARE;
    requested.min(limit)
}

fn draw_snowman(painter: &Painter, area: Rect) {
    let unit = (area.height() / 7.0).max(6.0);
    let base = Pos2::new(area.right() - unit * 2.0, area.bottom() - unit * 1.4);
    let middle = base - vec2(0.0, unit * 1.9);
    let head = middle - vec2(0.0, unit * 1.4);
    let outline = Stroke::new(unit * 0.06, Color32::from_gray(180));

    let body = [(base, unit * 1.2), (middle, unit * 0.85), (head, unit * 0.6)];
    for (center, radius) in body {
        painter.circle_filled(center, radius, SNOW);
        painter.circle_stroke(center, radius, outline);
    }

    for offset in [-0.22, 0.22] {
        painter.circle_filled(head + vec2(unit * offset, -unit * 0.12), unit * 0.07, COAL);
    }
    painter.line_segment(
        [
            head + vec2(0.0, unit * 0.05),
            head + vec2(unit * 0.45, unit * 0.12),
        ],
        Stroke::new(unit * 0.1, CARROT),
    );
    for step in [-0.4, 0.0, 0.4] {
        painter.circle_filled(middle + vec2(0.0, unit * step), unit * 0.08, COAL);
    }
}

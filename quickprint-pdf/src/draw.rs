//! Low-level drawing helpers over a printpdf layer.

use printpdf::{Color, IndirectFontRef, Line, Mm, PdfLayerReference, Point, Rgb};

/// Document palette, mirrored from the shop's screen theme.
pub(crate) mod palette {
    /// Indigo accent used for the shop identity and table headers
    pub const ACCENT: (f32, f32, f32) = (67.0, 56.0, 202.0);
    /// Muted gray for secondary text
    pub const MUTED: (f32, f32, f32) = (100.0, 100.0, 100.0);
    /// Green for amounts already settled
    pub const PAID: (f32, f32, f32) = (22.0, 163.0, 74.0);
    /// Warning red for outstanding balances
    pub const DUE: (f32, f32, f32) = (220.0, 38.0, 38.0);
    pub const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
    /// Light gray rules
    pub const RULE: (f32, f32, f32) = (230.0, 230.0, 230.0);
}

pub(crate) fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r / 255.0, g / 255.0, b / 255.0, None))
}

/// Set the fill color used for subsequent text.
pub(crate) fn set_color(layer: &PdfLayerReference, color: (f32, f32, f32)) {
    layer.set_fill_color(rgb(color));
}

/// Place a single line of text at (x, y) in millimetres.
pub(crate) fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    x: f32,
    y: f32,
) {
    layer.use_text(content, size, Mm(x), Mm(y), font);
}

/// Approximate rendered width of Helvetica text in millimetres.
///
/// The builtin fonts expose no metrics, so this uses an average glyph
/// width of 0.5em. Good enough to centre headings and footers.
fn approx_width(content: &str, size: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    content.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

/// Place text horizontally centred around `center_x`.
pub(crate) fn text_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    center_x: f32,
    y: f32,
) {
    let x = (center_x - approx_width(content, size) / 2.0).max(0.0);
    text(layer, font, content, size, x, y);
}

/// Horizontal rule from x1 to x2 at height y.
pub(crate) fn hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32) {
    layer.set_outline_color(rgb(palette::RULE));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
}

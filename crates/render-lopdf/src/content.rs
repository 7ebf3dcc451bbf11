use lopdf::Object;
use lopdf::content::{Content, Operation};
use preflight_style::{StandardFont, encode_win_ansi};
use preflight_types::{Color, Point, Rect};

/// Resource name under which `font` is registered in every page.
pub fn font_resource_name(font: StandardFont) -> String {
    let index = StandardFont::ALL
        .iter()
        .position(|f| *f == font)
        .unwrap_or_default();
    format!("F{}", index + 1)
}

/// Encodes text for a WinAnsi Type1 font. Characters without a cp1252
/// code become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    encode_win_ansi(s)
}

#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font: Option<(StandardFont, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Content operations of one page.
///
/// Redundant font, colour and line width changes are skipped.
#[derive(Default)]
pub struct PageContent {
    operations: Vec<Operation>,
    state: GraphicsState,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn into_content(self) -> Content {
        Content {
            operations: self.operations,
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(line_width) {
            self.push("w", vec![line_width.into()]);
            self.state.line_width = Some(line_width);
        }
    }

    pub fn text(&mut self, x: f32, y: f32, text: &str, font: StandardFont, size: f32) {
        if text.is_empty() {
            return;
        }
        self.set_fill_color(Color::black());
        self.push("BT", vec![]);
        if self.state.font != Some((font, size)) {
            self.push("Tf", vec![font_resource_name(font).as_str().into(), size.into()]);
            self.state.font = Some((font, size));
        }
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(to_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill_color(color);
        self.push("re", vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()]);
        self.push("f", vec![]);
    }

    pub fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        self.set_stroke(color, line_width);
        self.push("re", vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()]);
        self.push("S", vec![]);
    }

    pub fn line(&mut self, from: Point, to: Point, line_width: f32, color: Color) {
        self.set_stroke(color, line_width);
        self.push("m", vec![from.x.into(), from.y.into()]);
        self.push("l", vec![to.x.into(), to.y.into()]);
        self.push("S", vec![]);
    }
}

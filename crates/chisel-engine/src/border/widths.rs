use crate::coords::Vec2;

use super::BorderStyle;

/// Style-dependent width rule used by the corner builder.
///
/// Given a raw side width, returns the width of the first stripe the style
/// draws: for `double` the outer line, for `groove`/`ridge` the outer half.
/// Plain styles return the raw width.
pub trait WidthAdjust {
    fn adjust(&self, style: BorderStyle, width: f32) -> f32;
}

/// Width rule matching CSS backgrounds level 3.
///
/// - `double`: each line is a third of the width, rounded to whole pixels,
///   at least one pixel
/// - `groove`/`ridge`: half the width, rounded to whole pixels
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CssWidths;

impl WidthAdjust for CssWidths {
    fn adjust(&self, style: BorderStyle, width: f32) -> f32 {
        match style {
            BorderStyle::Double => (0.5 + width / 3.0).floor().max(1.0),
            BorderStyle::Groove | BorderStyle::Ridge => (0.5 + width * 0.5).floor(),
            _ => width,
        }
    }
}

/// Adjusted widths for a corner's two sides plus their complement.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct StyledWidths {
    pub raw: Vec2,
    pub adjusted: Vec2,
    /// `raw - adjusted`.
    pub complement: Vec2,
}

impl StyledWidths {
    pub fn new<W: WidthAdjust + ?Sized>(rule: &W, style: BorderStyle, raw: Vec2) -> Self {
        let adjusted = Vec2::new(rule.adjust(style, raw.x), rule.adjust(style, raw.y));
        Self { raw, adjusted, complement: raw - adjusted }
    }
}

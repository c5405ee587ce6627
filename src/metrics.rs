use crate::{FontRef, LabelError, Pt};

/// Vertical extent of a font at a given size. Both values are distances from the baseline, so
/// both are positive for any sensible font.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: Pt,
    pub descent: Pt,
}

impl VerticalMetrics {
    /// How far apart consecutive baselines sit. Never less than one unit, so that degenerate
    /// fonts still stack lines.
    pub fn line_height(&self) -> Pt {
        (self.ascent + self.descent).max(Pt(1.0))
    }
}

/// Source of glyph metrics for text layout. Implementations must be deterministic: the same
/// font, size and text always measure the same.
///
/// Sizes are whole pixels, matching the integer font sizes the fitter searches over.
pub trait FontMetrics {
    /// The horizontal advance of `text` set on a single line
    fn text_width(&self, font: &FontRef, size: u32, text: &str) -> Result<Pt, LabelError>;

    /// The ascent and descent of `font` at `size`
    fn vertical_metrics(&self, font: &FontRef, size: u32) -> Result<VerticalMetrics, LabelError>;
}

use crate::{FontMetrics, FontRef, LabelError, Pt, VerticalMetrics};

/// Monospaced stand-in for real font metrics: every character advances by `advance` em, the
/// ascent and descent are fixed fractions of the size. With the defaults a line is exactly
/// `size` tall and every character is `size / 2` wide.
pub(crate) struct FixedAdvance {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
    /// characters drawn at double width, for exercising unsplittable glyphs
    pub wide: Vec<char>,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        FixedAdvance {
            advance: 0.5,
            ascent: 0.75,
            descent: 0.25,
            wide: Vec::new(),
        }
    }
}

impl FontMetrics for FixedAdvance {
    fn text_width(&self, _font: &FontRef, size: u32, text: &str) -> Result<Pt, LabelError> {
        let ems: f32 = text
            .chars()
            .map(|ch| {
                if self.wide.contains(&ch) {
                    self.advance * 2.0
                } else {
                    self.advance
                }
            })
            .sum();
        Ok(Pt(ems * size as f32))
    }

    fn vertical_metrics(&self, _font: &FontRef, size: u32) -> Result<VerticalMetrics, LabelError> {
        Ok(VerticalMetrics {
            ascent: Pt(self.ascent * size as f32),
            descent: Pt(self.descent * size as f32),
        })
    }
}

pub(crate) fn test_font() -> FontRef {
    FontRef::new("Test Sans", "fonts/test-sans.ttf")
}

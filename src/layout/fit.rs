use super::text::{enforce_width, wrap_by_words, SpanFont};
use crate::font::FontRef;
use crate::metrics::FontMetrics;
use crate::units::Pt;
use crate::LabelError;

/// A piece of text and the box it has to be fitted into
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub font: FontRef,
    pub max_width: Pt,
    pub max_height: Pt,
}

/// The range of font sizes [fit_text] searches, in whole pixels. Both ends are inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FitOptions {
    pub max_font_size: u32,
    pub min_font_size: u32,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            max_font_size: 200,
            min_font_size: 10,
        }
    }
}

impl FitOptions {
    /// The largest and smallest sizes to try. Bounds given the wrong way around are swapped,
    /// and nothing smaller than 1px is ever tried.
    fn bounds(&self) -> (u32, u32) {
        let hi = self.max_font_size.max(self.min_font_size).max(1);
        let lo = self.max_font_size.min(self.min_font_size).max(1);
        (hi, lo)
    }
}

/// Text broken into lines at a chosen font size
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub font_size: u32,
    pub lines: Vec<String>,
    pub line_height: Pt,
}

impl FitResult {
    /// Height of all lines stacked
    pub fn total_height(&self) -> Pt {
        self.line_height * self.lines.len() as f32
    }
}

/// Finds the largest font size at which the block's text, wrapped to its width, also fits its
/// height.
///
/// Sizes are tried from [FitOptions::max_font_size] downwards and the first that fits wins.
/// At each size the text is wrapped at word boundaries, then any line still too wide is broken
/// between characters, so lines only overflow horizontally when a single glyph is wider than
/// the box.
///
/// Text that doesn't fit at any size is not an error: the result at
/// [FitOptions::min_font_size] is returned even though it overflows vertically. Only failures
/// to obtain metrics are reported.
pub fn fit_text<M: FontMetrics + ?Sized>(
    metrics: &M,
    block: &TextBlock,
    options: FitOptions,
) -> Result<FitResult, LabelError> {
    let (largest, smallest) = options.bounds();
    let mut size = largest;

    loop {
        let span = SpanFont::new(&block.font, size);
        let line_height = metrics.vertical_metrics(&block.font, size)?.line_height();

        let lines = wrap_by_words(metrics, span, &block.text, block.max_width)?;
        let lines = enforce_width(metrics, span, lines, block.max_width)?;

        let fit = FitResult {
            font_size: size,
            lines,
            line_height,
        };

        if fit.total_height() <= block.max_height {
            tracing::debug!(
                size,
                lines = fit.lines.len(),
                text = %block.text,
                "text fits"
            );
            return Ok(fit);
        }

        if size == smallest {
            tracing::warn!(
                size,
                height = %fit.total_height(),
                max_height = %block.max_height,
                text = %block.text,
                "text overflows its box even at the smallest font size"
            );
            return Ok(fit);
        }

        size -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_font, FixedAdvance};

    fn block(text: &str, max_width: f32, max_height: f32) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            font: test_font(),
            max_width: Pt(max_width),
            max_height: Pt(max_height),
        }
    }

    #[test]
    fn short_word_at_capped_size() {
        let metrics = FixedAdvance::default();
        let options = FitOptions {
            max_font_size: 20,
            min_font_size: 10,
        };

        let fit = fit_text(&metrics, &block("Hola", 200.0, 100.0), options).unwrap();
        assert_eq!(fit.font_size, 20);
        assert_eq!(fit.lines, vec!["Hola"]);
        assert_eq!(fit.line_height, Pt(20.0));
    }

    #[test]
    fn largest_fitting_size_wins() {
        let metrics = FixedAdvance::default();

        // "Hola" is 2*size wide and size tall, so 100 is the largest single-line fit; above
        // that it splits over two lines and is too tall
        let fit = fit_text(&metrics, &block("Hola", 200.0, 100.0), FitOptions::default()).unwrap();
        assert_eq!(fit.font_size, 100);
        assert_eq!(fit.lines, vec!["Hola"]);
    }

    #[test]
    fn never_smaller_than_necessary() {
        let metrics = FixedAdvance::default();
        let block = block("un gato negro muy grande", 300.0, 150.0);
        let fit = fit_text(&metrics, &block, FitOptions::default()).unwrap();

        assert!(fit.total_height() <= block.max_height);
        // the next size up must fail to fit
        let bigger = FitOptions {
            max_font_size: fit.font_size + 1,
            min_font_size: fit.font_size + 1,
        };
        let above = fit_text(&metrics, &block, bigger).unwrap();
        assert!(above.total_height() > block.max_height);
    }

    #[test]
    fn wraps_words_before_shrinking() {
        let metrics = FixedAdvance::default();
        let fit = fit_text(&metrics, &block("buenos dias", 120.0, 80.0), FitOptions::default())
            .unwrap();
        // at 40 each word is 120 wide and two lines are 80 tall
        assert_eq!(fit.font_size, 40);
        assert_eq!(fit.lines, vec!["buenos", "dias"]);
    }

    #[test]
    fn unfittable_text_degrades_to_the_minimum_size() {
        let metrics = FixedAdvance::default();
        let options = FitOptions {
            max_font_size: 20,
            min_font_size: 10,
        };
        let text = "supercalifragilisticexpialidocious";

        let fit = fit_text(&metrics, &block(text, 50.0, 20.0), options).unwrap();
        assert_eq!(fit.font_size, 10);
        // ten 5 wide characters per 50 wide line
        assert_eq!(fit.lines.len(), 4);
        assert_eq!(fit.lines.concat(), text);
        assert!(fit.total_height() > Pt(20.0));
    }

    #[test]
    fn fitting_is_deterministic() {
        let metrics = FixedAdvance::default();
        let block = block("el perro come la comida", 180.0, 90.0);
        let a = fit_text(&metrics, &block, FitOptions::default()).unwrap();
        let b = fit_text(&metrics, &block, FitOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let metrics = FixedAdvance::default();
        let options = FitOptions {
            max_font_size: 10,
            min_font_size: 30,
        };
        let fit = fit_text(&metrics, &block("Hola", 1000.0, 1000.0), options).unwrap();
        assert_eq!(fit.font_size, 30);
    }

    #[test]
    fn empty_text_fits_as_one_empty_line() {
        let metrics = FixedAdvance::default();
        let fit = fit_text(&metrics, &block("   ", 100.0, 100.0), FitOptions::default()).unwrap();
        assert_eq!(fit.lines, vec![""]);
        assert_eq!(fit.font_size, 100);
    }
}

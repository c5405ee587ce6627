use super::fit::{fit_text, FitOptions, FitResult, TextBlock};
use super::margins::Margins;
use crate::font::FontRef;
use crate::metrics::FontMetrics;
use crate::rect::Rect;
use crate::units::Pt;
use crate::LabelError;
use serde::Deserialize;

/// Canvas geometry shared by every label in a run
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Width and height of the square canvas
    pub canvas_size: u32,
    /// Space kept clear on every side of each zone
    pub margin: f32,
    pub separator_height: f32,
    /// Separator width as a fraction of the canvas size
    pub separator_ratio: f32,
    /// Largest font size tried, in whole pixels
    pub max_font_size: u32,
    /// Smallest font size tried; text still too big at this size overflows
    pub min_font_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            canvas_size: 512,
            margin: 10.0,
            separator_height: 8.0,
            separator_ratio: 0.4,
            max_font_size: FitOptions::default().max_font_size,
            min_font_size: FitOptions::default().min_font_size,
        }
    }
}

impl LayoutConfig {
    /// The font size range each block is fitted over
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            max_font_size: self.max_font_size,
            min_font_size: self.min_font_size,
        }
    }
}

/// The fonts a label may be set in. The alternate font, when there is one, is used for target
/// text that the primary font may not cover (anything beyond 7-bit ASCII).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFonts {
    pub primary: FontRef,
    pub alternate: Option<FontRef>,
}

impl LabelFonts {
    pub fn new(primary: FontRef) -> LabelFonts {
        LabelFonts {
            primary,
            alternate: None,
        }
    }

    pub fn with_alternate(mut self, alternate: FontRef) -> LabelFonts {
        self.alternate = Some(alternate);
        self
    }

    /// The font to set target-language text in
    pub fn for_target(&self, text: &str) -> &FontRef {
        match &self.alternate {
            Some(alternate) if !text.is_ascii() => alternate,
            _ => &self.primary,
        }
    }
}

/// A fitted block of text placed within its zone
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    pub zone: Rect,
    pub fit: FitResult,
    /// Horizontal centre of every line
    pub anchor_x: Pt,
    /// Baseline of the first line
    pub anchor_y: Pt,
    pub font: FontRef,
}

/// One line of a placed block, anchored at the middle of its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine<'a> {
    pub text: &'a str,
    pub x: Pt,
    pub y: Pt,
}

impl PlacedBlock {
    /// The block's lines with their anchor points, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = PositionedLine<'_>> {
        self.fit
            .lines
            .iter()
            .enumerate()
            .map(move |(i, text)| PositionedLine {
                text: text.as_str(),
                x: self.anchor_x,
                y: self.anchor_y + self.fit.line_height * i as f32,
            })
    }
}

/// Everything the renderer needs to draw one label
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub canvas_size: Pt,
    /// Ordered top to bottom
    pub blocks: Vec<PlacedBlock>,
    pub separator: Option<Rect>,
}

/// Whether two texts would read the same on a label: whitespace is ignored and case is folded.
pub fn texts_equivalent(a: &str, b: &str) -> bool {
    let normalize = |s: &str| -> String {
        s.chars()
            .filter(|ch| !ch.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    };
    normalize(a) == normalize(b)
}

/// Fits `text` into `zone` less the margins, then centres the block vertically in the whole
/// zone.
fn place_block<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    font: &FontRef,
    zone: Rect,
    anchor_x: Pt,
    config: &LayoutConfig,
) -> Result<PlacedBlock, LabelError> {
    let bounds = zone.inset(&Margins::all(Pt(config.margin)));
    let block = TextBlock {
        text: text.to_string(),
        font: font.clone(),
        max_width: bounds.width,
        max_height: bounds.height,
    };
    let fit = fit_text(metrics, &block, config.fit_options())?;

    let ascent = metrics.vertical_metrics(font, fit.font_size)?.ascent;
    let top_of_block = zone.y + (zone.height - fit.total_height()) / 2.0;

    Ok(PlacedBlock {
        zone,
        anchor_x,
        anchor_y: top_of_block + ascent,
        font: font.clone(),
        fit,
    })
}

/// Lays out a label for a pair of texts.
///
/// If the texts are equivalent (see [texts_equivalent]) the source text alone fills the canvas.
/// Otherwise the canvas is split into a top half for the source text and a bottom half for the
/// target text, with a separator bar straddling the split. Each text is fitted to its own zone,
/// and the target text is set in the alternate font if it needs it.
pub fn compose<M: FontMetrics + ?Sized>(
    metrics: &M,
    source: &str,
    target: &str,
    fonts: &LabelFonts,
    config: &LayoutConfig,
) -> Result<LayoutPlan, LabelError> {
    let canvas_size = Pt::from(config.canvas_size);
    let anchor_x = canvas_size / 2.0;

    if texts_equivalent(source, target) {
        let block = place_block(
            metrics,
            source,
            &fonts.primary,
            Rect::square(canvas_size),
            anchor_x,
            config,
        )?;
        return Ok(LayoutPlan {
            canvas_size,
            blocks: vec![block],
            separator: None,
        });
    }

    // zones split on a whole pixel, like the canvas itself
    let boundary = Pt::from(config.canvas_size / 2);
    let top_zone = Rect::new(Pt(0.0), Pt(0.0), canvas_size, boundary);
    let bottom_zone = Rect::new(Pt(0.0), boundary, canvas_size, boundary);

    let top = place_block(
        metrics,
        source,
        &fonts.primary,
        top_zone,
        anchor_x,
        config,
    )?;
    let bottom = place_block(
        metrics,
        target,
        fonts.for_target(target),
        bottom_zone,
        anchor_x,
        config,
    )?;

    let separator_height = Pt(config.separator_height);
    let separator_width = (canvas_size * config.separator_ratio).floor();
    let separator = Rect {
        x: (canvas_size - separator_width) / 2.0,
        y: boundary - separator_height / 2.0,
        width: separator_width,
        height: separator_height,
    };

    Ok(LayoutPlan {
        canvas_size,
        blocks: vec![top, bottom],
        separator: Some(separator),
    })
}

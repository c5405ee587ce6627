use crate::font::FontRef;
use crate::metrics::FontMetrics;
use crate::units::Pt;
use crate::LabelError;

/// A font at a particular whole-pixel size, i.e. everything needed to measure a run of text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpanFont<'a> {
    pub font: &'a FontRef,
    pub size: u32,
}

impl<'a> SpanFont<'a> {
    pub fn new(font: &'a FontRef, size: u32) -> SpanFont<'a> {
        SpanFont { font, size }
    }

    /// Calculate the width of a given string of text in this font
    pub fn width_of_text<M: FontMetrics + ?Sized>(
        &self,
        metrics: &M,
        text: &str,
    ) -> Result<Pt, LabelError> {
        metrics.text_width(self.font, self.size, text)
    }
}

/// Greedily packs tokens into lines no wider than `max_width`. `joiner` goes between tokens
/// sharing a line. A token that doesn't fit even on a line of its own is emitted alone, and
/// the line after it starts fresh.
fn pack<'t, M, I>(
    metrics: &M,
    span: SpanFont<'_>,
    tokens: I,
    joiner: &str,
    max_width: Pt,
) -> Result<Vec<String>, LabelError>
where
    M: FontMetrics + ?Sized,
    I: IntoIterator<Item = &'t str>,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for token in tokens {
        let candidate = if current.is_empty() {
            token.to_string()
        } else {
            format!("{current}{joiner}{token}")
        };

        if span.width_of_text(metrics, &candidate)? <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if span.width_of_text(metrics, token)? <= max_width {
            current = token.to_string();
        } else {
            // oversized on its own, leave it for the caller to deal with
            lines.push(token.to_string());
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    Ok(lines)
}

/// Wraps text at word boundaries so that each line fits within `max_width`.
///
/// Words are separated by runs of whitespace, and leading and trailing whitespace is dropped;
/// words sharing a line are joined by a single space. A word that is wider than `max_width`
/// by itself is still placed on its own line, un-split: see [enforce_width] for breaking those
/// apart. Text without any words yields a single empty line.
pub fn wrap_by_words<M: FontMetrics + ?Sized>(
    metrics: &M,
    span: SpanFont<'_>,
    text: &str,
    max_width: Pt,
) -> Result<Vec<String>, LabelError> {
    pack(metrics, span, text.split_whitespace(), " ", max_width)
}

/// Wraps text character-by-character, splitting at the exact point a line would overflow.
/// i.e. if the input were "asdf asdf" and the line only fit 6 characters wide, this will
/// split the text into "asdf a" and "sdf".
///
/// Every line fits within `max_width` except where a single character is wider than
/// `max_width`; such a character gets a line to itself.
pub fn wrap_by_chars<M: FontMetrics + ?Sized>(
    metrics: &M,
    span: SpanFont<'_>,
    text: &str,
    max_width: Pt,
) -> Result<Vec<String>, LabelError> {
    let chars: Vec<&str> = text
        .char_indices()
        .map(|(i, ch)| &text[i..i + ch.len_utf8()])
        .collect();
    pack(metrics, span, chars, "", max_width)
}

/// Breaks any line that is wider than `max_width` into character-wrapped lines, leaving the
/// lines that already fit untouched and in order.
pub fn enforce_width<M: FontMetrics + ?Sized>(
    metrics: &M,
    span: SpanFont<'_>,
    lines: Vec<String>,
    max_width: Pt,
) -> Result<Vec<String>, LabelError> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if span.width_of_text(metrics, &line)? > max_width {
            out.extend(wrap_by_chars(metrics, span, &line, max_width)?);
        } else {
            out.push(line);
        }
    }
    Ok(out)
}

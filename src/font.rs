use crate::{
    metrics::{FontMetrics, VerticalMetrics},
    LabelError, Pt,
};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

/// Identifies a font both for metrics queries and for styling the generated label. The family
/// is what the SVG refers to, the path is where the glyph metrics come from. Two references
/// are the same font only if both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRef {
    pub family: String,
    pub path: PathBuf,
}

impl FontRef {
    pub fn new<S: ToString, P: Into<PathBuf>>(family: S, path: P) -> FontRef {
        FontRef {
            family: family.to_string(),
            path: path.into(),
        }
    }
}

impl fmt::Display for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.family, self.path.display())
    }
}

/// A parsed font object. Fonts can be TTF or OTF fonts. Only the horizontal advances and the
/// vertical metrics are used; glyph outlines are left to the rasterizer.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LabelError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, LabelError> {
        let bytes = std::fs::read(path.as_ref())?;
        Font::load(bytes)
    }

    /// Obtain the family name of the font, preferring the typographic family over the legacy
    /// family name. Returns [None] if the font doesn't carry a readable family name.
    pub fn family(&self) -> Option<String> {
        let find = |id: u16| {
            self.face
                .as_face_ref()
                .names()
                .into_iter()
                .filter(|name| name.name_id == id && name.is_unicode())
                .find_map(|name| name.to_string())
        };
        find(owned_ttf_parser::name_id::TYPOGRAPHIC_FAMILY)
            .or_else(|| find(owned_ttf_parser::name_id::FAMILY))
    }

    /// The raw font file, for handing the same face to the rasterizer
    pub fn data(&self) -> &[u8] {
        self.face.as_slice()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em().max(1) as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given
    /// font size. Unlike the raw font table value, this is positive.
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * -(self.face.as_face_ref().descender() as f32)
    }

    fn glyph_for(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the width of a given string of text given the font size. Characters the font
    /// can't draw are measured as the replacement glyph.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter(|ch| !ch.is_control())
            .filter_map(|ch| self.glyph_for(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(gid)
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

/// The fonts available to label layout. Each distinct [FontRef] is parsed once, no matter how
/// many rows or blocks use it.
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    index: HashMap<FontRef, Id<Font>>,
}

impl FontBook {
    /// Load the font identified by `font` from disk, unless it has been loaded before
    pub fn load(&mut self, font: &FontRef) -> Result<Id<Font>, LabelError> {
        if let Some(id) = self.index.get(font) {
            return Ok(*id);
        }
        let loaded = Font::load_from_disk(&font.path)?;
        tracing::debug!(font = %font, "loaded font");
        Ok(self.add_font(font.clone(), loaded))
    }

    /// Register an already parsed font under the given reference
    pub fn add_font(&mut self, font: FontRef, loaded: Font) -> Id<Font> {
        let id = self.fonts.alloc(loaded);
        self.index.insert(font, id);
        id
    }

    /// Look up a loaded font
    pub fn get(&self, font: &FontRef) -> Result<&Font, LabelError> {
        self.index
            .get(font)
            .and_then(|id| self.fonts.get(*id))
            .ok_or_else(|| LabelError::UnknownFont(font.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl FontMetrics for FontBook {
    fn text_width(&self, font: &FontRef, size: u32, text: &str) -> Result<Pt, LabelError> {
        Ok(self.get(font)?.width_of_text(text, Pt::from(size)))
    }

    fn vertical_metrics(&self, font: &FontRef, size: u32) -> Result<VerticalMetrics, LabelError> {
        let loaded = self.get(font)?;
        let size = Pt::from(size);
        Ok(VerticalMetrics {
            ascent: loaded.ascent(size),
            descent: loaded.descent(size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_refs_differ_by_either_field() {
        let a = FontRef::new("Serif", "a.ttf");
        assert_eq!(a, FontRef::new("Serif", "a.ttf"));
        assert_ne!(a, FontRef::new("Sans", "a.ttf"));
        assert_ne!(a, FontRef::new("Serif", "b.ttf"));
    }

    #[test]
    fn unloaded_fonts_are_reported() {
        let book = FontBook::default();
        let font = FontRef::new("Serif", "missing.ttf");
        let err = book.text_width(&font, 12, "hello").unwrap_err();
        assert!(matches!(err, LabelError::UnknownFont(f) if f == font));
    }

    #[test]
    fn missing_font_files_fail_to_load() {
        let mut book = FontBook::default();
        let font = FontRef::new("Serif", "/nonexistent/font.ttf");
        assert!(matches!(book.load(&font), Err(LabelError::Io(_))));
        assert!(book.is_empty());
    }

    // DejaVu Sans Mono: 2048 units per em, every glyph advances 1233 units, hhea
    // ascender 1901 and descender -483
    const MONO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono.ttf");

    #[test]
    fn reads_a_real_face() {
        let font = Font::load_from_disk(MONO).unwrap();
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));

        // at 2048px one font unit is one pixel
        let size = Pt(2048.0);
        assert_eq!(font.ascent(size), Pt(1901.0));
        assert_eq!(font.descent(size), Pt(483.0));
        assert_eq!(font.width_of_text("abc", size), Pt(3699.0));
        assert_eq!(font.width_of_text("a\nb", size), Pt(2466.0));
        assert_eq!(font.ascent(Pt(1024.0)), Pt(950.5));
    }

    #[test]
    fn missing_glyphs_measure_as_the_replacement() {
        let font = Font::load_from_disk(MONO).unwrap();
        let size = Pt(2048.0);
        assert_eq!(font.width_of_text("日", size), Pt(1233.0));
        assert_eq!(font.width_of_text("a日b", size), Pt(3699.0));
    }

    #[test]
    fn book_measures_loaded_fonts() {
        let mut book = FontBook::default();
        let font = FontRef::new("DejaVu Sans Mono", MONO);
        let first = book.load(&font).unwrap();
        assert_eq!(book.load(&font).unwrap(), first);
        assert_eq!(book.fonts.len(), 1);

        assert_eq!(book.text_width(&font, 2048, "ab").unwrap(), Pt(2466.0));
        let vertical = book.vertical_metrics(&font, 2048).unwrap();
        assert_eq!(vertical.line_height(), Pt(2384.0));
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(
            Font::load(b"definitely not a font".to_vec()),
            Err(LabelError::FaceParsingError(_))
        ));
    }
}

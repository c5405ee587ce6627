use crate::{FontBook, LabelError};
use std::{io::Cursor, sync::Arc};
use usvg::{fontdb, Tree};

/// Turns label SVG documents into PNG images and PDF documents. Text is drawn with the same
/// font files the layout was measured with, falling back to system fonts for anything else.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    /// Create a rasterizer that knows every font in the book
    pub fn new(fonts: &FontBook) -> Rasterizer {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        for (_, font) in fonts.fonts.iter() {
            db.load_font_data(font.data().to_vec());
        }
        tracing::debug!(faces = db.len(), "font database ready");

        Rasterizer {
            options: usvg::Options {
                fontdb: Arc::new(db),
                ..usvg::Options::default()
            },
        }
    }

    fn parse(&self, svg: &str) -> Result<Tree, LabelError> {
        Ok(Tree::from_str(svg, &self.options)?)
    }

    /// Rasterize an SVG document to PNG bytes, at one pixel per SVG unit
    pub fn to_png(&self, svg: &str) -> Result<Vec<u8>, LabelError> {
        let tree = self.parse(svg)?;
        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(LabelError::Pixmap { width, height })?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let image = image::RgbaImage::from_raw(width, height, pixmap.take())
            .ok_or(LabelError::Pixmap { width, height })?;
        let mut bytes: Vec<u8> = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Convert an SVG document to a single page PDF
    pub fn to_pdf(&self, svg: &str) -> Result<Vec<u8>, LabelError> {
        let tree = self.parse(svg)?;
        svg2pdf::to_pdf(
            &tree,
            svg2pdf::ConversionOptions::default(),
            svg2pdf::PageOptions::default(),
        )
        .map_err(LabelError::Pdf)
    }
}

use crate::font::FontRef;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font {0} has not been loaded")]
    /// A font was queried for metrics before it was loaded into the font book
    UnknownFont(FontRef),

    #[error(transparent)]
    /// [usvg] failed to parse the generated label
    Svg(#[from] usvg::Error),

    #[error(transparent)]
    /// [image] failed to encode the rendered label
    Image(#[from] image::ImageError),

    #[error("can't allocate a {width}x{height} pixmap")]
    /// The label could not be rasterized at the requested size
    Pixmap { width: u32, height: u32 },

    #[error("PDF conversion failed: {0:?}")]
    /// [svg2pdf] failed to convert the label
    Pdf(svg2pdf::ConversionError),

    #[error(transparent)]
    /// [csv] failed to read the input rows
    Csv(#[from] csv::Error),

    #[error("input is missing the {0:?} column")]
    /// The input rows don't have a required header
    MissingColumn(String),

    #[error(transparent)]
    /// The configuration file could not be parsed
    Config(#[from] toml::de::Error),

    #[error("invalid colour {0:?}, expected #rrggbb")]
    /// A colour in the configuration could not be parsed
    InvalidColour(String),
}

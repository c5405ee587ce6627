use std::{fs::File, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use label_gen::{
    layout::LabelFonts, read_rows, DirectorySink, Font, FontBook, FontRef, Generator, LabelConfig,
    Rasterizer,
};

#[derive(Parser, Debug)]
#[command(
    name = "label-gen",
    version,
    about = "Generate bilingual flashcard labels from a CSV file"
)]
struct Cli {
    /// Path to the input CSV file
    #[arg(long = "input-csv")]
    input_csv: PathBuf,

    /// Font family name (e.g. Arial); read from the font file when omitted
    #[arg(long = "font-family")]
    font_family: Option<String>,

    /// Path to a .ttf/.otf font file
    #[arg(long = "font-path")]
    font_path: PathBuf,

    /// Font family for target phrases beyond ASCII
    #[arg(long = "alt-font-family", requires = "alt_font_path")]
    alt_font_family: Option<String>,

    /// Font file for target phrases beyond ASCII
    #[arg(long = "alt-font-path")]
    alt_font_path: Option<PathBuf>,

    /// Size of the square canvas in pixels (e.g. 512)
    #[arg(long = "size")]
    size: Option<u32>,

    /// Directory to save output files
    #[arg(long = "output-dir")]
    output_dir: PathBuf,

    /// Read layout, column and colour settings from a TOML file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Also write a PDF for every label
    #[arg(long = "pdf")]
    pdf: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Load a font into the book, naming it after the font's own family when no name is given
fn load_font(book: &mut FontBook, family: Option<String>, path: PathBuf) -> Result<FontRef> {
    let font = Font::load_from_disk(&path)
        .with_context(|| format!("failed to load font: {}", path.display()))?;
    let family = family
        .or_else(|| font.family())
        .ok_or_else(|| anyhow!("font has no family name, pass one: {}", path.display()))?;
    let font_ref = FontRef::new(family, path);
    book.add_font(font_ref.clone(), font);
    Ok(font_ref)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    label_gen::logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => LabelConfig::load(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?,
        None => LabelConfig::default(),
    };
    if let Some(size) = cli.size {
        config.layout.canvas_size = size;
    }
    config.pdf |= cli.pdf;

    let mut book = FontBook::default();
    let primary = load_font(&mut book, cli.font_family, cli.font_path)?;
    let mut fonts = LabelFonts::new(primary);
    if let Some(path) = cli.alt_font_path {
        fonts = fonts.with_alternate(load_font(&mut book, cli.alt_font_family, path)?);
    }

    let input = File::open(&cli.input_csv)
        .with_context(|| format!("failed to open {}", cli.input_csv.display()))?;
    let rows = read_rows(input, &config.columns)?;
    tracing::info!(rows = rows.len(), "read input");

    let mut sink = DirectorySink::new(&cli.output_dir, Rasterizer::new(&book), config.pdf)?
        .on_written(|outputs| {
            println!(
                "Generated: {} and {}",
                outputs.svg.display(),
                outputs.png.display()
            );
        });
    let generator = Generator::new(&book, fonts, config.layout, config.style);
    generator.run(&rows, &mut sink)?;

    Ok(())
}

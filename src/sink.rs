use crate::{label::Label, raster::Rasterizer, LabelError};
use std::path::{Path, PathBuf};

/// Somewhere finished labels go
pub trait RenderSink {
    /// Persist `label` under `name`, a filesystem-safe identifier unique within the run
    fn render(&mut self, name: &str, label: &Label) -> Result<(), LabelError>;
}

/// The files written for one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub svg: PathBuf,
    pub png: PathBuf,
    pub pdf: Option<PathBuf>,
}

/// Writes each label into a directory as `<name>.svg` and `<name>.png`, plus `<name>.pdf` if
/// enabled.
pub struct DirectorySink {
    dir: PathBuf,
    rasterizer: Rasterizer,
    pdf: bool,
    on_written: Option<Box<dyn FnMut(&Outputs)>>,
    pub written: Vec<Outputs>,
}

impl DirectorySink {
    /// Create the sink, creating the output directory if it doesn't exist yet
    pub fn new<P: AsRef<Path>>(
        dir: P,
        rasterizer: Rasterizer,
        pdf: bool,
    ) -> Result<DirectorySink, LabelError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(DirectorySink {
            dir,
            rasterizer,
            pdf,
            on_written: None,
            written: Vec::new(),
        })
    }

    /// Call `f` as soon as each label's files are on disk, before the next row is laid out
    pub fn on_written<F: FnMut(&Outputs) + 'static>(mut self, f: F) -> DirectorySink {
        self.on_written = Some(Box::new(f));
        self
    }
}

impl RenderSink for DirectorySink {
    fn render(&mut self, name: &str, label: &Label) -> Result<(), LabelError> {
        let svg = label.to_svg();

        let svg_path = self.dir.join(format!("{name}.svg"));
        std::fs::write(&svg_path, &svg)?;

        let png_path = self.dir.join(format!("{name}.png"));
        std::fs::write(&png_path, self.rasterizer.to_png(&svg)?)?;

        let pdf_path = if self.pdf {
            let path = self.dir.join(format!("{name}.pdf"));
            std::fs::write(&path, self.rasterizer.to_pdf(&svg)?)?;
            Some(path)
        } else {
            None
        };

        tracing::info!(
            svg = %svg_path.display(),
            png = %png_path.display(),
            "wrote label"
        );
        let outputs = Outputs {
            svg: svg_path,
            png: png_path,
            pdf: pdf_path,
        };
        if let Some(f) = self.on_written.as_mut() {
            f(&outputs);
        }
        self.written.push(outputs);
        Ok(())
    }
}

/// Keeps labels in memory instead of writing them anywhere
#[derive(Debug, Default)]
pub struct MemorySink {
    pub labels: Vec<(String, Label)>,
}

impl RenderSink for MemorySink {
    fn render(&mut self, name: &str, label: &Label) -> Result<(), LabelError> {
        self.labels.push((name.to_string(), label.clone()));
        Ok(())
    }
}

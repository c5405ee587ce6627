use crate::{
    label::{Label, LabelStyle},
    layout::{compose, LabelFonts, LayoutConfig},
    metrics::FontMetrics,
    naming::OutputNames,
    rows::LabelRow,
    sink::RenderSink,
    LabelError,
};

/// Lays out and renders a batch of rows, one label per row
pub struct Generator<'m, M: FontMetrics + ?Sized> {
    metrics: &'m M,
    fonts: LabelFonts,
    layout: LayoutConfig,
    style: LabelStyle,
}

impl<'m, M: FontMetrics + ?Sized> Generator<'m, M> {
    pub fn new(
        metrics: &'m M,
        fonts: LabelFonts,
        layout: LayoutConfig,
        style: LabelStyle,
    ) -> Generator<'m, M> {
        Generator {
            metrics,
            fonts,
            layout,
            style,
        }
    }

    /// Lay out a single row
    pub fn label(&self, row: &LabelRow) -> Result<Label, LabelError> {
        let plan = compose(
            self.metrics,
            &row.source,
            &row.target,
            &self.fonts,
            &self.layout,
        )?;
        Ok(Label::new(plan, self.style))
    }

    /// Render every row into the sink, in order. Returns the name each label was given. Stops
    /// at the first row that fails.
    pub fn run<S: RenderSink + ?Sized>(
        &self,
        rows: &[LabelRow],
        sink: &mut S,
    ) -> Result<Vec<String>, LabelError> {
        let mut names = OutputNames::default();
        let mut written: Vec<String> = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let span = tracing::debug_span!("row", index, source = %row.source);
            let _enter = span.enter();

            let label = self.label(row)?;
            let name = names.next(index, &row.source);
            tracing::debug!(
                name = %name,
                blocks = label.plan.blocks.len(),
                "laid out label"
            );
            sink.render(&name, &label)?;
            written.push(name);
        }

        Ok(written)
    }
}

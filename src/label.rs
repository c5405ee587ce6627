use crate::{
    colour::{colours, Colour},
    layout::LayoutPlan,
    LabelError,
};
use serde::Deserialize;
use std::{fmt::Write as _, io::Write};

/// Colours a label is drawn in
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelStyle {
    /// Text and separator colour
    pub foreground: Colour,
    pub background: Colour,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            foreground: colours::BLACK,
            background: colours::WHITE,
        }
    }
}

/// A laid out label, ready to be written out as an SVG document
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub plan: LayoutPlan,
    pub style: LabelStyle,
}

impl Label {
    pub fn new(plan: LayoutPlan, style: LabelStyle) -> Label {
        Label { plan, style }
    }

    /// Render the label as an SVG document. Lines are drawn as individual `<text>` elements
    /// anchored at the middle of their baselines.
    pub fn to_svg(&self) -> String {
        let size = self.plan.canvas_size;
        let mut svg = String::new();

        // writing into a String can't fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{size}" height="{size}" fill="{fill}"/>"#,
            fill = self.style.background
        );

        if let Some(bar) = &self.plan.separator {
            let _ = write!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}"/>"#,
                x = bar.x,
                y = bar.y,
                w = bar.width,
                h = bar.height,
                fill = self.style.foreground
            );
        }

        for block in &self.plan.blocks {
            let family = escape_xml(&block.font.family);
            for line in block.lines() {
                let _ = write!(
                    svg,
                    r#"<text x="{x}" y="{y}" fill="{fill}" style="font-family:{family};font-size:{size}px;text-anchor:middle;">{text}</text>"#,
                    x = line.x,
                    y = line.y,
                    fill = self.style.foreground,
                    size = block.fit.font_size,
                    text = escape_xml(line.text)
                );
            }
        }

        svg.push_str("</svg>");
        svg
    }

    /// Write the SVG document to the writer
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), LabelError> {
        w.write_all(self.to_svg().as_bytes()).map_err(Into::into)
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

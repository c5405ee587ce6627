use crate::{label::LabelStyle, layout::LayoutConfig, rows::Columns, LabelError};
use serde::Deserialize;
use std::path::Path;

/// Settings for a run of label generation, as read from a TOML file. Every key is optional.
///
/// ```toml
/// pdf = true
///
/// [layout]
/// canvas_size = 1024
/// margin = 16.0
/// max_font_size = 300
///
/// [columns]
/// source = "French"
/// target = "English"
///
/// [style]
/// foreground = "#202020"
/// background = "#fffbe6"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub layout: LayoutConfig,
    pub columns: Columns,
    pub style: LabelStyle,
    /// Also write a PDF alongside each PNG
    pub pdf: bool,
}

impl LabelConfig {
    pub fn from_toml(source: &str) -> Result<LabelConfig, LabelError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<LabelConfig, LabelError> {
        let source = std::fs::read_to_string(path)?;
        LabelConfig::from_toml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{colours, Colour};

    #[test]
    fn empty_config_is_the_default() {
        let config = LabelConfig::from_toml("").unwrap();
        assert_eq!(config, LabelConfig::default());
        assert_eq!(config.layout.canvas_size, 512);
        assert_eq!(config.layout.max_font_size, 200);
        assert_eq!(config.layout.min_font_size, 10);
        assert_eq!(config.columns.source, "Spanish");
        assert_eq!(config.style.background, colours::WHITE);
        assert!(!config.pdf);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = LabelConfig::from_toml(
            r##"
pdf = true

[layout]
canvas_size = 1024
min_font_size = 14

[columns]
source = "French"

[style]
foreground = "#202020"
"##,
        )
        .unwrap();
        assert!(config.pdf);
        assert_eq!(config.layout.canvas_size, 1024);
        assert_eq!(config.layout.margin, 10.0);
        assert_eq!(config.layout.min_font_size, 14);
        assert_eq!(config.layout.max_font_size, 200);
        assert_eq!(config.columns.source, "French");
        assert_eq!(config.columns.target, "English");
        assert_eq!(config.style.foreground, Colour::new_rgb_bytes(0x20, 0x20, 0x20));
        assert_eq!(config.style.background, colours::WHITE);
    }

    #[test]
    fn bad_config_is_reported() {
        assert!(matches!(
            LabelConfig::from_toml("[layout]\ncanvas_size = \"big\""),
            Err(LabelError::Config(_))
        ));
        assert!(matches!(
            LabelConfig::from_toml("[style]\nforeground = \"black\""),
            Err(LabelError::Config(_))
        ));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        for source in [
            "typo = 1",
            "[layout]\ncanvas_sise = 1024\n",
            "[layout]\nmax_font = 120\n",
            "[columns]\nsorce = \"French\"\n",
            "[style]\nforegound = \"#202020\"\n",
        ] {
            assert!(
                matches!(LabelConfig::from_toml(source), Err(LabelError::Config(_))),
                "{source:?} was accepted"
            );
        }
    }

    #[test]
    fn font_size_range_reaches_the_fitter() {
        let config =
            LabelConfig::from_toml("[layout]\nmax_font_size = 90\nmin_font_size = 12\n").unwrap();
        let options = config.layout.fit_options();
        assert_eq!(options.max_font_size, 90);
        assert_eq!(options.min_font_size, 12);
    }
}

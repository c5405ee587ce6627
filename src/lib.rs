//! Bilingual flashcard labels: each phrase of a pair is wrapped and scaled to fill its zone of a
//! square canvas, then the label is written out as SVG, PNG and optionally PDF.

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod generator;
pub use generator::*;

mod label;
pub use label::*;

/// Text fitting and label layout
pub mod layout;

pub mod logging;

mod metrics;
pub use metrics::*;

mod naming;
pub use naming::*;

mod raster;
pub use raster::*;

mod rect;
pub use rect::*;

mod rows;
pub use rows::*;

mod sink;
pub use sink::*;

mod units;
pub use units::*;

#[cfg(test)]
pub(crate) mod test_util;

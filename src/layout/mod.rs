//! Text fitting and label layout.
//!
//! Laying out a label happens in three steps, each building on the last:
//!
//! - [`wrap_by_words`](crate::layout::wrap_by_words), [`wrap_by_chars`](crate::layout::wrap_by_chars)
//!   and [`enforce_width`](crate::layout::enforce_width) break text into lines no wider than a box
//! - [`fit_text`](crate::layout::fit_text) searches for the largest font size at which those lines
//!   also fit the height of the box
//! - [`compose`](crate::layout::compose) assigns texts to zones of the canvas, fits each one,
//!   centres the results and adds the separator bar
//!
//! All of it is pure computation over a [`FontMetrics`](crate::FontMetrics) source; nothing here
//! touches the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use label_gen::{FontBook, FontRef};
//! use label_gen::layout::{compose, LabelFonts, LayoutConfig};
//!
//! let mut book = FontBook::default();
//! let font = FontRef::new("Crimson Pro", "assets/CrimsonPro-Regular.ttf");
//! book.load(&font).expect("can load font");
//!
//! let plan = compose(
//!     &book,
//!     "La casa",
//!     "The house",
//!     &LabelFonts::new(font),
//!     &LayoutConfig::default(),
//! )
//! .expect("fonts are loaded");
//! assert_eq!(plan.blocks.len(), 2);
//! ```

mod compose;
mod fit;
mod margins;
mod text;

pub use compose::*;
pub use fit::*;
pub use margins::*;
pub use text::*;

//! pgfplots code for polars tables: scatter plots and cactus plots.
//!
//! The generated code is not enclosed in a `tikzpicture` environment; see
//! [`document`] for wrapping it.
//!
//! ```rust,ignore
//! use pgfplotter::{ScatterOptions, scatter};
//! use polars::prelude::*;
//!
//! let df = df! { "a" => &[0, 1, 2], "b" => &[0, 2, 4] }?;
//! let mut options = ScatterOptions::new();
//! options.axis_option("title", "{Runtime}");
//! println!("{}", scatter(&df, &options)?);
//! ```

use polars::error::PolarsError;
use thiserror::Error;

mod axes;
pub mod defaults;
pub mod document;
mod options;
mod table;

pub use axes::{CactusOptions, LogScale, Merge, ScatterOptions, cactus, scatter};
pub use options::{OptionValue, Options};
pub use polars::prelude::DataFrame;

#[derive(Error, Debug)]
pub enum Error {
  #[error("`log` should be one of none, x, y, both; got `{0}`")]
  InvalidLogScale(String),
  #[error("a colorbar was requested, but no color column was given with `c`")]
  ColorbarWithoutColor,
  #[error("invalid configuration: {0}")]
  Config(String),
  #[error("table error: {0}")]
  Polars(#[from] PolarsError),
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

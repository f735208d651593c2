mod cactus;
mod scatter;

use std::{fmt, str::FromStr};

pub use cactus::{CactusOptions, cactus};
pub use scatter::{ScatterOptions, scatter};

use crate::{Error, Options, Result};

/// Which axes are logarithmic. Picks the pgfplots axis environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogScale {
  #[default]
  None,
  X,
  Y,
  Both,
}

/// How caller overrides are combined with the default option templates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Merge {
  /// Each override key replaces the whole default value under that key.
  #[default]
  Shallow,
  /// Nested mappings are merged key by key, see [`Options::deep_merge`].
  Deep,
}

impl LogScale {
  pub fn environment(self) -> &'static str {
    match self {
      LogScale::None => "axis",
      LogScale::X => "semilogxaxis",
      LogScale::Y => "semilogyaxis",
      LogScale::Both => "loglogaxis",
    }
  }

  pub fn is_log(self) -> bool { self != LogScale::None }

  /// Axis minimums pinned to 1 so a log axis never starts at a non-positive
  /// value.
  pub(crate) fn forced_minimums(self) -> &'static [&'static str] {
    match self {
      LogScale::None => &[],
      LogScale::X => &["xmin"],
      LogScale::Y => &["ymin"],
      LogScale::Both => &["xmin", "ymin"],
    }
  }
}

impl FromStr for LogScale {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "" | "none" => Ok(LogScale::None),
      "x" => Ok(LogScale::X),
      "y" => Ok(LogScale::Y),
      "both" => Ok(LogScale::Both),
      other => Err(Error::InvalidLogScale(other.to_string())),
    }
  }
}

impl fmt::Display for LogScale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      LogScale::None => "none",
      LogScale::X => "x",
      LogScale::Y => "y",
      LogScale::Both => "both",
    })
  }
}

impl Merge {
  pub(crate) fn apply(self, base: &mut Options, overrides: &Options) {
    match self {
      Merge::Shallow => base.update(overrides),
      Merge::Deep => base.deep_merge(overrides),
    };
  }
}

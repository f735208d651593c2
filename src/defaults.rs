//! Option templates shared by every generator call. They are only ever read
//! and cloned; a generator never mutates them in place.

use std::sync::LazyLock;

use crate::{OptionValue, Options, options};

/// Axis options of the scatter plot.
pub static SCATTER_AXIS: LazyLock<Options> = LazyLock::new(|| {
  options! {
    "mark size" => "1.2pt",
    "axis x line*" => "bottom",
    "axis y line*" => "left",
    "width" => "7cm",
    "height" => "6.5cm",
    "xlabel near ticks" => true,
    "ylabel near ticks" => true,
    "xmin" => 0,
    "ymin" => 0,
    "colorbar/width" => ".1cm",
    "colorbar style" => options! { "line width" => ".1pt" },
    "colorbar shift/.style" => options! { "xshift" => ".1cm" },
  }
});

/// Options of the scatter `\addplot`, not of the axis.
pub static SCATTER_MARKS: LazyLock<Options> = LazyLock::new(|| {
  options! {
    "scatter" => true,
    "scatter src" => "explicit",
    "only marks" => true,
    "mark options" => options! {
      "fill opacity" => 0.3,
      "draw opacity" => 0,
    },
  }
});

/// Axis options of the cactus plot.
pub static CACTUS_AXIS: LazyLock<Options> = LazyLock::new(|| {
  options! {
    "very thick" => true,
    "no markers" => true,
    "axis x line*" => "bottom",
    "axis y line*" => "left",
    "width" => "12cm",
    "height" => "7cm",
    "cycle list" => "{%
    {green, solid},
    {blue, densely dashed},
    {red, dashdotdotted},
    {black, densely dotted},
    {brown, loosely dashdotted}
}",
    "xlabel near ticks" => true,
    "ylabel near ticks" => true,
    "xmin" => 0,
    "legend pos" => "north west",
    "every axis legend/.append style" => options! {
      "cells" => options! { "anchor" => "west" },
      "draw" => OptionValue::None,
    },
  }
});

/// Keys for the `\pgfplotsset` block preceding every plot.
pub static PGFPLOTS: LazyLock<Options> = LazyLock::new(|| options! { "compat" => "newest" });

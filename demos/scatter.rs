use pgfplotter::{LogScale, ScatterOptions, document, options, scatter};
use polars::prelude::*;

fn main() -> pgfplotter::Result<()> {
  let df = df! {
    "baseline" => &[1.2, 3.4, 10.0, 25.0, 80.0],
    "optimized" => &[0.9, 2.1, 11.5, 12.0, 41.0],
    "size" => &[1, 2, 3, 4, 5],
  }?;

  let mut options = ScatterOptions::new();
  options
    .x("baseline")
    .y("optimized")
    .c("size")
    .log(LogScale::Both)
    .marks(options! { "scale" => 1.5 })
    .axis_option("colorbar", true)
    .axis_option("title", "{Runtime [s]}");

  let markup = scatter(&df, &options)?;
  println!("{}", document::standalone(&markup, document::DEFAULT_SCALE));

  Ok(())
}

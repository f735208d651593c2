use pgfplotter::{CactusOptions, cactus, document};
use polars::prelude::*;

fn main() -> pgfplotter::Result<()> {
  let column = ChunkedArray::<Float64Type>::rand_standard_normal("normal".into(), 200);
  let shifted = ChunkedArray::<Float64Type>::rand_standard_normal("shifted".into(), 200) + 1.0;
  let df = DataFrame::new(vec![column.into_series().into(), shifted.into_series().into()])?;

  let mut options = CactusOptions::new();
  options.exclude_threshold(2.0).axis_option("ylabel", "{value}");

  print!("{}", document::tikzpicture(&cactus(&df, &options)?, 1.0));

  Ok(())
}

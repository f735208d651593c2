use std::cmp::Ordering;

use polars::prelude::*;

use crate::{Result, options::fmt_float};

/// One table cell: its numeric view for ordering and bounds, and its exact
/// rendering for the markup.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Cell {
  pub(crate) value: Option<f64>,
  pub(crate) text:  String,
  exact:            Option<i128>,
}

impl Cell {
  fn float(value: Option<f64>) -> Self {
    Cell { value, text: value.map_or_else(|| "nan".to_string(), fmt_float), exact: None }
  }

  fn integer<T: Copy + ToString + Into<i128>>(value: Option<T>) -> Self {
    match value {
      Some(v) => {
        let exact = v.into();
        Cell { value: Some(exact as f64), text: v.to_string(), exact: Some(exact) }
      }
      // Missing cells become `nan`, which pgfplots drops.
      None => Cell::float(None),
    }
  }

  /// Orders by value, using the exact integers when both cells have one.
  pub(crate) fn cmp_value(&self, other: &Cell) -> Ordering {
    match (self.exact, other.exact) {
      (Some(a), Some(b)) => a.cmp(&b),
      _ => self.value.unwrap_or(f64::NAN).total_cmp(&other.value.unwrap_or(f64::NAN)),
    }
  }
}

/// Name of the column at `index`, for plots that default to positional columns.
pub(crate) fn column_name(df: &DataFrame, index: usize) -> Result<String> {
  df.get_column_names().get(index).map(|name| name.to_string()).ok_or_else(|| {
    PolarsError::ColumnNotFound(
      format!("table has {} columns, no column at position {index}", df.width()).into(),
    )
    .into()
  })
}

pub(crate) fn values(df: &DataFrame, name: &str) -> Result<Vec<Cell>> {
  column_values(df.column(name)?)
}

/// Cells of `column` in row order. Integer columns keep their exact digits;
/// everything else is read as floats and fails if a cell is not a number.
pub(crate) fn column_values(column: &Column) -> Result<Vec<Cell>> {
  let series = column.as_materialized_series();
  let dtype = series.dtype();

  if dtype.is_unsigned_integer() {
    let ints = series.strict_cast(&DataType::UInt64)?;
    Ok(ints.u64()?.into_iter().map(Cell::integer).collect())
  } else if dtype.is_integer() {
    let ints = series.strict_cast(&DataType::Int64)?;
    Ok(ints.i64()?.into_iter().map(Cell::integer).collect())
  } else {
    let floats = series.strict_cast(&DataType::Float64)?;
    Ok(floats.f64()?.into_iter().map(Cell::float).collect())
  }
}

/// Cell with the largest non-null, non-NaN value.
pub(crate) fn max<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<&'a Cell> {
  cells
    .into_iter()
    .filter(|c| c.value.is_some_and(|v| !v.is_nan()))
    .reduce(|a, b| if b.cmp_value(a) == Ordering::Greater { b } else { a })
}

use polars::prelude::*;

use crate::{
  LogScale, Merge, OptionValue, Options, Result, defaults,
  table::{self, Cell},
};

/// Parameters of [`cactus`].
#[derive(Clone, Debug, Default)]
pub struct CactusOptions {
  /// Values at or above the threshold are left out of every series, and the
  /// threshold becomes the vertical bound.
  pub exclude_threshold: Option<f64>,
  pub log:               LogScale,
  pub pgfplotsset:       Options,
  /// Additional axis options, passed through uninterpreted.
  pub axis:              Options,
  pub merge:             Merge,
}

impl CactusOptions {
  pub fn new() -> Self { CactusOptions::default() }

  pub fn exclude_threshold(&mut self, threshold: f64) -> &mut Self {
    self.exclude_threshold = Some(threshold);
    self
  }
  pub fn log(&mut self, log: LogScale) -> &mut Self {
    self.log = log;
    self
  }
  pub fn pgfplotsset(&mut self, options: Options) -> &mut Self {
    self.pgfplotsset = options;
    self
  }
  pub fn axis_option(&mut self, key: &str, value: impl Into<OptionValue>) -> &mut Self {
    self.axis.set(key, value);
    self
  }
  pub fn merge(&mut self, merge: Merge) -> &mut Self {
    self.merge = merge;
    self
  }
}

/// Returns pgfplots code for a cactus plot of `df`, to be placed inside a
/// `tikzpicture` environment.
///
/// Every column is sorted on its own and drawn as one line, the value at
/// position `i` of the sorted column becoming the point `(i, value)`. With an
/// exclude threshold the lines may end at different positions.
pub fn cactus(df: &DataFrame, options: &CactusOptions) -> Result<String> {
  let mut axis = defaults::CACTUS_AXIS.clone();
  options.merge.apply(&mut axis, &options.axis);

  let mut pgfplots = defaults::PGFPLOTS.clone();
  options.merge.apply(&mut pgfplots, &options.pgfplotsset);

  // A log-log cactus keeps the default minimums.
  if options.log != LogScale::Both {
    for key in options.log.forced_minimums() {
      axis.set(*key, 1);
    }
  }

  let columns = df
    .get_columns()
    .iter()
    .map(|column| Ok((column.name().to_string(), table::column_values(column)?)))
    .collect::<Result<Vec<_>>>()?;

  axis.set("xmax", df.height());
  match options.exclude_threshold {
    Some(threshold) => {
      axis.set("ymax", threshold);
    }
    None => match table::max(columns.iter().flat_map(|(_, values)| values)) {
      Some(max) => {
        axis.set("ymax", max.text.clone());
      }
      None => log::debug!("cactus table has no values, leaving ymax unset"),
    },
  }

  let plots = columns
    .into_iter()
    .map(|(name, values)| series(&name, values, options.exclude_threshold))
    .collect::<Vec<_>>()
    .join("\n");

  let env = options.log.environment();
  log::debug!("cactus of {} columns over {} rows in {env}", df.width(), df.height());

  Ok(format!(
    "
\\pgfplotsset{{\n{pgfplots}}}
\\begin{{{env}}}[
{axis}%
]
{plots}
\\end{{{env}}}
",
    pgfplots = pgfplots.to_markup(2),
    axis = axis.to_markup(2),
  ))
}

fn series(name: &str, cells: Vec<Cell>, threshold: Option<f64>) -> String {
  let nulls = cells.iter().filter(|c| c.value.is_none()).count();
  if nulls > 0 {
    log::warn!("cactus series `{name}` skips {nulls} missing values");
  }

  let mut sorted = cells.into_iter().filter(|c| c.value.is_some()).collect::<Vec<_>>();
  sorted.sort_by(Cell::cmp_value);

  let coordinates = sorted
    .iter()
    .enumerate()
    .filter(|(_, c)| threshold.is_none_or(|t| c.value.is_some_and(|v| v < t)))
    .map(|(i, c)| format!("({i},{})", c.text))
    .collect::<Vec<_>>()
    .join(" ");

  format!("\\addplot coordinates {{{coordinates}}};%\n\\addlegendentry{{{name}}}%")
}

use polars::prelude::*;

use crate::{
  Error, LogScale, Merge, OptionValue, Options, Result, defaults,
  options::fmt_float,
  table,
};

/// Parameters of [`scatter`]. Construct with `Default` and chain the setters.
#[derive(Clone, Debug)]
pub struct ScatterOptions {
  /// Horizontal column. Defaults to the first column of the table.
  pub x:           Option<String>,
  /// Vertical column. Defaults to the second column of the table.
  pub y:           Option<String>,
  /// Column giving each point's color index.
  pub c:           Option<String>,
  /// Draw the `y = x` reference line.
  pub diagonal:    bool,
  pub log:         LogScale,
  /// Raw TikZ inserted just before the axis closes, in axis coordinates.
  pub tikz_hook:   String,
  /// Keys for `every mark/.append style` on the point `\addplot`.
  pub marks:       Options,
  pub pgfplotsset: Options,
  /// Additional axis options, passed through uninterpreted.
  pub axis:        Options,
  pub merge:       Merge,
}

impl Default for ScatterOptions {
  fn default() -> Self {
    ScatterOptions {
      x:           None,
      y:           None,
      c:           None,
      diagonal:    true,
      log:         LogScale::None,
      tikz_hook:   String::new(),
      marks:       Options::new(),
      pgfplotsset: Options::new(),
      axis:        Options::new(),
      merge:       Merge::Shallow,
    }
  }
}

impl ScatterOptions {
  pub fn new() -> Self { ScatterOptions::default() }

  pub fn x(&mut self, column: &str) -> &mut Self {
    self.x = Some(column.to_string());
    self
  }
  pub fn y(&mut self, column: &str) -> &mut Self {
    self.y = Some(column.to_string());
    self
  }
  pub fn c(&mut self, column: &str) -> &mut Self {
    self.c = Some(column.to_string());
    self
  }

  pub fn diagonal(&mut self, diagonal: bool) -> &mut Self {
    self.diagonal = diagonal;
    self
  }
  pub fn log(&mut self, log: LogScale) -> &mut Self {
    self.log = log;
    self
  }
  pub fn tikz_hook(&mut self, tikz: &str) -> &mut Self {
    self.tikz_hook = tikz.to_string();
    self
  }

  pub fn marks(&mut self, marks: Options) -> &mut Self {
    self.marks = marks;
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

/// Returns pgfplots code for a scatter plot of `df`, to be placed inside a
/// `tikzpicture` environment.
///
/// Points are plotted in row order. Without a color column every point gets
/// the meta value `1` and the plot is drawn as marks only, so the `\addplot`
/// options have the same shape either way.
pub fn scatter(df: &DataFrame, options: &ScatterOptions) -> Result<String> {
  let x = match &options.x {
    Some(x) => x.clone(),
    None => table::column_name(df, 0)?,
  };
  let y = match &options.y {
    Some(y) => y.clone(),
    None => table::column_name(df, 1)?,
  };

  let mut axis = defaults::SCATTER_AXIS.clone();
  axis.set("xlabel", format!("{{{x}}}")).set("ylabel", format!("{{{y}}}"));
  options.merge.apply(&mut axis, &options.axis);
  for key in options.log.forced_minimums() {
    axis.set(*key, 1);
  }

  if options.c.is_none() && axis.get("colorbar").is_some_and(OptionValue::is_truthy) {
    return Err(Error::ColorbarWithoutColor);
  }

  let mut pgfplots = defaults::PGFPLOTS.clone();
  options.merge.apply(&mut pgfplots, &options.pgfplotsset);

  let mut marks = defaults::SCATTER_MARKS.clone();
  marks.set("every mark/.append style", options.marks.clone());
  marks.set("scatter", options.c.is_some());

  let xs = table::values(df, &x)?;
  let ys = table::values(df, &y)?;
  let meta = match &options.c {
    Some(c) => table::values(df, c)?.into_iter().map(|cell| cell.text).collect(),
    None => vec!["1".to_string(); xs.len()],
  };

  let coordinates = xs
    .iter()
    .zip(&ys)
    .zip(&meta)
    .map(|((vx, vy), vc)| format!("({},{}) [{vc}]%\n", vx.text, vy.text))
    .collect::<Vec<_>>()
    .join("  ");

  let line = if options.diagonal {
    let start = if options.log.is_log() { 1.0 } else { 0.0 };
    let end = table::max(xs.iter().chain(&ys)).and_then(|c| c.value).unwrap_or(start) + 1.0;
    format!("\\addplot[gray,domain={}:{}]{{x}};", fmt_float(start), fmt_float(end))
  } else {
    String::new()
  };

  let env = options.log.environment();
  log::debug!("scatter of `{x}` against `{y}`: {} points in {env}", xs.len());

  Ok(format!(
    "\\pgfplotsset{{\n{pgfplots}}}
\\begin{{{env}}}[
{axis}%
]
\\addplot[
{marks}%
] coordinates
  {{{coordinates}}};%
{line}%
{hook}%
\\end{{{env}}}
",
    pgfplots = pgfplots.to_markup(2),
    axis = axis.to_markup(2),
    marks = marks.to_markup(2),
    hook = options.tikz_hook,
  ))
}

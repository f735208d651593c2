//! Ordered option mappings and their pgfplots `key=value` rendering.
//!
//! Iteration order is the emission order, so [`Options`] keeps keys in
//! insertion order and equality is order sensitive.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::{Error, Result};

/// Builds an [`Options`] literal, keeping the order the keys are written in.
///
/// ```ignore
/// let legend = options! {
///   "cells" => options! { "anchor" => "west" },
///   "draw" => OptionValue::None,
/// };
/// ```
#[macro_export]
macro_rules! options {
  () => { $crate::Options::new() };
  ($($key:expr => $value:expr),+ $(,)?) => {{
    let mut options = $crate::Options::new();
    $(options.set($key, $value);)+
    options
  }};
}

#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
  Bool(bool),
  Int(i64),
  Float(f64),
  /// Emitted verbatim. Callers wanting `key={...}` pass the braces themselves.
  Text(String),
  /// Rendered as `none`.
  None,
  Map(Options),
}

#[derive(Clone, Debug, Default)]
pub struct Options {
  entries: IndexMap<String, OptionValue>,
}

impl OptionValue {
  /// Whether the value switches a flag on. `false`, `none`, zero, empty text
  /// and the empty mapping are off.
  pub fn is_truthy(&self) -> bool {
    match self {
      OptionValue::Bool(b) => *b,
      OptionValue::Int(i) => *i != 0,
      OptionValue::Float(f) => *f != 0.0,
      OptionValue::Text(s) => !s.is_empty(),
      OptionValue::None => false,
      OptionValue::Map(m) => !m.is_empty(),
    }
  }

  pub fn as_map(&self) -> Option<&Options> {
    match self {
      OptionValue::Map(m) => Some(m),
      _ => None,
    }
  }
}

impl Options {
  pub fn new() -> Self { Options::default() }

  pub fn len(&self) -> usize { self.entries.len() }
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn get(&self, key: &str) -> Option<&OptionValue> { self.entries.get(key) }
  pub fn contains_key(&self, key: &str) -> bool { self.entries.contains_key(key) }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> { self.entries.keys().map(String::as_str) }

  /// Sets `key`. An existing key keeps its position.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
    self.entries.insert(key.into(), value.into());
    self
  }

  pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    self.set(key, value);
    self
  }

  /// Top-level overwrite: every key of `overrides` replaces the whole value
  /// under that key, nested mappings included.
  pub fn update(&mut self, overrides: &Options) -> &mut Self {
    for (key, value) in &overrides.entries {
      self.entries.insert(key.clone(), value.clone());
    }
    self
  }

  /// Recursive overwrite. A non-empty nested mapping in `overrides` is merged
  /// key by key into the mapping already under that key; anything else,
  /// including an empty mapping, replaces the value outright.
  pub fn deep_merge(&mut self, overrides: &Options) -> &mut Self {
    for (key, value) in &overrides.entries {
      match value {
        OptionValue::Map(nested) if !nested.is_empty() => {
          let slot =
            self.entries.entry(key.clone()).or_insert_with(|| OptionValue::Map(Options::new()));
          if !matches!(slot, OptionValue::Map(_)) {
            log::warn!("deep merge replaces scalar option `{key}` with a nested mapping");
            *slot = OptionValue::Map(Options::new());
          }
          if let OptionValue::Map(base) = slot {
            base.deep_merge(nested);
          }
        }
        _ => {
          self.entries.insert(key.clone(), value.clone());
        }
      }
    }
    self
  }

  /// Renders one `key=value,` line per entry, each left-padded by `indent`
  /// spaces. Nested mappings open a brace block indented two further spaces.
  pub fn to_markup(&self, indent: usize) -> String {
    let mut out = String::new();
    self.write_markup(&mut out, indent);
    out
  }

  fn write_markup(&self, out: &mut String, indent: usize) {
    let pad = " ".repeat(indent);
    for (key, value) in &self.entries {
      out.push_str(&pad);
      out.push_str(key);
      out.push('=');
      match value {
        OptionValue::Map(nested) => {
          out.push_str("{\n");
          nested.write_markup(out, indent + 2);
          out.push_str(&pad);
          out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
      }
      out.push_str(",\n");
    }
  }

  /// Parses a JSON object into options, keeping the key order of the text.
  pub fn from_json(text: &str) -> Result<Options> {
    match serde_json::from_str::<Value>(text)? {
      Value::Object(map) => Ok(map.into_iter().collect()),
      other => Err(Error::Config(format!("expected a JSON object of options, found `{other}`"))),
    }
  }
}

impl PartialEq for Options {
  fn eq(&self, other: &Options) -> bool {
    self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
  }
}

impl fmt::Display for Options {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_markup(0)) }
}

impl fmt::Display for OptionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OptionValue::Bool(true) => f.write_str("true"),
      OptionValue::Bool(false) => f.write_str("false"),
      OptionValue::Int(i) => write!(f, "{i}"),
      OptionValue::Float(v) => f.write_str(&fmt_float(*v)),
      OptionValue::Text(s) => f.write_str(s),
      OptionValue::None => f.write_str("none"),
      OptionValue::Map(m) => write!(f, "{{\n{m}}}"),
    }
  }
}

/// Shortest round-trip rendering, with pgfplots spellings for non-finite values.
pub(crate) fn fmt_float(value: f64) -> String {
  if value.is_nan() {
    "nan".to_string()
  } else if value.is_infinite() {
    (if value > 0.0 { "inf" } else { "-inf" }).to_string()
  } else {
    value.to_string()
  }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Options { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
  }
}

impl<'a> IntoIterator for &'a Options {
  type Item = (&'a String, &'a OptionValue);
  type IntoIter = indexmap::map::Iter<'a, String, OptionValue>;

  fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

impl From<bool> for OptionValue {
  fn from(value: bool) -> Self { OptionValue::Bool(value) }
}
impl From<i32> for OptionValue {
  fn from(value: i32) -> Self { OptionValue::Int(value.into()) }
}
impl From<i64> for OptionValue {
  fn from(value: i64) -> Self { OptionValue::Int(value) }
}
impl From<u32> for OptionValue {
  fn from(value: u32) -> Self { OptionValue::Int(value.into()) }
}
impl From<usize> for OptionValue {
  fn from(value: usize) -> Self {
    i64::try_from(value).map(OptionValue::Int).unwrap_or(OptionValue::Float(value as f64))
  }
}
impl From<f64> for OptionValue {
  fn from(value: f64) -> Self { OptionValue::Float(value) }
}
impl From<&str> for OptionValue {
  fn from(value: &str) -> Self { OptionValue::Text(value.to_string()) }
}
impl From<String> for OptionValue {
  fn from(value: String) -> Self { OptionValue::Text(value) }
}
impl From<Options> for OptionValue {
  fn from(value: Options) -> Self { OptionValue::Map(value) }
}
impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
  fn from(value: Option<T>) -> Self { value.map_or(OptionValue::None, Into::into) }
}

impl From<Value> for OptionValue {
  fn from(value: Value) -> Self {
    match value {
      Value::Null => OptionValue::None,
      Value::Bool(b) => OptionValue::Bool(b),
      Value::Number(n) => match n.as_i64() {
        Some(i) => OptionValue::Int(i),
        None => OptionValue::Float(n.as_f64().unwrap_or(f64::NAN)),
      },
      Value::String(s) => OptionValue::Text(s),
      // pgfplots lists, e.g. `xtick={1, 10, 100}`.
      Value::Array(items) => {
        let items = items.into_iter().map(|v| OptionValue::from(v).to_string()).collect::<Vec<_>>();
        OptionValue::Text(format!("{{{}}}", items.join(", ")))
      }
      Value::Object(map) => OptionValue::Map(map.into_iter().collect()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse_lines(markup: &str) -> Vec<(String, String)> {
    markup
      .lines()
      .map(|line| {
        let line = line.strip_suffix(',').unwrap();
        let (k, v) = line.split_once('=').unwrap();
        (k.to_string(), v.to_string())
      })
      .collect()
  }

  #[test]
  fn scalars_render_as_pgf_literals() {
    let opts = options! {
      "scatter" => true,
      "only marks" => false,
      "draw" => OptionValue::None,
      "xmin" => 0,
      "fill opacity" => 0.3,
      "width" => "7cm",
    };

    assert_eq!(
      opts.to_markup(0),
      "scatter=true,\nonly marks=false,\ndraw=none,\nxmin=0,\nfill opacity=0.3,\nwidth=7cm,\n"
    );
  }

  #[test]
  fn indent_pads_every_line() {
    let opts = options! { "a" => 1, "b" => "{x}" };
    assert_eq!(opts.to_markup(2), "  a=1,\n  b={x},\n");
  }

  #[test]
  fn nested_maps_open_indented_blocks() {
    let opts = options! {
      "legend" => options! {
        "cells" => options! { "anchor" => "west" },
        "draw" => OptionValue::None,
      },
      "width" => "12cm",
    };

    assert_eq!(
      opts.to_markup(2),
      "  legend={\n    cells={\n      anchor=west,\n    },\n    draw=none,\n  },\n  width=12cm,\n"
    );
  }

  #[test]
  fn empty_mapping_renders_nothing() {
    assert_eq!(Options::new().to_markup(4), "");
    let opts = options! { "style" => Options::new() };
    assert_eq!(opts.to_markup(0), "style={\n},\n");
  }

  #[test]
  fn key_order_survives_reparse() {
    let opts = options! {
      "zeta" => 1,
      "alpha" => "two",
      "mid" => 2.5,
      "flag" => false,
    };
    let markup = opts.to_markup(0);

    assert_eq!(markup, opts.to_markup(0));
    assert_eq!(
      parse_lines(&markup),
      vec![
        ("zeta".to_string(), "1".to_string()),
        ("alpha".to_string(), "two".to_string()),
        ("mid".to_string(), "2.5".to_string()),
        ("flag".to_string(), "false".to_string()),
      ]
    );
  }

  #[test]
  fn set_keeps_position_of_existing_key() {
    let mut opts = options! { "a" => 1, "b" => 2 };
    opts.set("a", 3).set("c", 4);
    assert_eq!(opts.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(opts.get("a"), Some(&OptionValue::Int(3)));
  }

  #[test]
  fn equality_is_order_sensitive() {
    let ab = options! { "a" => 1, "b" => 2 };
    let ba = options! { "b" => 2, "a" => 1 };
    assert_ne!(ab, ba);
    assert_eq!(ab, ab.clone());
  }

  #[test]
  fn update_replaces_nested_values_wholesale() {
    let mut base = options! {
      "style" => options! { "line width" => ".1pt", "draw" => "red" },
      "xmin" => 0,
    };
    base.update(&options! { "style" => options! { "draw" => "blue" }, "ymin" => 1 });

    assert_eq!(
      base,
      options! {
        "style" => options! { "draw" => "blue" },
        "xmin" => 0,
        "ymin" => 1,
      }
    );
  }

  #[test]
  fn deep_merge_recurses_into_nested_maps() {
    let mut base = options! {
      "style" => options! { "line width" => ".1pt", "draw" => "red" },
      "xmin" => 0,
    };
    base.deep_merge(&options! {
      "style" => options! { "draw" => "blue", "fill" => "none" },
      "xmin" => 1,
    });

    assert_eq!(
      base,
      options! {
        "style" => options! { "line width" => ".1pt", "draw" => "blue", "fill" => "none" },
        "xmin" => 1,
      }
    );
  }

  #[test]
  fn deep_merge_keeps_keys_absent_from_overrides() {
    let base = options! {
      "a" => 1,
      "b" => options! { "c" => 2, "d" => options! { "e" => 3 } },
      "f" => "keep",
    };
    let overrides = options! {
      "b" => options! { "d" => options! { "e" => 4 } },
      "g" => true,
    };

    let mut merged = base.clone();
    merged.deep_merge(&overrides);

    for (key, value) in base.iter() {
      if !overrides.contains_key(key) {
        assert_eq!(merged.get(key), Some(value));
      }
    }
    assert_eq!(merged.get("g"), Some(&OptionValue::Bool(true)));
    let b = merged.get("b").and_then(OptionValue::as_map).unwrap();
    assert_eq!(b.get("c"), Some(&OptionValue::Int(2)));
    assert_eq!(b.get("d"), Some(&OptionValue::Map(options! { "e" => 4 })));
  }

  #[test]
  fn deep_merge_with_empty_map_replaces() {
    let mut base = options! { "style" => options! { "draw" => "red" } };
    base.deep_merge(&options! { "style" => Options::new() });
    assert_eq!(base.get("style"), Some(&OptionValue::Map(Options::new())));
  }

  #[test]
  fn deep_merge_switches_between_scalar_and_map() {
    let mut base = options! { "a" => "scalar", "b" => options! { "c" => 1 } };
    base.deep_merge(&options! { "a" => options! { "x" => 1 }, "b" => "flat" });

    assert_eq!(
      base,
      options! { "a" => options! { "x" => 1 }, "b" => "flat" }
    );
  }

  #[test]
  fn deep_merge_creates_missing_maps() {
    let mut base = Options::new();
    base.deep_merge(&options! { "a" => options! { "b" => options! { "c" => true } } });
    assert_eq!(base.to_markup(0), "a={\n  b={\n    c=true,\n  },\n},\n");
  }

  #[test]
  fn truthiness_follows_flag_semantics() {
    assert!(OptionValue::Bool(true).is_truthy());
    assert!(OptionValue::from("right").is_truthy());
    assert!(OptionValue::Int(1).is_truthy());
    assert!(!OptionValue::Bool(false).is_truthy());
    assert!(!OptionValue::None.is_truthy());
    assert!(!OptionValue::Int(0).is_truthy());
    assert!(!OptionValue::from("").is_truthy());
    assert!(!OptionValue::Map(Options::new()).is_truthy());
  }

  #[test]
  fn floats_use_shortest_rendering() {
    assert_eq!(fmt_float(2.0), "2");
    assert_eq!(fmt_float(0.5), "0.5");
    assert_eq!(fmt_float(f64::NAN), "nan");
    assert_eq!(fmt_float(f64::NEG_INFINITY), "-inf");
  }

  #[test]
  fn json_objects_keep_their_order() {
    let opts = Options::from_json(
      r#"{"width": "7cm", "colorbar": true, "xtick": [1, 10, 100],
          "style": {"draw": null, "opacity": 0.5}}"#,
    )
    .unwrap();

    assert_eq!(
      opts,
      options! {
        "width" => "7cm",
        "colorbar" => true,
        "xtick" => "{1, 10, 100}",
        "style" => options! { "draw" => OptionValue::None, "opacity" => 0.5 },
      }
    );
  }

  #[test]
  fn json_top_level_must_be_an_object() {
    assert!(matches!(Options::from_json("[1, 2]"), Err(Error::Config(_))));
    assert!(matches!(Options::from_json("{"), Err(Error::Json(_))));
  }
}

//! Wrapping generated markup into something a TeX engine can compile.
//!
//! The generators leave the `tikzpicture` environment to the caller. These
//! helpers add it, and optionally a whole standalone document with the
//! packages the markup needs. Compiling the result is left to external tools.

use std::path::Path;

use crate::{Result, options::fmt_float};

pub const DEFAULT_SCALE: f64 = 2.0;

/// Packages and settings the generated markup relies on.
pub const PREAMBLE: &str = "\\usepackage{pgfplots}
\\usepackage{xcolor}
\\pgfplotsset{compat=newest}
";

pub fn tikzpicture(markup: &str, scale: f64) -> String {
  format!("\\begin{{tikzpicture}}[scale={}]\n{markup}\n\\end{{tikzpicture}}\n", fmt_float(scale))
}

/// A complete `standalone` document holding the picture.
pub fn standalone(markup: &str, scale: f64) -> String {
  format!(
    "\\documentclass[tikz]{{standalone}}\n{PREAMBLE}\\begin{{document}}\n{}\\end{{document}}\n",
    tikzpicture(markup, scale)
  )
}

/// Writes the [`standalone`] document for `markup` to `path`.
pub fn save(markup: &str, scale: f64, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  std::fs::write(path, standalone(markup, scale))?;
  log::debug!("wrote standalone document to {}", path.display());
  Ok(())
}

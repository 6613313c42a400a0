//! HTML rendering for the GoldenDict endpoint.

use std::path::Path;

use tera::{Context, Tera};

use crate::error::Result;
use crate::lookup::Definition;

/// Template name; the `.html` suffix turns on Tera's auto-escaping.
pub const TEMPLATE_NAME: &str = "goldendict.html";

const EMBEDDED_TEMPLATE: &str = include_str!("../../templates/goldendict.html");

/// Renders definitions and error states into a single HTML page.
///
/// The template receives `word` (string), `result` (`{p, defs: [{pos, m, ex}]}`
/// or null) and `error` (string or null).
pub struct GoldenDictRenderer {
    tera: Tera,
}

impl GoldenDictRenderer {
    /// Load the template at `path`, or the embedded one when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_source(&std::fs::read_to_string(path)?),
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<Self> {
        Self::from_source(EMBEDDED_TEMPLATE)
    }

    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    pub fn render_definition(&self, word: &str, definition: &Definition) -> Result<String> {
        self.render(word, Some(definition), None)
    }

    pub fn render_error(&self, word: Option<&str>, message: &str) -> Result<String> {
        self.render(word.unwrap_or_default(), None, Some(message))
    }

    fn render(
        &self,
        word: &str,
        result: Option<&Definition>,
        error: Option<&str>,
    ) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("word", word);
        ctx.insert("result", &result);
        ctx.insert("error", &error);
        Ok(self.tera.render(TEMPLATE_NAME, &ctx)?)
    }
}

use handlebars::{no_escape, Handlebars, HelperDef, RenderErrorReason};
use serde::Serialize;
use serde_json::json;

use crate::{error::RenderError, files::AssetMap};

/// Data exposed to a template: the assets under the name `files`.
#[derive(Serialize)]
pub(crate) struct RenderContext<'a> {
    pub(crate) files: &'a AssetMap,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(files: &'a AssetMap) -> Self {
        Self { files }
    }
}

pub(crate) trait Renderer {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, RenderError>;
}

/// Strict Handlebars rendering without escaping, so asset text lands in the
/// output byte for byte and a reference to a missing asset is an error.
pub(crate) struct HandlebarsRenderer {
    reg: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub(crate) fn new() -> Self {
        let mut reg = Handlebars::new();
        reg.set_strict_mode(true);
        reg.register_escape_fn(no_escape);
        reg.register_helper("quote", Box::new(QuoteHelper));
        Self { reg }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HandlebarsRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, RenderError> {
        self.reg
            .render_template(template, context)
            .map_err(|e| RenderError::Engine(e.to_string()))
    }
}

/// `{{quote value}}` renders a string as a double-quoted literal with escapes.
struct QuoteHelper;

impl HelperDef for QuoteHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        helper: &handlebars::Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc handlebars::Context,
        _: &mut handlebars::RenderContext<'reg, 'rc>,
    ) -> Result<handlebars::ScopedJson<'rc>, handlebars::RenderError> {
        let text = helper
            .param(0)
            .ok_or_else(|| RenderErrorReason::Other("missing value to quote".to_string()))?
            .value()
            .as_str()
            .ok_or_else(|| RenderErrorReason::Other("quoted value is no string".to_string()))?;
        let quoted = serde_json::to_string(text)
            .map_err(|e| RenderErrorReason::Other(format!("failed to quote value: {e}")))?;
        Ok(json!(quoted).into())
    }
}

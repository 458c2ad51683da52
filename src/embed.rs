use std::{fs::read_to_string, path::Path};

use tracing::{debug, info};

use crate::{
    error::{EmbedError, RenderError},
    files::collect_assets,
    render::{RenderContext, Renderer},
    writing::write_output,
};

/// Renders `template` with every asset of `source` and writes it to `output`.
///
/// The output is only touched once all assets were read and the template
/// rendered successfully.
pub(crate) fn embed(
    source: &Path,
    template: &Path,
    output: &Path,
    renderer: &impl Renderer,
) -> Result<(), EmbedError> {
    let files = collect_assets(source)?;

    let render_error = |source| EmbedError::Render {
        path: template.to_path_buf(),
        source,
    };
    debug!("loading template {}", template.display());
    let text = read_to_string(template)
        .map_err(RenderError::Load)
        .map_err(render_error)?;
    let rendered = renderer
        .render(&text, &RenderContext::new(&files))
        .map_err(render_error)?;

    write_output(output, &rendered)?;
    info!("embedded {} file(s) into {}", files.len(), output.display());
    Ok(())
}

// src/commands/transform.rs

//! Transform command

use anyhow::{Context, Result};
use tracing::info;

use super::{read_input, resolve_config, write_output};
use crate::cli::{ModeArg, TransformArgs};

/// Rewrite `:host` selectors in a stylesheet
///
/// # Arguments
/// * `input` - Stylesheet path ("-" for stdin)
/// * `mode` - Transformer override (None = config file, else text)
/// * `args` - Transform flags
/// * `output` - Optional output file path (None = stdout)
pub fn cmd_transform(
    input: &str,
    mode: Option<ModeArg>,
    args: &TransformArgs,
    output: Option<&str>,
) -> Result<()> {
    let config = resolve_config(args)?;
    let mode = mode.map(Into::into).unwrap_or(config.mode);
    let css = read_input(input)?;

    info!("Transforming {} ({:?} mode)", input, mode);
    let transformed = hostcss::transform(&css, mode, &config.transform)
        .with_context(|| format!("Failed to transform stylesheet: {}", input))?;

    write_output(output, &transformed)
}

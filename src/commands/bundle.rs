// src/commands/bundle.rs

//! Bundle command: transformed CSS plus a content name

use anyhow::{Context, Result};
use hostcss::bundle_css;
use tracing::info;

use super::{read_input, resolve_config, write_output};
use crate::cli::TransformArgs;

/// Transform a stylesheet and print it with its content name
///
/// Plain output is a `/* name */` header line followed by the CSS; with
/// `json` the bundle is printed as `{"name": ..., "css": ...}`.
pub fn cmd_bundle(input: &str, args: &TransformArgs, json: bool, output: Option<&str>) -> Result<()> {
    let config = resolve_config(args)?;
    let css = read_input(input)?;

    let bundle = bundle_css(&css, &config.transform);
    info!("Bundled {} as {}", input, bundle.name);

    let rendered = if json {
        serde_json::to_string_pretty(&bundle).context("Failed to serialize bundle")?
    } else {
        format!("/* {} */\n{}", bundle.name, bundle.css)
    };

    write_output(output, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_bundle_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("card.css");
        let output = dir.path().join("card.json");
        let config = dir.path().join("hostcss.toml");
        fs::write(&input, ":host([part]) { color: red; }").unwrap();
        fs::write(&config, "[transform]\ndata_attributes = true\n").unwrap();

        let args = TransformArgs {
            config: Some(config.to_str().unwrap().to_string()),
            ..Default::default()
        };
        cmd_bundle(input.to_str().unwrap(), &args, true, Some(output.to_str().unwrap())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["css"], "&[part] { color: red; }");
        assert_eq!(value["name"].as_str().unwrap().len(), 8);
    }

    #[test]
    fn test_bundle_plain_output_has_name_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("card.css");
        let output = dir.path().join("card.out.css");
        let config = dir.path().join("hostcss.toml");
        fs::write(&input, ":host { color: red; }").unwrap();
        fs::write(&config, "").unwrap();

        let args = TransformArgs {
            layer: Some("defaults".to_string()),
            config: Some(config.to_str().unwrap().to_string()),
            ..Default::default()
        };
        cmd_bundle(input.to_str().unwrap(), &args, false, Some(output.to_str().unwrap())).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let (header, css) = written.split_once('\n').unwrap();
        assert!(header.starts_with("/* ") && header.ends_with(" */"));
        assert_eq!(css, "@layer defaults {\ncolor: red;\n}");
    }
}

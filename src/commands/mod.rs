// src/commands/mod.rs
//! Command handlers for the hostcss CLI

mod bundle;
mod hash;
mod transform;

pub use bundle::cmd_bundle;
pub use hash::cmd_hash;
pub use transform::cmd_transform;

use anyhow::{Context, Result};
use hostcss::config::{validate_options, DEFAULT_CONFIG_FILE};
use hostcss::Config;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::cli::TransformArgs;

/// Read a stylesheet from a file, or from stdin when the path is "-"
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stylesheet from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read stylesheet: {}", path))
}

/// Print to stdout, or write to the output file when one is given
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(output_path) => {
            fs::write(output_path, content)
                .with_context(|| format!("Failed to write output file: {}", output_path))?;
            info!("Output written to: {}", output_path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Load the configuration file (if any) and apply command-line overrides
pub fn resolve_config(args: &TransformArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            debug!("Using {} from the working directory", DEFAULT_CONFIG_FILE);
            Config::from_file(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("Failed to load config: {}", DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };

    let options = &mut config.transform;
    if let Some(host_tag) = &args.host_tag {
        options.host_tag = host_tag.clone();
    }
    if let Some(layer) = &args.layer {
        options.layer = Some(layer.clone());
    }
    if args.data_attributes {
        options.data_attributes = true;
    }
    if !args.exclude.is_empty() {
        options.exclude_from_data = Some(args.exclude.clone());
    }

    validate_options(options).context("Invalid transform options")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostcss.toml");
        fs::write(
            &path,
            "mode = \"tree\"\n[transform]\nhost_tag = \".x\"\nexclude_from_data = [\"part\"]\n",
        )
        .unwrap();

        let args = TransformArgs {
            host_tag: Some(":scope".to_string()),
            data_attributes: true,
            config: Some(path.to_str().unwrap().to_string()),
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.mode, hostcss::Mode::Tree);
        assert_eq!(config.transform.host_tag, ":scope");
        assert!(config.transform.data_attributes);
        assert_eq!(config.transform.excluded(), ["part".to_string()]);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let args = TransformArgs {
            layer: Some("a{".to_string()),
            config: Some(path.to_str().unwrap().to_string()),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_read_and_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.css");
        let output = dir.path().join("out.css");
        fs::write(&input, ":host { color: red; }").unwrap();

        let content = read_input(input.to_str().unwrap()).unwrap();
        write_output(Some(output.to_str().unwrap()), &content).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), ":host { color: red; }");

        assert!(read_input(dir.path().join("missing.css").to_str().unwrap()).is_err());
    }
}

// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: input stylesheet
fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .help("Input stylesheet (\"-\" for stdin)")
}

/// Common argument: output file
fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help("Write the result to a file instead of stdout")
}

/// Transform settings shared by `transform` and `bundle`
fn transform_args() -> [Arg; 5] {
    [
        Arg::new("host_tag")
            .long("host-tag")
            .value_name("TAG")
            .help("Text substituted for :host (default: &)"),
        Arg::new("layer")
            .short('l')
            .long("layer")
            .value_name("NAME")
            .help("Wrap the output in this cascade layer"),
        Arg::new("data_attributes")
            .short('d')
            .long("data-attributes")
            .action(ArgAction::SetTrue)
            .help("Rename [attr] selectors to [data-attr]"),
        Arg::new("exclude")
            .short('x')
            .long("exclude")
            .value_name("NAME")
            .action(ArgAction::Append)
            .help("Attribute name exempt from the data- remap (repeatable)"),
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("Configuration file (default: ./hostcss.toml when present)"),
    ]
}

fn build_cli() -> Command {
    Command::new("hostcss")
        .version(env!("CARGO_PKG_VERSION"))
        .author("hostcss Contributors")
        .about("Rewrite web-component :host stylesheets into plain CSS")
        .subcommand_required(false)
        .subcommand(
            Command::new("transform")
                .about("Rewrite :host selectors in a stylesheet")
                .arg(input_arg())
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_parser(["text", "tree"])
                        .help("Transformer to use (default: from config, else text)"),
                )
                .args(transform_args())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("bundle")
                .about("Transform a stylesheet and name it by content, for CSS-in-JS")
                .arg(input_arg())
                .args(transform_args())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print a JSON object with \"name\" and \"css\""),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("hash")
                .about("Print the content name of a stylesheet as it is")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell to generate completions for"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("hostcss.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}

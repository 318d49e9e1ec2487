// src/commands/hash.rs

//! Hash command

use anyhow::Result;
use hostcss::hash_name;

use super::read_input;

/// Print the content name of a stylesheet without transforming it
pub fn cmd_hash(input: &str) -> Result<()> {
    let css = read_input(input)?;
    println!("{}", hash_name(&css));
    Ok(())
}

// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use hostcss::TransformOptions;
use std::path::PathBuf;

/// Path to a fixture directory under tests/fixtures
pub fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load the (input.css, output.css) pair of a fixture
pub fn load_fixture(name: &str) -> (String, String) {
    let dir = fixture_dir(name);
    let input = std::fs::read_to_string(dir.join("input.css")).unwrap();
    let output = std::fs::read_to_string(dir.join("output.css")).unwrap();
    (input, output)
}

/// Options with the data- remap on and the given exclusions
pub fn data_options(exclude: &[&str]) -> TransformOptions {
    TransformOptions::new()
        .with_data_attributes(true)
        .with_exclude_from_data(exclude.iter().copied())
}

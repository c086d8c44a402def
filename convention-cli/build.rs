//! Build script for convention-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("convention")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve resources by naming convention")
        .long_about(
            "Finds the page behind a request path by trying each configured file \
             extension in priority order, and maps actions and result codes onto \
             pages below a result directory",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Document root that resource paths are resolved against")
                .value_name("DIR")
                .global(true)
                .env("CONVENTION_ROOT"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("DIR")
                .global(true)
                .env("CONVENTION_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("canonicalize")
                .about("Collapse repeated separators in request paths")
                .long_about("Print each path with every run of '/' collapsed into one"),
            Command::new("find")
                .about("Resolve a base path against the extension priority list")
                .long_about(
                    "Try BASE.ext for each extension in priority order and report the first \
                     existing file below the document root",
                ),
            Command::new("lookup")
                .about("Find the page for an action or result code")
                .long_about(
                    "Look for <action>-<code>, <action> and <action>/index pages below the \
                     result path",
                ),
            Command::new("extensions")
                .about("Show the effective extension priority list")
                .long_about("Print the extensions in the order they are tried, with result types"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a convention configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("convention.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

//! Command-line interface for the header splitter.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::{GeneratorConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::error::Result;
use crate::generator::generate_interfaces;

/// OpenVR Header Splitter - Split versioned SDK headers into per-interface headers.
///
/// Without arguments, reads `openvr-<version>.h` for every known SDK version
/// from the current directory and regenerates `interfaces/`.
#[derive(Parser, Debug)]
#[command(name = "openvr-header-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the openvr-<version>.h headers
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Output directory; all existing contents are deleted
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// SDK version to process, in ascending order (repeatable; default: all known versions)
    #[arg(short = 's', long = "sdk-version", value_name = "VERSION")]
    pub sdk_versions: Vec<String>,
}

impl Cli {
    /// Build the generator configuration from parsed arguments.
    pub fn to_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default()
            .with_input_dir(&self.input_dir)
            .with_output_dir(&self.output_dir);

        if self.sdk_versions.is_empty() {
            config
        } else {
            config.with_versions(self.sdk_versions.iter().cloned())
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    generate_command(&cli.to_config())
}

/// Execute the generation and print a summary.
fn generate_command(config: &GeneratorConfig) -> Result<()> {
    let report = generate_interfaces(config)?;

    println!();
    for version in &report.versions {
        println!(
            "  {} {} ({} interfaces)",
            style(&version.version).cyan(),
            version.input.display(),
            version.written.len()
        );
    }
    println!(
        "{} {} interface headers in {}",
        style("Generated").green().bold(),
        report.output_files().len(),
        config.output_dir().display()
    );

    Ok(())
}

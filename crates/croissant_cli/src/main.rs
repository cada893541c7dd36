//! croissant.validate CLI
//!
//! Validates dataset descriptions given as triples documents.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod triples;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use croissant_core::Issues;
use croissant_structure::{HierarchyWalker, Node, Validation, ValidatorOptions};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "croissant")]
#[command(about = "croissant.validate - dataset description validator", long_about = None)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dataset description and report issues
    Validate {
        /// Path to triples document
        #[arg(short, long)]
        input: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Warn about missing recommended properties
        #[arg(long)]
        warn_recommended: bool,
        /// Do not warn about repeated single-valued properties
        #[arg(long)]
        no_warn_multiple_values: bool,
    },
    /// List the materialized nodes
    Nodes {
        /// Path to triples document
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    valid: bool,
    nodes: &'a [Node],
    issues: &'a Issues,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("croissant=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn render(validation: &Validation, format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for node in &validation.nodes {
                out.push_str(&format!("{}\n", node));
            }
            if validation.issues.is_empty() {
                out.push_str("No issues found.\n");
            } else {
                out.push_str(&validation.issues.report());
            }
            Ok(out)
        }
        Format::Json => {
            let report = Report {
                valid: validation.is_valid(),
                nodes: &validation.nodes,
                issues: &validation.issues,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn exit_code(validation: &Validation) -> i32 {
    i32::from(!validation.is_valid())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Validate {
            input,
            format,
            warn_recommended,
            no_warn_multiple_values,
        } => {
            let graph = triples::load_graph(&input)?;
            let options = ValidatorOptions::new()
                .with_warn_recommended(warn_recommended)
                .with_warn_multiple_values(!no_warn_multiple_values);
            let validation = HierarchyWalker::new(&graph).with_options(options).walk();
            println!("{}", render(&validation, format)?);
            std::process::exit(exit_code(&validation));
        }
        Commands::Nodes { input } => {
            let graph = triples::load_graph(&input)?;
            let validation = HierarchyWalker::new(&graph).walk();
            for node in &validation.nodes {
                println!("{}", node);
            }
            eprint!("{}", validation.issues.report());
            std::process::exit(exit_code(&validation));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FIELDS: &str = r#"{
        "triples": [
            {"subject": "m", "predicate": "https://schema.org/name", "object": {"literal": "Titanic"}},
            {"subject": "m", "predicate": "https://schema.org/url", "object": {"literal": "https://www.openml.org/d/40945"}},
            {"subject": "m", "predicate": "http://mlcommons.org/schema/recordSet", "object": {"blank": "r"}},
            {"subject": "r", "predicate": "https://schema.org/name", "object": {"literal": "passengers"}}
        ]
    }"#;

    fn validate(text: &str) -> Validation {
        let graph = triples::parse_graph(text).unwrap();
        HierarchyWalker::new(&graph).walk()
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from([
            "croissant",
            "validate",
            "--input",
            "titanic.json",
            "--format",
            "json",
            "--warn-recommended",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate {
                format,
                warn_recommended,
                no_warn_multiple_values,
                ..
            } => {
                assert!(format == Format::Json);
                assert!(warn_recommended);
                assert!(!no_warn_multiple_values);
            }
            Commands::Nodes { .. } => panic!("expected validate"),
        }
    }

    #[test]
    fn test_render_text() {
        let out = render(&validate(NO_FIELDS), Format::Text).unwrap();
        assert!(out.starts_with("metadata \"Titanic\" (_:m)\nrecord set \"passengers\" (_:r)\n"));
        assert!(out.contains("[dataset(Titanic) > record_set(passengers)] The node doesn't define any field."));
    }

    #[test]
    fn test_render_json() {
        let out = render(&validate(NO_FIELDS), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["issues"]["errors"][0]["context"]["record_set_name"], "passengers");
        assert_eq!(value["issues"]["errors"][0]["context"]["field_name"], "");
        assert_eq!(value["issues"]["errors"][0]["context"]["dataset_name"], "Titanic");
    }

    #[test]
    fn test_exit_code_without_entry() {
        let validation = validate(r#"{"triples": []}"#);
        assert!(validation.nodes.is_empty());
        assert_eq!(exit_code(&validation), 1);
        assert!(validation.issues.report().contains("No dataset is defined in the file."));
    }

    #[test]
    fn test_exit_code_reflects_errors() {
        assert_eq!(exit_code(&validate(NO_FIELDS)), 1);
        assert_eq!(exit_code(&Validation::default()), 0);
    }
}

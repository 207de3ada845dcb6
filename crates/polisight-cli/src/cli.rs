//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Polisight CLI - Extract and review insurance product answers with an LLM.
#[derive(Debug, Parser)]
#[command(name = "polisight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides the configured one)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Model deployment name (overrides the configured one)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Azure OpenAI API key (overrides the configured one)
    #[arg(long, env = "AZURE_OPENAI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract answers for a product (or all products)
    Extract(ExtractArgs),

    /// Run the self-correction review over stored answers
    Review(ReviewArgs),

    /// Report document-size health per product
    Status(StatusArgs),

    /// Suggest categories and questions from the stored documents
    Suggest(SuggestArgs),

    /// List stored products and their extraction state
    List,

    /// Export a product's extraction result as JSON
    Export(ExportArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Product name (omit when using --all)
    pub product: Option<String>,

    /// Extract every stored product
    #[arg(long)]
    pub all: bool,

    /// Run the self-correction review and apply corrections after extraction
    #[arg(long)]
    pub review: bool,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Product name
    pub product: String,

    /// Print suggested corrections without applying or saving them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Product name (omit to check every stored product)
    pub product: Option<String>,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Sample category name to steer the suggestion (repeatable)
    #[arg(long = "sample-category")]
    pub sample_categories: Vec<String>,

    /// Sample question text to steer the suggestion (repeatable)
    #[arg(long = "sample-question")]
    pub sample_questions: Vec<String>,

    /// Print the suggested configuration without saving it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Product name
    pub product: String,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_all_with_review() {
        let cli = Cli::parse_from(["polisight", "extract", "--all", "--review"]);
        match cli.command {
            Command::Extract(args) => {
                assert!(args.all);
                assert!(args.review);
                assert!(args.product.is_none());
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn test_parse_global_model_override() {
        let cli = Cli::parse_from(["polisight", "status", "--model", "gpt-4o"]);
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_parse_suggest_samples() {
        let cli = Cli::parse_from([
            "polisight",
            "suggest",
            "--sample-category",
            "Dental",
            "--sample-category",
            "Optical",
            "--dry-run",
        ]);
        match cli.command {
            Command::Suggest(args) => {
                assert_eq!(args.sample_categories, vec!["Dental", "Optical"]);
                assert!(args.dry_run);
            }
            _ => panic!("expected suggest command"),
        }
    }
}

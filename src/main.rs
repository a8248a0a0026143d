use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sitelens::cli;
use sitelens::cli::analyze::OutputFormat;

#[derive(Parser)]
#[command(name = "sitelens", version)]
#[command(about = "AI-powered UX, design, SEO and product recommendations for a website")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single website and print the recommendations
    Analyze {
        /// Website URL (e.g., https://example.com)
        url: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Start with a section collapsed (ux, design, seo, product). Repeatable.
        #[arg(long)]
        collapse: Vec<String>,

        /// Path to config file (defaults to ./sitelens.toml or ~/.config/sitelens/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override the model (e.g., "gemini-2.5-flash-preview-04-17")
        #[arg(long)]
        model: Option<String>,

        /// Use mock LLM client for testing
        #[arg(long)]
        dry_run: bool,
    },

    /// Start an interactive session
    Shell {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,

        /// Override the model
        #[arg(long)]
        model: Option<String>,

        /// Use mock LLM client for testing
        #[arg(long)]
        dry_run: bool,
    },

    /// Check configuration and credentials
    Config {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            url,
            format,
            collapse,
            config,
            model,
            dry_run,
        } => {
            cli::analyze::run(url, format, collapse, config, model, dry_run).await?;
        }
        Commands::Shell {
            config,
            model,
            dry_run,
        } => {
            cli::shell::run(config, model, dry_run).await?;
        }
        Commands::Config { config } => {
            cli::config_check::run(config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["sitelens", "analyze", "https://example.com"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Analyze {
                url,
                format,
                collapse,
                config,
                model,
                dry_run,
            } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(format, OutputFormat::Text);
                assert!(collapse.is_empty());
                assert!(config.is_none());
                assert!(model.is_none());
                assert!(!dry_run);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_analyze_with_all_args() {
        let cli = Cli::try_parse_from([
            "sitelens",
            "analyze",
            "https://example.com",
            "--format",
            "json",
            "--collapse",
            "seo",
            "--collapse",
            "product",
            "--config",
            "custom.toml",
            "--model",
            "gemini-2.0-flash",
            "--dry-run",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze {
                format,
                collapse,
                config,
                model,
                dry_run,
                ..
            } => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(collapse, vec!["seo", "product"]);
                assert_eq!(config.unwrap(), "custom.toml");
                assert_eq!(model.unwrap(), "gemini-2.0-flash");
                assert!(dry_run);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_shell() {
        let cli = Cli::try_parse_from(["sitelens", "-v", "shell", "--dry-run"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Shell { dry_run, .. } => assert!(dry_run),
            _ => panic!("expected shell"),
        }
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["sitelens", "config", "--config", "x.toml"]).unwrap();
        match cli.command {
            Commands::Config { config } => assert_eq!(config.unwrap(), "x.toml"),
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_parse_analyze_requires_url() {
        assert!(Cli::try_parse_from(["sitelens", "analyze"]).is_err());
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = Cli::try_parse_from([
            "sitelens",
            "analyze",
            "https://example.com",
            "--format",
            "yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_subcommand() {
        assert!(Cli::try_parse_from(["sitelens"]).is_err());
    }

    #[test]
    fn test_parse_unknown_subcommand() {
        assert!(Cli::try_parse_from(["sitelens", "generate"]).is_err());
    }
}

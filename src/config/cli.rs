//! Command-line interface definition.
//!
//! The binary parses these types and converts them into the library
//! configuration structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_USER_AGENT, MAX_VARIANTS_PER_COMPANY,
};
use crate::config::types::{
    Config, DomainConfig, ExportFormat, LogFormat, LogLevel, ScrapeConfig,
};

/// Scrape an exhibitor directory and generate candidate domains per company.
#[derive(Debug, Parser)]
#[command(name = "exhibitor_scraper", version, about)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub log_format: LogFormat,

    /// Also write the log to this file (plain text, no colors)
    #[arg(long, value_parser, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the directory, generate domains and export the results
    Scrape(ScrapeArgs),
    /// Fetch the first directory page and report what the parser finds
    Test {
        /// First page of the exhibitor directory
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
    /// Generate domain candidates for one company name
    GenerateDomains {
        /// Company name, e.g. "Mustermann GmbH"
        name: String,

        /// TLD to generate (repeatable), e.g. --tlds .de --tlds .com
        #[arg(short, long = "tlds")]
        tlds: Vec<String>,

        /// Probe each candidate through DNS
        #[arg(short, long)]
        check_availability: bool,
    },
    /// Run domain generation and export over built-in sample companies
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Directory export files are written to
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "csv")]
    pub output_format: ExportFormat,

    /// Output filename stem (without extension)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Maximum number of pages to scrape
    #[arg(short = 'p', long, value_parser = clap::value_parser!(usize))]
    pub max_pages: Option<usize>,

    /// Skip domain generation
    #[arg(long)]
    pub no_domains: bool,

    /// Probe each candidate through DNS (slower)
    #[arg(short, long)]
    pub check_availability: bool,

    /// Maximum slug variants per company
    #[arg(short = 'm', long, default_value_t = MAX_VARIANTS_PER_COMPANY)]
    pub max_domains: usize,

    /// First page of the exhibitor directory
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory export files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// HTTP User-Agent header
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<ScrapeArgs> for Config {
    fn from(args: ScrapeArgs) -> Self {
        let defaults = Config::default();
        Config {
            scrape: ScrapeConfig {
                base_url: args.base_url,
                user_agent: args.user_agent,
                ..defaults.scrape
            },
            domains: DomainConfig {
                max_variants_per_company: args.max_domains,
                check_availability: args.check_availability,
                ..defaults.domains
            },
            generate_domains: !args.no_domains,
            max_pages: args.max_pages,
            output_format: args.output_format,
            output_dir: args.output_dir,
            output_file: args.output_file,
            ..defaults
        }
    }
}

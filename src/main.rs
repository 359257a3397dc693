//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `exhibitor_scraper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use exhibitor_scraper::config::{Cli, Command, GENERATE_COMMAND_TLDS};
use exhibitor_scraper::initialization::init_logger_with;
use exhibitor_scraper::{
    generate_domains_for, run_demo, run_scrape, run_test, Config, DomainConfig, DomainStatus,
    ScrapeConfig, ScrapeReport,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(
        cli.log_level.clone().into(),
        cli.log_format.clone(),
        cli.log_file.as_deref(),
    )
    .context("Failed to initialize logger")?;

    if let Err(e) = run_command(cli.command).await {
        eprintln!("exhibitor_scraper error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run_command(command: Command) -> Result<()> {
    match command {
        Command::Scrape(args) => {
            let report = run_scrape(Config::from(args)).await?;
            print_report(&report);
        }
        Command::Test { base_url } => {
            let scrape = ScrapeConfig {
                base_url,
                ..Default::default()
            };
            let diagnostics = run_test(&scrape).await?;
            if diagnostics.success {
                println!(
                    "✅ Scraper test successful: {} sample companies found on {}",
                    diagnostics.sample_companies_found, diagnostics.url
                );
            } else {
                anyhow::bail!(
                    "scraper test failed for {}: {}",
                    diagnostics.url,
                    diagnostics.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
        Command::GenerateDomains {
            name,
            tlds,
            check_availability,
        } => {
            let tlds = if tlds.is_empty() {
                GENERATE_COMMAND_TLDS.iter().map(|t| t.to_string()).collect()
            } else {
                tlds
            };
            let config = DomainConfig {
                tlds,
                check_availability,
                ..Default::default()
            };

            println!("🌐 Generating domains for: {name}");
            let candidates = generate_domains_for(&name, &config).await;
            if candidates.is_empty() {
                anyhow::bail!("no domains could be generated for {name:?}");
            }
            println!("Generated {} domain variants:", candidates.len());
            for candidate in &candidates {
                println!("  • {} ({})", candidate.domain, status_label(candidate.status));
            }
        }
        Command::Demo { format, output_dir } => {
            let config = Config {
                output_format: format,
                output_dir,
                ..Default::default()
            };
            let report = run_demo(config).await?;
            print_report(&report);
        }
    }
    Ok(())
}

fn print_report(report: &ScrapeReport) {
    match &report.output_path {
        Some(path) => {
            println!(
                "✅ Processed {} compan{} ({} domains) in {:.1}s",
                report.companies_extracted,
                if report.companies_extracted == 1 { "y" } else { "ies" },
                report.statistics.total_domains,
                report.elapsed_seconds
            );
            println!("Results saved in {}", path.display());
        }
        None => println!(
            "❌ No companies found on {} page{}",
            report.pages_visited,
            if report.pages_visited == 1 { "" } else { "s" }
        ),
    }
}

fn status_label(status: DomainStatus) -> colored::ColoredString {
    use colored::Colorize;
    match status {
        DomainStatus::Available => status.as_str().green(),
        DomainStatus::Taken => status.as_str().red(),
        DomainStatus::Unknown | DomainStatus::Error => status.as_str().yellow(),
    }
}

//! End-of-run summaries written to the log.

use log::info;

use crate::domain::DomainStatistics;
use crate::error_handling::ProcessingStats;
use crate::fetch::ScrapeDiagnostics;

/// Prints error and warning counters to the log.
///
/// Only non-zero counters are listed.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for (error_type, count) in error_stats.error_counts() {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }

    let total_warnings = error_stats.total_warnings();
    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for (warning_type, count) in error_stats.warning_counts() {
            info!("   {}: {}", warning_type.as_str(), count);
        }
    }
}

/// Prints domain generation statistics to the log.
pub fn print_domain_statistics(stats: &DomainStatistics) {
    info!("📊 Processing Statistics:");
    info!("   Total companies: {}", stats.total_companies);
    info!(
        "   Companies with generated domains: {}",
        stats.companies_with_domains
    );
    info!("   Total domains generated: {}", stats.total_domains);
    info!(
        "   Average domains per company: {}",
        stats.avg_domains_per_company
    );

    if !stats.status_distribution.is_empty() {
        info!("🔍 Domain Status Distribution:");
        for (status, count) in &stats.status_distribution {
            info!("   {}: {}", status, count);
        }
    }

    if !stats.tld_distribution.is_empty() {
        info!("🌐 TLD Distribution:");
        for (tld, count) in &stats.tld_distribution {
            info!("   {}: {}", tld, count);
        }
    }
}

/// Prints the outcome of a connectivity test to the log.
pub fn print_diagnostics(diagnostics: &ScrapeDiagnostics) {
    if !diagnostics.success {
        log::error!(
            "❌ Scraper test failed for {}: {}",
            diagnostics.url,
            diagnostics.error.as_deref().unwrap_or("unknown error")
        );
        return;
    }

    info!("✅ Scraper test successful");
    info!("   URL: {}", diagnostics.url);
    if let Some(status) = diagnostics.status_code {
        info!("   Status code: {}", status);
    }
    info!(
        "   Page title: {}",
        diagnostics.page_title.as_deref().unwrap_or("-")
    );
    info!(
        "   Content type: {}",
        diagnostics.content_type.as_deref().unwrap_or("-")
    );
    info!("   Page size: {} bytes", diagnostics.page_size);
    info!(
        "   Sample companies found: {}",
        diagnostics.sample_companies_found
    );
    for (index, company) in diagnostics.sample_companies.iter().enumerate() {
        match &company.city {
            Some(city) => info!("   {}. {} ({})", index + 1, company.company_name, city),
            None => info!("   {}. {}", index + 1, company.company_name),
        }
    }
}

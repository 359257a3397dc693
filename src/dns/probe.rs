//! Availability probing through DNS.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::TokioAsyncResolver;

use crate::models::DomainStatus;
use crate::utils::validate_domain;

/// Reports the registration status of a domain name.
///
/// Implementations never fail: anything that prevents a definite answer is
/// reported as [`DomainStatus::Error`].
#[async_trait]
pub trait DomainProbe: Send + Sync {
    async fn probe(&self, domain: &str, timeout: Duration) -> DomainStatus;
}

/// Probe backed by an async DNS resolver.
///
/// A name that resolves is `taken`, a name the resolver reports as having no
/// records is `available`. The answer is advisory: a registered domain
/// without address records also shows up as `available`.
pub struct DnsProbe {
    resolver: Arc<TokioAsyncResolver>,
}

impl DnsProbe {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DomainProbe for DnsProbe {
    async fn probe(&self, domain: &str, timeout: Duration) -> DomainStatus {
        if !validate_domain(domain) {
            return DomainStatus::Error;
        }

        // Fully qualified so the resolver never appends search domains
        let fqdn = format!("{domain}.");
        match tokio::time::timeout(timeout, self.resolver.lookup_ip(fqdn)).await {
            Ok(Ok(lookup)) => {
                if lookup.iter().next().is_some() {
                    DomainStatus::Taken
                } else {
                    DomainStatus::Available
                }
            }
            Ok(Err(e)) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => DomainStatus::Available,
                _ => {
                    log::debug!("DNS lookup failed for {domain}: {e}");
                    DomainStatus::Error
                }
            },
            Err(_) => {
                log::debug!("DNS lookup timed out for {domain} after {timeout:?}");
                DomainStatus::Error
            }
        }
    }
}

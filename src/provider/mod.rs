//! E-mail provider detection.
//!
//! [`resolve_provider`] maps an address to a [`Provider`] in two stages: an
//! exact lookup of the domain in [`KNOWN_DOMAINS`], then, for any other
//! domain, a keyword match over its MX hostnames in preference order.
//!
//! Resolution is total: malformed input, DNS failures and unrecognized mail
//! servers all yield [`Provider::Unknown`], never an error.

mod address;
mod error;
mod matcher;
mod tables;
mod types;

pub use address::{EmailInput, extract_domain};
pub use matcher::{match_exchange, match_mx_records};
pub use tables::{KNOWN_DOMAINS, KeywordRule, PROVIDER_KEYWORDS, known_provider};
pub use types::{Provider, ProviderParseError};

use error::ResolveFailure;

use crate::mx::{self, LookupMx, SystemLookup};

/// Resolve the provider of `input` using the system DNS configuration.
///
/// Known domains are answered without any network activity. Must be awaited
/// inside a Tokio runtime.
pub async fn resolve_provider<I>(input: &I) -> Provider
where
    I: EmailInput + ?Sized,
{
    ProviderResolver::system().resolve(input).await
}

/// Provider resolution over a pluggable MX source.
#[derive(Debug, Clone, Default)]
pub struct ProviderResolver<L = SystemLookup> {
    lookup: L,
}

impl ProviderResolver<SystemLookup> {
    pub fn system() -> Self {
        Self::new(SystemLookup)
    }
}

impl<L: LookupMx> ProviderResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Never fails; see the module documentation.
    pub async fn resolve<I>(&self, input: &I) -> Provider
    where
        I: EmailInput + ?Sized,
    {
        settle(self.detect(input).await)
    }

    async fn detect<I>(&self, input: &I) -> Result<Provider, ResolveFailure>
    where
        I: EmailInput + ?Sized,
    {
        let email = input
            .as_email()
            .filter(|email| !email.is_empty())
            .ok_or(ResolveFailure::InvalidInput)?;
        let domain = extract_domain(email).ok_or(ResolveFailure::MalformedAddress)?;

        if let Some(provider) = known_provider(&domain) {
            return Ok(provider);
        }

        #[cfg(feature = "with-tracing")]
        tracing::trace!(%domain, "domain not in known table, querying MX records");

        let status = match mx::resolve_with(&self.lookup, &domain).await {
            Ok(status) => status,
            Err(source) => return Err(ResolveFailure::Dns { domain, source }),
        };
        if status.is_empty() {
            return Err(ResolveFailure::NoRecords { domain });
        }

        matcher::find_provider(PROVIDER_KEYWORDS, status.records())
            .ok_or(ResolveFailure::NoMatch { domain })
    }
}

// Single point where failures become `Unknown`.
fn settle(outcome: Result<Provider, ResolveFailure>) -> Provider {
    match outcome {
        Ok(provider) => provider,
        Err(_failure) => {
            #[cfg(feature = "with-tracing")]
            tracing::debug!(reason = %_failure, "provider unresolved");
            Provider::Unknown
        }
    }
}

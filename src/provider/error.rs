use thiserror::Error;

use crate::mx::Error as MxError;

/// Why a resolution ended without a provider. Never leaves the crate: every
/// variant collapses to `Provider::Unknown` in `settle`.
#[derive(Debug, Error)]
pub(crate) enum ResolveFailure {
    #[error("input is not a non-empty string")]
    InvalidInput,
    #[error("input is not of the form local@domain")]
    MalformedAddress,
    #[error("MX lookup for {domain} failed: {source}")]
    Dns {
        domain: String,
        #[source]
        source: MxError,
    },
    #[error("{domain} publishes no MX records")]
    NoRecords { domain: String },
    #[error("no MX record of {domain} matches a known provider")]
    NoMatch { domain: String },
}

use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: ResolveError,
    },
    #[error("MX lookup failed: {source}")]
    Lookup {
        #[source]
        source: ResolveError,
    },
}

impl MxError {
    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }

    pub(crate) fn resolver_init(source: ResolveError) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn lookup(source: ResolveError) -> Self {
        Self::Lookup { source }
    }
}

use async_trait::async_trait;
use trust_dns_resolver::{
    TokioAsyncResolver,
    error::{ResolveError, ResolveErrorKind},
};

use super::{Error, MxRecord, MxStatus};

/// Lookup MX records for `domain` using the system resolver.
///
/// The domain is normalized via IDNA before querying DNS. The resulting
/// [`MxStatus`] contains the records in ascending preference; records sharing
/// a preference stay in the order the resolver returned them.
pub async fn check_mx(domain: &str) -> Result<MxStatus, Error> {
    resolve_with(&SystemLookup, domain).await
}

pub(crate) async fn resolve_with<R>(resolver: &R, domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx + ?Sized,
{
    let ascii = normalize_domain(domain)?;
    let records = resolver.lookup_mx(&ascii).await?;

    let mut unique: Vec<MxRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !unique.contains(&record) {
            unique.push(record);
        }
    }
    // stable: ties keep resolver order
    unique.sort_by_key(|record| record.preference);

    if unique.is_empty() {
        Ok(MxStatus::NoRecords)
    } else {
        Ok(MxStatus::Records(unique))
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

/// Source of MX records for a domain.
///
/// An empty vector means the domain publishes no MX records; implementations
/// should map "no records found" answers to it rather than to an error.
#[async_trait]
pub trait LookupMx: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error>;
}

#[async_trait]
impl LookupMx for TokioAsyncResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        let lookup = match self.mx_lookup(domain).await {
            Ok(lookup) => lookup,
            Err(err) => {
                if should_treat_as_empty(&err) {
                    return Ok(Vec::new());
                }
                return Err(Error::lookup(err));
            }
        };
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }
}

#[async_trait]
impl<T> LookupMx for &T
where
    T: LookupMx + ?Sized,
{
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain).await
    }
}

/// [`LookupMx`] backed by a resolver built from the system configuration
/// (`/etc/resolv.conf` on unix) at each lookup.
///
/// Requires a running Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

#[async_trait]
impl LookupMx for SystemLookup {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        let resolver =
            TokioAsyncResolver::tokio_from_system_conf().map_err(Error::resolver_init)?;
        resolver.lookup_mx(domain).await
    }
}

fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

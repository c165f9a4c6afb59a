#![forbid(unsafe_code)]
//! mailprovider_lib — detect the e-mail provider behind an address

pub mod mx;
pub use mx::{Error as MxError, LookupMx, MxRecord, MxStatus, SystemLookup, check_mx};

pub mod provider;
pub use provider::{
    EmailInput,
    KNOWN_DOMAINS,
    KeywordRule,
    PROVIDER_KEYWORDS,
    Provider,
    ProviderParseError,
    ProviderResolver,
    extract_domain,
    known_provider,
    match_exchange,
    match_mx_records,
    resolve_provider,
};

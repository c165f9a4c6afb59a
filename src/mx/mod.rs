//! DNS MX resolution helpers.
//!
//! The public entry point is [`check_mx`], which performs an asynchronous lookup
//! using the system resolver and returns a [`MxStatus`] describing the outcome.
//! [`LookupMx`] is the seam used by the provider resolver to query DNS, so a
//! different resolver (or a stub) can be plugged in.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, SystemLookup, check_mx};
pub use types::{MxRecord, MxStatus};

pub(crate) use resolver::resolve_with;

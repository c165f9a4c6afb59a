//! Compile-time lookup tables: exact domains first, MX keywords second.

use phf::phf_map;

use super::Provider;

/// Exact-match domains served by a known provider (fast path, no DNS).
pub const KNOWN_DOMAINS: phf::Map<&'static str, Provider> = phf_map! {
    "gmail.com" => Provider::Gmail,
    "googlemail.com" => Provider::Gmail,
    "outlook.com" => Provider::Outlook,
    "hotmail.com" => Provider::Outlook,
    "live.com" => Provider::Outlook,
    "msn.com" => Provider::Outlook,
    "yahoo.com" => Provider::Yahoo,
    "yahoo.co.uk" => Provider::Yahoo,
    "yahoo.fr" => Provider::Yahoo,
    "zoho.com" => Provider::Zoho,
    "protonmail.com" => Provider::Protonmail,
    "proton.me" => Provider::Protonmail,
    "icloud.com" => Provider::Icloud,
    "me.com" => Provider::Icloud,
    "mac.com" => Provider::Icloud,
    "fastmail.com" => Provider::Fastmail,
    "fastmail.fm" => Provider::Fastmail,
};

/// Substrings searched for in MX exchange hostnames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub provider: Provider,
}

impl KeywordRule {
    /// `hostname` must already be lowercase.
    pub fn matches(&self, hostname: &str) -> bool {
        self.keywords.iter().any(|keyword| hostname.contains(keyword))
    }
}

/// Rules are evaluated in declaration order; the first hit wins.
pub const PROVIDER_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["google", "gmail", "googlemail"],
        provider: Provider::Gmail,
    },
    KeywordRule {
        keywords: &["outlook", "hotmail", "live", "microsoft", "office365"],
        provider: Provider::Outlook,
    },
    KeywordRule {
        keywords: &["yahoo", "yahoodns"],
        provider: Provider::Yahoo,
    },
    KeywordRule {
        keywords: &["zoho"],
        provider: Provider::Zoho,
    },
    KeywordRule {
        keywords: &["protonmail"],
        provider: Provider::Protonmail,
    },
    KeywordRule {
        keywords: &["icloud"],
        provider: Provider::Icloud,
    },
    KeywordRule {
        keywords: &["messagingengine", "fastmail"],
        provider: Provider::Fastmail,
    },
];

/// Verbatim lookup in [`KNOWN_DOMAINS`].
pub fn known_provider(domain: &str) -> Option<Provider> {
    KNOWN_DOMAINS.get(domain).copied()
}

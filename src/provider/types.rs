use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// E-mail provider behind an address.
///
/// `Unknown` covers every negative outcome: unrecognized provider, malformed
/// input and DNS failures alike.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Provider {
    Gmail,
    Outlook,
    Yahoo,
    Zoho,
    Protonmail,
    Icloud,
    Fastmail,
    #[default]
    Unknown,
}

impl Provider {
    pub const ALL: [Provider; 8] = [
        Provider::Gmail,
        Provider::Outlook,
        Provider::Yahoo,
        Provider::Zoho,
        Provider::Protonmail,
        Provider::Icloud,
        Provider::Fastmail,
        Provider::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Provider::Gmail => "gmail",
            Provider::Outlook => "outlook",
            Provider::Yahoo => "yahoo",
            Provider::Zoho => "zoho",
            Provider::Protonmail => "protonmail",
            Provider::Icloud => "icloud",
            Provider::Fastmail => "fastmail",
            Provider::Unknown => "unknown",
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Provider::Unknown)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized provider token '{token}'")]
pub struct ProviderParseError {
    pub token: String,
}

impl FromStr for Provider {
    type Err = ProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProviderParseError {
                token: trimmed.to_string(),
            })
    }
}

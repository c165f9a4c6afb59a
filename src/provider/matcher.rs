use crate::mx::MxRecord;

use super::Provider;
use super::tables::{KeywordRule, PROVIDER_KEYWORDS};

/// Provider whose keywords appear in `exchange`, checked in table order.
pub fn match_exchange(exchange: &str) -> Option<Provider> {
    match_exchange_with(PROVIDER_KEYWORDS, exchange)
}

/// Provider of the most preferred MX record that matches a keyword, or
/// [`Provider::Unknown`] when none does.
pub fn match_mx_records(records: &[MxRecord]) -> Provider {
    find_provider(PROVIDER_KEYWORDS, records).unwrap_or(Provider::Unknown)
}

pub(crate) fn match_exchange_with(rules: &[KeywordRule], exchange: &str) -> Option<Provider> {
    let hostname = exchange.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&hostname))
        .map(|rule| rule.provider)
}

// stable sort: equal preferences keep the order DNS returned them in
pub(crate) fn find_provider(rules: &[KeywordRule], records: &[MxRecord]) -> Option<Provider> {
    let mut sorted: Vec<&MxRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.preference);
    sorted
        .into_iter()
        .find_map(|record| match_exchange_with(rules, &record.exchange))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_anywhere_in_hostname() {
        assert_eq!(match_exchange("aspmx.l.google.com"), Some(Provider::Gmail));
        assert_eq!(
            match_exchange("example-com.mail.protection.outlook.com"),
            Some(Provider::Outlook)
        );
        assert_eq!(
            match_exchange("in1-smtp.messagingengine.com"),
            Some(Provider::Fastmail)
        );
        assert_eq!(match_exchange("mx.zoho.eu"), Some(Provider::Zoho));
        assert_eq!(match_exchange("mail.protonmail.ch"), Some(Provider::Protonmail));
        assert_eq!(match_exchange("mx01.mail.icloud.com"), Some(Provider::Icloud));
        assert_eq!(match_exchange("mta5.am0.yahoodns.net"), Some(Provider::Yahoo));
        assert_eq!(match_exchange("mx.example.net"), None);
    }

    #[test]
    fn hostname_is_compared_lowercased() {
        assert_eq!(match_exchange("ASPMX.L.GOOGLE.COM."), Some(Provider::Gmail));
    }

    #[test]
    fn naive_containment_over_matches() {
        // "live" inside "delivery" is enough
        assert_eq!(match_exchange("delivery.example.net"), Some(Provider::Outlook));
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // both "google" and "outlook" occur; gmail is declared first
        assert_eq!(
            match_exchange("google-outlook-bridge.example.com"),
            Some(Provider::Gmail)
        );

        let rules = [
            KeywordRule {
                keywords: &["bridge"],
                provider: Provider::Zoho,
            },
            KeywordRule {
                keywords: &["google"],
                provider: Provider::Gmail,
            },
        ];
        assert_eq!(
            match_exchange_with(&rules, "google-bridge.example.com"),
            Some(Provider::Zoho)
        );
    }

    #[test]
    fn lowest_preference_is_tested_first() {
        let records = vec![
            MxRecord::new(20, "mx2.example-provider.com"),
            MxRecord::new(10, "mx1.google.com"),
        ];
        assert_eq!(match_mx_records(&records), Provider::Gmail);

        let records = vec![
            MxRecord::new(5, "mx.zoho.com"),
            MxRecord::new(10, "mx1.google.com"),
        ];
        assert_eq!(match_mx_records(&records), Provider::Zoho);
    }

    #[test]
    fn falls_through_unmatched_records() {
        let records = vec![
            MxRecord::new(10, "mx1.example.net"),
            MxRecord::new(20, "backup.icloud.com"),
        ];
        assert_eq!(match_mx_records(&records), Provider::Icloud);
    }

    #[test]
    fn equal_preference_keeps_input_order() {
        let records = vec![
            MxRecord::new(10, "mx.fastmail.com"),
            MxRecord::new(10, "mx.google.com"),
        ];
        assert_eq!(match_mx_records(&records), Provider::Fastmail);
    }

    #[test]
    fn no_records_or_no_match_is_unknown() {
        assert_eq!(match_mx_records(&[]), Provider::Unknown);
        assert_eq!(
            match_mx_records(&[MxRecord::new(10, "mx.example.net")]),
            Provider::Unknown
        );
    }
}

use std::borrow::Cow;

/// Anything a caller may hand to the resolver.
///
/// Values that carry no text (absent options, JSON numbers, ...) return `None`
/// and resolve to [`Provider::Unknown`](super::Provider::Unknown).
pub trait EmailInput {
    fn as_email(&self) -> Option<&str>;
}

impl EmailInput for str {
    fn as_email(&self) -> Option<&str> {
        Some(self)
    }
}

impl EmailInput for String {
    fn as_email(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl EmailInput for Cow<'_, str> {
    fn as_email(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: EmailInput + ?Sized> EmailInput for &T {
    fn as_email(&self) -> Option<&str> {
        (**self).as_email()
    }
}

impl<T: EmailInput + ?Sized> EmailInput for Box<T> {
    fn as_email(&self) -> Option<&str> {
        (**self).as_email()
    }
}

impl<T: EmailInput> EmailInput for Option<T> {
    fn as_email(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.as_email())
    }
}

#[cfg(feature = "with-serde")]
impl EmailInput for serde_json::Value {
    fn as_email(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Lowercased domain of `email`, or `None` unless the trimmed input splits on
/// `@` into exactly two non-empty parts.
pub fn extract_domain(email: &str) -> Option<String> {
    let normalized = email.trim().to_lowercase();
    let parts: Vec<&str> = normalized.split('@').collect();
    match parts.as_slice() {
        [local, domain] if !local.is_empty() && !domain.is_empty() => Some((*domain).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lowercased_domain() {
        assert_eq!(
            extract_domain("  Alice@Example.COM ").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        for input in ["", "invalid", "user@", "@example.com", "user@@example.com", "a@b@c"] {
            assert_eq!(extract_domain(input), None, "{input:?}");
        }
    }

    #[test]
    fn option_and_box_inputs() {
        let absent: Option<&str> = None;
        assert_eq!(absent.as_email(), None);
        assert_eq!(Some("a@b.c").as_email(), Some("a@b.c"));
        let boxed: Box<str> = "a@b.c".into();
        assert_eq!(boxed.as_email(), Some("a@b.c"));
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn json_values_only_yield_strings() {
        use serde_json::json;
        assert_eq!(json!("a@b.c").as_email(), Some("a@b.c"));
        assert_eq!(json!(123).as_email(), None);
        assert_eq!(json!(null).as_email(), None);
        assert_eq!(json!({"email": "a@b.c"}).as_email(), None);
    }
}

//! Decoy-field bot detection.

use crate::submission::ContactSubmission;

/// True when the hidden decoy field carries any content.
///
/// People never see the field, so anything in it came from an automated
/// filler (or, rarely, a browser autofill).
pub fn is_bot(submission: &ContactSubmission) -> bool {
    !submission.honeypot.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_decoy_is_human() {
        let s = ContactSubmission::with_fields("Jane", "jane@x.com", "hi");
        assert!(!is_bot(&s));
    }

    #[test]
    fn test_filled_decoy_is_bot() {
        let s = ContactSubmission::with_fields("Jane", "jane@x.com", "hi").with_honeypot("filled");
        assert!(is_bot(&s));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let s = ContactSubmission::new().with_honeypot(" ");
        assert!(is_bot(&s));
    }
}

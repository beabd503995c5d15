//! Keyword rules deciding whether an amount is a debit or a credit.
//!
//! No model needed: a substring match on the case-folded description covers
//! the statement layouts this engine targets. The keyword list and the
//! fallback bucket are plain data so they can come from config.

use passbook_core::Bucket;
use serde::{Deserialize, Serialize};

/// Keywords that mark an amount as money coming in
pub const DEFAULT_CREDIT_KEYWORDS: &[&str] = &["credit", "deposit", "salary", "interest"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classifier {
    /// Matched case-insensitively as substrings of the description
    pub credit_keywords: Vec<String>,
    /// Bucket used when no keyword matches
    pub default_bucket: Bucket,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            credit_keywords: DEFAULT_CREDIT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            default_bucket: Bucket::Debit,
        }
    }
}

impl Classifier {
    pub fn new(credit_keywords: impl IntoIterator<Item = impl Into<String>>, default_bucket: Bucket) -> Self {
        Self {
            credit_keywords: credit_keywords.into_iter().map(Into::into).collect(),
            default_bucket,
        }
    }

    /// Pick the bucket for a transaction with this description.
    pub fn classify(&self, description: &str) -> Bucket {
        let desc = description.to_lowercase();
        let is_credit = self
            .credit_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .any(|k| !k.is_empty() && desc.contains(&k));

        if is_credit {
            Bucket::Credit
        } else {
            self.default_bucket
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let c = Classifier::default();
        assert_eq!(c.classify("SALARY CREDIT"), Bucket::Credit);
        assert_eq!(c.classify("Cash Deposit Branch"), Bucket::Credit);
        assert_eq!(c.classify("Interest Paid"), Bucket::Credit);
        assert_eq!(c.classify("ATM WITHDRAWAL"), Bucket::Debit);
        assert_eq!(c.classify("RENT PAYMENT"), Bucket::Debit);
        assert_eq!(c.classify(""), Bucket::Debit);
    }

    #[test]
    fn test_substring_not_word_match() {
        // "creditcard" still contains "credit"
        let c = Classifier::default();
        assert_eq!(c.classify("HDFC CREDITCARD BILLPAY"), Bucket::Credit);
    }

    #[test]
    fn test_custom_vocabulary_and_default() {
        let c = Classifier::new(["REFUND", "cashback"], Bucket::Credit);
        assert_eq!(c.classify("Amazon refund"), Bucket::Credit);
        assert_eq!(c.classify("anything else"), Bucket::Credit);

        let c = Classifier::new(["refund"], Bucket::Debit);
        assert_eq!(c.classify("SALARY"), Bucket::Debit);
    }

    #[test]
    fn test_blank_keyword_ignored() {
        let c = Classifier::new(["", "  "], Bucket::Debit);
        assert_eq!(c.classify("SALARY"), Bucket::Debit);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let c: Classifier = toml::from_str(r#"default_bucket = "credit""#).unwrap();
        assert_eq!(c.default_bucket, Bucket::Credit);
        assert_eq!(c.credit_keywords.len(), DEFAULT_CREDIT_KEYWORDS.len());

        let c: Classifier = toml::from_str(r#"credit_keywords = ["neft in"]"#).unwrap();
        assert_eq!(c.credit_keywords, vec!["neft in".to_string()]);
        assert_eq!(c.default_bucket, Bucket::Debit);
    }
}

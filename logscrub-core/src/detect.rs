//! Secret-shape detection over raw text.
//!
//! Each [`SecretPattern`] finds spans matching a known secret shape (bearer
//! tokens, vendor API keys, JWTs, PEM key blocks, card numbers) and replaces
//! them with the configured mask. A pattern may designate a capture group to
//! keep, so `Bearer <token>` masks only the token and preserves the prefix.

use std::borrow::Cow;

use regex::Regex;

#[derive(Debug, Clone)]
pub struct SecretPattern {
    name: String,
    regex: Regex,
    keep_group: Option<usize>,
    min_len: usize,
}

impl SecretPattern {
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(pattern)?,
            keep_group: None,
            min_len: 0,
        })
    }

    /// Keep this capture group in the output and mask only the rest of the match.
    pub fn keep_group(mut self, group: usize) -> Self {
        self.keep_group = Some(group);
        self
    }

    /// Ignore matches shorter than this many bytes.
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = len;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every qualifying match in `text` with `mask`.
    pub fn apply<'a>(&self, text: &'a str, mask: &str) -> Cow<'a, str> {
        self.regex.replace_all(text, |caps: &regex::Captures| {
            let whole = &caps[0];
            if whole.len() < self.min_len {
                return whole.to_string();
            }
            match self.keep_group.and_then(|g| caps.get(g)) {
                Some(prefix) => format!("{}{}", prefix.as_str(), mask),
                None => mask.to_string(),
            }
        })
    }
}

/// Run every pattern over `text` in order, masking all matches.
pub fn mask_secrets(patterns: &[SecretPattern], text: &str, mask: &str) -> String {
    let mut result = text.to_string();
    for pattern in patterns {
        if let Cow::Owned(masked) = pattern.apply(&result, mask) {
            result = masked;
        }
    }
    result
}

/// The built-in detector set. Order matters only for overlapping shapes
/// (the PEM block detector runs before the JWT detector so a key block is
/// masked as a unit).
pub fn default_patterns() -> Vec<SecretPattern> {
    let defs: &[(&str, &str, Option<usize>, usize)] = &[
        // Bearer tokens: keep the scheme word, mask the token.
        ("bearer-token", r"(?i)(bearer\s+)[A-Za-z0-9\-._~+/]+=*", Some(1), 0),
        // API key assignments in various spellings; value must be 20+ chars.
        (
            "api-key-assignment",
            r#"(?i)(api[_-]?key["']?\s*[:=]\s*["']?)[A-Za-z0-9\-_]{20,}"#,
            Some(1),
            0,
        ),
        ("x-api-key-header", r"(?i)(x-api-key:\s*)[A-Za-z0-9\-_]{20,}", Some(1), 0),
        ("aws-access-key", r"AKIA[0-9A-Z]{16}", None, 0),
        (
            "aws-secret-key-assignment",
            r#"(?i)(aws[_-]?secret[_-]?access[_-]?key["']?\s*[:=]\s*["']?)[A-Za-z0-9/+=]{40}"#,
            Some(1),
            0,
        ),
        ("google-api-key", r"AIza[0-9A-Za-z\-_]{35}", None, 0),
        ("github-token", r"gh[ps]_[A-Za-z0-9]{36}", None, 0),
        // PEM private keys: mask the entire block, or everything after the
        // header when the END footer is missing.
        (
            "pem-private-key",
            r"(?s)-----BEGIN (?:RSA |EC |OPENSSH )?PRIVATE KEY-----.*?(?:-----END (?:RSA |EC |OPENSSH )?PRIVATE KEY-----|\z)",
            None,
            0,
        ),
        // JWTs: three dot-separated base64url segments, header starting with
        // the base64 of `{"`. Short lookalikes are left alone.
        ("jwt", r"eyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*", None, 51),
        // Card numbers by issuer prefix (Visa, MasterCard, Amex, Diners, Discover).
        (
            "credit-card",
            r"\b(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|6(?:011|5[0-9]{2})[0-9]{12})\b",
            None,
            0,
        ),
    ];

    defs
        .iter()
        .map(|&(name, pattern, keep, min_len)| {
            let mut p = SecretPattern::new(name, pattern)
                .unwrap_or_else(|e| panic!("built-in pattern {name} failed to compile: {e}"))
                .min_len(min_len);
            if let Some(g) = keep {
                p = p.keep_group(g);
            }
            p
        })
        .collect()
}

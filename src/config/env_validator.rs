//! Environment variable validation
//!
//! Invalid values fall back to the configured value with a warning and,
//! when one is close enough, a typo suggestion.

use std::io::Write;

/// Accepted values for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    accepted: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, accepted: &'a [&'a str]) -> Self {
        Self { var_name, accepted }
    }

    /// Parse `raw`, warning on stderr and keeping `fallback` when invalid.
    pub fn parse<T, F>(&self, raw: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(raw, parser, fallback, &mut std::io::stderr())
    }

    /// Same as [`parse`](Self::parse) with the warning sent to `out`.
    pub fn parse_with_writer<T, F, W>(&self, raw: &str, parser: F, fallback: T, out: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(raw) {
            return parsed;
        }

        let hint = self
            .closest(raw)
            .map(|s| format!(" (did you mean '{}'?)", s))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "warning: ignoring {}='{}'{}; expected one of: {}",
            self.var_name,
            raw,
            hint,
            self.accepted.join(", ")
        );
        fallback
    }

    fn closest(&self, raw: &str) -> Option<&'a str> {
        let input = raw.trim().to_lowercase();
        self.accepted
            .iter()
            .map(|&candidate| (candidate, levenshtein(&input, candidate)))
            .filter(|&(_, dist)| dist > 0 && dist <= 2)
            .min_by_key(|&(_, dist)| dist)
            .map(|(candidate, _)| candidate)
    }
}

/// Edit distance between two ASCII-ish strings (byte based)
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;

    fn run(raw: &str) -> (ColorMode, String) {
        let validator = EnvVarValidator::new("DISTSPLIT_COLOR", &["auto", "always", "never"]);
        let mut out = Vec::new();
        let mode = validator.parse_with_writer(raw, ColorMode::parse, ColorMode::Auto, &mut out);
        (mode, String::from_utf8(out).unwrap())
    }

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("never", "never"), 0);
        assert_eq!(levenshtein("nevr", "never"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("alwasy", "always"), 2);
    }

    #[test]
    fn valid_value_is_parsed_silently() {
        let (mode, msg) = run("Always");
        assert_eq!(mode, ColorMode::Always);
        assert!(msg.is_empty());
    }

    #[test]
    fn invalid_value_keeps_fallback_and_suggests() {
        let (mode, msg) = run("nevr");
        assert_eq!(mode, ColorMode::Auto);
        assert!(msg.contains("DISTSPLIT_COLOR='nevr'"), "{msg}");
        assert!(msg.contains("did you mean 'never'?"), "{msg}");
        assert!(msg.contains("auto, always, never"), "{msg}");
    }

    #[test]
    fn distant_value_has_no_suggestion() {
        let (_, msg) = run("rainbow-please");
        assert!(msg.starts_with("warning:"));
        assert!(!msg.contains("did you mean"), "{msg}");
    }
}

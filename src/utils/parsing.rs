//! String parsing utilities

/// Split a `key: value` line into its trimmed halves.
///
/// Only the first colon separates, so values such as `model name : Intel(R) Core(TM) i5`
/// survive intact.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Parse the first whitespace-separated token as an unsigned integer.
/// `"2098000 kB"` yields `2098000`.
pub fn parse_leading_u64(text: &str) -> Option<u64> {
    text.split_whitespace().next()?.parse().ok()
}

/// Keep at most `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon_only() {
        assert_eq!(
            split_key_value("model name\t: AMD Ryzen 5: 3600"),
            Some(("model name", "AMD Ryzen 5: 3600"))
        );
        assert_eq!(split_key_value("no separator here"), None);
    }

    #[test]
    fn empty_values_stay_empty() {
        assert_eq!(split_key_value("flags\t:"), Some(("flags", "")));
    }

    #[test]
    fn leading_integer() {
        assert_eq!(parse_leading_u64(" 2098000 kB"), Some(2_098_000));
        assert_eq!(parse_leading_u64("kB"), None);
        assert_eq!(parse_leading_u64(""), None);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }
}

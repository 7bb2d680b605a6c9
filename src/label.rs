//! Human-readable label derivation from raw status strings.

/// Derives a display label from a status string.
///
/// Every underscore and hyphen is replaced 1:1 with a single space, and the
/// first letter of each whitespace-separated word is uppercased. All other
/// characters are preserved verbatim; in particular the remainder of each
/// word is not case-folded, so `"ACTIVE"` stays `"ACTIVE"`.
///
/// Consecutive separators produce consecutive spaces (each is replaced, none
/// are merged), and a string of only separators becomes a string of spaces.
///
/// # Example
///
/// ```rust
/// use insignia::format_label;
///
/// assert_eq!(format_label("in_progress"), "In Progress");
/// assert_eq!(format_label("on-hold"), "On Hold");
/// assert_eq!(format_label("active"), "Active");
/// assert_eq!(format_label(""), "");
/// ```
pub fn format_label(status: &str) -> String {
    let mut out = String::with_capacity(status.len());
    let mut at_word_start = true;

    for c in status.chars() {
        if c == '_' || c == '-' {
            out.push(' ');
            at_word_start = true;
        } else if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_to_space() {
        assert_eq!(format_label("in_progress"), "In Progress");
    }

    #[test]
    fn test_hyphen_to_space() {
        assert_eq!(format_label("on-hold"), "On Hold");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format_label("active"), "Active");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_only_separators_become_spaces() {
        assert_eq!(format_label("__-"), "   ");
    }

    #[test]
    fn test_consecutive_separators_are_not_merged() {
        assert_eq!(format_label("a__b"), "A  B");
        assert_eq!(format_label("a-_b"), "A  B");
    }

    #[test]
    fn test_remaining_letters_preserved_verbatim() {
        assert_eq!(format_label("ACTIVE"), "ACTIVE");
        assert_eq!(format_label("mixedCase_word"), "MixedCase Word");
    }

    #[test]
    fn test_existing_whitespace_preserved() {
        assert_eq!(format_label("needs attention"), "Needs Attention");
        assert_eq!(format_label(" leading"), " Leading");
    }

    #[test]
    fn test_multibyte_first_letter() {
        assert_eq!(format_label("état_final"), "État Final");
    }

    #[test]
    fn test_digits_and_punctuation_untouched() {
        assert_eq!(format_label("v2_ready"), "V2 Ready");
        assert_eq!(format_label("50%_done"), "50% Done");
    }
}

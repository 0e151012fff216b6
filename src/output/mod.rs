// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod reporter;
pub mod terminal;

/// One-line snippet of a source text for `corpus --preview`.
///
/// Runs of whitespace (including line breaks) collapse to a single space, and
/// the result is cut after `max_chars` characters with a trailing ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &flat[..cut]),
        None => flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_is_unchanged() {
        assert_eq!(preview("The hound.", 20), "The hound.");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_preview_cuts_on_character_boundary() {
        assert_eq!(preview("Café Royal", 4), "Café…");
        assert_eq!(preview("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_preview_flattens_line_breaks() {
        assert_eq!(preview("CHAPTER I.\n\n  Mr. Sherlock Holmes", 100), "CHAPTER I. Mr. Sherlock Holmes");
    }
}

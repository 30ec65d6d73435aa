//! Paragraph reassembly
//!
//! Joins selected sentences into one line and repairs spacing left behind by
//! text extraction.

/// Join sentences with single spaces and clean the result.
pub fn join_paragraph<S: AsRef<str>>(sentences: &[S]) -> String {
    let joined = sentences
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    clean_paragraph(&joined)
}

/// Normalize a paragraph for presentation.
///
/// Inserts a space after `.`, `?` or `!` when an ASCII letter or digit
/// follows directly, collapses every whitespace run to one space, and trims.
/// Applying it twice gives the same result as applying it once.
pub fn clean_paragraph(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() + text.len() / 16);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        spaced.push(c);
        if matches!(c, '.' | '?' | '!') && chars.peek().is_some_and(char::is_ascii_alphanumeric) {
            spaced.push(' ');
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_single_space() {
        let out = join_paragraph(&["First one.", "Second one."]);
        assert_eq!(out, "First one. Second one.");
    }

    #[test]
    fn test_space_inserted_after_glued_terminal() {
        assert_eq!(clean_paragraph("End.Start again!Next?3 more"), "End. Start again! Next? 3 more");
    }

    #[test]
    fn test_decimal_numbers_are_split() {
        // Extraction artifacts cannot be told apart from decimals
        assert_eq!(clean_paragraph("Pi is 3.14"), "Pi is 3. 14");
    }

    #[test]
    fn test_terminal_before_punctuation_untouched() {
        assert_eq!(clean_paragraph("Wait...!? Really.\""), "Wait...!? Really.\"");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(clean_paragraph("  a \n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn test_non_ascii_letter_after_terminal() {
        assert_eq!(clean_paragraph("Fin.Étape"), "Fin.Étape");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["x.y.z", "  spaced\nout.Text!Here ", "", "...", "A.1 B?c"];
        for input in inputs {
            let once = clean_paragraph(input);
            assert_eq!(clean_paragraph(&once), once);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_paragraph(""), "");
        assert_eq!(join_paragraph::<&str>(&[]), "");
    }
}

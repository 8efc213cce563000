//! Post-processing of model output before it reaches the client.

/// Numbered-list artefact as it appears in model output, matched literally:
/// newline, backslash, `d`, period. Real digits are left alone.
const LIST_MARKER: &str = "\n\\d.";
const BULLET: &str = "\n•";

/// Strip markdown emphasis and surrounding whitespace from model output.
pub fn clean_response(text: &str) -> String {
    text.replace("**", "")
        .replace('*', "")
        .replace(LIST_MARKER, BULLET)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bold_and_italic_markers() {
        assert_eq!(
            clean_response("**Try** resting.\n1. Drink water"),
            "Try resting.\n1. Drink water"
        );
        assert_eq!(clean_response("*mild* pain"), "mild pain");
        assert_eq!(clean_response("***"), "");
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        assert_eq!(clean_response("  \n hello\n world \n"), "hello\n world");
    }

    #[test]
    fn numbered_lines_are_kept() {
        assert_eq!(clean_response("Steps:\n1. Rest\n2. Hydrate"), "Steps:\n1. Rest\n2. Hydrate");
    }

    #[test]
    fn literal_list_marker_becomes_bullet() {
        assert_eq!(clean_response("Steps:\n\\d. Rest"), "Steps:\n• Rest");
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(clean_response(""), "");
    }

    #[test]
    fn output_has_no_asterisks_and_is_idempotent() {
        let samples = [
            "**bold** and *italic*",
            " * leading star",
            "a**b*c***d",
            "\n*\\d. odd\n",
            "plain text",
        ];
        for sample in samples {
            let once = clean_response(sample);
            assert!(!once.contains('*'), "{once:?}");
            assert_eq!(clean_response(&once), once);
        }
    }
}

//! Normalization of user supplied paths.

use std::path::PathBuf;

/// Normalizes a user supplied path: surrounding whitespace and surrounding
/// `'`/`"` characters are removed.  File managers commonly wrap pasted paths
/// in quotes.
///
/// # Examples
/// ```
/// use macos_icon_gen::path::normalize_path_input;
/// use std::path::PathBuf;
/// assert_eq!(normalize_path_input(" \"./icon.png\" "), PathBuf::from("./icon.png"));
/// ```
pub fn normalize_path_input(raw: &str) -> PathBuf {
    PathBuf::from(normalize_str(raw))
}

fn normalize_str(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quoted_and_padded_forms_agree() {
        let expected = PathBuf::from("./icon.png");
        assert_eq!(normalize_path_input("\"./icon.png\""), expected);
        assert_eq!(normalize_path_input("'./icon.png'"), expected);
        assert_eq!(normalize_path_input(" ./icon.png "), expected);
        assert_eq!(normalize_path_input("\t'./icon.png'\n"), expected);
    }

    #[test]
    fn inner_quotes_survive() {
        assert_eq!(normalize_path_input("'./bob's icon.png'"),
                   PathBuf::from("./bob's icon.png"));
    }

    proptest! {
        #[test]
        fn wrapping_never_changes_result(
            body in "[a-zA-Z0-9_./-]{1,24}",
            quote in prop::sample::select(vec!["", "'", "\"", "''", "\"'"]),
            pad in "[ \t]{0,3}",
        ) {
            let wrapped = format!("{pad}{quote}{body}{quote}{pad}");
            prop_assert_eq!(normalize_path_input(&wrapped), PathBuf::from(&body));
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[a-z0-9]+").expect("valid regex");
}

/// Literal query tokens that act as boolean operators rather than search terms.
pub const AND: &str = "and";
pub const OR: &str = "or";

/// Tokenize text into indexable terms: ASCII-lowercase, then keep maximal runs of ASCII letters and digits.
///
/// Everything else is a separator. The same function is used for documents and queries.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_ascii_lowercase();
    RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

pub fn is_operator(term: &str) -> bool {
    term == AND || term == OR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Running, runner's run!");
        assert_eq!(t, vec!["running", "runner", "s", "run"]);
    }

    #[test]
    fn empty_and_separator_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  --- !!! \n\t").is_empty());
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café"), vec!["caf"]);
        assert_eq!(tokenize("naïve42x"), vec!["na", "ve42x"]);
    }

    #[test]
    fn only_ascii_is_case_folded() {
        // KELVIN SIGN and dotted capital I would fold to ASCII under Unicode rules.
        assert_eq!(tokenize("\u{212A}elvin \u{130}stanbul"), vec!["elvin", "stanbul"]);
        assert_eq!(tokenize("ÉCOLE École"), vec!["cole", "cole"]);
    }

    #[test]
    fn operators_are_classified() {
        assert!(is_operator("and"));
        assert!(is_operator("or"));
        assert!(!is_operator("android"));
        assert!(!is_operator("AND"));
    }
}

//! Regular English plural rules.

use crate::model::Level;

/// Endings that take `-es`. `ss` is covered by `s` but listed for clarity.
const ES_SUFFIXES: [&str; 7] = ["s", "ss", "sh", "ch", "x", "z", "o"];

const VOWELS: &str = "aeiou";

/// Which of the three regular rules applies to `singular`.
///
/// Matching is case-sensitive. A lone `"y"` has no letter before it and is
/// treated as consonant + `y`.
pub fn rule_for(singular: &str) -> Level {
    let noun = singular.trim();

    if ES_SUFFIXES.iter().any(|suffix| noun.ends_with(suffix)) {
        return Level::Es;
    }

    if let Some(stem) = noun.strip_suffix('y') {
        return match stem.chars().last() {
            Some(c) if VOWELS.contains(c) => Level::S,
            _ => Level::Ies,
        };
    }

    Level::S
}

/// Pluralize a singular noun with the regular rules.
///
/// The input is trimmed first. Never panics, whatever the input.
pub fn pluralize(singular: &str) -> String {
    let noun = singular.trim();
    match rule_for(noun) {
        Level::Es => format!("{noun}es"),
        Level::Ies => {
            // `rule_for` only returns Ies when the noun ends in an ASCII 'y'.
            let stem = &noun[..noun.len() - 1];
            format!("{stem}ies")
        }
        Level::S => format!("{noun}s"),
    }
}

/// Compare a typed answer with the expected plural, ignoring case and
/// surrounding whitespace.
pub fn answers_match(guess: &str, expected: &str) -> bool {
    guess.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("boy"), "boys");
        assert_eq!(pluralize("cat"), "cats");
    }

    #[test]
    fn es_endings() {
        for (singular, plural) in [
            ("glass", "glasses"),
            ("dish", "dishes"),
            ("quiz", "quizes"),
            ("potato", "potatoes"),
        ] {
            assert_eq!(pluralize(singular), plural, "pluralizing {singular}");
        }
    }

    #[test]
    fn vowel_before_y_keeps_y() {
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("guy"), "guys");
        assert_eq!(pluralize("toy"), "toys");
    }

    #[test]
    fn lone_y_does_not_panic() {
        assert_eq!(pluralize("y"), "ies");
        assert_eq!(rule_for("y"), Level::Ies);
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(pluralize("  baby \t"), "babies");
    }

    #[test]
    fn non_ascii_stems() {
        assert_eq!(pluralize("café"), "cafés");
        assert_eq!(pluralize("éy"), "éies");
    }

    #[test]
    fn empty_input() {
        assert_eq!(pluralize(""), "s");
        assert_eq!(rule_for("   "), Level::S);
    }

    #[test]
    fn rule_for_classifies() {
        assert_eq!(rule_for("fox"), Level::Es);
        assert_eq!(rule_for("lady"), Level::Ies);
        assert_eq!(rule_for("monkey"), Level::S);
        assert_eq!(rule_for("dog"), Level::S);
    }

    #[test]
    fn answers_match_ignores_case_and_whitespace() {
        assert!(answers_match("  Buses ", "buses"));
        assert!(answers_match("CITIES", "cities"));
        assert!(!answers_match("citys", "cities"));
    }
}

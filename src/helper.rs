//! Character predicates and bounds-safe access used by every encoder.
use serde::{Deserialize, Deserializer};

use crate::PhoneticError;

/// Accented Latin vowels (upper case) that count as vowels for [is_vowel].
pub const ACCENTED_VOWELS: [char; 25] = [
    '\u{00C0}', '\u{00C1}', '\u{00C2}', '\u{00C3}', '\u{00C4}', '\u{00C5}', '\u{00C8}', '\u{00C9}',
    '\u{00CA}', '\u{00CB}', '\u{00CC}', '\u{00CD}', '\u{00CE}', '\u{00CF}', '\u{00D2}', '\u{00D3}',
    '\u{00D4}', '\u{00D5}', '\u{00D6}', '\u{00D8}', '\u{00D9}', '\u{00DA}', '\u{00DB}', '\u{00DC}',
    '\u{00DD}',
];

/// Accented Latin consonants kept by the normalizer (`Ç` and `Ñ`).
pub const ACCENTED_CONSONANTS: [char; 2] = ['\u{00C7}', '\u{00D1}'];

const SPECIAL_CHARACTERS: [char; 6] = ['\'', '-', '.', ' ', '/', '\\'];

/// `true` for ASCII letters only.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// `true` for ASCII digits only.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `true` for ASCII letters and digits.
pub fn is_letter_or_digit(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// `true` for `A`, `E`, `I`, `O` and `U`, whatever the case. `Y` is not a simple vowel.
pub fn is_simple_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Simple vowels, plus `Y` and the accented Latin vowels of [ACCENTED_VOWELS].
pub fn is_vowel(ch: char) -> bool {
    if is_simple_vowel(ch) || ch.to_ascii_uppercase() == 'Y' {
        return true;
    }

    ch.to_uppercase()
        .next()
        .map_or(false, |upper| ACCENTED_VOWELS.contains(&upper))
}

/// Apostrophe, hyphen, period, space, slash and backslash.
pub fn is_special_character(ch: char) -> bool {
    SPECIAL_CHARACTERS.contains(&ch)
}

/// Return the character at `index`, or `None` when `index` is negative or past the end.
///
/// Look-ahead and look-behind in the rule based encoders rely on this never panicking
/// at the boundaries of the word.
pub fn char_at(chars: &[char], index: isize) -> Option<char> {
    usize::try_from(index)
        .ok()
        .and_then(|index| chars.get(index).copied())
}

/// Check that `pattern` can be read in `chars` starting at `index`.
///
/// An out of range `index` is a mismatch, not an error.
pub fn starts_with_at(chars: &[char], index: isize, pattern: &str) -> bool {
    let start = match usize::try_from(index) {
        Ok(start) if start < chars.len() => start,
        _ => return false,
    };

    let mut count = 0;
    for (offset, expected) in pattern.chars().enumerate() {
        if chars.get(start + offset) != Some(&expected) {
            return false;
        }
        count += 1;
    }

    count > 0
}

/// [starts_with_at] for a list of candidates.
pub fn matches_any_at(chars: &[char], index: isize, patterns: &[&str]) -> bool {
    patterns
        .iter()
        .any(|pattern| starts_with_at(chars, index, pattern))
}

/// Position of an ASCII letter in the latin alphabet, whatever its case.
pub(crate) fn letter_index(ch: char) -> Option<usize> {
    if is_letter(ch) {
        Some(ch.to_ascii_uppercase() as usize - 'A' as usize)
    } else {
        None
    }
}

/// Split a mapping string into one character per letter of the latin alphabet.
pub(crate) fn mapping_chars(mapping: &str) -> Result<[char; 26], PhoneticError> {
    let chars: Vec<char> = mapping.chars().collect();
    let count = chars.len();
    chars.try_into().map_err(|_| {
        PhoneticError::InvalidMapping(format!(
            "a mapping needs exactly 26 codes, one per letter, got {count}"
        ))
    })
}

/// Deserialize an optional maximum code length, `0` meaning no limit.
pub(crate) fn deserialize_max_length<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.filter(|max| *max > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(value: &str) -> Vec<char> {
        value.chars().collect()
    }

    #[test]
    fn test_letters_and_digits() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('\u{00C9}'));
        assert!(!is_letter('1'));
        assert!(is_digit('7'));
        assert!(!is_digit('x'));
        assert!(is_letter_or_digit('7'));
        assert!(is_letter_or_digit('q'));
        assert!(!is_letter_or_digit('-'));
    }

    #[test]
    fn test_vowels() {
        for ch in ['A', 'e', 'I', 'o', 'U'] {
            assert!(is_simple_vowel(ch), "{ch} is a simple vowel");
            assert!(is_vowel(ch), "{ch} is a vowel");
        }
        assert!(!is_simple_vowel('Y'));
        assert!(is_vowel('Y'));
        assert!(is_vowel('y'));
        assert!(is_vowel('\u{00C9}'));
        assert!(is_vowel('\u{00E9}'));
        assert!(is_vowel('\u{00D8}'));
        assert!(!is_vowel('\u{00C7}'));
        assert!(!is_vowel('B'));
    }

    #[test]
    fn test_special_characters() {
        for ch in ['\'', '-', '.', ' ', '/', '\\'] {
            assert!(is_special_character(ch));
        }
        assert!(!is_special_character('_'));
        assert!(!is_special_character('A'));
    }

    #[test]
    fn test_char_at_out_of_range() {
        let word = chars("ABC");

        assert_eq!(char_at(&word, -4), None);
        assert_eq!(char_at(&word, -1), None);
        assert_eq!(char_at(&word, 0), Some('A'));
        assert_eq!(char_at(&word, 2), Some('C'));
        assert_eq!(char_at(&word, 3), None);
        assert_eq!(char_at(&[], 0), None);
    }

    #[test]
    fn test_starts_with_at() {
        let word = chars("SCHMIDT");

        assert!(starts_with_at(&word, 0, "SCH"));
        assert!(starts_with_at(&word, 4, "IDT"));
        assert!(!starts_with_at(&word, 5, "DTX"));
        assert!(!starts_with_at(&word, -1, "S"));
        assert!(!starts_with_at(&word, 7, "S"));
        assert!(!starts_with_at(&word, 0, ""));
        assert!(matches_any_at(&word, 1, &["CA", "CH"]));
        assert!(!matches_any_at(&word, 1, &["CA", "CE"]));
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('-'), None);
        assert_eq!(letter_index('\u{00C7}'), None);
    }

    #[test]
    fn test_mapping_chars_length() {
        assert!(mapping_chars("01360240043788015936020505").is_ok());
        assert!(matches!(
            mapping_chars("0136"),
            Err(PhoneticError::InvalidMapping(_))
        ));
    }
}

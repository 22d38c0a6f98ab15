//! Input cleaning shared by the encoders.
//!
//! [clean] keeps upper case letters and a few separators. Punctuation inside a
//! token (`O'Brien`) survives this step, each encoder decides what to do with it.
use crate::constants::GENERATIONAL_SUFFIX;
use crate::helper::{is_letter, is_special_character, ACCENTED_CONSONANTS, ACCENTED_VOWELS};

fn is_allowed(ch: char, allow_extended_latin: bool) -> bool {
    ch.is_ascii_uppercase()
        || is_special_character(ch)
        || ch.is_whitespace()
        || (allow_extended_latin
            && (ACCENTED_VOWELS.contains(&ch) || ACCENTED_CONSONANTS.contains(&ch)))
}

fn filter(value: &str, allow_extended_latin: bool) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|ch| is_allowed(*ch, allow_extended_latin))
        .collect();

    if cleaned.trim().is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Trim, upper case and remove every character an encoder can't use.
///
/// Kept characters are `A` to `Z`, apostrophe, hyphen, period, slash, backslash
/// and whitespace. With `allow_extended_latin`, accented Latin letters (`À` to `Ý`,
/// `Ç`, `Ñ`) are kept too.
///
/// # Return
///
/// `None` if there is nothing left.
///
/// # Example
///
/// ```rust
/// use soundalike::clean;
///
/// assert_eq!(clean("  o'Brien!  ", false), Some("O'BRIEN".to_string()));
/// assert_eq!(clean("Fran\u{00E7}ois", true), Some("FRAN\u{00C7}OIS".to_string()));
/// assert_eq!(clean("1234", false), None);
/// ```
pub fn clean(value: &str, allow_extended_latin: bool) -> Option<String> {
    filter(&value.trim().to_uppercase(), allow_extended_latin)
}

/// Remove a trailing generational suffix (`JR`, `SR`, `III`, ...) from an upper case name.
///
/// The suffix must be its own token: a single word is returned unchanged.
pub fn strip_generational_suffix(value: &str) -> &str {
    match GENERATIONAL_SUFFIX.find(value) {
        Some(suffix) => &value[..suffix.start()],
        None => value,
    }
}

/// Same as [clean] but a generational suffix is removed before filtering.
///
/// ```rust
/// use soundalike::clean_name;
///
/// assert_eq!(clean_name("John Smith Jr.", false), Some("JOHN SMITH".to_string()));
/// assert_eq!(clean_name("Louis XIV", false), Some("LOUIS".to_string()));
/// ```
pub fn clean_name(value: &str, allow_extended_latin: bool) -> Option<String> {
    let upper = value.trim().to_uppercase();
    filter(strip_generational_suffix(&upper), allow_extended_latin)
}

/// Keep only `A` to `Z` of an already cleaned string.
pub fn letters_only(cleaned: &str) -> Option<String> {
    let letters: String = cleaned.chars().filter(|ch| is_letter(*ch)).collect();
    if letters.is_empty() {
        None
    } else {
        Some(letters)
    }
}

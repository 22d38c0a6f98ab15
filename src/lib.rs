//! This library contains phonetic encoders: they turn a word or a name into a short
//! code so that words that sound alike get the same, or a close, code.
//!
//! It currently implements :
//!
//! * [Soundex] : see [Wikipedia](https://en.wikipedia.org/wiki/Soundex). American, simplified,
//! genealogy and special (prefixes and hyphenated names) flavours are available as [SoundexPreset].
//! * [Refined Soundex] : see [Wikipedia](https://en.wikipedia.org/wiki/Soundex).
//! * [Nysiis] : see [Wikipedia](https://en.wikipedia.org/wiki/New_York_State_Identification_and_Intelligence_System),
//! with original and modified rules.
//! * [Double Metaphone] : see [Wikipedia](https://en.wikipedia.org/wiki/Metaphone#Double_Metaphone)
//!
//! Every encoder is an immutable value: build it once and share it between threads.
//!
//! ```rust
//! use soundalike::{Encoder, Soundex};
//!
//! let soundex = Soundex::default();
//!
//! assert_eq!(soundex.encode_primary("Robert"), Some("R163".to_string()));
//! assert_eq!(soundex.encode("  "), None);
//! ```
//!
//! [Refined Soundex]: RefinedSoundex
//! [Double Metaphone]: DoubleMetaphone
#[macro_use]
extern crate lazy_static;

use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

pub use crate::double_metaphone::DoubleMetaphone;
pub use crate::encoding::PhoneticEncoding;
pub use crate::helper::{
    char_at, is_digit, is_letter, is_letter_or_digit, is_simple_vowel, is_special_character,
    is_vowel, matches_any_at, starts_with_at,
};
pub use crate::normalizer::{clean, clean_name, letters_only, strip_generational_suffix};
pub use crate::nysiis::{Nysiis, NysiisRules};
pub use crate::refined_soundex::RefinedSoundex;
pub use crate::soundex::{
    Soundex, SoundexBuilder, SoundexCode, SoundexMapping, SoundexPreset,
    DEFAULT_US_ENGLISH_MAPPING_SOUNDEX,
};

mod constants;
mod double_metaphone;
mod encoding;
mod helper;
mod normalizer;
mod nysiis;
mod refined_soundex;
mod soundex;

/// Errors
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum PhoneticError {
    /// This variant is raised when a letter mapping can't be used, for
    /// instance it doesn't have a code for each letter.
    InvalidMapping(String),
    /// This variant is raised when encoder options don't go together.
    InvalidConfiguration(String),
}

impl fmt::Display for PhoneticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMapping(error) => write!(f, "Invalid mapping : {}", error),
            Self::InvalidConfiguration(error) => write!(f, "Invalid configuration : {}", error),
        }
    }
}

impl Error for PhoneticError {}

/// This trait represents a phonetic algorithm.
pub trait Encoder {
    /// This method convert a string into its code.
    ///
    /// # Parameter
    ///
    /// * `s` : string to encode.
    ///
    /// # Return
    ///
    /// The encoding, or `None` if `s` has nothing that can be encoded (empty, only
    /// whitespaces or only characters the encoder ignores).
    ///
    /// # Example
    ///
    /// ```rust
    /// use soundalike::{Encoder, Nysiis};
    ///
    /// let nysiis = Nysiis::default();
    ///
    /// assert_eq!(nysiis.encode("Knight").unwrap().primary(), "NAGT");
    /// assert_eq!(nysiis.encode("1234"), None);
    /// ```
    fn encode(&self, s: &str) -> Option<PhoneticEncoding>;

    /// Same as [encode](Encoder::encode) but only keeps the primary code.
    fn encode_primary(&self, s: &str) -> Option<String> {
        self.encode(s).map(PhoneticEncoding::into_primary)
    }

    /// This method check that two strings have the same primary code.
    ///
    /// # Parameters
    ///
    /// * `first` : first string.
    /// * `second` : second string.
    ///
    /// # Return
    ///
    /// Return `true` if both strings have the same code, false otherwise. A string
    /// without code is never equal to anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use soundalike::{Encoder, Soundex};
    ///
    /// let soundex = Soundex::default();
    /// assert!(soundex.is_encoded_equals("Robert", "Rupert"));
    /// assert!(!soundex.is_encoded_equals("Robert", "Ashcraft"));
    /// assert!(!soundex.is_encoded_equals("", ""));
    /// ```
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        match (self.encode(first), self.encode(second)) {
            (Some(f), Some(s)) => f.primary() == s.primary(),
            _ => false,
        }
    }

    /// Encodes both strings and returns the number of characters at the same
    /// position in their primary codes. See [difference_encoded].
    ///
    /// Return `0` if one of them can't be encoded.
    ///
    /// ```rust
    /// use soundalike::{Encoder, Soundex};
    ///
    /// let soundex = Soundex::default();
    /// assert_eq!(soundex.difference("Smith", "Smythe"), 4);
    /// assert_eq!(soundex.difference("Ann", "Andrew"), 2);
    /// ```
    fn difference(&self, first: &str, second: &str) -> usize {
        match (self.encode(first), self.encode(second)) {
            (Some(f), Some(s)) => difference_encoded(f.primary(), s.primary()),
            _ => 0,
        }
    }
}

/// Count the positions where both codes have the same character, comparing
/// them left aligned over the shortest length.
///
/// For [Soundex] `4` is a strong similarity and `0` none at all.
///
/// ```rust
/// use soundalike::difference_encoded;
///
/// assert_eq!(difference_encoded("S530", "S530"), 4);
/// assert_eq!(difference_encoded("A500", "A536"), 2);
/// assert_eq!(difference_encoded("", "A536"), 0);
/// ```
pub fn difference_encoded(first: &str, second: &str) -> usize {
    first
        .chars()
        .zip(second.chars())
        .filter(|(f, s)| f == s)
        .count()
}

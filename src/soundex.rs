/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{HYPHEN_SPLIT, SURNAME_PREFIX};
use crate::helper::{letter_index, mapping_chars};
use crate::normalizer::{clean, letters_only};
use crate::{Encoder, PhoneticEncoding, PhoneticError};

const IGNORED: char = '-';
const UNMAPPED: char = '_';
const DEFAULT_MAX_LENGTH: usize = 4;
const DEFAULT_PADDING: char = '0';

/// The code of a letter in a [SoundexMapping].
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SoundexCode {
    /// The letter is never written. Depending on [SoundexBuilder::track_ignored] it
    /// may still separate two letters of the same group.
    Ignored,
    /// The letter belongs to this group. `'0'` is a group like any other.
    Group(char),
}

const fn group(code: char) -> Option<SoundexCode> {
    Some(SoundexCode::Group(code))
}

const NO_CODE: Option<SoundexCode> = Some(SoundexCode::Ignored);

/// This is the default mapping for soundex.
/// * `A` is ignored
/// * `B` is encoded into `1`
/// * `C` is encoded into `2`
/// * `D` is encoded into `3`
/// * `E` is ignored
/// * ...etc
///
/// Vowels, `H`, `W` and `Y` are [SoundexCode::Ignored]. The string form of this mapping
/// is `-123-12--22455-12623-1-2-2`.
pub const DEFAULT_US_ENGLISH_MAPPING_SOUNDEX: SoundexMapping = SoundexMapping([
    NO_CODE,
    group('1'),
    group('2'),
    group('3'),
    NO_CODE,
    group('1'),
    group('2'),
    NO_CODE,
    NO_CODE,
    group('2'),
    group('2'),
    group('4'),
    group('5'),
    group('5'),
    NO_CODE,
    group('1'),
    group('2'),
    group('6'),
    group('2'),
    group('3'),
    NO_CODE,
    group('1'),
    NO_CODE,
    group('2'),
    NO_CODE,
    group('2'),
]);

/// The code of each letter of the latin alphabet. Index 0 is the code for `A`, index 1
/// for `B` and so on. A letter without code (`None`) is skipped as if it wasn't there.
///
/// It can be parsed from a string of 26 characters : a digit or a letter is a
/// [SoundexCode::Group], `-` is [SoundexCode::Ignored] and `_` means no code.
///
/// ```rust
/// # fn main() -> Result<(), soundalike::PhoneticError> {
/// use soundalike::{SoundexMapping, DEFAULT_US_ENGLISH_MAPPING_SOUNDEX};
///
/// let mapping: SoundexMapping = "-123-12--22455-12623-1-2-2".parse()?;
/// assert_eq!(mapping, DEFAULT_US_ENGLISH_MAPPING_SOUNDEX);
/// #   Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoundexMapping([Option<SoundexCode>; 26]);

impl SoundexMapping {
    pub fn new(codes: [Option<SoundexCode>; 26]) -> Self {
        Self(codes)
    }

    /// Code of an ASCII letter, `None` for anything else or a letter without code.
    pub fn code(&self, ch: char) -> Option<SoundexCode> {
        letter_index(ch).and_then(|index| self.0[index])
    }

    fn has_group(&self) -> bool {
        self.0
            .iter()
            .any(|code| matches!(code, Some(SoundexCode::Group(_))))
    }
}

impl Default for SoundexMapping {
    fn default() -> Self {
        DEFAULT_US_ENGLISH_MAPPING_SOUNDEX
    }
}

impl FromStr for SoundexMapping {
    type Err = PhoneticError;

    fn from_str(mapping: &str) -> Result<Self, Self::Err> {
        let chars = mapping_chars(mapping)?;
        let mut codes: [Option<SoundexCode>; 26] = [None; 26];
        for (index, ch) in chars.into_iter().enumerate() {
            codes[index] = match ch {
                IGNORED => Some(SoundexCode::Ignored),
                UNMAPPED => None,
                ch if ch.is_ascii_alphanumeric() => Some(SoundexCode::Group(ch)),
                ch => {
                    return Err(PhoneticError::InvalidMapping(format!(
                        "'{}' is not a valid code for '{}'",
                        ch,
                        (b'A' + index as u8) as char
                    )))
                }
            };
        }

        Ok(Self(codes))
    }
}

impl TryFrom<&str> for SoundexMapping {
    type Error = PhoneticError;

    fn try_from(mapping: &str) -> Result<Self, Self::Error> {
        mapping.parse()
    }
}

impl TryFrom<String> for SoundexMapping {
    type Error = PhoneticError;

    fn try_from(mapping: String) -> Result<Self, Self::Error> {
        mapping.parse()
    }
}

impl fmt::Display for SoundexMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for code in self.0.iter() {
            let ch = match code {
                Some(SoundexCode::Ignored) => IGNORED,
                Some(SoundexCode::Group(ch)) => *ch,
                None => UNMAPPED,
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl From<SoundexMapping> for String {
    fn from(mapping: SoundexMapping) -> Self {
        mapping.to_string()
    }
}

/// Well known soundex flavours.
#[derive(
    Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, Sequence,
)]
pub enum SoundexPreset {
    /// American soundex : `H` and `W` are skipped, vowels separate letters of the same group.
    American,
    /// Like [SoundexPreset::American] but `H` and `W` separate letters of the same group too.
    Simplified,
    /// From [Genealogy](http://www.genealogy.com/articles/research/00000060.html) : vowels, `H` and `W`
    /// are skipped, letters of the same group are merged across them.
    Genealogy,
    /// [SoundexPreset::American] with prefixes (`Van`, `De La`, ...) and hyphenated names also
    /// coded as alternates.
    Special,
}

/// This is a builder for [Soundex].
///
/// It is also the serialized form of a [Soundex], so a configuration can be read
/// with `serde` and is validated the same way.
///
/// ```rust
/// # fn main() -> Result<(), soundalike::PhoneticError> {
/// use soundalike::{Encoder, SoundexBuilder, SoundexPreset};
///
/// let soundex = SoundexBuilder::from(SoundexPreset::American)
///     .max_length(Some(6))
///     .build()?;
///
/// assert_eq!(soundex.encode_primary("Ashcraft"), Some("A26130".to_string()));
/// #   Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundexBuilder {
    mapping: SoundexMapping,
    ignore_h_w: bool,
    track_ignored: bool,
    max_length: Option<usize>,
    padding: Option<char>,
    prefixes: bool,
    hyphenated_parts: bool,
}

/// [SoundexPreset::American] options.
impl Default for SoundexBuilder {
    fn default() -> Self {
        Self::from(SoundexPreset::American)
    }
}

impl From<SoundexPreset> for SoundexBuilder {
    fn from(preset: SoundexPreset) -> Self {
        let american = Self {
            mapping: DEFAULT_US_ENGLISH_MAPPING_SOUNDEX,
            ignore_h_w: true,
            track_ignored: true,
            max_length: Some(DEFAULT_MAX_LENGTH),
            padding: Some(DEFAULT_PADDING),
            prefixes: false,
            hyphenated_parts: false,
        };

        match preset {
            SoundexPreset::American => american,
            SoundexPreset::Simplified => Self {
                ignore_h_w: false,
                ..american
            },
            SoundexPreset::Genealogy => Self {
                ignore_h_w: false,
                track_ignored: false,
                ..american
            },
            SoundexPreset::Special => Self {
                prefixes: true,
                hyphenated_parts: true,
                ..american
            },
        }
    }
}

impl SoundexBuilder {
    /// Create a builder with a custom mapping and [SoundexPreset::American] options.
    pub fn with_mapping(mapping: SoundexMapping) -> Self {
        Self {
            mapping,
            ..Self::default()
        }
    }

    /// Skip `H` and `W` entirely : they don't even separate letters of the same group.
    pub fn ignore_h_w(mut self, ignore_h_w: bool) -> Self {
        self.ignore_h_w = ignore_h_w;

        self
    }

    /// When `true`, an ignored letter separates two letters of the same group so both
    /// are written. When `false`, the ignored letter is as if it wasn't there.
    pub fn track_ignored(mut self, track_ignored: bool) -> Self {
        self.track_ignored = track_ignored;

        self
    }

    /// Maximum code length, `None` for no limit.
    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;

        self
    }

    /// Pad the code up to the maximum length with this character, `None` to disable.
    pub fn padding(mut self, padding: Option<char>) -> Self {
        self.padding = padding;

        self
    }

    /// Also code the name without its prefix (`Van`, `Von`, `De La`, `D'`, ...) as an alternate.
    pub fn prefixes(mut self, prefixes: bool) -> Self {
        self.prefixes = prefixes;

        self
    }

    /// Split the name on hyphens : the first part is the primary code, others are alternates.
    pub fn hyphenated_parts(mut self, hyphenated_parts: bool) -> Self {
        self.hyphenated_parts = hyphenated_parts;

        self
    }

    /// Construct a new [Soundex] encoder.
    ///
    /// # Error
    ///
    /// This method returns an error if the mapping has no group at all, the maximum
    /// length is `0` or padding is asked without a maximum length.
    pub fn build(self) -> Result<Soundex, PhoneticError> {
        if !self.mapping.has_group() {
            return Err(PhoneticError::InvalidMapping(format!(
                "mapping {} has no group code",
                self.mapping
            )));
        }
        if self.max_length == Some(0) {
            return Err(PhoneticError::InvalidConfiguration(
                "maximum length must be greater than 0".to_string(),
            ));
        }
        if self.padding.is_some() && self.max_length.is_none() {
            return Err(PhoneticError::InvalidConfiguration(
                "padding requires a maximum length".to_string(),
            ));
        }

        debug!(
            mapping = %self.mapping,
            ignore_h_w = self.ignore_h_w,
            track_ignored = self.track_ignored,
            max_length = ?self.max_length,
            prefixes = self.prefixes,
            hyphenated_parts = self.hyphenated_parts,
            "building soundex encoder"
        );

        Ok(Soundex {
            mapping: self.mapping,
            ignore_h_w: self.ignore_h_w,
            track_ignored: self.track_ignored,
            max_length: self.max_length,
            padding: self.padding,
            prefixes: self.prefixes,
            hyphenated_parts: self.hyphenated_parts,
        })
    }
}

/// This is the [Soundex](https://en.wikipedia.org/wiki/Soundex) implementation of [Encoder].
///
/// With the [Default] implementation, the code will have a constant length of 4.
///
/// Although it was primary done for names, [Soundex] can be used for general words.
///
/// # Example :
///
/// ```rust
/// use soundalike::{Encoder, Soundex, SoundexPreset};
///
/// let soundex = Soundex::default();
/// assert_eq!(soundex.encode_primary("jumped"), Some("J513".to_string()));
///
/// let special = Soundex::from(SoundexPreset::Special);
/// let encoding = special.encode("von Neumann").unwrap();
/// assert_eq!(encoding.primary(), "V555");
/// assert!(encoding.contains("N550"));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SoundexBuilder", into = "SoundexBuilder")]
pub struct Soundex {
    mapping: SoundexMapping,
    ignore_h_w: bool,
    track_ignored: bool,
    max_length: Option<usize>,
    padding: Option<char>,
    prefixes: bool,
    hyphenated_parts: bool,
}

impl Soundex {
    /// Construct a new [Soundex] with the provided mapping, a code length of 4 padded with `0`.
    ///
    /// Use [SoundexBuilder] for other options.
    ///
    /// # Parameter
    ///
    /// * `mapping` : code of each letter.
    /// * `ignore_h_w` : a boolean to indicate that `H` and `W` should be skipped entirely.
    ///
    /// # Error
    ///
    /// Same as [SoundexBuilder::build], so a mapping without any group is rejected.
    pub fn new(mapping: SoundexMapping, ignore_h_w: bool) -> Result<Self, PhoneticError> {
        SoundexBuilder::with_mapping(mapping)
            .ignore_h_w(ignore_h_w)
            .build()
    }

    /// Code a single word, without prefix or hyphen handling.
    fn encode_word(&self, value: &str) -> Option<String> {
        let cleaned = clean(value, false)?;
        let letters = letters_only(&cleaned)?;

        let mut iterator = letters.chars();
        let first = iterator.next()?;

        let mut code = String::with_capacity(self.max_length.unwrap_or(letters.len()));
        code.push(first);
        let mut count = 1;
        let mut previous = self.mapping.code(first);

        for ch in iterator {
            if self.max_length.map_or(false, |max| count >= max) {
                break;
            }
            if self.ignore_h_w && (ch == 'H' || ch == 'W') {
                continue;
            }
            match self.mapping.code(ch) {
                None => continue,
                Some(SoundexCode::Ignored) => {
                    if self.track_ignored {
                        previous = Some(SoundexCode::Ignored);
                    }
                }
                Some(SoundexCode::Group(digit)) => {
                    let current = Some(SoundexCode::Group(digit));
                    if current != previous {
                        code.push(digit);
                        count += 1;
                    }
                    previous = current;
                }
            }
        }

        if let (Some(max_length), Some(padding)) = (self.max_length, self.padding) {
            while count < max_length {
                code.push(padding);
                count += 1;
            }
        }

        Some(code)
    }

    fn encode_without_prefix(&self, value: &str) -> Option<String> {
        let prefix = SURNAME_PREFIX.find(value)?;
        self.encode_word(&value[prefix.end()..])
    }
}

/// This is the [Default] implementation for [Soundex], it returns an instance
/// with [DEFAULT_US_ENGLISH_MAPPING_SOUNDEX] and, therefore, with a special
/// treatment for `H` and `W` : they are skipped.
impl Default for Soundex {
    fn default() -> Self {
        Self::from(SoundexPreset::American)
    }
}

impl From<SoundexPreset> for Soundex {
    fn from(preset: SoundexPreset) -> Self {
        let builder = SoundexBuilder::from(preset);
        Self {
            mapping: builder.mapping,
            ignore_h_w: builder.ignore_h_w,
            track_ignored: builder.track_ignored,
            max_length: builder.max_length,
            padding: builder.padding,
            prefixes: builder.prefixes,
            hyphenated_parts: builder.hyphenated_parts,
        }
    }
}

impl TryFrom<SoundexBuilder> for Soundex {
    type Error = PhoneticError;

    fn try_from(builder: SoundexBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<Soundex> for SoundexBuilder {
    fn from(soundex: Soundex) -> Self {
        Self {
            mapping: soundex.mapping,
            ignore_h_w: soundex.ignore_h_w,
            track_ignored: soundex.track_ignored,
            max_length: soundex.max_length,
            padding: soundex.padding,
            prefixes: soundex.prefixes,
            hyphenated_parts: soundex.hyphenated_parts,
        }
    }
}

impl Encoder for Soundex {
    fn encode(&self, value: &str) -> Option<PhoneticEncoding> {
        let parts: Vec<&str> = if self.hyphenated_parts {
            HYPHEN_SPLIT.split(value).collect()
        } else {
            vec![value]
        };

        let mut primary: Option<String> = None;
        let mut alternates: Vec<String> = Vec::new();
        for part in parts {
            if let Some(code) = self.encode_word(part) {
                if primary.is_none() {
                    primary = Some(code);
                } else {
                    alternates.push(code);
                }
            }
            if self.prefixes {
                if let Some(code) = self.encode_without_prefix(part) {
                    alternates.push(code);
                }
            }
        }

        match primary {
            Some(primary) => Some(PhoneticEncoding::with_alternates(primary, alternates)),
            None => {
                trace!(value, "nothing to encode with soundex");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use enum_iterator::all;
    use pretty_assertions::assert_eq;

    use super::*;

    fn check_encoding(data: Vec<&str>, expected: &str) {
        let soundex = Soundex::default();

        for v in data {
            assert_eq!(
                soundex.encode_primary(v).as_deref(),
                Some(expected),
                "Encoding {} should return {}",
                v,
                expected
            );
        }
    }

    fn primary(soundex: &Soundex, value: &str) -> String {
        soundex.encode_primary(value).unwrap_or_default()
    }

    fn alternates(encoding: &PhoneticEncoding) -> Vec<&str> {
        encoding
            .alternates()
            .map(|alternates| alternates.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_b650() {
        let data = vec![
            "BARHAM", "BARONE", "BARRON", "BERNA", "BIRNEY", "BIRNIE", "BOOROM", "BOREN", "BORN",
            "BOURN", "BOURNE", "BOWRON", "BRAIN", "BRAME", "BRANN", "BRAUN", "BREEN", "BRIEN",
            "BRIM", "BRIMM", "BRINN", "BRION", "BROOM", "BROOME", "BROWN", "BROWNE", "BRUEN",
            "BRUHN", "BRUIN", "BRUMM", "BRUN", "BRUNO", "BRYAN", "BURIAN", "BURN", "BURNEY",
            "BYRAM", "BYRNE", "BYRON", "BYRUM",
        ];

        check_encoding(data, "B650");
    }

    #[test]
    fn test_bad_characters() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "HOL>MES"), "H452");
    }

    #[test]
    fn test_difference() {
        let soundex = Soundex::default();

        assert_eq!(soundex.difference(" ", " "), 0);
        assert_eq!(soundex.difference("Smith", "Smythe"), 4);
        assert_eq!(soundex.difference("Ann", "Andrew"), 2);
        assert_eq!(soundex.difference("Margaret", "Andrew"), 1);
        assert_eq!(soundex.difference("Janet", "Margaret"), 0);
        assert_eq!(soundex.difference("Green", "Greene"), 4);
        assert_eq!(soundex.difference("Blotchet-Halls", "Greene"), 0);
        assert_eq!(soundex.difference("Smithers", "Smythers"), 4);
        assert_eq!(soundex.difference("Anothers", "Brothers"), 2);
    }

    #[test]
    fn test_encode_basic() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "testing"), "T235");
        assert_eq!(primary(&soundex, "The"), "T000");
        assert_eq!(primary(&soundex, "quick"), "Q200");
        assert_eq!(primary(&soundex, "brown"), "B650");
        assert_eq!(primary(&soundex, "fox"), "F200");
        assert_eq!(primary(&soundex, "jumped"), "J513");
        assert_eq!(primary(&soundex, "over"), "O160");
        assert_eq!(primary(&soundex, "the"), "T000");
        assert_eq!(primary(&soundex, "lazy"), "L200");
        assert_eq!(primary(&soundex, "dogs"), "D200");
    }

    #[test]
    fn test_encode_batch2() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Allricht"), "A462");
        assert_eq!(primary(&soundex, "Eberhard"), "E166");
        assert_eq!(primary(&soundex, "Engebrethson"), "E521");
        assert_eq!(primary(&soundex, "Heimbach"), "H512");
        assert_eq!(primary(&soundex, "Hanselmann"), "H524");
        assert_eq!(primary(&soundex, "Hildebrand"), "H431");
        assert_eq!(primary(&soundex, "Kavanagh"), "K152");
        assert_eq!(primary(&soundex, "Lind"), "L530");
        assert_eq!(primary(&soundex, "Lukaschowsky"), "L222");
        assert_eq!(primary(&soundex, "McDonnell"), "M235");
        assert_eq!(primary(&soundex, "McGee"), "M200");
        assert_eq!(primary(&soundex, "Opnian"), "O155");
        assert_eq!(primary(&soundex, "Oppenheimer"), "O155");
        assert_eq!(primary(&soundex, "Riedemanas"), "R355");
        assert_eq!(primary(&soundex, "Zita"), "Z300");
        assert_eq!(primary(&soundex, "Zitzmeinn"), "Z325");
    }

    #[test]
    fn test_encode_batch3() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Washington"), "W252");
        assert_eq!(primary(&soundex, "Lee"), "L000");
        assert_eq!(primary(&soundex, "Gutierrez"), "G362");
        assert_eq!(primary(&soundex, "Pfister"), "P236");
        assert_eq!(primary(&soundex, "Jackson"), "J250");
        assert_eq!(primary(&soundex, "Tymczak"), "T522");
        assert_eq!(primary(&soundex, "VanDeusen"), "V532");
    }

    #[test]
    fn test_encode_batch4() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "HOLMES"), "H452");
        assert_eq!(primary(&soundex, "ADOMOMI"), "A355");
        assert_eq!(primary(&soundex, "VONDERLEHR"), "V536");
        assert_eq!(primary(&soundex, "BALL"), "B400");
        assert_eq!(primary(&soundex, "SHAW"), "S000");
        assert_eq!(primary(&soundex, "JACKSON"), "J250");
        assert_eq!(primary(&soundex, "SCANLON"), "S545");
        assert_eq!(primary(&soundex, "SAINTJOHN"), "S532");
    }

    #[test]
    fn test_encode_ignore_apostrophes() {
        let data = vec![
            "OBrien", "'OBrien", "O'Brien", "OB'rien", "OBr'ien", "OBri'en", "OBrie'n", "OBrien'",
        ];

        check_encoding(data, "O165");
    }

    #[test]
    fn test_encode_ignore_hyphens() {
        let data = vec![
            "KINGSMITH",
            "-KINGSMITH",
            "K-INGSMITH",
            "KI-NGSMITH",
            "KIN-GSMITH",
            "KING-SMITH",
            "KINGS-MITH",
            "KINGSM-ITH",
            "KINGSMI-TH",
            "KINGSMIT-H",
            "KINGSMITH-",
        ];

        check_encoding(data, "K525");
    }

    #[test]
    fn test_encode_ignore_trimmable() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, " \t\n\r Washington \t\n\r "), "W252");
    }

    #[test]
    fn test_hw_rule_ex1() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Ashcraft"), "A261");
        assert_eq!(primary(&soundex, "Ashcroft"), "A261");
        assert_eq!(primary(&soundex, "yehudit"), "Y330");
        assert_eq!(primary(&soundex, "yhwdyt"), "Y330");
    }

    #[test]
    fn test_hw_rule_ex2() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "BOOTHDAVIS"), "B312");
        assert_eq!(primary(&soundex, "BOOTH-DAVIS"), "B312");
    }

    #[test]
    fn test_hw_rule_ex3() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Sgler"), "S460");
        assert_eq!(primary(&soundex, "Swhgler"), "S460");

        let data = vec![
            "SAILOR", "SALYER", "SAYLOR", "SCHALLER", "SCHELLER", "SCHILLER", "SCHOOLER",
            "SCHULER", "SCHUYLER", "SEILER", "SEYLER", "SHOLAR", "SHULER", "SILAR", "SILER",
            "SILLER",
        ];
        check_encoding(data, "S460");
    }

    #[test]
    fn test_ms_sql_server2() {
        let data = vec![
            "Erickson", "Erickson", "Erikson", "Ericson", "Ericksen", "Ericsen",
        ];

        check_encoding(data, "E625");
    }

    #[test]
    fn test_ms_sql_server3() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Ann"), "A500");
        assert_eq!(primary(&soundex, "Andrew"), "A536");
        assert_eq!(primary(&soundex, "Janet"), "J530");
        assert_eq!(primary(&soundex, "Margaret"), "M626");
        assert_eq!(primary(&soundex, "Steven"), "S315");
        assert_eq!(primary(&soundex, "Michael"), "M240");
        assert_eq!(primary(&soundex, "Robert"), "R163");
        assert_eq!(primary(&soundex, "Laura"), "L600");
        assert_eq!(primary(&soundex, "Anne"), "A500");
    }

    #[test]
    fn test_wikipedia_american_soundex() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Robert"), "R163");
        assert_eq!(primary(&soundex, "Rupert"), "R163");
        assert_eq!(primary(&soundex, "Ashcraft"), "A261");
        assert_eq!(primary(&soundex, "Ashcroft"), "A261");
        assert_eq!(primary(&soundex, "Tymczak"), "T522");
        assert_eq!(primary(&soundex, "Pfister"), "P236");
    }

    #[test]
    fn test_homophones() {
        let soundex = Soundex::default();

        assert_eq!(primary(&soundex, "Smith"), "S530");
        assert_eq!(primary(&soundex, "Schmidt"), "S530");
        assert!(soundex.is_encoded_equals("Smith", "Schmidt"));
    }

    #[test]
    fn test_genealogy() {
        let soundex = Soundex::from(SoundexPreset::Genealogy);

        assert_eq!(primary(&soundex, "Heggenburger"), "H251");
        assert_eq!(primary(&soundex, "Blackman"), "B425");
        assert_eq!(primary(&soundex, "Schmidt"), "S530");
        assert_eq!(primary(&soundex, "Lippmann"), "L150");
        assert_eq!(primary(&soundex, "Dodds"), "D200");
        assert_eq!(primary(&soundex, "Dhdds"), "D200");
        assert_eq!(primary(&soundex, "Dwdds"), "D200");
    }

    #[test]
    fn test_genealogy_homophones() {
        let soundex = Soundex::from(SoundexPreset::Genealogy);

        assert!(soundex.is_encoded_equals("Smith", "Schmidt"));
        assert_eq!(primary(&soundex, "Smith"), primary(&soundex, "Schmidt"));
    }

    #[test]
    fn test_simplified_soundex() -> Result<(), PhoneticError> {
        let soundex = Soundex::new(DEFAULT_US_ENGLISH_MAPPING_SOUNDEX, false)?;
        assert_eq!(soundex, Soundex::from(SoundexPreset::Simplified));

        assert_eq!(primary(&soundex, "WILLIAMS"), "W452");
        assert_eq!(primary(&soundex, "BARAGWANATH"), "B625");
        assert_eq!(primary(&soundex, "DONNELL"), "D540");
        assert_eq!(primary(&soundex, "LLOYD"), "L300");
        assert_eq!(primary(&soundex, "WOOLCOCK"), "W422");
        assert_eq!(primary(&soundex, "Dodds"), "D320");
        assert_eq!(primary(&soundex, "Dhdds"), "D320");
        assert_eq!(primary(&soundex, "Dwdds"), "D320");

        Ok(())
    }

    #[test]
    fn test_padding_and_first_letter() {
        for preset in all::<SoundexPreset>() {
            let soundex = Soundex::from(preset);
            for value in ["A", "Lee", "Washington", "o'hara", "Tymczak"] {
                let code = primary(&soundex, value);
                assert_eq!(code.len(), 4, "{preset:?} {value}");
                assert_eq!(
                    code.chars().next(),
                    value.to_uppercase().chars().next(),
                    "{preset:?} {value}"
                );
            }
        }
    }

    #[test]
    fn test_no_max_length() -> Result<(), PhoneticError> {
        let soundex = SoundexBuilder::default()
            .max_length(None)
            .padding(None)
            .build()?;

        assert_eq!(primary(&soundex, "Ashcraft"), "A2613");
        assert_eq!(primary(&soundex, "Lee"), "L");
        assert_eq!(primary(&soundex, "Oppenheimer"), "O1556");

        Ok(())
    }

    #[test]
    fn test_no_padding() -> Result<(), PhoneticError> {
        let soundex = SoundexBuilder::default().padding(None).build()?;

        assert_eq!(primary(&soundex, "Lee"), "L");
        assert_eq!(primary(&soundex, "Ashcraft"), "A261");

        Ok(())
    }

    #[test]
    fn test_custom_padding() -> Result<(), PhoneticError> {
        let soundex = SoundexBuilder::default()
            .padding(Some('*'))
            .max_length(Some(6))
            .build()?;

        assert_eq!(primary(&soundex, "Lee"), "L*****");
        assert_eq!(primary(&soundex, "Robert"), "R163**");

        Ok(())
    }

    #[test]
    fn test_zero_is_a_group() -> Result<(), PhoneticError> {
        // Vowels in group '0', nothing ignored.
        let mapping: SoundexMapping = "01230120022455012623010202".parse()?;
        let soundex = SoundexBuilder::with_mapping(mapping)
            .ignore_h_w(false)
            .max_length(None)
            .padding(None)
            .build()?;

        assert_eq!(primary(&soundex, "Robert"), "R01063");
        assert_eq!(primary(&soundex, "Aaron"), "A605");

        Ok(())
    }

    #[test]
    fn test_unmapped_letters_are_skipped() -> Result<(), PhoneticError> {
        // Same as american, without code for 'S'.
        let mapping: SoundexMapping = "-123-12--22455-126_3-1-2-2".parse()?;
        let soundex = SoundexBuilder::with_mapping(mapping).build()?;

        assert_eq!(primary(&soundex, "Ashcraft"), "A261");
        // Unmapped 'S' doesn't separate the two 'T'.
        assert_eq!(primary(&soundex, "Tst"), "T000");
        assert_eq!(primary(&soundex, "Baster"), "B360");

        Ok(())
    }

    #[test]
    fn test_prefixes() {
        let soundex = Soundex::from(SoundexPreset::Special);

        let encoding = soundex.encode("von Neumann").unwrap();
        assert_eq!(encoding.primary(), "V555");
        assert_eq!(alternates(&encoding), vec!["N550"]);

        let encoding = soundex.encode("De La Cruz").unwrap();
        assert_eq!(encoding.primary(), "D426");
        assert_eq!(alternates(&encoding), vec!["C620"]);

        let encoding = soundex.encode("D'Angelo").unwrap();
        assert_eq!(encoding.primary(), "D524");
        assert_eq!(alternates(&encoding), vec!["A524"]);
    }

    #[test]
    fn test_prefixes_only() -> Result<(), PhoneticError> {
        let soundex = SoundexBuilder::default().prefixes(true).build()?;

        let encoding = soundex.encode("Van Dyke-Smith").unwrap();
        assert_eq!(encoding.primary(), "V532");
        assert_eq!(alternates(&encoding), vec!["D225"]);

        // Nothing left once the prefix is removed.
        let encoding = soundex.encode("Van").unwrap();
        assert_eq!(encoding.primary(), "V500");
        assert_eq!(encoding.alternates(), None);

        let encoding = soundex.encode("Smith").unwrap();
        assert_eq!(encoding.alternates(), None);

        Ok(())
    }

    #[test]
    fn test_hyphenated_parts() -> Result<(), PhoneticError> {
        let soundex = SoundexBuilder::default().hyphenated_parts(true).build()?;

        let encoding = soundex.encode("Booth-Davis").unwrap();
        assert_eq!(encoding.primary(), "B300");
        assert_eq!(alternates(&encoding), vec!["D120"]);

        let encoding = soundex.encode("Blotchet - Halls - Booth").unwrap();
        assert_eq!(encoding.primary(), "B432");
        assert_eq!(alternates(&encoding), vec!["B300", "H420"]);

        // The primary code is not an alternate.
        let encoding = soundex.encode("Smith-Smythe").unwrap();
        assert_eq!(encoding.primary(), "S530");
        assert_eq!(encoding.alternates(), None);

        // Empty parts are skipped.
        let encoding = soundex.encode("-KINGSMITH").unwrap();
        assert_eq!(encoding.primary(), "K525");
        assert_eq!(encoding.alternates(), None);

        Ok(())
    }

    #[test]
    fn test_special_hyphen_and_prefixes() {
        let soundex = Soundex::from(SoundexPreset::Special);

        let encoding = soundex.encode("De La Cruz-Van Dyke").unwrap();
        assert_eq!(encoding.primary(), "D426");
        assert_eq!(alternates(&encoding), vec!["C620", "D200", "V532"]);
    }

    #[test]
    fn test_mapping_parse() -> Result<(), PhoneticError> {
        let mapping = SoundexMapping::try_from("-123-12--22455-12623-1-2-2")?;
        assert_eq!(mapping, DEFAULT_US_ENGLISH_MAPPING_SOUNDEX);
        assert_eq!(mapping.to_string(), "-123-12--22455-12623-1-2-2");
        assert_eq!(mapping.code('a'), Some(SoundexCode::Ignored));
        assert_eq!(mapping.code('B'), Some(SoundexCode::Group('1')));
        assert_eq!(mapping.code('\''), None);

        let mapping = SoundexMapping::try_from("_123-12--22455-12623-1-2-2".to_string())?;
        assert_eq!(mapping.code('A'), None);

        Ok(())
    }

    #[test]
    fn test_mapping_parse_errors() {
        assert!(matches!(
            "-123".parse::<SoundexMapping>(),
            Err(PhoneticError::InvalidMapping(_))
        ));
        assert!(matches!(
            "-123-12--22455-12623-1-2-!".parse::<SoundexMapping>(),
            Err(PhoneticError::InvalidMapping(_))
        ));
    }

    #[test]
    fn test_build_errors() {
        let no_group = SoundexMapping::new([Some(SoundexCode::Ignored); 26]);
        assert!(matches!(
            SoundexBuilder::with_mapping(no_group).build(),
            Err(PhoneticError::InvalidMapping(_))
        ));
        assert!(matches!(
            SoundexBuilder::default().max_length(Some(0)).build(),
            Err(PhoneticError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SoundexBuilder::default().max_length(None).build(),
            Err(PhoneticError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_new_rejects_mapping_without_group() {
        let no_group = SoundexMapping::new([Some(SoundexCode::Ignored); 26]);
        assert!(matches!(
            Soundex::new(no_group, true),
            Err(PhoneticError::InvalidMapping(_))
        ));
        assert_eq!(
            Soundex::new(DEFAULT_US_ENGLISH_MAPPING_SOUNDEX, true),
            Ok(Soundex::default())
        );
    }

    #[test]
    fn test_presets_build() -> Result<(), PhoneticError> {
        for preset in all::<SoundexPreset>() {
            assert_eq!(SoundexBuilder::from(preset).build()?, Soundex::from(preset));
        }
        assert_eq!(Soundex::default(), Soundex::from(SoundexPreset::American));

        Ok(())
    }

    #[test]
    fn test_configuration_from_json() -> Result<(), serde_json::Error> {
        let soundex: Soundex = serde_json::from_str(
            r#"{ "mapping": "-123-12--22455-12623-1-2-2", "ignore_h_w": false, "track_ignored": false }"#,
        )?;
        assert_eq!(soundex, Soundex::from(SoundexPreset::Genealogy));

        let soundex: Soundex = serde_json::from_str(r#"{ "prefixes": true, "hyphenated_parts": true }"#)?;
        assert_eq!(soundex, Soundex::from(SoundexPreset::Special));

        Ok(())
    }

    #[test]
    fn test_configuration_from_json_is_validated() {
        let result: Result<Soundex, _> = serde_json::from_str(r#"{ "mapping": "-12" }"#);
        assert!(result.is_err());

        let result: Result<Soundex, _> = serde_json::from_str(r#"{ "max_length": 0 }"#);
        assert!(result.is_err());
    }
}

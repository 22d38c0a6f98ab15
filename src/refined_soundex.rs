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
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::helper::{deserialize_max_length, letter_index, mapping_chars};
use crate::normalizer::{clean, letters_only};
use crate::{Encoder, PhoneticEncoding, PhoneticError};

const NO_CODE: char = '-';

const ENGLISH_MAPPING: [Option<char>; 26] = [
    Some('0'),
    Some('1'),
    Some('3'),
    Some('6'),
    Some('0'),
    Some('2'),
    Some('4'),
    Some('0'),
    Some('0'),
    Some('4'),
    Some('3'),
    Some('7'),
    Some('8'),
    Some('8'),
    Some('0'),
    Some('1'),
    Some('5'),
    Some('9'),
    Some('3'),
    Some('6'),
    Some('0'),
    Some('2'),
    Some('0'),
    Some('5'),
    Some('0'),
    Some('5'),
];

/// This the [refined soundex](https://en.wikipedia.org/wiki/Soundex) implementation of [Encoder].
///
/// It works only with ASCII and contains an array that contains the code for each letter.
/// The first letter is kept and then every letter, the first one included, is coded.
/// The code is not padded, and only truncated if a maximum length is set.
///
/// [Default] implementation provides an array for english US.
///
/// ```rust
/// use soundalike::{Encoder, RefinedSoundex};
/// let refined_soundex = RefinedSoundex::default();
///
/// assert_eq!(refined_soundex.encode_primary("jumped"), Some("J408106".to_string()));
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RefinedSoundex {
    mapping: [Option<char>; 26],
    #[serde(default, deserialize_with = "deserialize_max_length")]
    max_length: Option<usize>,
}

impl RefinedSoundex {
    /// Use this constructor to provide a custom array.
    ///
    /// There are implementations of [TryFrom] for convenience.
    ///
    /// # Parameter
    ///
    /// * `mapping` : mapping array. It contains, for each letter its corresponding code. Index 0 is the code for `A`, index 1
    /// is for `B`and so on for each letter of the latin alphabet. A letter without code is skipped.
    pub fn new(mapping: [Option<char>; 26]) -> Self {
        Self {
            mapping,
            max_length: None,
        }
    }

    /// Truncate codes to `max_length` characters. `None`, or `Some(0)`, means no limit.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length.filter(|max| *max > 0);

        self
    }

    fn get_mapping_code(&self, ch: char) -> Option<char> {
        letter_index(ch).and_then(|index| self.mapping[index])
    }
}

impl FromStr for RefinedSoundex {
    type Err = PhoneticError;

    /// Construct a [RefinedSoundex] from the mapping in parameter. This [str] will
    /// be converted into an array of 26 chars, so `mapping`'s length must be 26.
    ///
    /// `-` means the letter has no code.
    ///
    /// # Parameters
    ///
    /// * `mapping` : str that contains the corresponding code for each character.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), soundalike::PhoneticError> {
    /// use soundalike::{Encoder, RefinedSoundex};
    ///
    /// // Construct an encoder with 'A' coded into '0', 'B' into '1', 'C' into '3', 'D' into '6', 'E' into '0', ...etc
    /// // (this is the default mapping)
    /// let refined_soundex = "01360240043788015936020505".parse::<RefinedSoundex>()?;
    ///
    /// assert_eq!(refined_soundex.encode_primary("jumped"), Some("J408106".to_string()));
    /// #    Ok(())
    /// # }
    /// ```
    fn from_str(mapping: &str) -> Result<Self, Self::Err> {
        let chars = mapping_chars(mapping)?;
        let mut codes: [Option<char>; 26] = [None; 26];
        for (code, ch) in codes.iter_mut().zip(chars) {
            *code = match ch {
                NO_CODE => None,
                ch if ch.is_ascii_alphanumeric() => Some(ch),
                ch => {
                    return Err(PhoneticError::InvalidMapping(format!(
                        "'{}' is not a valid refined soundex code",
                        ch
                    )))
                }
            };
        }

        Ok(Self::new(codes))
    }
}

impl TryFrom<&str> for RefinedSoundex {
    type Error = PhoneticError;

    /// See [FromStr] implementation.
    fn try_from(mapping: &str) -> Result<Self, Self::Error> {
        mapping.parse()
    }
}

impl TryFrom<String> for RefinedSoundex {
    type Error = PhoneticError;

    /// See [FromStr] implementation.
    fn try_from(mapping: String) -> Result<Self, Self::Error> {
        mapping.as_str().parse()
    }
}

impl Default for RefinedSoundex {
    fn default() -> Self {
        Self::new(ENGLISH_MAPPING)
    }
}

impl Encoder for RefinedSoundex {
    fn encode(&self, value: &str) -> Option<PhoneticEncoding> {
        let value = match clean(value, false).as_deref().and_then(letters_only) {
            Some(value) => value,
            None => {
                trace!(value, "nothing to encode with refined soundex");
                return None;
            }
        };

        let mut code = String::with_capacity(value.len() + 1);
        let mut previous: Option<char> = None;

        for (index, ch) in value.chars().enumerate() {
            if index == 0 {
                code.push(ch);
            }
            if let Some(code_value) = self.get_mapping_code(ch) {
                if Some(code_value) != previous {
                    code.push(code_value);
                }
                previous = Some(code_value);
            }
        }

        if let Some(max_length) = self.max_length {
            code.truncate(max_length);
        }

        Some(PhoneticEncoding::new(code))
    }
}

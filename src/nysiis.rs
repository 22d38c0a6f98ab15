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
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::helper::{char_at, deserialize_max_length, is_simple_vowel, starts_with_at};
use crate::normalizer::{clean_name, letters_only};
use crate::{Encoder, PhoneticEncoding};

const ORIGINAL_LENGTH: usize = 6;
const MODIFIED_LENGTH: usize = 8;

/// Rewrites of the first letters, applied in order.
const FIRST_LETTERS: [(&str, &str); 6] = [
    ("MAC", "MCC"),
    ("KN", "NN"),
    ("K", "C"),
    ("PH", "FF"),
    ("PF", "FF"),
    ("SCH", "SSS"),
];
const MODIFIED_FIRST_LETTERS: [(&str, &str); 3] = [("WR", "RR"), ("RH", "RR"), ("DG", "GG")];

const ENDING_Y: [&str; 2] = ["EE", "IE"];
const MODIFIED_ENDING_Y: [&str; 3] = ["EE", "IE", "YE"];
const ENDING_D: [&str; 3] = ["DT", "RT", "RD"];
const MODIFIED_ENDINGS: [(&str, &str); 2] = [("IX", "ICK"), ("EX", "ECK")];

/// NYSIIS rule sets.
#[derive(
    Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, Sequence,
)]
pub enum NysiisRules {
    /// The 1970 algorithm, codes are at most 6 characters long.
    Original,
    /// The modified algorithm, with more first/last letters rewrites. Codes are at most
    /// 8 characters long.
    Modified,
}

impl NysiisRules {
    fn default_max_length(self) -> usize {
        match self {
            Self::Original => ORIGINAL_LENGTH,
            Self::Modified => MODIFIED_LENGTH,
        }
    }
}

/// This the [Nysiis](https://en.wikipedia.org/wiki/New_York_State_Identification_and_Intelligence_System) algorithm.
///
/// [Default] implementation constructs a strict version of the original rules.
/// That means the code has at most 6 characters.
/// A `new` constructor is provided, allowing another rule set and code length.
///
/// Generational suffixes (`JR`, `SR`, `III`, ...) are not coded.
///
/// ```rust
/// use soundalike::{Encoder, Nysiis, NysiisRules};
///
/// // Strict
/// let nysiis = Nysiis::default();
/// assert_eq!(nysiis.encode_primary("WESTERLUND"), Some("WASTAR".to_string()));
///
/// // Not strict
/// let nysiis = Nysiis::new(NysiisRules::Original, None);
/// assert_eq!(nysiis.encode_primary("WESTERLUND"), Some("WASTARLAD".to_string()));
///
/// // Modified rules
/// let nysiis = Nysiis::from(NysiisRules::Modified);
/// assert_eq!(nysiis.encode_primary("MACINTOSH"), Some("MCANTAS".to_string()));
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Nysiis {
    rules: NysiisRules,
    #[serde(default, deserialize_with = "deserialize_max_length")]
    max_length: Option<usize>,
}

impl Nysiis {
    /// Use this constructor to choose the rules and the maximum code length.
    ///
    /// # Parameter
    ///
    /// * `rules`: rule set.
    /// * `max_length`: maximum code length, `None` or `Some(0)` for no limit.
    pub fn new(rules: NysiisRules, max_length: Option<usize>) -> Self {
        Self {
            rules,
            max_length: max_length.filter(|max| *max > 0),
        }
    }

    pub fn rules(&self) -> NysiisRules {
        self.rules
    }

    fn is_modified(&self) -> bool {
        self.rules == NysiisRules::Modified
    }

    fn first_letters(&self, chars: &mut Vec<char>) {
        for (from, to) in FIRST_LETTERS {
            replace_start(chars, from, to);
        }

        if self.is_modified() {
            for (from, to) in MODIFIED_FIRST_LETTERS {
                replace_start(chars, from, to);
            }
            for ch in chars.iter_mut().take_while(|ch| is_simple_vowel(**ch)) {
                *ch = 'A';
            }
        }
    }

    fn last_letters(&self, chars: &mut Vec<char>) {
        let modified = self.is_modified();

        if modified && matches!(chars.last(), Some('S' | 'Z')) {
            chars.pop();
        }

        let ending_y: &[&str] = if modified {
            &MODIFIED_ENDING_Y
        } else {
            &ENDING_Y
        };
        for ending in ending_y {
            if replace_end(chars, ending, "Y") {
                break;
            }
        }

        let nt = if modified { "N" } else { "D" };
        for (ending, to) in ENDING_D
            .iter()
            .map(|ending| (*ending, "D"))
            .chain([("NT", nt), ("ND", "D")])
        {
            if replace_end(chars, ending, to) {
                break;
            }
        }

        if modified {
            for (ending, to) in MODIFIED_ENDINGS {
                if replace_end(chars, ending, to) {
                    break;
                }
            }
        }
    }

    /// Rewrite of the letter at `index`, it can also rewrite the following letters.
    fn transcode(&self, chars: &[char], index: usize) -> String {
        let at = |offset: isize| char_at(chars, index as isize + offset);
        let current = chars[index];
        let previous = chars[index - 1];
        let next = at(1);
        let is_last = index + 1 == chars.len();
        let modified = self.is_modified();

        if current == 'E' && next == Some('V') {
            return "AF".to_string();
        }
        if is_simple_vowel(current) {
            return "A".to_string();
        }
        if modified && current == 'Y' && !is_last {
            return "A".to_string();
        }

        match (current, next) {
            ('Q', _) => return "G".to_string(),
            ('Z', _) => return "S".to_string(),
            ('M', _) => return "N".to_string(),
            ('K', Some('N')) => return "NN".to_string(),
            ('K', _) => return "C".to_string(),
            _ => (),
        }

        if starts_with_at(chars, index as isize, "SCH") {
            return if modified && index + 3 == chars.len() {
                "SSA".to_string()
            } else {
                "SSS".to_string()
            };
        }
        if modified && current == 'S' && next == Some('H') {
            return if index + 2 == chars.len() {
                "SA".to_string()
            } else {
                "SS".to_string()
            };
        }
        if current == 'P' && next == Some('H') {
            return "FF".to_string();
        }
        if modified {
            if starts_with_at(chars, index as isize, "GHT") {
                return "TTT".to_string();
            }
            if starts_with_at(chars, index as isize, "DG") {
                return "GG".to_string();
            }
            if starts_with_at(chars, index as isize, "WR") {
                return "RR".to_string();
            }
        }

        let previous_is_vowel = is_simple_vowel(previous);
        if (current == 'H' && !(previous_is_vowel && next.map_or(false, is_simple_vowel)))
            || (current == 'W' && previous_is_vowel)
        {
            previous.to_string()
        } else {
            current.to_string()
        }
    }
}

fn replace_start(chars: &mut Vec<char>, from: &str, to: &str) {
    if starts_with_at(chars, 0, from) {
        chars.splice(..from.len(), to.chars());
    }
}

fn replace_end(chars: &mut Vec<char>, from: &str, to: &str) -> bool {
    if chars.len() < from.len() {
        return false;
    }

    let start = chars.len() - from.len();
    if starts_with_at(chars, start as isize, from) {
        chars.splice(start.., to.chars());
        true
    } else {
        false
    }
}

impl Default for Nysiis {
    fn default() -> Self {
        Self::from(NysiisRules::Original)
    }
}

/// The rule set with its usual maximum length : 6 for [NysiisRules::Original], 8 for
/// [NysiisRules::Modified].
impl From<NysiisRules> for Nysiis {
    fn from(rules: NysiisRules) -> Self {
        Self::new(rules, Some(rules.default_max_length()))
    }
}

impl Encoder for Nysiis {
    fn encode(&self, value: &str) -> Option<PhoneticEncoding> {
        let letters = match clean_name(value, false).as_deref().and_then(letters_only) {
            Some(letters) => letters,
            None => {
                trace!(value, "nothing to encode with nysiis");
                return None;
            }
        };

        let mut chars: Vec<char> = letters.chars().collect();
        if chars.len() >= 2 {
            self.first_letters(&mut chars);
            self.last_letters(&mut chars);
        }

        let mut key: Vec<char> = Vec::with_capacity(chars.len());
        key.extend(chars.first());

        let mut index = 1;
        while index < chars.len() {
            let transcode = self.transcode(&chars, index);
            for (offset, ch) in transcode.chars().enumerate() {
                if let Some(slot) = chars.get_mut(index + offset) {
                    *slot = ch;
                }
            }

            if chars[index - 1] != chars[index] {
                key.push(chars[index]);
            }

            index += 1;
        }

        if key.len() > 1 {
            if key.last() == Some(&'S') {
                key.pop();
            }
            if key.len() > 2 && key.ends_with(&['A', 'Y']) {
                key.remove(key.len() - 2);
            }
            if key.last() == Some(&'A') {
                key.pop();
            }
        }

        if let Some(max_length) = self.max_length {
            key.truncate(max_length);
        }

        Some(PhoneticEncoding::new(key.into_iter().collect::<String>()))
    }
}

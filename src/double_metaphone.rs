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
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::helper::{char_at, matches_any_at};
use crate::normalizer::clean;
use crate::{Encoder, PhoneticEncoding, PhoneticError};

const DEFAULT_MAX_CODE_LENGTH: usize = 4;

const VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];
const SILENT_START: [&str; 5] = ["GN", "KN", "PN", "WR", "PS"];
const L_R_N_M_B_H_F_V_W_SPACE: [&str; 10] = ["L", "R", "N", "M", "B", "H", "F", "V", "W", " "];
const ES_EP_EB_EL_EY_IB_IL_IN_IE_EI_ER: [&str; 11] = [
    "ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER",
];
const L_T_K_S_N_M_B_Z: [&str; 8] = ["L", "T", "K", "S", "N", "M", "B", "Z"];
const GERMANIC_START: [&str; 2] = ["VAN ", "VON "];

/// Primary and alternate codes being built, each one capped at the maximum length.
struct DoubleMetaphoneResult {
    primary: String,
    alternate: String,
    max_length: usize,
}

impl DoubleMetaphoneResult {
    fn new(max_length: usize) -> Self {
        Self {
            primary: String::with_capacity(max_length),
            alternate: String::with_capacity(max_length),
            max_length,
        }
    }

    fn append(&mut self, code: &str) {
        self.append_primary(code);
        self.append_alternate(code);
    }

    fn append_both(&mut self, primary: &str, alternate: &str) {
        self.append_primary(primary);
        self.append_alternate(alternate);
    }

    fn append_primary(&mut self, code: &str) {
        let room = self.max_length.saturating_sub(self.primary.len());
        self.primary.extend(code.chars().take(room));
    }

    fn append_alternate(&mut self, code: &str) {
        let room = self.max_length.saturating_sub(self.alternate.len());
        self.alternate.extend(code.chars().take(room));
    }

    fn is_complete(&self) -> bool {
        self.primary.len() >= self.max_length && self.alternate.len() >= self.max_length
    }
}

/// The cleaned word and what is known about it before applying rules.
struct Word {
    chars: Vec<char>,
    slavo_germanic: bool,
}

impl Word {
    fn new(cleaned: &str) -> Self {
        let slavo_germanic = cleaned.contains('W')
            || cleaned.contains('K')
            || cleaned.contains("CZ")
            || cleaned.contains("WITZ");

        Self {
            chars: cleaned.chars().collect(),
            slavo_germanic,
        }
    }

    fn len(&self) -> isize {
        self.chars.len() as isize
    }

    fn is_last(&self, index: isize) -> bool {
        index == self.len() - 1
    }

    fn at(&self, index: isize) -> Option<char> {
        char_at(&self.chars, index)
    }

    fn is(&self, index: isize, ch: char) -> bool {
        self.at(index) == Some(ch)
    }

    fn is_vowel(&self, index: isize) -> bool {
        self.at(index).map_or(false, |ch| VOWELS.contains(&ch))
    }

    fn contains(&self, index: isize, patterns: &[&str]) -> bool {
        matches_any_at(&self.chars, index, patterns)
    }

    fn is_silent_start(&self) -> bool {
        self.contains(0, &SILENT_START)
    }

    fn is_germanic(&self) -> bool {
        self.contains(0, &GERMANIC_START) || self.contains(0, &["SCH"])
    }
}

/// This is the [Double Metaphone](https://en.wikipedia.org/wiki/Metaphone#Double_Metaphone) implementation
/// of [Encoder].
///
/// It produces a primary code and, when the pronunciation is ambiguous (germanic, slavic, italian,
/// spanish origins...), an alternate code. Each code is at most `max_code_length` characters long
/// (4 by default).
///
/// Input keeps its spaces, so `Mac Gregor` or `Van Dyke` are not coded like `MacGregor` or `VanDyke`.
/// Accented Latin letters are allowed, only `Ç` and `Ñ` have a code.
///
/// ```rust
/// use soundalike::{DoubleMetaphone, Encoder};
///
/// let double_metaphone = DoubleMetaphone::default();
///
/// let encoding = double_metaphone.encode("Cardillo").unwrap();
/// assert_eq!(encoding.primary(), "KRTL");
/// assert!(encoding.contains("KRT"));
///
/// assert!(double_metaphone.is_double_metaphone_equal("Thomas", "Tomas", false));
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct DoubleMetaphone {
    max_code_length: usize,
}

impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
        }
    }
}

impl TryFrom<usize> for DoubleMetaphone {
    type Error = PhoneticError;

    fn try_from(max_code_length: usize) -> Result<Self, Self::Error> {
        Self::new(max_code_length)
    }
}

impl From<DoubleMetaphone> for usize {
    fn from(double_metaphone: DoubleMetaphone) -> Self {
        double_metaphone.max_code_length
    }
}

impl DoubleMetaphone {
    /// Construct an encoder with a custom maximum code length.
    ///
    /// # Error
    ///
    /// [PhoneticError::InvalidConfiguration] if `max_code_length` is `0`.
    pub fn new(max_code_length: usize) -> Result<Self, PhoneticError> {
        if max_code_length == 0 {
            return Err(PhoneticError::InvalidConfiguration(
                "double metaphone maximum code length must be greater than 0".to_string(),
            ));
        }

        Ok(Self { max_code_length })
    }

    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// Return the alternate code. It is the same as the primary code when
    /// the pronunciation isn't ambiguous.
    pub fn encode_alternate(&self, value: &str) -> Option<String> {
        self.double_metaphone(value).map(|result| result.alternate)
    }

    /// Check that both values have the same primary code, or the same alternate code
    /// when `use_alternate` is `true`.
    ///
    /// A value without code is never equal to anything.
    pub fn is_double_metaphone_equal(
        &self,
        first: &str,
        second: &str,
        use_alternate: bool,
    ) -> bool {
        let code = |value: &str| {
            self.double_metaphone(value).map(|result| {
                if use_alternate {
                    result.alternate
                } else {
                    result.primary
                }
            })
        };

        match (code(first), code(second)) {
            (Some(first), Some(second)) => first == second,
            _ => false,
        }
    }

    fn double_metaphone(&self, value: &str) -> Option<DoubleMetaphoneResult> {
        let cleaned = clean(value, true)?;
        let word = Word::new(&cleaned);
        let mut result = DoubleMetaphoneResult::new(self.max_code_length);

        let mut index: isize = if word.is_silent_start() { 1 } else { 0 };

        while !result.is_complete() && index < word.len() {
            let Some(ch) = word.at(index) else {
                break;
            };
            index = match ch {
                'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => handle_aeiouy(&mut result, index),
                'B' => {
                    result.append("P");
                    skip_double(&word, index, 'B')
                }
                '\u{00C7}' => {
                    result.append("S");
                    index + 1
                }
                'C' => handle_c(&word, &mut result, index),
                'D' => handle_d(&word, &mut result, index),
                'F' => {
                    result.append("F");
                    skip_double(&word, index, 'F')
                }
                'G' => handle_g(&word, &mut result, index),
                'H' => handle_h(&word, &mut result, index),
                'J' => handle_j(&word, &mut result, index),
                'K' => {
                    result.append("K");
                    skip_double(&word, index, 'K')
                }
                'L' => handle_l(&word, &mut result, index),
                'M' => {
                    result.append("M");
                    if condition_m0(&word, index) {
                        index + 2
                    } else {
                        index + 1
                    }
                }
                'N' => {
                    result.append("N");
                    skip_double(&word, index, 'N')
                }
                '\u{00D1}' => {
                    result.append("N");
                    index + 1
                }
                'P' => handle_p(&word, &mut result, index),
                'Q' => {
                    result.append("K");
                    skip_double(&word, index, 'Q')
                }
                'R' => handle_r(&word, &mut result, index),
                'S' => handle_s(&word, &mut result, index),
                'T' => handle_t(&word, &mut result, index),
                'V' => {
                    result.append("F");
                    skip_double(&word, index, 'V')
                }
                'W' => handle_w(&word, &mut result, index),
                'X' => handle_x(&word, &mut result, index),
                'Z' => handle_z(&word, &mut result, index),
                _ => index + 1,
            };
        }

        if result.primary.is_empty() {
            None
        } else {
            Some(result)
        }
    }
}

impl Encoder for DoubleMetaphone {
    fn encode(&self, value: &str) -> Option<PhoneticEncoding> {
        match self.double_metaphone(value) {
            Some(result) => Some(PhoneticEncoding::with_alternates(
                result.primary,
                [result.alternate],
            )),
            None => {
                trace!(value, "nothing to encode with double metaphone");
                None
            }
        }
    }
}

fn skip_double(word: &Word, index: isize, ch: char) -> isize {
    if word.is(index + 1, ch) {
        index + 2
    } else {
        index + 1
    }
}

fn handle_aeiouy(result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if index == 0 {
        result.append("A");
    }

    index + 1
}

fn handle_c(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if condition_c0(word, index) {
        result.append("K");
        index + 2
    } else if index == 0 && word.contains(index, &["CAESAR"]) {
        result.append("S");
        index + 2
    } else if word.contains(index, &["CH"]) {
        handle_ch(word, result, index)
    } else if word.contains(index, &["CZ"]) && !word.contains(index - 2, &["WICZ"]) {
        // "Czerny"
        result.append_both("S", "X");
        index + 2
    } else if word.contains(index + 1, &["CIA"]) {
        // "focaccia"
        result.append("X");
        index + 3
    } else if word.contains(index, &["CC"]) && !(index == 1 && word.is(0, 'M')) {
        // not "McClelland"
        handle_cc(word, result, index)
    } else if word.contains(index, &["CK", "CG", "CQ"]) {
        result.append("K");
        index + 2
    } else if word.contains(index, &["CI", "CE", "CY"]) {
        if word.contains(index, &["CIO", "CIE", "CIA"]) {
            result.append_both("S", "X");
        } else {
            result.append("S");
        }
        index + 2
    } else {
        result.append("K");
        if word.contains(index + 1, &[" C", " Q", " G"]) {
            // "Mac Caffrey", "Mac Gregor"
            index + 3
        } else if word.contains(index + 1, &["C", "K", "Q"])
            && !word.contains(index + 1, &["CE", "CI"])
        {
            index + 2
        } else {
            index + 1
        }
    }
}

fn handle_cc(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.contains(index + 2, &["I", "E", "H"]) && !word.contains(index + 2, &["HU"]) {
        // "bellocchio" but not "bacchus"
        if (index == 1 && word.is(index - 1, 'A'))
            || word.contains(index - 1, &["UCCEE", "UCCES"])
        {
            // "accident", "accede", "succeed"
            result.append("KS");
        } else {
            // "bacci", "bertucci"
            result.append("X");
        }
        index + 3
    } else {
        result.append("K");
        index + 2
    }
}

fn handle_ch(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if index > 0 && word.contains(index, &["CHAE"]) {
        // "Michael"
        result.append_both("K", "X");
    } else if condition_ch0(word, index) || condition_ch1(word, index) {
        result.append("K");
    } else if index > 0 {
        if word.contains(0, &["MC"]) {
            result.append("K");
        } else {
            result.append_both("X", "K");
        }
    } else {
        result.append("X");
    }

    index + 2
}

fn handle_d(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.contains(index, &["DG"]) {
        if word.contains(index + 2, &["I", "E", "Y"]) {
            // "Edge"
            result.append("J");
            index + 3
        } else {
            // "Edgar"
            result.append("TK");
            index + 2
        }
    } else if word.contains(index, &["DT", "DD"]) {
        result.append("T");
        index + 2
    } else {
        result.append("T");
        index + 1
    }
}

fn handle_g(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    let slavo_germanic = word.slavo_germanic;

    if word.is(index + 1, 'H') {
        handle_gh(word, result, index)
    } else if word.is(index + 1, 'N') {
        if index == 1 && word.is_vowel(0) && !slavo_germanic {
            result.append_both("KN", "N");
        } else if !word.contains(index + 2, &["EY"]) && !word.is(index + 1, 'Y') && !slavo_germanic
        {
            result.append_both("N", "KN");
        } else {
            result.append("KN");
        }
        index + 2
    } else if word.contains(index + 1, &["LI"]) && !slavo_germanic {
        result.append_both("KL", "L");
        index + 2
    } else if index == 0
        && (word.is(index + 1, 'Y') || word.contains(index + 1, &ES_EP_EB_EL_EY_IB_IL_IN_IE_EI_ER))
    {
        // -ges-, -gep-, -gel-, -gie- at beginning
        result.append_both("K", "J");
        index + 2
    } else if (word.contains(index + 1, &["ER"]) || word.is(index + 1, 'Y'))
        && !word.contains(0, &["DANGER", "RANGER", "MANGER"])
        && !word.contains(index - 1, &["E", "I"])
        && !word.contains(index - 1, &["RGY", "OGY"])
    {
        // -ger-, -gy-
        result.append_both("K", "J");
        index + 2
    } else if word.contains(index + 1, &["E", "I", "Y"])
        || word.contains(index - 1, &["AGGI", "OGGI"])
    {
        // italian "biaggi"
        if word.is_germanic() || word.contains(index + 1, &["ET"]) {
            result.append("K");
        } else if word.contains(index + 1, &["IER"]) {
            result.append("J");
        } else {
            result.append_both("J", "K");
        }
        index + 2
    } else if word.is(index + 1, 'G') {
        result.append("K");
        index + 2
    } else {
        result.append("K");
        index + 1
    }
}

fn handle_gh(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if index > 0 && !word.is_vowel(index - 1) {
        result.append("K");
    } else if index == 0 {
        if word.is(index + 2, 'I') {
            result.append("J");
        } else {
            result.append("K");
        }
    } else if (index > 1 && word.contains(index - 2, &["B", "H", "D"]))
        || (index > 2 && word.contains(index - 3, &["B", "H", "D"]))
        || (index > 3 && word.contains(index - 4, &["B", "H"]))
    {
        // Parker's rule, "hugh"
    } else if index > 2
        && word.is(index - 1, 'U')
        && word.contains(index - 3, &["C", "G", "L", "R", "T"])
    {
        // "laugh", "McLaughlin", "cough", "gough", "rough", "tough"
        result.append("F");
    } else if index > 0 && !word.is(index - 1, 'I') {
        result.append("K");
    }

    index + 2
}

fn handle_h(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    // Only kept first or between vowels, also skips "HH".
    if (index == 0 || word.is_vowel(index - 1)) && word.is_vowel(index + 1) {
        result.append("H");
        index + 2
    } else {
        index + 1
    }
}

fn handle_j(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    let is_jose = word.contains(index, &["JOSE"]);
    let is_san = word.contains(0, &["SAN "]);

    if is_jose || is_san {
        // "Jose", "San Jacinto"
        if (index == 0 && word.is(index + 4, ' ')) || word.len() == 4 || is_san {
            result.append("H");
        } else {
            result.append_both("J", "H");
        }
        return index + 1;
    }

    if index == 0 {
        result.append_both("J", "A");
    } else if word.is_vowel(index - 1)
        && !word.slavo_germanic
        && (word.is(index + 1, 'A') || word.is(index + 1, 'O'))
    {
        result.append_both("J", "H");
    } else if word.is_last(index) {
        result.append_both("J", " ");
    } else if !word.contains(index + 1, &L_T_K_S_N_M_B_Z)
        && !word.contains(index - 1, &["S", "K", "L"])
    {
        result.append("J");
    }

    skip_double(word, index, 'J')
}

fn handle_l(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.is(index + 1, 'L') {
        if condition_l0(word, index) {
            result.append_primary("L");
        } else {
            result.append("L");
        }
        index + 2
    } else {
        result.append("L");
        index + 1
    }
}

fn handle_p(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.is(index + 1, 'H') {
        result.append("F");
        index + 2
    } else {
        result.append("P");
        if word.contains(index + 1, &["P", "B"]) {
            index + 2
        } else {
            index + 1
        }
    }
}

fn handle_r(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    // French "Rogier"
    if word.is_last(index)
        && !word.slavo_germanic
        && word.contains(index - 2, &["IE"])
        && !word.contains(index - 4, &["ME", "MA"])
    {
        result.append_alternate("R");
    } else {
        result.append("R");
    }

    skip_double(word, index, 'R')
}

fn handle_s(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.contains(index - 1, &["ISL", "YSL"]) {
        // "island", "isle", "carlisle", "carlysle"
        index + 1
    } else if index == 0 && word.contains(index, &["SUGAR"]) {
        result.append_both("X", "S");
        index + 1
    } else if word.contains(index, &["SH"]) {
        if word.contains(index + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            result.append("S");
        } else {
            result.append("X");
        }
        index + 2
    } else if word.contains(index, &["SIO", "SIA"]) || word.contains(index, &["SIAN"]) {
        // italian and armenian
        if word.slavo_germanic {
            result.append("S");
        } else {
            result.append_both("S", "X");
        }
        index + 3
    } else if (index == 0 && word.contains(index + 1, &["M", "N", "L", "W"]))
        || word.contains(index + 1, &["Z"])
    {
        // "smith" match "schmidt", "snider" match "schneider", slavic -sz-
        result.append_both("S", "X");
        skip_double(word, index, 'Z')
    } else if word.contains(index, &["SC"]) {
        handle_sc(word, result, index)
    } else {
        if word.is_last(index) && word.contains(index - 2, &["AI", "OI"]) {
            // french "resnais", "artois"
            result.append_alternate("S");
        } else {
            result.append("S");
        }
        if word.contains(index + 1, &["S", "Z"]) {
            index + 2
        } else {
            index + 1
        }
    }
}

fn handle_sc(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.is(index + 2, 'H') {
        if word.contains(index + 3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // dutch "school", "schooner"
            if word.contains(index + 3, &["ER", "EN"]) {
                // "schermerhorn", "schenker"
                result.append_both("X", "SK");
            } else {
                result.append("SK");
            }
        } else if index == 0 && !word.is_vowel(3) && !word.is(3, 'W') {
            result.append_both("X", "S");
        } else {
            result.append("X");
        }
    } else if word.contains(index + 2, &["I", "E", "Y"]) {
        result.append("S");
    } else {
        result.append("SK");
    }

    index + 3
}

fn handle_t(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.contains(index, &["TION", "TIA", "TCH"]) {
        result.append("X");
        index + 3
    } else if word.contains(index, &["TH", "TTH"]) {
        if word.contains(index + 2, &["OM", "AM"]) || word.is_germanic() {
            // "thomas", "thames"
            result.append("T");
        } else {
            result.append_both("0", "T");
        }
        index + 2
    } else {
        result.append("T");
        if word.contains(index + 1, &["T", "D"]) {
            index + 2
        } else {
            index + 1
        }
    }
}

fn handle_w(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.contains(index, &["WR"]) {
        result.append("R");
        return index + 2;
    }

    if index == 0 && (word.is_vowel(index + 1) || word.contains(index, &["WH"])) {
        if word.is_vowel(index + 1) {
            // "Wasserman" should match "Vasserman"
            result.append_both("A", "F");
        } else {
            // "Uomo" should match "Womo"
            result.append("A");
        }
        index + 1
    } else if (word.is_last(index) && word.is_vowel(index - 1))
        || word.contains(index - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || word.contains(0, &["SCH"])
    {
        // "Arnow" should match "Arnoff"
        result.append_alternate("F");
        index + 1
    } else if word.contains(index, &["WICZ", "WITZ"]) {
        // polish "filipowicz"
        result.append_both("TS", "FX");
        index + 4
    } else {
        index + 1
    }
}

fn handle_x(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if index == 0 {
        result.append("S");
        return index + 1;
    }

    let silent = word.is_last(index)
        && (word.contains(index - 3, &["IAU", "EAU"]) || word.contains(index - 2, &["AU", "OU"]));
    if !silent {
        // not french "breaux"
        result.append("KS");
    }

    if word.contains(index + 1, &["C", "X"]) {
        index + 2
    } else {
        index + 1
    }
}

fn handle_z(word: &Word, result: &mut DoubleMetaphoneResult, index: isize) -> isize {
    if word.is(index + 1, 'H') {
        // chinese pinyin "zhao"
        result.append("J");
        return index + 2;
    }

    if word.contains(index + 1, &["ZO", "ZI", "ZA"])
        || (word.slavo_germanic && index > 0 && !word.is(index - 1, 'T'))
    {
        result.append_both("S", "TS");
    } else {
        result.append("S");
    }

    skip_double(word, index, 'Z')
}

/// Germanic "ach" is coded `K`.
fn condition_c0(word: &Word, index: isize) -> bool {
    if word.contains(index, &["CHIA"]) {
        return true;
    }
    if index <= 1 || word.is_vowel(index - 2) || !word.contains(index - 1, &["ACH"]) {
        return false;
    }

    let next = word.at(index + 2);
    (next != Some('I') && next != Some('E')) || word.contains(index - 2, &["BACHER", "MACHER"])
}

/// Greek roots, "chemistry", "chorus".
fn condition_ch0(word: &Word, index: isize) -> bool {
    index == 0
        && (word.contains(index + 1, &["HARAC", "HARIS"])
            || word.contains(index + 1, &["HOR", "HYM", "HIA", "HEM"]))
        && !word.contains(0, &["CHORE"])
}

/// Germanic, greek or otherwise `CH` for `KH` sound.
fn condition_ch1(word: &Word, index: isize) -> bool {
    word.is_germanic()
        || word.contains(index - 2, &["ORCHES", "ARCHIT", "ORCHID"])
        || word.contains(index + 2, &["T", "S"])
        || ((word.contains(index - 1, &["A", "O", "U", "E"]) || index == 0)
            && (word.contains(index + 2, &L_R_N_M_B_H_F_V_W_SPACE) || index + 1 == word.len() - 1))
}

/// Spanish "cabrillo", "gallegos": `LL` only in primary code.
fn condition_l0(word: &Word, index: isize) -> bool {
    let len = word.len();

    if index == len - 3 && word.contains(index - 1, &["ILLO", "ILLA", "ALLE"]) {
        return true;
    }

    (word.contains(len - 2, &["AS", "OS"]) || word.contains(len - 1, &["A", "O"]))
        && word.contains(index - 1, &["ALLE"])
}

/// `MM`, and `UMB` as in "dumb", "thumb".
fn condition_m0(word: &Word, index: isize) -> bool {
    if word.is(index + 1, 'M') {
        return true;
    }

    word.contains(index - 1, &["UMB"])
        && (index + 1 == word.len() - 1 || word.contains(index + 2, &["ER"]))
}

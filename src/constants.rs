use regex::Regex;

lazy_static! {
    /// Trailing `SR`, `JR` or roman numeral up to `XX`, as a separate token of an upper case name.
    pub static ref GENERATIONAL_SUFFIX: Regex = Regex::new(
        r"(?:\s*,\s*|\s+)(?:SR|JR|I|II|III|IV|V|VI|VII|VIII|IX|X|XI|XII|XIII|XIV|XV|XVI|XVII|XVIII|XIX|XX)\.?$"
    )
    .unwrap();
    /// Surname prefixes that genealogical soundex codes with and without.
    /// `DELA` and `DE LA` come before `DE` as alternation is leftmost-first.
    pub static ref SURNAME_PREFIX: Regex =
        Regex::new(r"(?i)^\s*(?:DELA|DE LA|CON|DI|DU|DE|D'|LA|LE|L'|VAN|VON) ?").unwrap();
    pub static ref HYPHEN_SPLIT: Regex = Regex::new(r"\s*-\s*").unwrap();
}

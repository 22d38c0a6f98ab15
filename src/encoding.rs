use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// The result of an [Encoder](crate::Encoder).
///
/// It holds a primary code and, for some encoders, alternate codes. Alternates never
/// contain the primary code nor an empty code, and there are no alternates rather than
/// an empty set.
///
/// # Example
///
/// ```rust
/// use soundalike::PhoneticEncoding;
///
/// let encoding = PhoneticEncoding::with_alternates("V555", vec!["N550", "V555", ""]);
///
/// assert_eq!(encoding.primary(), "V555");
/// assert_eq!(encoding.alternates().map(|a| a.len()), Some(1));
/// assert!(encoding.contains("N550"));
/// ```
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEncoding")]
pub struct PhoneticEncoding {
    primary: String,
    alternates: Option<BTreeSet<String>>,
}

#[derive(Deserialize)]
struct RawEncoding {
    primary: String,
    #[serde(default)]
    alternates: Option<Vec<String>>,
}

impl From<RawEncoding> for PhoneticEncoding {
    fn from(raw: RawEncoding) -> Self {
        Self::with_alternates(raw.primary, raw.alternates.unwrap_or_default())
    }
}

impl PhoneticEncoding {
    /// An encoding without alternates.
    pub fn new<S: Into<String>>(primary: S) -> Self {
        Self {
            primary: primary.into(),
            alternates: None,
        }
    }

    /// An encoding with alternates. Duplicates, empty codes and codes equal to
    /// `primary` are dropped.
    pub fn with_alternates<S, I, A>(primary: S, alternates: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let primary = primary.into();
        let alternates: BTreeSet<String> = alternates
            .into_iter()
            .map(Into::into)
            .filter(|alternate| !alternate.is_empty() && alternate != &primary)
            .collect();

        Self {
            primary,
            alternates: if alternates.is_empty() {
                None
            } else {
                Some(alternates)
            },
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn alternates(&self) -> Option<&BTreeSet<String>> {
        self.alternates.as_ref()
    }

    /// `true` if `code` is the primary code or one of the alternates.
    pub fn contains(&self, code: &str) -> bool {
        self.primary == code
            || self
                .alternates
                .as_ref()
                .map_or(false, |alternates| alternates.contains(code))
    }

    /// Consume this encoding, returning the primary code.
    pub fn into_primary(self) -> String {
        self.primary
    }
}

/// Display the primary code.
impl fmt::Display for PhoneticEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)
    }
}

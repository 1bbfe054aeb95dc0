// semver scan
//
// Single pass classification of candidate strings against the SemVer 2.0.0
// grammar, and precedence comparison of classified strings.
//
// --- Classification ---
//
// classify() walks the candidate one byte at a time through a state machine,
// exactly O(n), no look-ahead, and reports everything it learned in a
// ParseRecord: what kind of string this is, where every field starts and
// ends, digit counts, leading zero flags, and how far parsing got.
//
// Three outcomes:
//
//   NotVersion      empty, or does not even start with a digit
//   UnknownVersion  looked like a version, broke a SemVer rule partway in,
//                   or ran out of characters mid-field
//   SemVer2         definitely SemVer 2.0.0 compliant
//
// An UnknownVersion record still carries parsed_idx and state, so a caller
// can see where the string diverged and decide whether a truncate-and-retry
// fallback is worth attempting. The field layout data can also be used to
// split a version string into database fields without re-scanning it.
//
// Note the lack of an unambiguous distinction between v1 and v2 of SemVer.
// A v1 string also qualifies as a v2 string, so there is no separate v1
// kind here.
//
// --- Comparison ---
//
// compare_versions() orders two SemVer2 strings by SemVer 2.0.0 precedence:
//
// 1. major, minor, patch, numerically
// 2. a prerelease version is LESS than the bare triple
// 3. prerelease tags compare field by field, left to right:
//      numeric fields are LESS than alphanumeric fields
//      numeric vs numeric: fewer digits is lesser, then byte order
//      alphanumeric vs alphanumeric: ascii byte order
//    when every compared field ties, fewer fields is lesser
// 4. build metadata never participates
//
//    1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta
//       < 1.0.0-beta.2 < 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0
//
// Strings that are not SemVer2 are never ordered, the result for those is
// Comparison::Incomparable.

use serde::{Serialize, Deserialize};

mod classify;
mod compare;

pub use classify::classify;
pub use compare::Comparison;
pub use compare::compare_versions;

/// Classification outcome for one candidate string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionType {
    /// Certainly not a recognizable version.
    #[default]
    NotVersion,
    /// May be a version of some unknown type.
    UnknownVersion,
    /// Definitely SemVer 2.0.0 compliant.
    SemVer2,
}

/// Classifier state. The record publishes the state the machine was in when
/// parsing stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseState {
    #[default]
    Start,
    InMajor,
    InMinor,
    InPatch,
    InPrereleaseFirstChar,
    InPrereleaseFirstFieldChar,
    InPreAlphaNumericField,
    InPreNumericField,
    InMetaFirstChar,
    InMetaField,
}

/// Numeric before AlphaNumeric, so the derived order matches the SemVer rule
/// that numeric identifiers sort below alphanumeric ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    Numeric,
    AlphaNumeric,
}

/// One dot delimited field inside a prerelease or build metadata tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagField {
    /// Offset of the first field character. Never points at a delimiter.
    pub start: usize,
    /// Count of field characters, delimiters not included.
    pub len: usize,
    /// On a SemVer2 record: the field is the single digit 0. While parsing:
    /// a provisional mark that only an alpha character can clear.
    /// Never set for meta fields.
    pub has_leading_zero: bool,
    /// Meta fields are always AlphaNumeric, only prerelease comparison
    /// consumes the kind.
    pub kind: FieldKind,
}

impl TagField {
    /// The field text, sliced out of the string the record was parsed from.
    pub fn text<'a>(&self, candidate: &'a str) -> &'a str {
        &candidate[self.start..self.start + self.len]
    }
}

/// Everything classify() learned about one candidate string.
///
/// Produced once per classification call, owned by the caller, never
/// mutated by any later consumer. Comparison only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRecord {
    pub version_type: VersionType,

    /// Count of digits in each triple field, 0 if the field was not reached.
    pub major_digits: usize,
    pub minor_digits: usize,
    pub patch_digits: usize,

    /// Start offset of the minor and patch fields. Major always starts at
    /// offset zero when valid.
    pub minor_idx: usize,
    pub patch_idx: usize,

    // On a SemVer2 record these mean the field is literally "0". Any other
    // leading zero pattern already disqualified the string.
    pub major_has_leading_zero: bool,
    pub minor_has_leading_zero: bool,
    pub patch_has_leading_zero: bool,

    /// A prerelease tag exists, or the major field had a leading zero.
    pub is_prerelease_version: bool,
    pub has_prerelease_tag: bool,
    pub has_meta_tag: bool,

    pub prerelease_field_count: usize,
    pub meta_field_count: usize,

    /// Field characters only, delimiters not counted.
    pub prerelease_chars: usize,
    pub meta_chars: usize,

    pub prerelease_fields: Vec<TagField>,
    pub meta_fields: Vec<TagField>,

    /// Count of characters successfully consumed. On failure this is the
    /// offset of the character that stopped the parse.
    pub parsed_idx: usize,

    /// State the machine was in when parsing stopped.
    pub state: ParseState,
}

impl ParseRecord {
    pub fn is_semver(&self) -> bool {
        self.version_type == VersionType::SemVer2
    }
}

// --- VersionRef ----------------------------------------------------

/// Borrowed version string with a total order usable for sorting mixed
/// input. SemVer2 strings order by precedence. A non-conformant string
/// sorts below every conformant one, and non-conformant strings order
/// among themselves by raw byte order.
#[derive(Debug)]
pub struct VersionRef<'a> {
    pub v: &'a str,
}

impl<'a> VersionRef<'a> {
    pub fn new(v: &'a str) -> Self {
        Self { v }
    }
    pub fn as_str(&self) -> &str {
        self.v
    }
}

impl PartialEq for VersionRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.cmp(other), std::cmp::Ordering::Equal)
    }
}
impl Eq for VersionRef<'_> {}
impl PartialOrd for VersionRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for VersionRef<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let r1 = classify(self.v);
        let r2 = classify(other.v);
        match compare_versions(self.v, &r1, other.v, &r2).as_ordering() {
            Some(ord) => ord,
            None => match (r1.is_semver(), r2.is_semver()) {
                (false, true) => std::cmp::Ordering::Less,
                (true, false) => std::cmp::Ordering::Greater,
                _ => self.v.cmp(other.v),
            },
        }
    }
}

impl std::fmt::Display for VersionRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.v)
    }
}

// ---/VersionRef ----------------------------------------------------

// --- VersionOwned --------------------------------------------------

pub struct VersionOwned(pub String);

impl PartialEq for VersionOwned {
    fn eq(&self, other: &Self) -> bool {
        VersionRef::new(&self.0).eq(&VersionRef::new(&other.0))
    }
}
impl Eq for VersionOwned {}
impl PartialOrd for VersionOwned {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for VersionOwned {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        VersionRef::new(&self.0).cmp(&VersionRef::new(&other.0))
    }
}

impl VersionOwned {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for VersionOwned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---/VersionOwned --------------------------------------------------

use serde::{Serialize, Deserialize};

use semver_scan::VersionRef;
use semver_scan::classify;

/// A version string plus the queries classification answers about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    raw: VersionString,
}

/// Plain version string newtype, ordered by SemVer 2.0.0 precedence.
/// Serializes transparently as the string itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(pub String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let left = VersionRef::new(&self.0);
        let right = VersionRef::new(&other.0);
        left.cmp(&right)
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &VersionString) -> bool {
        let left = VersionRef::new(&self.0);
        let right = VersionRef::new(&other.0);
        left.eq(&right)
    }
}

impl Eq for VersionString {}

impl From<VersionString> for Version {
    fn from(v: VersionString) -> Self {
        Version::new(v.as_str())
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::new(s)
    }
}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Version {

    pub fn new(v: &str) -> Self {
        Self {
            raw: v.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    pub fn is_semver(&self) -> bool {
        classify(self.as_str()).is_semver()
    }

    /// A prerelease tag is present, or the major field is zero (a zero
    /// major also reads as "not final yet").
    pub fn is_prerelease(&self) -> bool {
        let rec = classify(self.as_str());
        rec.is_semver() && rec.is_prerelease_version
    }

    pub fn has_buildmeta(&self) -> bool {
        let rec = classify(self.as_str());
        rec.is_semver() && rec.has_meta_tag
    }
}

impl std::ops::Deref for Version {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::ops::Deref for VersionString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        self.raw.eq(&other.raw)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

use std::cmp::Ordering;

use serde::{Serialize, Deserialize};

use crate::{FieldKind, ParseRecord, TagField, VersionType};

/// Result of comparing two classified version strings.
///
/// Incomparable is a distinct outcome, not an ordering. It means at least
/// one input was not SemVer 2.0.0 compliant and no ordering was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    Incomparable,
}

impl Comparison {
    pub fn as_ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Incomparable => None,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

// Classification leaves no leading zeros in numeric fields, so more digits
// means a bigger value, and equal length digit runs carry no sign or length
// ambiguity: byte order IS numeric order.
fn numeric_cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn field_cmp(v1: &[u8], f1: &TagField, v2: &[u8], f2: &TagField) -> Ordering {
    let a = &v1[f1.start..f1.start + f1.len];
    let b = &v2[f2.start..f2.start + f2.len];

    match (f1.kind, f2.kind) {
        // numeric fields sort below alphanumeric fields
        (FieldKind::Numeric, FieldKind::AlphaNumeric) => Ordering::Less,
        (FieldKind::AlphaNumeric, FieldKind::Numeric) => Ordering::Greater,
        (FieldKind::Numeric, FieldKind::Numeric) => numeric_cmp(a, b),
        // ascii byte order, a strict prefix sorts lower
        (FieldKind::AlphaNumeric, FieldKind::AlphaNumeric) => a.cmp(b),
    }
}

// Field by field up to the shorter tag. Field count only breaks full ties:
//
//   1.0.0-alpha      < 1.0.0-alpha.1    tie on "alpha", count decides
//   1.0.0-alpha.beta < 1.0.0-beta       "alpha" < "beta" decides first
fn prerelease_cmp(v1: &[u8], r1: &ParseRecord, v2: &[u8], r2: &ParseRecord) -> Ordering {
    for (f1, f2) in r1.prerelease_fields.iter().zip(r2.prerelease_fields.iter()) {
        match field_cmp(v1, f1, v2, f2) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    r1.prerelease_field_count.cmp(&r2.prerelease_field_count)
}

/// Apply SemVer 2.0.0 precedence rules to order `v1` against `v2`.
///
/// `r1` and `r2` must be the records [classify](crate::classify) produced
/// for exactly `v1` and `v2`. Mismatched pairs are a caller bug and yield
/// nonsense; they are not validated here. Records that are not SemVer2 are
/// never ordered.
pub fn compare_versions(v1: &str, r1: &ParseRecord, v2: &str, r2: &ParseRecord) -> Comparison {
    if r1.version_type != VersionType::SemVer2 || r2.version_type != VersionType::SemVer2 {
        // We don't know how to compare non-SemVer strings.
        return Comparison::Incomparable;
    }

    let b1 = v1.as_bytes();
    let b2 = v2.as_bytes();

    // the numeric triple, left to right, first difference wins
    let triple = numeric_cmp(&b1[..r1.major_digits], &b2[..r2.major_digits])
        .then_with(|| {
            numeric_cmp(
                &b1[r1.minor_idx..r1.minor_idx + r1.minor_digits],
                &b2[r2.minor_idx..r2.minor_idx + r2.minor_digits],
            )
        })
        .then_with(|| {
            numeric_cmp(
                &b1[r1.patch_idx..r1.patch_idx + r1.patch_digits],
                &b2[r2.patch_idx..r2.patch_idx + r2.patch_digits],
            )
        });
    if triple != Ordering::Equal {
        return triple.into();
    }

    // Equal triples. A prerelease precedes the bare release.
    match (r1.has_prerelease_tag, r2.has_prerelease_tag) {
        (true, false) => return Comparison::Less,
        (false, true) => return Comparison::Greater,
        (false, false) => return Comparison::Equal,
        (true, true) => {}
    }

    // Build metadata never participates.
    prerelease_cmp(b1, r1, b2, r2).into()
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::classify;

    fn cmp(v1: &str, v2: &str) -> Comparison {
        compare_versions(v1, &classify(v1), v2, &classify(v2))
    }

    // every pair from an ordered list, both directions
    fn assert_order(versions: &[&str]) {
        for (i, s1) in versions.iter().enumerate() {
            for s2 in versions.iter().skip(i + 1) {
                assert_eq!(cmp(s1, s2), Comparison::Less, "{s1} < {s2}");
                assert_eq!(cmp(s2, s1), Comparison::Greater, "{s2} > {s1}");
            }
        }
    }

    // the worked precedence chain from [semver.org]
    #[test]
    fn semver_precedence_chain() {
        assert_order(&[
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ]);
    }

    #[test]
    fn triple_order() {
        assert_order(&[
            "0.0.0",
            "0.0.1",
            "0.1.0",
            "1.0.0",
            "1.0.1",
            "1.0.2",
            "1.0.10",
            "1.2.0",
            "1.9.0",
            "1.10.0",
            "1.11.0",
            "2.0.0",
            "9.9.9",
            "10.0.0",
            "4294967296.0.0",
        ]);
    }

    #[test]
    fn prerelease_order() {
        assert_order(&[
            // numeric below alphanumeric, numeric by value
            "2.0.0-0",
            "2.0.0-1",
            "2.0.0-2",
            "2.0.0-10",
            "2.0.0-100",
            // hyphen collates below digits and letters in ascii
            "2.0.0--",
            "2.0.0-01a",
            "2.0.0-0a",
            "2.0.0-1a",
            "2.0.0-A",
            "2.0.0-a",
            "2.0.0-a.0",
            "2.0.0-a.1",
            "2.0.0-a.1.0",
            "2.0.0-a.a",
            "2.0.0-ab",
            "2.0.0-b",
            "2.0.0",
        ]);
    }

    // Field count decides only after every compared field ties.
    #[test]
    fn field_count_is_a_tie_break_only() {
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-alpha.1"), Comparison::Less);
        assert_eq!(cmp("1.0.0-alpha.1", "1.0.0-alpha.1.2.3"), Comparison::Less);
        // more fields on the left, but the first field already differs
        assert_eq!(cmp("1.0.0-alpha.beta", "1.0.0-beta"), Comparison::Less);
        assert_eq!(cmp("1.0.0-beta.11", "1.0.0-rc.1"), Comparison::Less);
    }

    #[test]
    fn prerelease_precedes_release() {
        assert_eq!(cmp("1.0.0-rc.1", "1.0.0"), Comparison::Less);
        assert_eq!(cmp("1.0.0", "1.0.0-rc.1"), Comparison::Greater);
        assert_eq!(cmp("1.0.0-rc.1+build", "1.0.0"), Comparison::Less);
    }

    #[test]
    fn metadata_ignored() {
        assert_eq!(cmp("1.0.0+build1", "1.0.0+build2"), Comparison::Equal);
        assert_eq!(cmp("1.0.0", "1.0.0+build"), Comparison::Equal);
        assert_eq!(cmp("1.0.0-rc.1+a.b.c", "1.0.0-rc.1"), Comparison::Equal);
        assert_eq!(cmp("1.0.0+a", "1.0.1+a"), Comparison::Less);
    }

    #[test]
    fn reflexive_equal() {
        for s in ["1.0.0", "0.0.0", "1.0.0-alpha.1", "2.3.4-rc.1+build.5"] {
            assert_eq!(cmp(s, s), Comparison::Equal);
        }
    }

    #[test]
    fn incomparable() {
        assert_eq!(cmp("1.0", "1.0.0"), Comparison::Incomparable);
        assert_eq!(cmp("1.0.0", "1.0"), Comparison::Incomparable);
        assert_eq!(cmp("", ""), Comparison::Incomparable);
        assert_eq!(cmp("x", "y"), Comparison::Incomparable);
        assert_eq!(cmp("1.0.0-01", "1.0.0-01"), Comparison::Incomparable);
        assert_eq!(cmp("01.0.0", "1.0.0"), Comparison::Incomparable);
    }

    // transitivity spot check on a scrambled set, via sorting
    #[test]
    fn total_order() {
        let mut versions = vec![
            "1.0.0-beta.11",
            "1.0.0",
            "1.0.0-alpha.1",
            "0.9.0",
            "1.0.0-rc.1",
            "1.0.0-alpha",
            "1.0.0-beta.2",
            "2.0.0",
            "1.0.0-beta",
            "1.0.0-alpha.beta",
        ];
        versions.sort_by(|a, b| {
            cmp(a, b).as_ordering().unwrap()
        });
        assert_eq!(versions, vec![
            "0.9.0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "2.0.0",
        ]);
    }
}

use crate::{FieldKind, ParseRecord, ParseState, TagField, VersionType};

// When a tag section opens, reserve room for this many fields up front.
// Real world tags rarely have more; the vec grows past it when they do.
const TAG_FIELD_RESERVE: usize = 5;

// Valid inside prerelease and meta fields: ascii alphanumerics and hyphen.
fn is_tag_field_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

fn fail(mut rec: ParseRecord, vt: VersionType) -> ParseRecord {
    rec.version_type = vt;
    rec
}

/// Determine the best version type for a candidate string.
///
/// Classification requires parsing, so this does both, accumulating the
/// exact layout of the string into the returned record. Always returns a
/// record; failure is reported only through `version_type`.
pub fn classify(candidate: &str) -> ParseRecord {
    let mut rec = ParseRecord::default();

    if candidate.is_empty() {
        return fail(rec, VersionType::NotVersion);
    }

    // Set when a numeric prerelease field picks up a second digit behind a
    // leading zero. Cleared the moment an alpha or '-' lands in the field.
    // Fatal if still set when the field closes.
    let mut field_needs_alpha_to_pass = false;

    // One state transition per byte, exactly O(n). No look-aheads.
    for (idx, c) in candidate.bytes().enumerate() {
        match rec.state {
            ParseState::Start => {
                // Two ways out of here. Either this string doesn't look
                // like any kind of version number, or it starts with a
                // digit.
                if !c.is_ascii_digit() {
                    return fail(rec, VersionType::NotVersion);
                }
                // The only place a leading zero can legally show up in
                // major is here.
                if c == b'0' {
                    rec.major_has_leading_zero = true;
                }
                rec.major_digits = 1;
                rec.state = ParseState::InMajor;
            }

            ParseState::InMajor => {
                // Expect digits or dot.
                if c == b'.' {
                    // A zero major reads as "not final yet", even without
                    // a prerelease tag.
                    if rec.major_has_leading_zero {
                        rec.is_prerelease_version = true;
                    }
                    rec.minor_idx = idx + 1;
                    rec.state = ParseState::InMinor;
                } else if !c.is_ascii_digit() || rec.major_has_leading_zero {
                    // Another digit behind a leading zero, or trash. No
                    // clue what kind of version string this is.
                    return fail(rec, VersionType::UnknownVersion);
                } else {
                    rec.major_digits += 1;
                }
            }

            ParseState::InMinor => {
                // Expect digits or dot.
                if c == b'.' {
                    // Zero length minor field is invalid.
                    if rec.minor_digits == 0 {
                        return fail(rec, VersionType::UnknownVersion);
                    }
                    rec.patch_idx = idx + 1;
                    rec.state = ParseState::InPatch;
                } else if !c.is_ascii_digit() || rec.minor_has_leading_zero {
                    return fail(rec, VersionType::UnknownVersion);
                } else {
                    if rec.minor_digits == 0 && c == b'0' {
                        rec.minor_has_leading_zero = true;
                    }
                    rec.minor_digits += 1;
                }
            }

            ParseState::InPatch => {
                // Expect digits, then hyphen, plus, or end of string.
                if rec.patch_digits > 0 && c == b'-' {
                    rec.prerelease_fields.reserve(TAG_FIELD_RESERVE);
                    rec.state = ParseState::InPrereleaseFirstChar;
                } else if rec.patch_digits > 0 && c == b'+' {
                    rec.meta_fields.reserve(TAG_FIELD_RESERVE);
                    rec.state = ParseState::InMetaFirstChar;
                } else if c == b'.' {
                    // Either an empty patch field, or a fourth dotted
                    // field. Not SemVer.
                    return fail(rec, VersionType::UnknownVersion);
                } else if !c.is_ascii_digit() || rec.patch_has_leading_zero {
                    return fail(rec, VersionType::UnknownVersion);
                } else {
                    if rec.patch_digits == 0 && c == b'0' {
                        rec.patch_has_leading_zero = true;
                    }
                    rec.patch_digits += 1;
                }
            }

            // First character after '-', and first character after a field
            // dot. Both demand a field character, so no zero length fields
            // can slip through. A field starting with a digit may still
            // turn out numeric or alphanumeric, a field starting with an
            // alpha or '-' is alphanumeric for good.
            ParseState::InPrereleaseFirstChar | ParseState::InPrereleaseFirstFieldChar => {
                if !is_tag_field_char(c) {
                    return fail(rec, VersionType::UnknownVersion);
                }
                if c.is_ascii_digit() {
                    rec.prerelease_fields.push(TagField {
                        start: idx,
                        len: 1,
                        has_leading_zero: c == b'0',
                        kind: FieldKind::Numeric,
                    });
                    rec.state = ParseState::InPreNumericField;
                } else {
                    rec.prerelease_fields.push(TagField {
                        start: idx,
                        len: 1,
                        has_leading_zero: false,
                        kind: FieldKind::AlphaNumeric,
                    });
                    rec.state = ParseState::InPreAlphaNumericField;
                }
                // We visit this code once per valid field.
                rec.prerelease_field_count += 1;
                rec.prerelease_chars += 1;
            }

            ParseState::InPreAlphaNumericField => {
                // Watch for field delimiters and invalid characters.
                if c == b'.' {
                    rec.state = ParseState::InPrereleaseFirstFieldChar;
                } else if c == b'+' {
                    rec.meta_fields.reserve(TAG_FIELD_RESERVE);
                    rec.state = ParseState::InMetaFirstChar;
                } else if !is_tag_field_char(c) {
                    return fail(rec, VersionType::UnknownVersion);
                } else {
                    if let Some(field) = rec.prerelease_fields.last_mut() {
                        field.len += 1;
                    }
                    rec.prerelease_chars += 1;
                }
            }

            ParseState::InPreNumericField => {
                // Still numeric, until a valid non-digit falls back to
                // alphanumeric.
                if c.is_ascii_digit() {
                    if let Some(field) = rec.prerelease_fields.last_mut() {
                        if field.has_leading_zero {
                            // More digits behind a leading zero. Only an
                            // alpha character can still rescue this field.
                            field_needs_alpha_to_pass = true;
                        }
                        field.len += 1;
                    }
                    rec.prerelease_chars += 1;
                } else if c == b'.' || c == b'+' {
                    if field_needs_alpha_to_pass {
                        // Pure numeric field with a leading zero. Discard
                        // the provisional field and give up.
                        rec.prerelease_field_count -= 1;
                        rec.prerelease_fields.pop();
                        return fail(rec, VersionType::UnknownVersion);
                    }
                    if c == b'.' {
                        rec.state = ParseState::InPrereleaseFirstFieldChar;
                    } else {
                        rec.meta_fields.reserve(TAG_FIELD_RESERVE);
                        rec.state = ParseState::InMetaFirstChar;
                    }
                } else if c.is_ascii_alphabetic() || c == b'-' {
                    // Numeric no more. Alphanumeric fields may carry
                    // leading zeros, so the disqualification is lifted.
                    if let Some(field) = rec.prerelease_fields.last_mut() {
                        field.kind = FieldKind::AlphaNumeric;
                        field.has_leading_zero = false;
                        field.len += 1;
                    }
                    field_needs_alpha_to_pass = false;
                    rec.state = ParseState::InPreAlphaNumericField;
                    rec.prerelease_chars += 1;
                } else {
                    return fail(rec, VersionType::UnknownVersion);
                }
            }

            ParseState::InMetaFirstChar => {
                // Meta is a little simpler than prerelease. No leading
                // zero worries, but empty fields are still forbidden.
                if !is_tag_field_char(c) {
                    return fail(rec, VersionType::UnknownVersion);
                }
                rec.meta_fields.push(TagField {
                    start: idx,
                    len: 1,
                    has_leading_zero: false,
                    kind: FieldKind::AlphaNumeric,
                });
                rec.meta_field_count += 1;
                rec.meta_chars += 1;
                rec.state = ParseState::InMetaField;
            }

            ParseState::InMetaField => {
                if c == b'.' {
                    rec.state = ParseState::InMetaFirstChar;
                } else if !is_tag_field_char(c) {
                    return fail(rec, VersionType::UnknownVersion);
                } else {
                    if let Some(field) = rec.meta_fields.last_mut() {
                        field.len += 1;
                    }
                    rec.meta_chars += 1;
                }
            }
        }

        rec.parsed_idx += 1;
    }

    // Out of characters with no hard rule violation. Whether this is a
    // valid SemVer string depends on how far we got.

    if field_needs_alpha_to_pass {
        // The last field was pure numeric with a leading zero.
        rec.prerelease_field_count -= 1;
        rec.prerelease_fields.pop();
        return fail(rec, VersionType::UnknownVersion);
    }

    rec.has_prerelease_tag = !rec.prerelease_fields.is_empty();
    rec.is_prerelease_version |= rec.has_prerelease_tag;
    rec.has_meta_tag = !rec.meta_fields.is_empty();

    rec.version_type = match rec.state {
        ParseState::InPatch if rec.patch_digits > 0 => VersionType::SemVer2,
        ParseState::InPreAlphaNumericField => VersionType::SemVer2,
        ParseState::InPreNumericField => VersionType::SemVer2,
        ParseState::InMetaField => VersionType::SemVer2,
        // Ran out of string mid-triple, or sitting on an unfinished field.
        _ => VersionType::UnknownVersion,
    };

    rec
}

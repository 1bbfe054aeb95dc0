use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;

use semver_scan::ParseRecord;
use semver_scan::classify;

pub fn args() -> Command {
    Command::new("inspect")
        .about("Show the full parse record for a version string")
        .long_about("Classify a version string and dump everything the parser learned: \
                     field boundaries, counts, flags, and where parsing stopped. Useful \
                     for finding the exact spot a near-version string diverges.")
        .arg(arg!(version: <version> "Version string to inspect"))
        .arg(arg!(--json "Output the record as json"))
}

fn print_record(candidate: &str, record: &ParseRecord) {

    println!("candidate:    {candidate}");
    println!("type:         {:?}", record.version_type);
    println!("consumed:     {} of {} chars, stopped in {:?}",
        record.parsed_idx, candidate.len(), record.state);
    println!("major:        {} digits{}",
        record.major_digits,
        if record.major_has_leading_zero { ", zero" } else { "" });
    println!("minor:        {} digits at {}{}",
        record.minor_digits, record.minor_idx,
        if record.minor_has_leading_zero { ", zero" } else { "" });
    println!("patch:        {} digits at {}{}",
        record.patch_digits, record.patch_idx,
        if record.patch_has_leading_zero { ", zero" } else { "" });
    println!("prerelease:   {}", record.is_prerelease_version);

    if record.has_prerelease_tag {
        println!("prerelease tag: {} fields, {} chars",
            record.prerelease_field_count, record.prerelease_chars);
        for field in &record.prerelease_fields {
            println!("    {:?} '{}' at {}", field.kind, field.text(candidate), field.start);
        }
    }

    if record.has_meta_tag {
        println!("meta tag:     {} fields, {} chars",
            record.meta_field_count, record.meta_chars);
        for field in &record.meta_fields {
            println!("    '{}' at {}", field.text(candidate), field.start);
        }
    }
}

pub fn main(matches: &clap::ArgMatches) -> Result<i32> {

    let candidate = matches.get_one::<String>("version").context("version expected")?;

    let record = classify(candidate);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(candidate, &record);
    }

    Ok(if record.is_semver() { 0 } else { -2 })
}

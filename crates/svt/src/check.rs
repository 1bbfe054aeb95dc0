use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;

use semver_scan::classify;

// Lines are expected to classify as valid SemVer until this sentinel line,
// and as invalid after it.
const SENTINEL: &str = "Begin Invalid";

pub fn args() -> Command {
    Command::new("check")
        .about("Self-check classification against files of version strings")
        .long_about("Read files of newline delimited candidate strings, expecting every line \
                     to classify as valid SemVer until a sentinel line 'Begin Invalid', and \
                     as invalid after it. Report each line that classifies against expectation.")
        .arg(arg!(files: <file>... "Files of newline delimited version strings"))
}

#[derive(Debug, Default, PartialEq)]
pub struct FileReport {
    pub checked: usize,
    pub failed: usize,
}

fn check_lines<'a>(lines: impl Iterator<Item = &'a str>) -> FileReport {

    let mut expect_valid = true;
    let mut report = FileReport::default();

    for line in lines {
        let line = line.trim_end_matches('\r');

        if expect_valid && line == SENTINEL {
            println!("*\n* Expecting invalid strings to end-of-file.\n*");
            expect_valid = false;
            continue;
        }

        let valid = classify(line).is_semver();
        report.checked += 1;

        match (valid, expect_valid) {
            (true, true) => println!("Is valid SemVer: {line}"),
            (false, false) => println!("Is invalid SemVer: {line}"),
            (false, true) => {
                report.failed += 1;
                println!("classification failed for valid version string: {line}");
            }
            (true, false) => {
                report.failed += 1;
                println!("failed to reject invalid version string: {line}");
            }
        }
    }

    report
}

fn check_file(path: &str) -> Result<FileReport> {
    tracing::debug!("checking {path}");
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))?;
    Ok(check_lines(content.lines()))
}

pub fn main(matches: &clap::ArgMatches) -> Result<i32> {

    let files = matches.get_many::<String>("files").context("file expected")?;

    let mut failed = 0;
    for file in files {
        match check_file(file) {
            Ok(report) => {
                println!("{file}: {} checked, {} failed", report.checked, report.failed);
                failed += report.failed;
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                failed += 1;
            }
        }
    }

    Ok(if failed > 0 { 1 } else { 0 })
}

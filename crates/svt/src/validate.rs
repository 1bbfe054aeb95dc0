use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;

use semver_scan::classify;

pub fn args() -> Command {
    Command::new("validate")
        .about("Validate a version string against SemVer 2.0.0")
        .visible_alias("v")
        .arg(arg!(version: <version> "Version string to validate"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<i32> {

    let candidate = matches.get_one::<String>("version").context("version expected")?;

    let record = classify(candidate);
    tracing::debug!(
        "classified {:?}, consumed {} chars, stopped in {:?}",
        record.version_type, record.parsed_idx, record.state
    );

    if record.is_semver() {
        println!("Valid semver: {candidate}");
        Ok(0)
    } else {
        println!("Invalid string: {candidate}");
        Ok(-2)
    }
}

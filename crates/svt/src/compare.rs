use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;

use semver_scan::Comparison;
use semver_scan::classify;
use semver_scan::compare_versions;

pub fn args() -> Command {
    Command::new("compare")
        .about("Compare two version strings by SemVer 2.0.0 precedence")
        .visible_alias("c")
        .arg(arg!(v1: <version1> "Left version string"))
        .arg(arg!(v2: <version2> "Right version string"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<i32> {

    let v1 = matches.get_one::<String>("v1").context("version expected")?;
    let v2 = matches.get_one::<String>("v2").context("version expected")?;

    let r1 = classify(v1);
    let r2 = classify(v2);

    if !r1.is_semver() {
        println!("Option arg '{v1}' is not a SemVer string.");
    }
    if !r2.is_semver() {
        println!("Option arg '{v2}' is not a SemVer string.");
    }

    match compare_versions(v1, &r1, v2, &r2) {
        Comparison::Less => {
            println!("{v1} < {v2}");
            Ok(-1)
        }
        Comparison::Equal => {
            println!("{v1} == {v2}");
            Ok(0)
        }
        Comparison::Greater => {
            println!("{v1} > {v2}");
            Ok(1)
        }
        Comparison::Incomparable => {
            println!("Both strings must conform to SemVer 2.0.0 for comparison.");
            Ok(-2)
        }
    }
}

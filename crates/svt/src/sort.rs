use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;

use version::Version;

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort and print versions")
        .long_about("Take a list of versions, sort and print them in ascending precedence order")
        .arg(arg!(versions: <version>... "Versions to sort"))
        .arg(arg!(--"skip-invalid" "Skip strings that are not SemVer 2.0.0"))
        .arg(arg!(--ascending "output in ascending order (default)")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order")
            .overrides_with("ascending")
        )
}

pub fn main(matches: &clap::ArgMatches) -> Result<i32> {

    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let skip_invalid = matches.get_flag("skip-invalid");
    let descending = matches.get_flag("descending");

    let mut versions = versions.map(|v| Version::new(v)).collect::<Vec<_>>();

    if skip_invalid {
        versions.retain(|v| v.is_semver());
    } else {
        let mut err = 0;
        for v in &versions {
            if !v.is_semver() {
                eprintln!("error: not a SemVer string: {}", v);
                err += 1;
            }
        }
        if err > 0 {
            return Ok(1);
        }
    }

    versions.sort();
    versions.dedup();

    if descending {
        versions.reverse();
    }

    for v in versions {
        println!("{}", v);
    }

    Ok(0)
}

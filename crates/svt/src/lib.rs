use clap::Command;
use anyhow::Result;

mod check;
mod compare;
mod inspect;
mod sort;
mod validate;

pub fn get_cli() -> Command {
    build_cli(Command::new("svt"))
}

pub fn build_cli(cmd: Command) -> Command {
    cmd.version("0.1.0")
        .about("svt : validate, compare, and sort SemVer 2.0.0 version strings")
        .subcommand_required(true)
        .subcommand(validate::args())
        .subcommand(compare::args())
        .subcommand(sort::args())
        .subcommand(inspect::args())
        .subcommand(check::args())
}

/// Dispatch to a subcommand, returning the process exit code.
pub fn main_cli(matches: &clap::ArgMatches) -> Result<i32> {

    match matches.subcommand() {

        Some(("validate", matches)) => {
            return validate::main(matches);
        }

        Some(("compare", matches)) => {
            return compare::main(matches);
        }

        Some(("sort", matches)) => {
            return sort::main(matches);
        }

        Some(("inspect", matches)) => {
            return inspect::main(matches);
        }

        Some(("check", matches)) => {
            return check::main(matches);
        }

        _ => {
            anyhow::bail!("no subcmd");
        }
    }
}

use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn completion_cli() -> Command {
    Command::new("papyr")
        .about("A command-line companion for papyr documents")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("DIR")
                .global(true)
                .value_hint(ValueHint::DirPath),
        )
        .subcommand(Command::new("new"))
        .subcommand(Command::new("list"))
        .subcommand(Command::new("show").arg(Arg::new("id").required(true)))
        .subcommand(
            Command::new("import").arg(
                Arg::new("file")
                    .required(true)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("export")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("to").long("to").value_name("FORMAT"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .value_hint(ValueHint::DirPath),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "papyr", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "papyr", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "papyr", &outdir)?;

    Ok(())
}

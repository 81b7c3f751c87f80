use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of GENERATION_FLAGS from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const GENERATION_FLAGS: &[&str] = &[
    "no-headers",
    "no-code-snippets",
    "no-inline-markup",
    "no-blockquotes",
    "no-lists",
    "no-external-links",
    "no-wrapping",
    "capitalize-sentences",
    "underlined-headers",
    "reference-links",
    "em-style",
    "strong-style",
    "code-blocks",
];

const FORMATS: &[&str] = &["markdown", "text", "html"];

fn generation_args() -> Vec<Arg> {
    let mut args: Vec<Arg> = GENERATION_FLAGS
        .iter()
        .map(|id| {
            Arg::new(*id)
                .long(*id)
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["true", "false"])
        })
        .collect();
    args.push(Arg::new("blocks").long("blocks").short('n').value_name("N"));
    args.push(
        Arg::new("to")
            .long("to")
            .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
    );
    args.push(
        Arg::new("output")
            .long("output")
            .short('o')
            .value_hint(ValueHint::FilePath),
    );
    args.push(
        Arg::new("download")
            .long("download")
            .num_args(0..=1)
            .value_hint(ValueHint::DirPath),
    );
    args
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdipsum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate placeholder markdown documents")
        .args_conflicts_with_subcommands(true)
        .args(generation_args())
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("generate").args(generation_args()))
        .subcommand(
            Command::new("convert")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("show-config"))
        .subcommand(Command::new("generate-css"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdipsum", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdipsum", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdipsum", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

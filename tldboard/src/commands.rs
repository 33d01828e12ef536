use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("tldboard")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("tldboard")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Increase log verbosity (-v debug, -vv trace)")
                .required(false)
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(source_args(
            command!("board")
                .about("Fetch users and print them grouped into one column per website TLD")
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Board format: text, json, markdown, html")
                        .value_parser(["text", "json", "markdown", "html"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save the board to a file (default: display to screen)"),
                )
                .arg(
                    arg!(--"no-pager")
                        .required(false)
                        .help("Print straight to stdout instead of through less")
                        .action(clap::ArgAction::SetTrue),
                ),
        ))
        .subcommand(source_args(
            command!("ui").about("Open the interactive column board in the terminal"),
        ))
}

/// Options shared by every command that runs the pipeline.
fn source_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(-u --"url" <URL>)
            .required(false)
            .help("Users endpoint (default: jsonplaceholder users)")
            .value_parser(clap::value_parser!(Url))
            .conflicts_with("input"),
    )
    .arg(
        arg!(-i --"input" <PATH>)
            .required(false)
            .help("Read the users payload from a JSON file instead of the network")
            .conflicts_with("url"),
    )
    .arg(
        arg!(-t --"timeout" <SECONDS>)
            .required(false)
            .help("Give up on the request after this many seconds (default: wait)")
            .value_parser(clap::value_parser!(u64).range(1..)),
    )
}

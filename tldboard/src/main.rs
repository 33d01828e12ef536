use colored::Colorize;
use tldboard::commands::command_argument_builder;
use tldboard::handlers::{handle_board, handle_ui, init_logging};
use tldboard_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    let result = match chosen_command.subcommand() {
        Some(("board", primary_command)) => {
            init_logging(primary_command.get_count("verbose"));
            handle_board(primary_command).await
        }
        // The alternate screen owns the terminal, so the TUI installs no log subscriber
        Some(("ui", primary_command)) => handle_ui(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red(), e);
        std::process::exit(1);
    }
}

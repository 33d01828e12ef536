pub mod card;
pub mod config;
pub mod group;
pub mod pipeline;
pub mod presenter;
pub mod record;
pub mod report;
pub mod tld;

pub use card::{CardError, CardModel, ColumnModel, ValidUser, build_card, build_column};
pub use config::BoardConfig;
pub use group::{TldGroup, TldGroups, group_by_tld, group_records};
pub use pipeline::{Pipeline, RunOutcome, RunSummary};
pub use presenter::{Board, BoardPresenter, PresentError, Presenter};
pub use record::UserRecord;
pub use tld::extract_tld;

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
  ┌┬┐┬  ┌┬┐┌┐ ┌─┐┌─┐┬─┐┌┬┐
   │ │   ││├┴┐│ │├─┤├┬┘ ││
   ┴ ┴─┘─┴┘└─┘└─┘┴ ┴┴└──┴┘
"#;
    println!("{}", banner.bright_cyan().bold());
    println!(
        "  {} {}\n",
        "users grouped by website TLD".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
}

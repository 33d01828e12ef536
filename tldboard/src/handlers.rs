use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pager::Pager;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;
use tldboard_core::report::{ReportFormat, generate_report, save_report};
use tldboard_core::{
    Board, BoardConfig, BoardPresenter, CardModel, ColumnModel, Pipeline, PresentError, Presenter,
    RunSummary,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Default filter for a given `-v` count.
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
///
/// Returns `false` when a global subscriber was already in place.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbosity)));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            debug!("Keeping existing log subscriber: {}", e);
            false
        }
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Build the run configuration from `board`/`ui` matches.
pub fn config_from_matches(args: &ArgMatches) -> BoardConfig {
    let mut config = BoardConfig::default();

    if let Some(url) = args.get_one::<Url>("url") {
        config = config.with_endpoint(url.clone());
    }
    if let Some(input) = args.get_one::<String>("input") {
        config = config.with_input(expand_path(input));
    }
    if let Some(seconds) = args.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*seconds));
    }

    config
}

/// Presenter showing an indicatif spinner on stderr while a run loads.
pub struct TerminalPresenter {
    inner: BoardPresenter,
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl TerminalPresenter {
    pub fn new(quiet: bool) -> Self {
        Self {
            inner: BoardPresenter::new(),
            spinner: None,
            quiet,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.spinner.is_some()
    }

    pub fn into_board(self) -> Board {
        self.inner.into_board()
    }

    fn start_spinner(&self) -> Result<ProgressBar, PresentError> {
        if self.quiet {
            return Ok(ProgressBar::hidden());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .map_err(|e| PresentError::Surface(e.to_string()))?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Loading users...");
        Ok(spinner)
    }
}

impl Presenter for TerminalPresenter {
    type Column = ColumnModel;

    fn create_column(&mut self, title: &str) -> Result<ColumnModel, PresentError> {
        self.inner.create_column(title)
    }

    fn append_card(&mut self, column: &mut ColumnModel, card: &CardModel) {
        self.inner.append_card(column, card);
    }

    fn mount_column(&mut self, column: ColumnModel) -> Result<(), PresentError> {
        let title = column.title.clone();
        self.inner.mount_column(column)?;
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Loading users... {} ready", title));
        }
        Ok(())
    }

    fn set_loading_visible(&mut self, visible: bool) -> Result<(), PresentError> {
        self.inner.set_loading_visible(visible)?;
        if visible {
            if self.spinner.is_none() {
                self.spinner = Some(self.start_spinner()?);
            }
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        Ok(())
    }

    fn show_notice(&mut self, message: &str) {
        self.inner.show_notice(message);
    }
}

/// Run the pipeline for `config` and render the board as `format`.
pub async fn render_board(
    config: &BoardConfig,
    format: ReportFormat,
    quiet: bool,
) -> Result<(String, RunSummary)> {
    let source = config.source().context("Invalid users source")?;
    let pipeline = Pipeline::new(source);

    let mut presenter = TerminalPresenter::new(quiet);
    let summary = pipeline.run(&mut presenter).await;
    let board = presenter.into_board();

    let report = generate_report(&board, format).context("Failed to render board")?;
    Ok((report, summary))
}

pub async fn handle_board(args: &ArgMatches) -> Result<()> {
    let quiet = args.get_flag("quiet");
    let no_pager = args.get_flag("no-pager");
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);
    let output = args.get_one::<String>("output").map(|p| expand_path(p));

    let config = config_from_matches(args);
    let (report, summary) = render_board(&config, format, quiet).await?;
    debug!("Run summary: {:?}", summary);

    match output {
        Some(path) => {
            save_report(&report, &path)
                .with_context(|| format!("Failed to write board to {}", path.display()))?;
            if !quiet {
                println!(
                    "{} Board saved to {} ({} columns, {} cards)",
                    "✓".green(),
                    path.display(),
                    summary.columns_mounted,
                    summary.cards_rendered
                );
            }
        }
        None => {
            // Display report in pager
            if !no_pager && format == ReportFormat::Text && io::stdout().is_terminal() {
                Pager::with_pager("less -R").setup();
            }
            print!("{}", report);
        }
    }

    Ok(())
}

pub async fn handle_ui(args: &ArgMatches) -> Result<()> {
    let quiet = args.get_flag("quiet");
    let config = config_from_matches(args);
    let source = config.source().context("Invalid users source")?;
    let pipeline = Pipeline::new(source);

    let summary = tldboard_tui::run(&pipeline)
        .await
        .context("Terminal board failed")?;

    if !quiet {
        println!(
            "{} {} columns, {} cards",
            "✓".green(),
            summary.columns_mounted,
            summary.cards_rendered
        );
    }
    Ok(())
}

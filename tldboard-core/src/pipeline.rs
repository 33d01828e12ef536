use crate::card::{ColumnModel, build_column};
use crate::group::group_by_tld;
use crate::presenter::{PresentError, Presenter};
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use tldboard_fetch::{UserSource, fetch_users};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

pub const NO_USERS_NOTICE: &str = "No users to display";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Grouping produced no TLDs, nothing was rendered.
    #[default]
    Empty,
    Rendered,
}

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub fetched: usize,
    pub grouped: usize,
    pub unclassified: usize,
    pub columns_mounted: usize,
    pub cards_rendered: usize,
    pub cards_skipped: usize,
}

/// Keeps the loading indicator up for as long as it lives.
///
/// Dropping hides the indicator, so every exit path of a run ends in the
/// non-loading state, unwinding and cancelled futures included.
struct LoadingGuard<'a, P: Presenter> {
    presenter: &'a mut P,
}

impl<'a, P: Presenter> LoadingGuard<'a, P> {
    fn show(presenter: &'a mut P) -> Self {
        if let Err(e) = presenter.set_loading_visible(true) {
            warn!("Could not show loading indicator: {}", e);
        }
        Self { presenter }
    }
}

impl<P: Presenter> Deref for LoadingGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.presenter
    }
}

impl<P: Presenter> DerefMut for LoadingGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.presenter
    }
}

impl<P: Presenter> Drop for LoadingGuard<'_, P> {
    fn drop(&mut self) {
        if let Err(e) = self.presenter.set_loading_visible(false) {
            warn!("Could not hide loading indicator: {}", e);
        }
    }
}

/// Fetch, group and render users from one source.
pub struct Pipeline<S> {
    source: S,
}

impl<S: UserSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run once against `presenter`.
    ///
    /// Runs are sequential by construction: the presenter is borrowed
    /// mutably for the whole run.
    pub async fn run<P: Presenter>(&self, presenter: &mut P) -> RunSummary {
        let run_id = Uuid::new_v4();
        let span = info_span!("pipeline", %run_id, source = %self.source.describe());

        async move {
            let mut presenter = LoadingGuard::show(presenter);
            let summary = render(&self.source, &mut *presenter).await;
            info!(
                outcome = ?summary.outcome,
                columns = summary.columns_mounted,
                cards = summary.cards_rendered,
                skipped = summary.cards_skipped,
                unclassified = summary.unclassified,
                "Run finished"
            );
            summary
        }
        .instrument(span)
        .await
    }
}

async fn render<S: UserSource, P: Presenter>(source: &S, presenter: &mut P) -> RunSummary {
    let payload = fetch_users(source).await;
    let groups = group_by_tld(&payload);

    let mut summary = RunSummary {
        fetched: payload.as_array().map_or(0, Vec::len),
        grouped: groups.total_records(),
        unclassified: groups.unclassified(),
        ..RunSummary::default()
    };

    if groups.is_empty() {
        warn!("Grouping produced no TLDs, skipping render");
        presenter.show_notice(NO_USERS_NOTICE);
        return summary;
    }

    for group in &groups {
        let column = build_column(&group.tld, &group.users);
        summary.cards_skipped += column.skipped;

        match present_column(presenter, &column) {
            Ok(()) => {
                summary.columns_mounted += 1;
                summary.cards_rendered += column.cards.len();
            }
            Err(e) => warn!("Column '{}' not shown: {}", column.title, e),
        }
    }

    summary.outcome = RunOutcome::Rendered;
    summary
}

fn present_column<P: Presenter>(presenter: &mut P, column: &ColumnModel) -> Result<(), PresentError> {
    let mut handle = presenter.create_column(&column.title)?;
    for card in &column.cards {
        presenter.append_card(&mut handle, card);
    }
    presenter.mount_column(handle)
}

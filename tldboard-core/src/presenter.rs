// Presentation surface consumed by the pipeline

use crate::card::{CardModel, ColumnModel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentError {
    #[error("no mount point for column '{0}'")]
    MissingTarget(String),

    #[error("no loading indicator available")]
    NoLoadingIndicator,

    #[error("presentation surface failed: {0}")]
    Surface(String),
}

/// The surface a pipeline run renders into.
///
/// Only already validated data crosses this boundary. Errors returned here
/// are logged by the caller and never abort a run.
pub trait Presenter {
    type Column;

    fn create_column(&mut self, title: &str) -> Result<Self::Column, PresentError>;

    fn append_card(&mut self, column: &mut Self::Column, card: &CardModel);

    fn mount_column(&mut self, column: Self::Column) -> Result<(), PresentError>;

    fn set_loading_visible(&mut self, visible: bool) -> Result<(), PresentError>;

    /// User-facing explanation when there is nothing to show.
    fn show_notice(&mut self, _message: &str) {}
}

/// Everything a run handed to a [`BoardPresenter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<ColumnModel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl Board {
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.title.as_str()).collect()
    }

    pub fn column(&self, title: &str) -> Option<&ColumnModel> {
        self.columns.iter().find(|column| column.title == title)
    }
}

/// In-memory presenter collecting mounted columns into a [`Board`].
#[derive(Debug, Default)]
pub struct BoardPresenter {
    board: Board,
    loading: bool,
    loading_transitions: Vec<bool>,
}

impl BoardPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Every value passed to `set_loading_visible`, in call order.
    pub fn loading_transitions(&self) -> &[bool] {
        &self.loading_transitions
    }
}

impl Presenter for BoardPresenter {
    type Column = ColumnModel;

    fn create_column(&mut self, title: &str) -> Result<ColumnModel, PresentError> {
        Ok(ColumnModel {
            title: title.to_string(),
            cards: Vec::new(),
            skipped: 0,
        })
    }

    fn append_card(&mut self, column: &mut ColumnModel, card: &CardModel) {
        column.cards.push(card.clone());
    }

    fn mount_column(&mut self, column: ColumnModel) -> Result<(), PresentError> {
        self.board.columns.push(column);
        Ok(())
    }

    fn set_loading_visible(&mut self, visible: bool) -> Result<(), PresentError> {
        self.loading = visible;
        self.loading_transitions.push(visible);
        Ok(())
    }

    fn show_notice(&mut self, message: &str) {
        self.board.notices.push(message.to_string());
    }
}

use crate::board_view::loading_ui;
use ratatui::{Terminal, backend::Backend};
use tldboard_core::{Board, BoardPresenter, CardModel, ColumnModel, PresentError, Presenter};

/// Presenter drawing a loading frame on a terminal while columns arrive.
///
/// Columns are collected into a [`Board`]; the interactive view takes over
/// once the run is finished.
pub struct TuiPresenter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    inner: BoardPresenter,
}

impl<'a, B: Backend> TuiPresenter<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self {
            terminal,
            inner: BoardPresenter::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    pub fn into_board(self) -> Board {
        self.inner.into_board()
    }

    fn draw_loading(&mut self) -> Result<(), PresentError> {
        let ready = self.inner.board().columns.len();
        self.terminal
            .draw(|f| loading_ui(f, ready))
            .map(|_| ())
            .map_err(|e| PresentError::Surface(e.to_string()))
    }
}

impl<B: Backend> Presenter for TuiPresenter<'_, B> {
    type Column = ColumnModel;

    fn create_column(&mut self, title: &str) -> Result<ColumnModel, PresentError> {
        self.inner.create_column(title)
    }

    fn append_card(&mut self, column: &mut ColumnModel, card: &CardModel) {
        self.inner.append_card(column, card);
    }

    fn mount_column(&mut self, column: ColumnModel) -> Result<(), PresentError> {
        self.inner.mount_column(column)?;
        if self.inner.is_loading() {
            self.draw_loading()?;
        }
        Ok(())
    }

    fn set_loading_visible(&mut self, visible: bool) -> Result<(), PresentError> {
        self.inner.set_loading_visible(visible)?;
        if visible {
            self.draw_loading()?;
        }
        Ok(())
    }

    fn show_notice(&mut self, message: &str) {
        self.inner.show_notice(message);
    }
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tldboard_core::{Board, ColumnModel};

/// Narrowest a column is drawn before fewer columns are shown at once.
pub const MIN_COLUMN_WIDTH: u16 = 28;

/// Navigation state over a finished board.
pub struct BoardApp {
    board: Board,
    first_column: usize,
    scroll: u16,
    pub should_quit: bool,
}

impl BoardApp {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            first_column: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_column(&self) -> usize {
        self.first_column
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn next_column(&mut self) {
        if self.first_column + 1 < self.board.columns.len() {
            self.first_column += 1;
            self.scroll = 0;
        }
    }

    pub fn previous_column(&mut self) {
        if self.first_column > 0 {
            self.first_column -= 1;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let longest = self
            .board
            .columns
            .iter()
            .map(|column| column_lines(column).len())
            .max()
            .unwrap_or(0);
        let longest = u16::try_from(longest).unwrap_or(u16::MAX);
        self.scroll = self
            .scroll
            .saturating_add(lines)
            .min(longest.saturating_sub(1));
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Columns that fit in `width`, starting at the current offset.
    pub fn visible_columns(&self, width: u16) -> &[ColumnModel] {
        let fit = ((width / MIN_COLUMN_WIDTH) as usize).max(1);
        let end = (self.first_column + fit).min(self.board.columns.len());
        &self.board.columns[self.first_column.min(end)..end]
    }
}

fn column_lines(column: &ColumnModel) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(column.cards.len() * 4);
    for card in &column.cards {
        let [name, username, website] = card.lines();
        lines.push(Line::from(Span::styled(
            name,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(username));
        lines.push(Line::from(Span::styled(
            website,
            Style::default().fg(Color::Cyan),
        )));
        lines.push(
            Line::from("─".repeat(MIN_COLUMN_WIDTH as usize - 4))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }
    lines
}

pub fn ui(f: &mut Frame, app: &BoardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Columns
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled("tldboard", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  {} columns, {} cards",
            app.board.columns.len(),
            app.board.total_cards()
        )),
    ]))
    .style(Style::default().fg(Color::Yellow));
    f.render_widget(header, chunks[0]);

    if app.board.columns.is_empty() {
        draw_notices(f, chunks[1], &app.board.notices);
    } else {
        draw_columns(f, chunks[1], app);
    }

    let status = Paragraph::new(Line::from(vec![
        Span::raw("Press "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" or "),
        Span::styled("ESC", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to quit | "),
        Span::styled("←→", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" columns | "),
        Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" scroll"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, chunks[2]);
}

fn draw_columns(f: &mut Frame, area: Rect, app: &BoardApp) {
    let visible = app.visible_columns(area.width);
    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Ratio(1, visible.len() as u32))
        .collect();
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (column, column_area) in visible.iter().zip(areas.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" {} ({}) ", column.title, column.cards.len()));

        let paragraph = Paragraph::new(column_lines(column))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll, 0));
        f.render_widget(paragraph, *column_area);
    }
}

fn draw_notices(f: &mut Frame, area: Rect, notices: &[String]) {
    let lines: Vec<Line> = if notices.is_empty() {
        vec![Line::from("Nothing to show")]
    } else {
        notices.iter().map(|n| Line::from(n.as_str())).collect()
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Frame shown while a run is in flight.
pub fn loading_ui(f: &mut Frame, columns_ready: usize) {
    let area = f.area();
    let lines = vec![
        Line::from(Span::styled(
            "Loading users…",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} columns ready", columns_ready)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" tldboard "));
    f.render_widget(paragraph, area);
}

//! TUI module - Terminal dashboard over generated workouts

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use std::io::{stdout, Stdout};

use crate::db::{Database, WorkoutHistory};
use crate::llm::strip_tags;
use crate::params::intensity_label;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App {
    db: Database,
    workouts: Vec<WorkoutHistory>,
    state: TableState,
    should_quit: bool,
}

impl App {
    pub fn new(db: Database) -> Result<Self> {
        let mut app = Self {
            db,
            workouts: Vec::new(),
            state: TableState::default(),
            should_quit: false,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.event_loop(&mut terminal, Self::handle_events);
        finish(result, restore_terminal)
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut step: impl FnMut(&mut Self) -> Result<()>,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            step(self)?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.workouts = self.db.get_history()?;
        let selected = match (self.state.selected(), self.workouts.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.state.select(selected);
        Ok(())
    }

    fn select_next(&mut self) {
        if let Some(i) = self.state.selected()
            && i + 1 < self.workouts.len()
        {
            self.state.select(Some(i + 1));
        }
    }

    fn select_previous(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(1)));
        }
    }

    fn selected(&self) -> Option<&WorkoutHistory> {
        self.state.selected().and_then(|i| self.workouts.get(i))
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(40),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!("FitGen - Workout History ({})", self.workouts.len()))
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        // History table
        let rows: Vec<Row> = self.workouts.iter().map(|w| {
            let p = &w.parameters;
            let source = if w.is_demo {
                Cell::from("demo").style(Style::default().fg(Color::Yellow))
            } else {
                Cell::from("AI").style(Style::default().fg(Color::Green))
            };
            Row::new(vec![
                Cell::from(w.timestamp.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(p.muscle_groups_text()),
                Cell::from(format!("{} ({})", p.intensity, intensity_label(p.intensity))),
                Cell::from(p.workout_type.label()),
                Cell::from(p.goal.label()),
                source,
            ])
        }).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(17),
                Constraint::Min(20),
                Constraint::Length(16),
                Constraint::Length(15),
                Constraint::Length(17),
                Constraint::Length(6),
            ],
        )
        .header(Row::new(vec!["Date", "Muscle Groups", "Intensity", "Type", "Goal", "Source"])
            .style(Style::default().bold()))
        .row_highlight_style(Style::default().reversed())
        .block(Block::default().borders(Borders::ALL).title("Workouts"));

        frame.render_stateful_widget(table, chunks[1], &mut self.state);

        // Detail
        let detail = self
            .selected()
            .map(|w| strip_tags(&w.content))
            .unwrap_or_else(|| "No workouts yet. Run `fitgen generate` to create one.".to_string());
        let detail = Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Plan"));
        frame.render_widget(detail, chunks[2]);

        // Footer
        let footer = Paragraph::new("q: quit | ↑/↓: select | r: refresh")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        KeyCode::Char('r') => self.refresh()?,
                        KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                        KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
                        _ => {}
                    }
                }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

/// Restore runs whatever the loop returned; the loop error wins
fn finish(result: Result<()>, restore: impl FnOnce() -> Result<()>) -> Result<()> {
    let restored = restore();
    result.and(restored)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Goal, WorkoutParameters, WorkoutType};
    use crate::exercises::MuscleGroup;
    use ratatui::backend::TestBackend;

    fn app_with(n: usize) -> App {
        let db = Database::open(":memory:").unwrap();
        let p = WorkoutParameters {
            muscle_groups: vec![MuscleGroup::Shoulders],
            intensity: 1,
            workout_type: WorkoutType::Calisthenics,
            goal: Goal::Flexibility,
            duration: "20".to_string(),
        };
        for i in 0..n {
            let req = db.create_request(&p).unwrap();
            db.save_content(req.id, &format!("<p>plan {}</p>", i), false).unwrap();
        }
        App::new(db).unwrap()
    }

    #[test]
    fn test_empty_history_has_no_selection() {
        let app = app_with(0);
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app_with(2);
        assert_eq!(app.state.selected(), Some(0));

        app.select_next();
        app.select_next();
        assert_eq!(app.state.selected(), Some(1));

        app.select_previous();
        app.select_previous();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_terminal_restored_after_loop_error() {
        let mut app = app_with(1);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let result = app.event_loop(&mut terminal, |_| anyhow::bail!("history unreadable"));

        let mut restored = false;
        let err = finish(result, || {
            restored = true;
            Ok(())
        })
        .unwrap_err();
        assert!(restored);
        assert_eq!(err.to_string(), "history unreadable");
    }

    #[test]
    fn test_restore_error_reported_after_clean_exit() {
        assert!(finish(Ok(()), || anyhow::bail!("tty gone")).is_err());
        assert!(finish(Ok(()), || Ok(())).is_ok());
    }

    #[test]
    fn test_event_loop_draws_until_quit() {
        let mut app = app_with(2);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        app.event_loop(&mut terminal, |app| {
            app.should_quit = true;
            Ok(())
        })
        .unwrap();

        let screen: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("FitGen - Workout History (2)"));
    }

    #[test]
    fn test_selected_is_newest_first() {
        let app = app_with(3);
        assert_eq!(app.selected().unwrap().content, "<p>plan 2</p>");
    }
}

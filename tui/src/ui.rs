use crate::app::{App, Mode};
use lifegrid_lib::{Grid, Phase};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    terminal::Frame,
    text::Text,
    widgets::{
        block::{Block, Title},
        Borders, Clear, Paragraph, Widget,
    },
};

impl App {
    /// Render the TUI interface.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(frame.size());

        self.render_top_bar(frame, chunks[0]);
        self.render_main(frame, chunks[1]);
        self.render_bottom_bar(frame, chunks[2]);

        // Show the popup window if needed.
        match self.mode {
            Mode::Usage => self.render_help(frame, chunks[1]),
            Mode::Quit => self.render_quit(frame, chunks[1]),
            _ => {}
        }
    }

    /// Render the top bar.
    ///
    /// This includes the title, the current generation, and the population.
    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([34, 33, 33]),
        )
        .split(area);

        let style = Style::new().black().on_light_yellow();

        let title = Paragraph::new("Game of Life").style(style.bold());
        frame.render_widget(title, chunks[0]);

        let generation =
            Paragraph::new(format!("Generation: {}", self.life.generation())).style(style);
        frame.render_widget(generation, chunks[1]);

        let population =
            Paragraph::new(format!("Population: {}", self.life.grid().population())).style(style);
        frame.render_widget(population, chunks[2]);
    }

    /// Render the bottom bar.
    ///
    /// This includes the current status and a short help message.
    fn render_bottom_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_yellow();

        let status_str = match (self.life.phase(), self.mode) {
            (Phase::Uninitialized, _) => "Not seeded.",
            (_, Mode::Running) => "Running...",
            (Phase::Seeded, _) => "Seeded.",
            (Phase::Running, _) => "Paused.",
        };

        let status = Paragraph::new(status_str).style(style);
        frame.render_widget(status, chunks[0]);

        let help = Paragraph::new("Press [h] for help.").style(style);
        frame.render_widget(help, chunks[1]);
    }

    /// Render the main area.
    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let cells = Cells::new(self.life.grid());
        frame.render_widget(cells, area);
    }

    /// Render a popup window with some text.
    fn render_popup<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        text: impl Into<Text<'a>>,
        title: impl Into<Title<'a>>,
        style: Style,
    ) {
        let text = text.into();

        let center_x = area.x + area.width / 2;
        let center_y = area.y + area.height / 2;

        let width = area.width.min(text.width() as u16 + 2);
        let height = area.height.min(text.height() as u16 + 2);

        let rect = Rect::new(center_x - width / 2, center_y - height / 2, width, height);

        frame.render_widget(Clear, rect);

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);

        frame.render_widget(paragraph, rect);
    }

    /// Render the popup window to show the help message.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "[q]/[Esc]       Quit\n\
             [h]             Show or hide this help message\n\
             [Space]/[Enter] Start or pause the simulation\n\
             [n]/[Right]     Step one generation while paused\n\
             [r]             Reseed the first generation",
            "Help",
            Style::new().green(),
        );
    }

    /// Render the popup window to ask the user to confirm quitting.
    fn render_quit(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "Are you sure you want to quit? ([y]/[n])",
            "Quit",
            Style::new().yellow(),
        );
    }
}

/// A widget to draw the cells of the current generation.
///
/// Cells that do not fit in the area are not drawn.
#[derive(Debug)]
struct Cells<'a> {
    /// The current generation.
    grid: &'a Grid,
}

impl<'a> Cells<'a> {
    /// Create a new widget from the grid.
    const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl<'a> Widget for Cells<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (w, h) = self.grid.dimensions();
        let w = w.min(area.width as usize) as u16;
        let h = h.min(area.height as usize) as u16;

        for y in 0..h {
            for x in 0..w {
                let cell = buf.get_mut(area.x + x, area.y + y);
                if self.grid.is_alive(x as usize, y as usize) {
                    cell.set_char('o').set_style(Style::new().light_yellow());
                } else {
                    cell.set_char('.').set_style(Style::new().dark_gray());
                }
            }
        }
    }
}

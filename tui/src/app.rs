use crate::{args::Args, event::TermEvent};
use color_eyre::Result;
use crossterm::event::KeyCode;
use lifegrid_lib::{Life, Phase};
use std::time::Duration;

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A new generation is computed on every tick.
    Running,
    /// The simulation is paused by the user.
    #[default]
    Paused,
    /// Ask the user to confirm the quit.
    Quit,
    /// Display the usage.
    Usage,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The simulation.
    pub life: Life,
    /// Delay between two generations.
    pub delay: Duration,
    /// Current mode of the application.
    pub mode: Mode,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new [`App`] from the command line arguments, and seed the first generation.
    pub fn new(args: Args) -> Result<Self> {
        let delay = args.delay();
        let mut life = Life::new(args.config)?;
        life.seed()?;

        Ok(Self {
            life,
            delay,
            mode: Mode::Running,
            should_quit: false,
        })
    }

    /// Compute the next generation.
    pub fn step(&mut self) -> Result<()> {
        self.life.step()?;
        Ok(())
    }

    /// Replace the grid with a new first generation.
    fn reseed(&mut self) -> Result<()> {
        self.life.seed()?;
        log::info!("Reseeded.");
        Ok(())
    }

    /// Print the current generation in RLE format.
    ///
    /// This function is called when exiting the application.
    pub fn print_grid(&self) {
        if self.life.phase() != Phase::Uninitialized {
            print!("{}", self.life.grid().rle());
        }
    }

    /// Update the application state according to the given event.
    pub fn update(&mut self, event: TermEvent) -> Result<()> {
        let TermEvent::KeyPress(key) = event else {
            if event == TermEvent::Tick && self.mode == Mode::Running {
                self.step()?;
            }
            return Ok(());
        };

        match self.mode {
            Mode::Running => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.mode = Mode::Paused;
                }
                KeyCode::Char('r' | 'R') => {
                    self.reseed()?;
                }
                KeyCode::Char('h' | 'H') => {
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Paused => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.mode = Mode::Running;
                }
                KeyCode::Char('n' | 'N') | KeyCode::Right => {
                    self.step()?;
                }
                KeyCode::Char('r' | 'R') => {
                    self.reseed()?;
                }
                KeyCode::Char('h' | 'H') => {
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Quit => match key {
                KeyCode::Char('y' | 'Y') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n' | 'N') => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
            Mode::Usage => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char('h' | 'H' | ' ') | KeyCode::Enter => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
        }

        Ok(())
    }
}

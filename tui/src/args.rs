use clap::{error::ErrorKind, CommandFactory, Parser};
use lifegrid_lib::Config;
use std::time::Duration;

/// Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub config: Config,

    /// Delay between two generations, in milliseconds.
    #[arg(long, default_value = "100")]
    pub delay: u64,

    /// Number of generations to print when the TUI interface is disabled.
    #[arg(short, long, default_value = "100")]
    pub generations: u64,

    /// Whether to disable the TUI interface.
    ///
    /// If the TUI interface is disabled, the program will print every generation to stdout
    /// in RLE format.
    #[arg(long)]
    pub no_tui: bool,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        if args.delay == 0 {
            Self::command()
                .error(ErrorKind::ValueValidation, "delay must be > 0")
                .exit();
        }

        match args.config.check() {
            Ok(config) => Self { config, ..args },
            Err(e) => Self::command().error(ErrorKind::ValueValidation, e).exit(),
        }
    }

    /// Delay between two generations.
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

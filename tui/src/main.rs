mod app;
mod args;
mod event;
mod tui;
mod ui;

use crate::{args::Args, tui::Tui};
use color_eyre::Result;
use crossterm::tty::IsTty;
use lifegrid_lib::{Config, Life};
use std::io::stdout;

/// Seed a new simulation, and call `f` on the RLE of generations `0..=generations`.
fn for_each_rle(config: Config, generations: u64, mut f: impl FnMut(String)) -> Result<()> {
    let mut life = Life::new(config)?;
    life.seed()?;
    f(life.grid().rle());

    for _ in 0..generations {
        f(life.step()?.rle());
    }

    Ok(())
}

/// Run the program without the TUI interface.
fn run_no_tui(args: Args) -> Result<()> {
    for_each_rle(args.config, args.generations, |rle| print!("{rle}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse_and_validate();

    let stdout = stdout();

    if args.no_tui || !stdout.is_tty() {
        run_no_tui(args)?;
    } else {
        let mut tui = Tui::new(args)?;
        tui.run()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_lib::{seed, Grid};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_headless_frames() {
        let config = Config::new(6, 5).with_count(12).with_seed(8);

        let mut frames = Vec::new();
        for_each_rle(config.clone(), 3, |rle| frames.push(rle)).unwrap();
        assert_eq!(frames.len(), 4);

        // The first frame is the seeded grid, drawn from the configured random seed.
        let mut grid = Grid::new(6, 5).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        seed(&mut grid, config.policy(), &mut rng).unwrap();
        assert_eq!(frames[0], grid.rle());
        assert!(frames[0].starts_with("x = 6, y = 5, rule = B3/S23\n"));

        let mut frames = Vec::new();
        for_each_rle(config, 0, |rle| frames.push(rle)).unwrap();
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_headless_invalid_config() {
        let config = Config::new(2, 2).with_count(5);
        assert!(for_each_rle(config, 3, |_| {}).is_err());
    }
}

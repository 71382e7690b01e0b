mod error;
mod logging;
mod render;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use mazecore::{
    algorithms::{Generator, Solver},
    Grid,
};
use rand::{thread_rng, Rng as _};

use error::Error;
use render::{CellLayout, LayoutObserver};
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, name = "maze-solver")]
struct Args {
    #[arg(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[arg(long, help = "Show config path and quit")]
    show_config_path: bool,
    #[arg(long, help = "Reset config to default and quit")]
    reset_config: bool,
    #[arg(long, help = "Show resolved config and quit")]
    debug_config: bool,
    #[arg(short, long, help = "Number of rows")]
    rows: Option<i32>,
    #[arg(short, long, help = "Number of columns")]
    cols: Option<i32>,
    #[arg(long, help = "Cell size in pixels")]
    cell_size: Option<u32>,
    #[arg(short, long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[arg(long, help = "Only generate, don't solve")]
    no_solve: bool,
    #[arg(short, long, help = "Don't print the maze")]
    quiet: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for more")]
    verbose: u8,
}

impl Args {
    /// Command line values win over the settings file.
    fn apply(&self, mut settings: Settings) -> Settings {
        settings.rows = self.rows.unwrap_or(settings.rows);
        settings.cols = self.cols.unwrap_or(settings.cols);
        settings.cell_size = self.cell_size.unwrap_or(settings.cell_size);
        settings.seed = self.seed.or(settings.seed);
        settings.solve &= !self.no_solve;
        settings.print &= !self.quiet;
        settings
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose))?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };

    if args.show_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if args.reset_config {
        Settings::reset(&config_path)?;
        return Ok(());
    }

    if args.debug_config {
        println!("{}", args.apply(Settings::load(&config_path)?).to_ron()?);
        return Ok(());
    }

    better_panic::install();

    let settings = args.apply(Settings::load(&config_path)?);
    debug!("settings: {:?}", settings);
    run(&settings)
}

fn run(settings: &Settings) -> Result<(), Error> {
    let mut grid = Grid::new(settings.rows, settings.cols)?;
    let mut observer = LayoutObserver::new(CellLayout::new(settings.origin, settings.cell_size));

    let seed = settings.seed.unwrap_or_else(|| thread_rng().gen());
    info!("generating {}x{} maze, seed {}", settings.rows, settings.cols, seed);
    Generator::from_seed(Some(seed)).generate(&mut grid, &mut observer)?;

    let path = if settings.solve {
        Solver::new().find_path(&mut grid, &mut observer)?
    } else {
        None
    };

    info!(
        "{} cell updates, {} moves, {} undone",
        observer.stats.updates, observer.stats.moves, observer.stats.undos
    );

    if settings.print {
        print!("{}", render::draw_ascii(&grid, path.as_deref()));
    }

    if settings.solve {
        println!("{}", if path.is_some() { "solved" } else { "not solved" });
    }

    Ok(())
}

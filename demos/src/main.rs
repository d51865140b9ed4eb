use std::fs;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use gridstar_core::{GridGraph, Pos, parse_grid};
use gridstar_demos::{render, scatter_barriers};
use gridstar_paths::{Heuristic, SearchConfig, SearchError, search_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridstar", version, about = "Animated A* search on a square grid")]
struct Cli {
    /// Text map to load ('.' empty, '#' barrier, 'S' start, 'E' end)
    #[arg(long, conflicts_with = "size")]
    map: Option<PathBuf>,

    /// Side length of an empty grid
    #[arg(long, default_value_t = 20)]
    size: i32,

    /// Start cell as row,col
    #[arg(long)]
    start: Option<Pos>,

    /// End cell as row,col
    #[arg(long)]
    end: Option<Pos>,

    /// Barrier cell as row,col (repeatable)
    #[arg(long = "barrier")]
    barriers: Vec<Pos>,

    /// Probability that a non-endpoint cell becomes a barrier
    #[arg(long, value_name = "P")]
    random_barriers: Option<f64>,

    /// Seed for --random-barriers
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// manhattan or euclidean
    #[arg(long, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Redraw the grid after every search step
    #[arg(long)]
    live: bool,

    /// Pause between redraws
    #[arg(long, default_value_t = 20, value_name = "MS")]
    delay_ms: u64,

    /// Cancel the search after this many redraws
    #[arg(long, value_name = "K")]
    max_steps: Option<u64>,

    /// Print the text map instead of coloured cells
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut grid = build_grid(&cli)?;
    let config = SearchConfig::new()
        .with_heuristic(cli.heuristic)
        .with_live_trace(cli.live);
    tracing::debug!(?config, size = grid.size(), "starting search");

    let mut stdout = io::stdout();
    let color = !cli.plain;
    let delay = Duration::from_millis(cli.delay_ms);
    let mut redraws = 0u64;

    execute!(stdout, terminal::Clear(ClearType::All), cursor::Hide)?;
    let result = search_grid(&mut grid, config, |g: &GridGraph| {
        redraws += 1;
        if render(&mut stdout, g, color).is_err() {
            return ControlFlow::Break(());
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        match cli.max_steps {
            Some(max) if redraws >= max => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    });
    render(&mut stdout, &grid, color)?;
    execute!(stdout, cursor::Show)?;

    let outcome = result.context("search could not start")?;
    let stats = outcome.stats;
    if outcome.found() {
        writeln!(
            stdout,
            "path found: {} steps, {} cells expanded, {} pushes",
            outcome.path_len(),
            stats.expansions,
            stats.pushes
        )?;
        Ok(ExitCode::SUCCESS)
    } else if outcome.cancelled {
        writeln!(stdout, "search cancelled after {} cells expanded", stats.expansions)?;
        Ok(ExitCode::from(2))
    } else {
        writeln!(stdout, "no path: {} cells expanded", stats.expansions)?;
        Ok(ExitCode::from(2))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Assemble the grid from the map file or size, then apply the edits given
/// on the command line in order: endpoints, barriers, random barriers.
fn build_grid(cli: &Cli) -> Result<GridGraph> {
    let mut grid = match &cli.map {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read map {}", path.display()))?;
            parse_grid(&text).with_context(|| format!("invalid map {}", path.display()))?
        }
        None => {
            if cli.size < 1 {
                bail!("grid size must be positive, got {}", cli.size);
            }
            GridGraph::new(cli.size)
        }
    };

    if cli.start.is_some() && cli.start == cli.end {
        return Err(SearchError::InvalidEndpoints {
            start: cli.start,
            end: cli.end,
        })
        .context("--start and --end must differ");
    }
    if let Some(p) = cli.start {
        grid.reset_cell(p).context("invalid --start")?;
        grid.set_start(p).context("invalid --start")?;
    }
    if let Some(p) = cli.end {
        grid.reset_cell(p).context("invalid --end")?;
        grid.set_end(p).context("invalid --end")?;
    }

    // Corners stand in only when no endpoint was asked for.
    if cli.start.is_none() && cli.end.is_none() {
        if grid.start().is_none() {
            grid.set_start(Pos::ZERO).context("no room for a start cell")?;
        }
        if grid.end().is_none() {
            let n = grid.size() - 1;
            grid.set_end(Pos::new(n, n)).context("no room for an end cell")?;
        }
    }
    if grid.start().is_none() || grid.end().is_none() {
        return Err(SearchError::InvalidEndpoints {
            start: grid.start(),
            end: grid.end(),
        })
        .context("both a start and an end cell are needed");
    }

    for &p in &cli.barriers {
        grid.set_barrier(p)
            .with_context(|| format!("cannot place barrier at {p}"))?;
    }
    if let Some(density) = cli.random_barriers {
        if !(0.0..=1.0).contains(&density) {
            bail!("--random-barriers must be within 0..=1, got {density}");
        }
        let mut rng = StdRng::seed_from_u64(cli.seed);
        let placed = scatter_barriers(&mut grid, density, &mut rng);
        tracing::info!(placed, seed = cli.seed, "scattered barriers");
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_corner_endpoints() {
        let cli = Cli::parse_from(["gridstar", "--size", "4"]);
        let grid = build_grid(&cli).unwrap();
        assert_eq!(grid.start(), Some(Pos::new(0, 0)));
        assert_eq!(grid.end(), Some(Pos::new(3, 3)));
    }

    #[test]
    fn flags_edit_the_grid() {
        let cli = Cli::parse_from([
            "gridstar",
            "--size",
            "5",
            "--start",
            "1,1",
            "--end",
            "(3,3)",
            "--barrier",
            "2,2",
            "--barrier",
            "0,4",
            "--heuristic",
            "euclid",
        ]);
        assert_eq!(cli.heuristic, Heuristic::Euclidean);
        let grid = build_grid(&cli).unwrap();
        assert_eq!(grid.start(), Some(Pos::new(1, 1)));
        assert_eq!(grid.end(), Some(Pos::new(3, 3)));
        assert_eq!(grid.count(gridstar_core::CellState::Barrier), 2);
    }

    #[test]
    fn identical_endpoints_are_rejected() {
        let cli = Cli::parse_from(["gridstar", "--size", "4", "--start", "1,1", "--end", "1,1"]);
        let err = build_grid(&cli).unwrap_err();
        let p = Some(Pos::new(1, 1));
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::InvalidEndpoints { start: p, end: p })
        );
    }

    #[test]
    fn single_endpoint_gets_no_default_partner() {
        let cli = Cli::parse_from(["gridstar", "--size", "4", "--end", "2,2"]);
        let err = build_grid(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SearchError>(),
            Some(SearchError::InvalidEndpoints { start: None, .. })
        ));
    }

    #[test]
    fn barrier_on_endpoint_is_an_error() {
        let cli = Cli::parse_from(["gridstar", "--size", "3", "--barrier", "0,0"]);
        assert!(build_grid(&cli).is_err());
    }

    #[test]
    fn bad_density_is_rejected() {
        let cli = Cli::parse_from(["gridstar", "--random-barriers", "1.5"]);
        assert!(build_grid(&cli).is_err());
    }

    #[test]
    fn map_and_size_conflict() {
        assert!(Cli::try_parse_from(["gridstar", "--map", "x.txt", "--size", "3"]).is_err());
    }
}

//! `pathfind`: run the grid pathfinders on an ASCII map from the terminal.

mod cli;
mod prefs;

use std::fs;

use anyhow::Context;
use clap::Parser;
use pathfinder_core::{Connectivity, Grid, Node};
use pathfinder_search::{Algorithm, Dijkstra, Pathfinder, SearchSummary, UnitCost};

use crate::cli::Cli;
use crate::prefs::Preferences;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut prefs = match &cli.config {
        Some(path) => Preferences::load(path)?,
        None => Preferences::default(),
    };
    cli.apply(&mut prefs);
    log::debug!("preferences: {prefs:?}");

    let text = fs::read_to_string(&cli.map)
        .with_context(|| format!("cannot read map {}", cli.map.display()))?;
    let grid = Grid::from_ascii(&text)
        .with_context(|| format!("invalid map {}", cli.map.display()))?
        .with_connectivity(prefs.connectivity);
    log::info!(
        "map {}x{}, {} walls, start {:?}, end {:?}",
        grid.width(),
        grid.height(),
        grid.blocked_count(),
        grid.start(),
        grid.end()
    );

    let mut costs = Vec::new();
    for &algorithm in prefs.algorithm.algorithms() {
        if algorithm == Algorithm::JumpPointSearch {
            if prefs.connectivity == Connectivity::Four {
                log::warn!("jps always moves diagonally; its cost assumes an 8-connected map");
            }
            if prefs.unit_cost {
                log::warn!("jps ignores --unit-cost");
            }
        }

        let (summary, path) = search(&grid, algorithm, prefs.unit_cost);
        println!("{summary}");
        if prefs.show_path && !path.is_empty() {
            print!("{}", grid.render_path(&path));
        }
        costs.push(summary);
    }

    if let [a, b] = costs.as_slice() {
        match (a.cost, b.cost) {
            (Some(x), Some(y)) if (x - y).abs() > 1e-9 => {
                log::warn!("{} and {} disagree: {x} vs {y}", a.algorithm, b.algorithm)
            }
            (Some(_), None) | (None, Some(_)) => {
                log::warn!("{} and {} disagree on reachability", a.algorithm, b.algorithm)
            }
            _ => {}
        }
    }
    Ok(())
}

fn search(grid: &Grid, algorithm: Algorithm, unit_cost: bool) -> (SearchSummary, Vec<Node>) {
    let unit = UnitCost(grid);
    let mut pf: Box<dyn Pathfinder + '_> = match algorithm {
        Algorithm::Dijkstra if unit_cost => Box::new(Dijkstra::new(&unit)),
        _ => algorithm.build(grid),
    };
    pf.run();
    (pf.summary(), pf.path().to_vec())
}

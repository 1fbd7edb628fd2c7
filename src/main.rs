//! Interactive breadth-first pathfinding session over a random obstacle grid.

use anyhow::{anyhow, Error};
use clap::Parser;
use log::info;
use mazebot::grid::{validate_endpoints, Grid, GridLocation};
use mazebot::pathing::bfs_path;
use mazebot::render::{format_move, format_path, render_markers, render_path, render_plain};
use mazebot::standard_grids::StandardGrid;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

/// Find a shortest path between two cells of a randomly generated obstacle grid
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Probability that a generated cell is an obstacle
    #[arg(long, default_value_t = 0.3)]
    obstacle_probability: f64,

    /// Seed for the grid generator; a fixed seed reproduces the same grid
    #[arg(long)]
    seed: Option<u64>,

    /// Run on a pre-made grid instead of a random one
    /// (open3, split3, single, playground)
    #[arg(long)]
    grid: Option<StandardGrid>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        eprintln!("Exiting due to invalid input...");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if !(0.0..=1.0).contains(&args.obstacle_probability) {
        return Err(anyhow!(
            "Obstacle probability must be between 0 and 1, got {}",
            args.obstacle_probability
        ));
    }

    println!("=== 2D BFS Traversal ===");

    let grid = match args.grid {
        Some(standard) => {
            println!("Using the {standard} grid...\n");
            standard.get_grid()
        }
        None => {
            println!("Generating random grid with obstacles...\n");
            let size = prompt_number("Enter grid size (N): ")?;
            if size < 1 {
                return Err(anyhow!("Grid size must be at least 1"));
            }
            let mut rng = match args.seed {
                Some(seed) => {
                    info!("seeding grid generator with {seed}");
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };
            Grid::random(size as usize, args.obstacle_probability, &mut rng)
        }
    };

    println!("\nGenerated grid (0=obstacle, 1=free):");
    print!("{}", render_plain(&grid));

    println!("\nEnter starting position (row and column, 0-based):");
    let start = GridLocation::new(prompt_number("Row: ")?, prompt_number("Column: ")?);

    println!("\nEnter goal position (row and column, 0-based):");
    let goal = GridLocation::new(prompt_number("Row: ")?, prompt_number("Column: ")?);

    validate_endpoints(&grid, start, goal)?;

    println!("\nGrid with start (S) and goal (G):");
    print!("{}", render_markers(&grid, start, goal));

    println!("\nStarting BFS traversal...");
    let path = bfs_path(&grid, start, goal, |direction, location| {
        println!("{}", format_move(direction, location));
    });

    match path {
        Some(path) => {
            println!("\nGoal found!");
            println!("Number of moves required = {}", path.len() - 1);
            println!("\nPath from start to goal:");
            print!("{}", format_path(&path));
            println!("\nGrid with path (marked with *):");
            print!("{}", render_path(&grid, start, goal, &path));
        }
        None => println!("\nGoal cannot be reached from starting block"),
    }

    Ok(())
}

fn prompt_number(prompt: &str) -> Result<i16, Error> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| anyhow!("Invalid number: {:?}", trimmed))
}

//! Console rendering for grids, markers, and discovered paths.
//!
//! Everything here builds plain strings; callers decide where they go.
//! Free cells render as `1` and walls as `0`, with `S`/`G` marking the
//! endpoints and `*` marking path cells.

use crate::grid::{Direction, Grid, GridLocation};

/// Render the grid with `1` for free cells and `0` for walls
pub fn render_plain(grid: &Grid) -> String {
    render_cells(grid, |_| None)
}

/// Render the grid with the start and goal marked `S` and `G`
pub fn render_markers(grid: &Grid, start: GridLocation, goal: GridLocation) -> String {
    render_cells(grid, |loc| {
        if loc == start {
            Some('S')
        } else if loc == goal {
            Some('G')
        } else {
            None
        }
    })
}

/// Render the grid with every path cell marked `*`
///
/// Path cells take precedence over the `S`/`G` markers. The grid must be the
/// one the path was discovered on, so the overlaid obstacles match what was
/// actually searched.
pub fn render_path(
    grid: &Grid,
    start: GridLocation,
    goal: GridLocation,
    path: &[GridLocation],
) -> String {
    render_cells(grid, |loc| {
        if path.contains(&loc) {
            Some('*')
        } else if loc == start {
            Some('S')
        } else if loc == goal {
            Some('G')
        } else {
            None
        }
    })
}

fn render_cells(grid: &Grid, marker: impl Fn(GridLocation) -> Option<char>) -> String {
    let mut out = String::new();
    for row in 0..grid.size() as i16 {
        for col in 0..grid.size() as i16 {
            if col > 0 {
                out.push(' ');
            }
            let loc = GridLocation::new(row, col);
            match marker(loc) {
                Some(c) => out.push(c),
                None => out.push(if grid.wall_at(&loc) { '0' } else { '1' }),
            }
        }
        out.push('\n');
    }
    out
}

/// The narration line for a single discovery step
pub fn format_move(direction: Direction, location: GridLocation) -> String {
    format!("Moving {} -> ({}, {})", direction, location.row, location.col)
}

/// The enumerated path listing printed after a successful search
///
/// The first position is labelled `Start`, the last `Goal`, and the rest
/// `Step <i>`. A single-element path (start equals goal) prints only the
/// `Start` line.
pub fn format_path(path: &[GridLocation]) -> String {
    let mut out = String::new();
    for (i, location) in path.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("Start -> ({}, {})\n", location.row, location.col));
        } else if i == path.len() - 1 {
            out.push_str(&format!("Goal -> ({}, {})\n", location.row, location.col));
        } else {
            out.push_str(&format!("Step {} -> ({}, {})\n", i, location.row, location.col));
        }
    }
    out
}

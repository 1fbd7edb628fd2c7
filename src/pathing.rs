//! Breadth-first shortest-path search over a [`Grid`].

use crate::grid::{Direction, Grid, GridLocation};
use log::debug;
use std::collections::VecDeque;

/// A cell discovered during the search
///
/// `parent` indexes the arena of previously discovered nodes; walking the
/// parent chain from the goal back to the start yields the path. A node's
/// depth is always its parent's depth plus one, with the start at zero.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    location: GridLocation,
    depth: u32,
    parent: Option<usize>,
}

/// Returns a shortest path, if one exists, from `start` to `goal`
///
/// The path includes both the start and the goal, so the number of moves is
/// `path.len() - 1`. Movement is 4-directional in the fixed order given by
/// [`Direction::get_all`], which picks one path deterministically when
/// several of equal length exist. The grid is never modified; visited state
/// is tracked separately.
///
/// `on_discover` is called once for each newly discovered cell (the goal
/// included) with the move that reached it. It is an observability hook; pass
/// `|_, _| {}` when no narration is wanted.
///
/// Endpoints are expected to be in bounds and free (see
/// [`validate_endpoints`](crate::grid::validate_endpoints)); a blocked or
/// out-of-bounds endpoint yields `None`.
///
/// # Examples
///
/// ```
/// use mazebot::grid::GridLocation;
/// use mazebot::pathing::bfs_path;
/// use mazebot::standard_grids::StandardGrid;
///
/// let grid = StandardGrid::Open3.get_grid();
/// let path = bfs_path(&grid, GridLocation::new(0, 0), GridLocation::new(2, 2), |_, _| {}).unwrap();
/// assert_eq!(path.len() - 1, 4);
/// ```
pub fn bfs_path(
    grid: &Grid,
    start: GridLocation,
    goal: GridLocation,
    mut on_discover: impl FnMut(Direction, GridLocation),
) -> Option<Vec<GridLocation>> {
    if grid.wall_at(&start) || grid.wall_at(&goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let size = grid.size();
    let cell_index = |loc: &GridLocation| loc.row as usize * size + loc.col as usize;

    let mut nodes = vec![SearchNode {
        location: start,
        depth: 0,
        parent: None,
    }];
    let mut visited = vec![false; size * size];
    visited[cell_index(&start)] = true;
    let mut queue = VecDeque::from([0usize]);

    while let Some(index) = queue.pop_front() {
        let SearchNode { location, depth, .. } = nodes[index];
        for direction in Direction::get_all() {
            let neighbor = direction.apply(location);
            if grid.wall_at(&neighbor) || visited[cell_index(&neighbor)] {
                continue;
            }
            nodes.push(SearchNode {
                location: neighbor,
                depth: depth + 1,
                parent: Some(index),
            });
            on_discover(direction, neighbor);
            if neighbor == goal {
                debug!(
                    "goal discovered at depth {} after {} nodes",
                    depth + 1,
                    nodes.len()
                );
                return Some(reconstruct_path(&nodes));
            }
            visited[cell_index(&neighbor)] = true;
            queue.push_back(nodes.len() - 1);
        }
    }

    debug!("frontier exhausted after {} nodes, goal unreachable", nodes.len());
    None
}

/// Walk parent references from the last node (the goal) back to the start,
/// then reverse into start-to-goal order.
fn reconstruct_path(nodes: &[SearchNode]) -> Vec<GridLocation> {
    let mut path = Vec::new();
    let mut current = Some(nodes.len() - 1);
    while let Some(index) = current {
        path.push(nodes[index].location);
        current = nodes[index].parent;
    }
    path.reverse();
    path
}

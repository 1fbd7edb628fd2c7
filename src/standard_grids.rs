#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made general purpose grids

use crate::grid::Grid;
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const W: bool = true;
const O: bool = false;

/// Pre-made grids with known layouts
///
/// # Examples
///
/// ```
/// use mazebot::standard_grids::StandardGrid;
///
/// let grid = StandardGrid::Open3.get_grid();
/// assert_eq!(grid.size(), 3);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardGrid {
    /// 3x3 with no obstacles
    Open3,
    /// 3x3 with the middle row fully walled - the halves cannot reach each other
    Split3,
    /// 1x1 with a single free cell
    Single,
    /// 8x8 board with scattered obstacles; the top row, bottom row, and right
    /// column are kept free so opposite corners always connect
    #[default]
    Playground,
}

impl StandardGrid {
    /// Get a list of all available grids
    pub fn get_all() -> [Self; 4] {
        [Self::Open3, Self::Split3, Self::Single, Self::Playground]
    }

    /// Get the [`Grid`] associated with this enum
    pub fn get_grid(&self) -> Grid {
        let rows = match self {
            Self::Open3 => vec![
                vec![O, O, O],
                vec![O, O, O],
                vec![O, O, O],
            ],
            Self::Split3 => vec![
                vec![O, O, O],
                vec![W, W, W],
                vec![O, O, O],
            ],
            Self::Single => vec![
                vec![O],
            ],
            Self::Playground => vec![
                vec![O, O, O, O, O, O, O, O],
                vec![O, W, W, O, W, W, W, O],
                vec![O, O, O, O, O, W, O, O],
                vec![W, W, O, W, O, W, O, O],
                vec![O, O, O, O, O, O, W, O],
                vec![O, W, W, W, W, O, W, O],
                vec![O, O, O, W, O, O, W, O],
                vec![O, O, O, O, O, O, O, O],
            ],
        };
        Grid::try_from(rows).expect("standard grids are square")
    }

    /// Side length of the associated grid
    pub fn size(&self) -> usize {
        match self {
            Self::Open3 | Self::Split3 => 3,
            Self::Single => 1,
            Self::Playground => 8,
        }
    }
}

impl fmt::Display for StandardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open3 => "open3",
            Self::Split3 => "split3",
            Self::Single => "single",
            Self::Playground => "playground",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StandardGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open3" => Ok(Self::Open3),
            "split3" => Ok(Self::Split3),
            "single" => Ok(Self::Single),
            "playground" => Ok(Self::Playground),
            _ => Err(anyhow!(
                "unknown grid name {:?}; expected one of open3, split3, single, playground",
                s
            )),
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One analysis run's input. Geometry and lengths are in millimetres.
///
/// Precondition: plank dimensions, kerf, and minimum cut length are positive.
/// The planner does not validate them; callers (CLI, server) do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub room_polygon: Vec<Point>,
    pub plank_full_length: f64,
    pub plank_width: f64,
    pub saw_kerf: f64,
    pub min_cut_length: f64,
    /// Start offset of each row's first board, usually in `[-plank_full_length, 0]`.
    /// Rows past the end of this list start at 0.
    #[serde(default)]
    pub row_offsets: Vec<f64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            room_polygon: vec![
                Point::new(0.0, 0.0),
                Point::new(5000.0, 0.0),
                Point::new(5000.0, 4000.0),
                Point::new(0.0, 4000.0),
            ],
            plank_full_length: 2400.0,
            plank_width: 190.0,
            saw_kerf: 3.0,
            min_cut_length: 300.0,
            row_offsets: Vec::new(),
        }
    }
}

/// Where a board sits relative to the room along its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardPosition {
    /// Starts before the room, trimmed at its leading edge.
    Top,
    /// Fully visible (or spans the whole room).
    Full,
    /// Runs past the room, trimmed at its trailing edge.
    Bottom,
}

/// One visible board segment the layout needs, length rounded to whole mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutRequirement {
    pub length: u32,
    pub row_index: usize,
    pub board_index: usize,
    pub position: BoardPosition,
}

/// Leftover material from cutting a plank or another offcut.
///
/// `allocated` flips free -> allocated exactly once, when a later requirement
/// is cut from this piece; it never reverts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offcut {
    pub length: f64,
    pub source_row: usize,
    pub source_board: usize,
    pub source_plank: usize,
    pub allocated: bool,
    pub allocated_to: Option<CutTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutTarget {
    pub row_index: usize,
    pub board_index: usize,
}

/// What was cut from one purchased plank, in cutting order, plus whatever
/// usable length was left over at the end of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlankAllocation {
    pub plank_number: usize,
    pub cuts: Vec<u32>,
    pub offcut_length: f64,
}

/// Complete result of one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutList {
    /// Planks purchased, including those used whole without a cut.
    pub full_planks: usize,
    /// Required length -> how many pieces of that length must be cut.
    /// Exact-full-plank boards are not cuts and do not appear here.
    pub cuts: BTreeMap<u32, u32>,
    /// Every offcut produced, reused or not, in creation order.
    pub offcuts: Vec<Offcut>,
    pub waste: f64,
    pub total_material: f64,
    /// Percentage of purchased material that ends up in the floor.
    pub efficiency: f64,
    pub unique_cuts: usize,
    pub requirements: Vec<CutRequirement>,
    pub plank_allocations: Vec<PlankAllocation>,
}

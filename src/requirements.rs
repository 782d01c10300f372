use crate::types::{BoardPosition, CutRequirement, PlanConfig, Point};

// Fallback room size when the polygon is degenerate (fewer than 2 points).
const DEFAULT_ROOM_HEIGHT: f64 = 4000.0;
const DEFAULT_ROOM_WIDTH: f64 = 5000.0;

pub fn room_height(polygon: &[Point]) -> f64 {
    if polygon.len() < 2 {
        return DEFAULT_ROOM_HEIGHT;
    }
    let max = polygon.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let min = polygon.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    max - min
}

pub fn room_width(polygon: &[Point]) -> f64 {
    if polygon.len() < 2 {
        return DEFAULT_ROOM_WIDTH;
    }
    let max = polygon.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min = polygon.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    max - min
}

pub fn num_rows(config: &PlanConfig) -> usize {
    (room_width(&config.room_polygon) / config.plank_width).ceil() as usize
}

/// Walks every row of the layout and emits one requirement per board segment
/// that is visible inside the room.
///
/// Each row starts at its configured offset (0 when none is configured) and
/// steps forward one full plank length at a time. One extra board beyond
/// `ceil(roomHeight / plankFullLength)` guarantees coverage for any offset.
/// Boards clipped entirely outside `[0, roomHeight]` emit nothing.
pub fn generate(config: &PlanConfig) -> Vec<CutRequirement> {
    let height = room_height(&config.room_polygon);
    let board_length = config.plank_full_length;
    let boards_per_row = (height / board_length).ceil() as usize + 1;

    let mut requirements = Vec::new();

    for row_index in 0..num_rows(config) {
        let mut current_y = config.row_offsets.get(row_index).copied().unwrap_or(0.0);

        for board_index in 0..boards_per_row {
            let board_start = current_y;
            let board_end = current_y + board_length;

            let inside_start = board_start.max(0.0);
            let inside_end = board_end.min(height);

            if inside_end > inside_start {
                let position = if board_start < 0.0 && board_end <= height {
                    BoardPosition::Top
                } else if board_start >= 0.0 && board_end > height {
                    BoardPosition::Bottom
                } else {
                    // Fully interior, or overhanging both edges at once.
                    BoardPosition::Full
                };

                requirements.push(CutRequirement {
                    // Round-half-up to whole mm; kerf arithmetic downstream
                    // depends on this exact rounding.
                    length: (inside_end - inside_start).round() as u32,
                    row_index,
                    board_index,
                    position,
                });
            }

            current_y += board_length;
        }
    }

    requirements
}

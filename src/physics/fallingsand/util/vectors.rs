//! Directions on the cell grid.
//! y grows downward, so "below" is +y and "above" is -y.

use bevy::math::{IVec2, Vec2};

/// One cell towards the floor
pub const DOWN: IVec2 = IVec2::Y;
/// One cell towards the ceiling
pub const UP: IVec2 = IVec2::NEG_Y;
/// One cell to the left
pub const LEFT: IVec2 = IVec2::NEG_X;
/// One cell to the right
pub const RIGHT: IVec2 = IVec2::X;

/// The 4-neighborhood, clockwise from the top
pub const NEIGHBORS: [IVec2; 4] = [UP, RIGHT, DOWN, LEFT];

/// The float position of the center of a cell, as stored on particles
pub fn cell_to_position(cell: IVec2) -> Vec2 {
    cell.as_vec2()
}

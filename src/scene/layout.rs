use crate::foundation::core::Point;

/// Number of columns in the default placement grid.
pub const GRID_COLUMNS: usize = 5;

/// Cell pitch of the default placement grid, in canvas pixels.
pub const GRID_PITCH: f64 = 110.0;

/// Top-left origin of the default placement grid, in canvas pixels.
pub const GRID_ORIGIN: Point = Point::new(50.0, 50.0);

/// Deterministic wrapping-grid slot for ornament index `index`.
pub fn grid_slot(index: usize) -> Point {
    let col = (index % GRID_COLUMNS) as f64;
    let row = (index / GRID_COLUMNS) as f64;
    Point::new(GRID_ORIGIN.x + col * GRID_PITCH, GRID_ORIGIN.y + row * GRID_PITCH)
}

/// Reconcile the position list against a new ornament count.
///
/// Unchanged length is a no-op. Growth appends grid slots for the new indices,
/// leaving existing (possibly user-dragged) positions untouched. Shrinkage
/// truncates to the new length.
pub fn reconcile_positions(positions: &mut Vec<Point>, new_len: usize) {
    use std::cmp::Ordering;

    match positions.len().cmp(&new_len) {
        Ordering::Equal => {}
        Ordering::Less => {
            for i in positions.len()..new_len {
                positions.push(grid_slot(i));
            }
        }
        Ordering::Greater => positions.truncate(new_len),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;

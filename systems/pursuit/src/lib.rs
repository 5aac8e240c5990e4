#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that computes the chaser's pursuit step from the grid view.

use snake_maze_core::{Direction, GridView, Position};

/// Computes the cell the chaser attempts to enter this turn.
///
/// The chase is a fixed-priority greedy walk toward the agent: step up when
/// the agent is strictly above, else down when strictly below, else left when
/// strictly to the left, else right when strictly to the right. Each axis is
/// screened against obstacles only; walls and grid bounds are left to the
/// caller's commit gate, so a blocked vertical axis falls through to the
/// horizontal one while a wall candidate is still returned and rejected
/// later. When no axis offers progress the chaser's own position comes back
/// and the caller commits a zero-length step.
#[must_use]
pub fn chase_candidate(chaser: Position, agent: Position, view: GridView<'_>) -> Position {
    if agent.row() < chaser.row() {
        if let Some(up) = chaser.step(Direction::Up) {
            if !view.is_obstacle(up) {
                return up;
            }
        }
    }
    if agent.row() > chaser.row() {
        if let Some(down) = chaser.step(Direction::Down) {
            if !view.is_obstacle(down) {
                return down;
            }
        }
    }
    if agent.col() < chaser.col() {
        if let Some(left) = chaser.step(Direction::Left) {
            if !view.is_obstacle(left) {
                return left;
            }
        }
    }
    if agent.col() > chaser.col() {
        if let Some(right) = chaser.step(Direction::Right) {
            if !view.is_obstacle(right) {
                return right;
            }
        }
    }
    chaser
}

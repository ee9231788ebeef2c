//! Lazy per-frame reset of transient tile state.
//!
//! Transient fields are never cleared eagerly; each pass that touches a tile
//! first runs it through [`reset_frame_state`], which rewrites the block
//! exactly once per frame. The `last_frame_visited` guard is what lets the
//! sibling-loading and toggle passes safely touch tiles the current frustum
//! recursion never reached.

use crate::tile::{FrameState, TileNode};

/// Transition a tile's transient state into the current frame, once.
///
/// If the tile was already visited this frame this does nothing, so it is
/// idempotent within a frame and safe to call from every pass.
pub(crate) fn reset_frame_state(tile: &mut TileNode, frame_count: u64) {
    if tile.frame.last_frame_visited != frame_count {
        tile.frame = FrameState {
            last_frame_visited: frame_count,
            ..FrameState::default()
        };
    }
}

/// Whether the tile is part of the used set for the given frame.
///
/// The conjunction with `last_frame_visited` guarantees a stale `used` flag
/// from a prior frame can never leak into the current one.
pub fn is_used_this_frame(tile: &TileNode, frame_count: u64) -> bool {
    tile.frame.last_frame_visited == frame_count && tile.frame.used
}

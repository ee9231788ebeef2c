//! Collaborator contracts: the renderer the traversal drives and the content
//! cache it cooperates with.

use crate::tile::{TileId, TileNode};

/// The rendering host the traversal drives.
///
/// The traversal owns *which* tiles are tested, requested, and toggled, and
/// in what order; the renderer owns all geometry (frustum math, screen-space
/// error projection) and all I/O behind `request_tile_contents`. Every method
/// is expected to be total — failures surfaced by a renderer are its own
/// concern, never the traversal's.
///
/// # Toggle argument mapping
///
/// For compatibility with renderers wired against the original engine, the
/// toggle callbacks carry each other's flag: [`set_tile_visible`] receives
/// the tile's ACTIVE flag and [`set_tile_active`] receives the tile's
/// VISIBLE flag. See the toggle pass for details.
///
/// [`set_tile_visible`]: TileRenderer::set_tile_visible
/// [`set_tile_active`]: TileRenderer::set_tile_active
pub trait TileRenderer {
    /// Does any part of this tile's bounding volume intersect the camera's
    /// view volume this frame?
    fn tile_in_view(&self, tile: &TileNode) -> bool;

    /// Projected screen-space error of displaying this tile at its own level
    /// of detail. Lower is better; compared against the traversal's error
    /// target and threshold.
    fn calculate_error(&self, tile: &TileNode) -> f64;

    /// Fire-and-forget request to fetch this tile's content. Must return
    /// immediately without awaiting I/O; loads complete on the host's
    /// workers and become observable through [`LoadingState`] transitions.
    ///
    /// [`LoadingState`]: crate::LoadingState
    fn request_tile_contents(&mut self, tile: &TileNode);

    /// Toggle callback carrying the tile's ACTIVE flag (see the trait docs
    /// for the argument mapping). Fired only when the flag changed since the
    /// last delivery for this tile.
    fn set_tile_visible(&mut self, tile: &TileNode, active: bool);

    /// Toggle callback carrying the tile's VISIBLE flag (see the trait docs
    /// for the argument mapping). Fired only when the flag changed since the
    /// last delivery for this tile.
    fn set_tile_active(&mut self, tile: &TileNode, visible: bool);
}

/// Bounded residency store for tile content.
///
/// The traversal marks every used tile each frame and consults fullness
/// before issuing content requests; eviction policy and capacity bookkeeping
/// are the cache's own business. Saturation is the only backpressure — a
/// full cache silently suppresses further requests that frame.
pub trait ContentCache {
    /// Refresh a tile's residency for this frame. Idempotent within a frame.
    fn mark_used(&mut self, id: TileId);

    /// True when the cache cannot accept more content this frame.
    fn is_full(&self) -> bool;
}

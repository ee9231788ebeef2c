//! Frustum pass: recursive descent marking the in-frustum used set and
//! recording each tile's screen-space error.

use super::TraversalContext;
use super::frame_state::reset_frame_state;
use crate::renderer::{ContentCache, TileRenderer};
use crate::tile::TileNode;

/// Descend from `tile`, marking everything in view as used.
///
/// Returns true when any part of the subtree is in frustum and used.
/// Descent stops early once a tile's recorded error is at or below the error
/// target — subdividing a tile that already refines finely enough wastes
/// cache and bandwidth — and at the configured depth cutoff.
pub(crate) fn determine_frustum_set<R: TileRenderer, C: ContentCache>(
    tile: &mut TileNode,
    ctx: &mut TraversalContext<'_, R, C>,
) -> bool {
    reset_frame_state(tile, ctx.frame_count);

    if !ctx.renderer.tile_in_view(tile) {
        return false;
    }

    tile.frame.used = true;
    tile.frame.in_frustum = true;
    ctx.stats.in_frustum += 1;
    ctx.cache.mark_used(tile.id());

    if !tile.content_empty() {
        let error = ctx.renderer.calculate_error(tile);
        tile.frame.error = error;
        if error <= ctx.config.error_target {
            return true;
        }
    }

    if ctx.config.max_depth > 0 && tile.depth() + 1 >= ctx.config.max_depth {
        return true;
    }

    let mut any_children_used = false;
    for child in tile.children_mut() {
        let child_used = determine_frustum_set(child, ctx);
        any_children_used = any_children_used || child_used;
    }

    // When any child is used, keep its siblings resident so camera motion
    // does not cause an immediate cache miss.
    if any_children_used && ctx.config.load_siblings {
        for child in tile.children_mut() {
            recursively_mark_used(child, ctx);
        }
    }

    true
}

/// Mark `tile` used, descending through content-empty tiles until the next
/// tile with content of its own. Tiles already marked are not re-marked in
/// the cache.
fn recursively_mark_used<R: TileRenderer, C: ContentCache>(
    tile: &mut TileNode,
    ctx: &mut TraversalContext<'_, R, C>,
) {
    reset_frame_state(tile, ctx.frame_count);

    if !tile.frame.used {
        tile.frame.used = true;
        ctx.cache.mark_used(tile.id());
    }

    if tile.content_empty() {
        for child in tile.children_mut() {
            recursively_mark_used(child, ctx);
        }
    }
}

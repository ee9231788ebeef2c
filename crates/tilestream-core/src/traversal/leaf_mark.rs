//! Leaf-mark pass: within the used set, tiles with no used children become
//! leaves and the prior frame's visibility is aggregated upward.

use super::TraversalContext;
use super::frame_state::is_used_this_frame;
use crate::renderer::{ContentCache, TileRenderer};
use crate::tile::TileNode;

/// Mark used-set leaves below `tile` and aggregate `children_were_visible`.
///
/// The aggregation reads each child's `was_set_visible` from the PRIOR frame
/// — that is the hysteresis signal the skip pass uses to avoid regressing to
/// a coarser level of detail while children reload. A child outside this
/// frame's used set contributes whatever hysteresis state it last carried.
pub(crate) fn mark_used_set_leaves<R: TileRenderer, C: ContentCache>(
    tile: &mut TileNode,
    ctx: &mut TraversalContext<'_, R, C>,
) {
    if !is_used_this_frame(tile, ctx.frame_count) {
        return;
    }

    ctx.stats.used += 1;

    let frame_count = ctx.frame_count;
    let any_children_used = tile
        .children()
        .iter()
        .any(|child| is_used_this_frame(child, frame_count));

    if !any_children_used {
        tile.frame.is_leaf = true;
        return;
    }

    let mut children_were_visible = false;
    for child in tile.children_mut() {
        mark_used_set_leaves(child, ctx);
        children_were_visible = children_were_visible
            || child.was_set_visible
            || child.frame.children_were_visible;
    }
    tile.frame.children_were_visible = children_were_visible;
}

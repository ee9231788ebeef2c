//! Skip pass: decides which used tiles become visible or active this frame
//! and which should be requested from backing storage.

use super::TraversalContext;
use super::frame_state::is_used_this_frame;
use crate::renderer::{ContentCache, TileRenderer};
use crate::tile::{LoadingState, TileNode};

/// Resolve visibility, activity, and content requests for the used set
/// below `tile`.
///
/// Interior tiles that meet the relaxed error bound
/// (`error_target * error_threshold`) may be displayed in place of their
/// children while those children load — unless the children were already
/// showing last frame, in which case the traversal keeps descending so a
/// transient eviction never pops back to the parent's level of detail.
pub(crate) fn skip_traversal<R: TileRenderer, C: ContentCache>(
    tile: &mut TileNode,
    ctx: &mut TraversalContext<'_, R, C>,
) {
    if !is_used_this_frame(tile, ctx.frame_count) {
        return;
    }

    let has_content = !tile.content_empty();
    let loaded_content = tile.loading_state() == LoadingState::Loaded && has_content;

    if tile.frame.is_leaf {
        if loaded_content {
            if tile.frame.in_frustum {
                tile.frame.visible = true;
                ctx.stats.visible += 1;
            }
            tile.frame.active = true;
            ctx.stats.active += 1;
        } else if has_content && !ctx.cache.is_full() {
            ctx.renderer.request_tile_contents(tile);
        }
        return;
    }

    let error_requirement = ctx.config.error_target * ctx.config.error_threshold;
    let meets_sse = tile.frame.error <= error_requirement;
    let children_were_visible = tile.frame.children_were_visible;

    // NOTE: the original engine tests the PARENT's content flag here, so an
    // empty parent treats every used child as trivially ready. Kept as-is
    // for behavioral compatibility; the arguably intended predicate is
    // `child.content_empty()`.
    let parent_content_empty = tile.content_empty();
    let frame_count = ctx.frame_count;
    let all_children_have_content = tile.children().iter().all(|child| {
        !is_used_this_frame(child, frame_count)
            || child.loading_state() == LoadingState::Loaded
            || parent_content_empty
    });

    if meets_sse && !loaded_content && has_content && !ctx.cache.is_full() {
        ctx.renderer.request_tile_contents(tile);
    }

    if meets_sse && !all_children_have_content && !children_were_visible {
        if loaded_content {
            if tile.frame.in_frustum {
                tile.frame.visible = true;
                ctx.stats.visible += 1;
            }
            tile.frame.active = true;
            ctx.stats.active += 1;

            // Keep the next layer loading so the traversal can move down a
            // level once the data arrives.
            for child in tile.children_mut() {
                if is_used_this_frame(child, frame_count)
                    && !child.content_empty()
                    && !ctx.cache.is_full()
                {
                    ctx.renderer.request_tile_contents(child);
                }
            }
        }
        return;
    }

    for child in tile.children_mut() {
        skip_traversal(child, ctx);
    }
}

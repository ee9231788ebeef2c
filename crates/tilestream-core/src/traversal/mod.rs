//! The four-pass frame traversal and its driver.
//!
//! Passes run strictly in order per frame: frustum → leaf-mark → skip →
//! toggle, each walking the tree once. Reordering or skipping a pass is
//! undefined behavior, so the pass functions stay crate-private and only
//! [`TilesetTraversal::run_frame`] sequences them.

pub(crate) mod frame_state;
mod frustum;
mod leaf_mark;
mod skip;
#[cfg(test)]
mod testing;
mod toggle;

use serde::{Deserialize, Serialize};

use crate::renderer::{ContentCache, TileRenderer};
use crate::stats::FrameStats;
use crate::tile::TileNode;

/// Tuning knobs for the traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Target screen-space error. The frustum pass stops descending at
    /// tiles whose projected error is at or below this value.
    pub error_target: f64,
    /// Multiplier on `error_target` forming the looser "good enough to
    /// display the parent instead of its children" bound used by the skip
    /// pass.
    pub error_threshold: f64,
    /// Maximum tree depth visited by the frustum pass. 0 disables the
    /// cutoff.
    pub max_depth: u32,
    /// When any child of a tile is used, preload its siblings so camera
    /// motion does not cause immediate cache misses.
    pub load_siblings: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            error_target: 6.0,
            error_threshold: 6.0,
            max_depth: 0,
            load_siblings: true,
        }
    }
}

/// Shared state threaded through the pass recursions for one frame.
pub(crate) struct TraversalContext<'a, R: TileRenderer, C: ContentCache> {
    pub(crate) config: &'a TraversalConfig,
    pub(crate) renderer: &'a mut R,
    pub(crate) cache: &'a mut C,
    pub(crate) stats: &'a mut FrameStats,
    pub(crate) frame_count: u64,
}

/// Per-frame driver for the tile tree.
///
/// Owns the traversal configuration and the monotonically increasing frame
/// counter the lazy frame-state reset depends on. One call to
/// [`run_frame`](Self::run_frame) is one frame; the caller owns the tree,
/// the renderer, and the cache exclusively for its duration, and reads the
/// returned [`FrameStats`] afterwards.
pub struct TilesetTraversal {
    config: TraversalConfig,
    frame_count: u64,
}

impl TilesetTraversal {
    /// Create a driver with the given configuration. The first frame runs
    /// with counter 1 so that freshly built tiles (counter 0) can never
    /// alias a live frame.
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            config,
            frame_count: 0,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Mutable configuration access, for applying hot-reloaded settings
    /// between frames.
    pub fn config_mut(&mut self) -> &mut TraversalConfig {
        &mut self.config
    }

    /// The frame counter of the most recently completed frame.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run the four passes over the tree for one frame and return the
    /// frame's statistics.
    pub fn run_frame<R: TileRenderer, C: ContentCache>(
        &mut self,
        root: &mut TileNode,
        renderer: &mut R,
        cache: &mut C,
    ) -> FrameStats {
        self.frame_count += 1;

        let mut stats = FrameStats::default();
        let mut ctx = TraversalContext {
            config: &self.config,
            renderer,
            cache,
            stats: &mut stats,
            frame_count: self.frame_count,
        };

        frustum::determine_frustum_set(root, &mut ctx);
        leaf_mark::mark_used_set_leaves(root, &mut ctx);
        skip::skip_traversal(root, &mut ctx);
        toggle::toggle_tiles(root, &mut ctx);

        tracing::debug!(
            frame = self.frame_count,
            in_frustum = stats.in_frustum,
            used = stats.used,
            visible = stats.visible,
            active = stats.active,
            "frame traversal complete"
        );
        stats
    }
}

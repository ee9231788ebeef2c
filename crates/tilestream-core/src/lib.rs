//! Per-frame traversal core for hierarchical 3D tile streaming.
//!
//! Given a rooted tree of spatial tiles with progressively refined content,
//! the traversal decides each frame which tiles are in view, which should be
//! requested from backing storage, which should be displayed, and which should
//! be hidden or retired — subject to a bounded content cache and a
//! screen-space error budget.
//!
//! The core is deliberately free of geometry: frustum testing and error
//! computation live behind the [`TileRenderer`] trait, and content residency
//! behind [`ContentCache`]. See [`TilesetTraversal`] for the frame driver.

mod renderer;
mod stats;
mod tile;
mod traversal;

pub use renderer::{ContentCache, TileRenderer};
pub use stats::FrameStats;
pub use tile::{LoadingState, TileId, TileNode};
pub use traversal::frame_state::is_used_this_frame;
pub use traversal::{TilesetTraversal, TraversalConfig};

//! Shared test doubles for the traversal passes: a scripted renderer that
//! records every callback and a cache with settable fullness.

use std::collections::HashMap;

use super::{TraversalConfig, TraversalContext};
use crate::renderer::{ContentCache, TileRenderer};
use crate::stats::FrameStats;
use crate::tile::{TileId, TileNode};

/// One recorded renderer callback, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RendererEvent {
    Requested(TileId),
    SetVisible(TileId, bool),
    SetActive(TileId, bool),
}

/// Renderer whose frustum and error answers are scripted per tile id and
/// whose callbacks are recorded for assertion.
pub(crate) struct ScriptedRenderer {
    default_in_view: bool,
    in_view: HashMap<TileId, bool>,
    errors: HashMap<TileId, f64>,
    pub(crate) events: Vec<RendererEvent>,
}

impl ScriptedRenderer {
    /// Every tile passes the frustum test unless overridden.
    pub(crate) fn all_in_view() -> Self {
        Self {
            default_in_view: true,
            in_view: HashMap::new(),
            errors: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub(crate) fn set_in_view(&mut self, id: TileId, in_view: bool) {
        self.in_view.insert(id, in_view);
    }

    pub(crate) fn set_error(&mut self, id: TileId, error: f64) {
        self.errors.insert(id, error);
    }

    /// Tile ids requested so far, in request order.
    pub(crate) fn requested(&self) -> Vec<TileId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RendererEvent::Requested(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl TileRenderer for ScriptedRenderer {
    fn tile_in_view(&self, tile: &TileNode) -> bool {
        self.in_view
            .get(&tile.id())
            .copied()
            .unwrap_or(self.default_in_view)
    }

    fn calculate_error(&self, tile: &TileNode) -> f64 {
        self.errors.get(&tile.id()).copied().unwrap_or(0.0)
    }

    fn request_tile_contents(&mut self, tile: &TileNode) {
        self.events.push(RendererEvent::Requested(tile.id()));
    }

    fn set_tile_visible(&mut self, tile: &TileNode, active: bool) {
        self.events.push(RendererEvent::SetVisible(tile.id(), active));
    }

    fn set_tile_active(&mut self, tile: &TileNode, visible: bool) {
        self.events.push(RendererEvent::SetActive(tile.id(), visible));
    }
}

/// Cache double: fullness is a switch, marks are recorded in order.
#[derive(Default)]
pub(crate) struct TestCache {
    pub(crate) full: bool,
    pub(crate) marked: Vec<TileId>,
}

impl ContentCache for TestCache {
    fn mark_used(&mut self, id: TileId) {
        self.marked.push(id);
    }

    fn is_full(&self) -> bool {
        self.full
    }
}

/// Run a closure inside a fresh [`TraversalContext`], for exercising a
/// single pass in isolation.
pub(crate) fn run_pass_context<R: TileRenderer, C: ContentCache, T>(
    config: &TraversalConfig,
    renderer: &mut R,
    cache: &mut C,
    frame_count: u64,
    f: impl FnOnce(&mut TraversalContext<'_, R, C>) -> T,
) -> T {
    let mut stats = FrameStats::default();
    let mut ctx = TraversalContext {
        config,
        renderer,
        cache,
        stats: &mut stats,
        frame_count,
    };
    f(&mut ctx)
}

//! Per-frame traversal statistics.

/// Counters for one frame of traversal, zeroed by the driver before the
/// frustum pass and readable by the host once the frame completes.
///
/// Each counter equals the exact number of tiles whose corresponding
/// transient field is set for the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Tiles whose frustum test passed.
    pub in_frustum: u64,
    /// Tiles retained in cache this frame.
    pub used: u64,
    /// Tiles displayed this frame.
    pub visible: u64,
    /// Tiles live beyond drawing (shadows, collision) this frame.
    pub active: u64,
}

/// Board geometry and engine limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Side length of the square board.
    pub side: usize,
}

impl BoardConfig {
    // ===== compile-time constants used as type parameters =====
    /// Largest supported side length. Bounds per-run position storage.
    pub const MAX_SIDE: usize = 16;

    /// Smallest side on which a three-run can exist at all.
    pub const MIN_SIDE: usize = 3;

    /// Defensive cap on cascade rounds. A healthy board settles in a handful
    /// of rounds; hitting this indicates a corrupted grid or random source.
    pub const MAX_CASCADE_ROUNDS: u32 = 256;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SIDE: usize = 8;

    pub fn new() -> Self {
        Self {
            side: Self::DEFAULT_SIDE,
        }
    }

    pub fn with_side(side: usize) -> Self {
        Self { side }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Score given to every item when the request carries no tags.
///
/// Keeps "higher score is better" sorting and weighting meaningful even
/// when tag discrimination is off.
pub const NEUTRAL_SCORE: u32 = 1;

/// Sampling weight for items whose tag score is zero.
///
/// Zero-score items stay selectable, just heavily deprioritized.
pub const ZERO_SCORE_WEIGHT: f64 = 0.1;

/// Maximum number of preference tags accepted per request.
pub const MAX_REQUESTED_TAGS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Pool reduction
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum number of items kept per reduced pool.
pub const POOL_FLOOR: usize = 10;

/// Fraction of a category's items kept when above the floor.
pub const POOL_FRACTION: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// Combination generation
// ─────────────────────────────────────────────────────────────────────────────

/// Largest pool size still enumerated exhaustively.
pub const EXHAUSTIVE_POOL_MAX: usize = 15;

/// Largest combination count still enumerated exhaustively.
pub const EXHAUSTIVE_COMBO_MAX: u64 = 4096;

// ─────────────────────────────────────────────────────────────────────────────
// Assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Number of distinct sets a request aims for.
pub const DEFAULT_TARGET_SETS: usize = 3;

/// Attempt budget shared across one whole assembly loop.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

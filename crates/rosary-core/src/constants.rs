// Shared structure and timing constants used by both web and native frontends.

// Canonical rosary structure
pub const CANONICAL_DECADES: i32 = 5;
pub const CANONICAL_HAIL_MARYS_PER_DECADE: i32 = 10;
pub const CANONICAL_OPENING_HAIL_MARYS: i32 = 3;
pub const MYSTERIES_PER_SET: usize = 5;
pub const MAX_PLAN_STEPS: usize = 100_000; // larger structures are rejected before allocation

// Fallback step durations when the content store has none
pub const DEFAULT_PRAYER_DURATION_MS: u64 = 5_000;
pub const DEFAULT_MYSTERY_DURATION_MS: u64 = 15_000;

// Meditation bonus added to mystery announcements
pub const MEDITATION_NONE_MS: u64 = 0;
pub const MEDITATION_SHORT_MS: u64 = 5_000;
pub const MEDITATION_MEDIUM_MS: u64 = 10_000;
pub const MEDITATION_LONG_MS: u64 = 15_000;

// Bounds on auto-advance timing
pub const MIN_TIME_SCALE: f32 = 0.01;
pub const MAX_STEP_DURATION_MS: u64 = 24 * 60 * 60 * 1_000;

// Presentation timing shared by frontends
pub const CONTENT_FADE_MS: u64 = 300; // fade-out before swapping step text
pub const NOTIFICATION_HIDE_MS: u64 = 4_000;

// Visualization bead collection: stem beads come first, the loop starts after them
pub const CRUCIFIX_BEAD: usize = 0;
pub const PENDANT_OUR_FATHER_BEAD: usize = 1;
pub const PENDANT_FIRST_HAIL_MARY_BEAD: usize = 2;
pub const PENDANT_GLORY_BE_BEAD: usize = 5;
pub const FIRST_DECADE_BEAD: usize = 6;

// Sentinel used by renderers that address "no bead" with a signed index
pub const OVERVIEW_SENTINEL: i32 = -1;

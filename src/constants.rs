/// Scene, animation and chime tuning constants.
///
/// These keep magic numbers out of the frame loop and renderer; colors are
/// linear RGBA.
// Background clear color (#1A150F)
pub const BACKGROUND_RGBA: [f32; 4] = [0.102, 0.082, 0.059, 1.0];

// Bead materials
pub const HAIL_MARY_BEAD_RGBA: [f32; 4] = [0.545, 0.424, 0.259, 1.0]; // #8B6C42
pub const OUR_FATHER_BEAD_RGBA: [f32; 4] = [0.824, 0.706, 0.549, 1.0]; // #D2B48C
pub const CRUCIFIX_RGBA: [f32; 4] = [0.804, 0.498, 0.196, 1.0]; // #CD7F32
pub const HIGHLIGHT_RGBA: [f32; 4] = [1.0, 0.843, 0.0, 1.0]; // #FFD700
pub const DUST_RGBA: [f32; 4] = [1.0, 0.85, 0.6, 0.18];

// Bead sizes (world units, quad half-extent)
pub const SMALL_BEAD_SCALE: f32 = 0.3;
pub const LARGE_BEAD_SCALE: f32 = 0.5;
pub const CRUCIFIX_SCALE: f32 = 0.9;
pub const HIGHLIGHT_SCALE_BOOST: f32 = 0.35;

// Highlight smoothing time constants (seconds)
pub const HIGHLIGHT_RISE_TAU_SEC: f32 = 0.12;
pub const HIGHLIGHT_FALL_TAU_SEC: f32 = 0.40;

// Camera
pub const CAMERA_FOV_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_OVERVIEW_DISTANCE: f32 = 34.0;
pub const CAMERA_FOCUS_DISTANCE: f32 = 9.0;
pub const CAMERA_TAU_SEC: f32 = 0.8;
pub const CAMERA_SWAY_AMPLITUDE: f32 = 0.3;
pub const CAMERA_SWAY_PERIOD_SEC: f32 = 10.0;

// Background dust
pub const DUST_PARTICLE_COUNT: usize = 30;
pub const DUST_SCALE: f32 = 0.08;
pub const DUST_FIELD_HALF_EXTENT: f32 = 18.0;
pub const DUST_DRIFT_PER_SEC: f32 = 0.25;

// Renderer capacity: beads plus dust
pub const MAX_INSTANCES: usize = 256;

// Chimes
pub const CHIME_MASTER_GAIN: f32 = 0.18;
pub const CHIME_STEP_HZ: f32 = 528.0;
pub const CHIME_MYSTERY_HZ: f32 = 396.0;
pub const CHIME_COMPLETE_HZ: [f32; 3] = [396.0, 528.0, 639.0];
pub const CHIME_DURATION_SEC: f64 = 1.8;
pub const CHIME_LOWPASS_HZ: f32 = 2400.0;

// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

fn in_unit_range(rgba: [f32; 4]) -> bool {
    rgba.iter().all(|c| (0.0..=1.0).contains(c))
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(HIGHLIGHT_RISE_TAU_SEC > 0.0);
    assert!(HIGHLIGHT_FALL_TAU_SEC > 0.0);
    assert!(CAMERA_TAU_SEC > 0.0);
    assert!(CAMERA_SWAY_PERIOD_SEC > 0.0);
    assert!(CAMERA_FOV_RAD > 0.0 && CAMERA_FOV_RAD < std::f32::consts::PI);
    assert!(CHIME_MASTER_GAIN > 0.0 && CHIME_MASTER_GAIN <= 1.0);
    assert!(CHIME_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn highlight_rises_faster_than_it_fades() {
    assert!(HIGHLIGHT_RISE_TAU_SEC < HIGHLIGHT_FALL_TAU_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn focus_is_closer_than_overview() {
    assert!(CAMERA_FOCUS_DISTANCE < CAMERA_OVERVIEW_DISTANCE);
    assert!(CAMERA_SWAY_AMPLITUDE < CAMERA_FOCUS_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bead_sizes_are_ordered() {
    assert!(DUST_SCALE < SMALL_BEAD_SCALE);
    assert!(SMALL_BEAD_SCALE < LARGE_BEAD_SCALE);
    assert!(LARGE_BEAD_SCALE < CRUCIFIX_SCALE);
}

#[test]
fn colors_are_normalized() {
    for rgba in [
        BACKGROUND_RGBA,
        HAIL_MARY_BEAD_RGBA,
        OUR_FATHER_BEAD_RGBA,
        CRUCIFIX_RGBA,
        HIGHLIGHT_RGBA,
        DUST_RGBA,
    ] {
        assert!(in_unit_range(rgba), "{rgba:?}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canonical_rosary_and_dust_fit_in_instance_buffer() {
    // 61 beads in the canonical layout
    assert!(61 + DUST_PARTICLE_COUNT <= MAX_INSTANCES);
}

#[test]
fn chime_frequencies_are_audible() {
    for hz in CHIME_COMPLETE_HZ
        .into_iter()
        .chain([CHIME_STEP_HZ, CHIME_MYSTERY_HZ])
    {
        assert!(hz > 20.0 && hz < CHIME_LOWPASS_HZ, "{hz}");
    }
}

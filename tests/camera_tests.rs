// Host-side tests for the camera rig.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::CameraRig;
use constants::*;
use glam::Vec3;

fn settle(rig: &mut CameraRig) {
    for _ in 0..600 {
        rig.update(1.0 / 60.0);
    }
}

#[test]
fn starts_settled_on_the_overview() {
    let center = Vec3::new(0.0, -4.0, 0.0);
    let rig = CameraRig::new(center);
    assert_eq!(rig.target, center);
    assert_eq!(rig.eye, center + Vec3::Z * CAMERA_OVERVIEW_DISTANCE);
    assert_eq!(rig.goal(), (rig.eye, rig.target));
}

#[test]
fn eases_towards_a_bead_without_jumping() {
    let mut rig = CameraRig::new(Vec3::ZERO);
    let bead = Vec3::new(10.0, 0.0, 0.0);
    rig.look_at_bead(bead);
    rig.update(1.0 / 60.0);
    assert!(rig.target.x > 0.0 && rig.target.x < 1.0);
    settle(&mut rig);
    assert!((rig.target - bead).length() < 1e-3);
    assert!((rig.eye - (bead + Vec3::Z * CAMERA_FOCUS_DISTANCE)).length() < 1e-3);
}

#[test]
fn show_all_returns_to_overview_distance() {
    let mut rig = CameraRig::new(Vec3::ZERO);
    rig.look_at_bead(Vec3::new(0.0, 10.0, 0.0));
    settle(&mut rig);
    rig.show_all(Vec3::ZERO);
    settle(&mut rig);
    assert!((rig.eye.z - CAMERA_OVERVIEW_DISTANCE).abs() < 1e-3);
    assert!(rig.target.length() < 1e-3);
}

#[test]
fn non_positive_dt_does_not_move() {
    let mut rig = CameraRig::new(Vec3::ZERO);
    rig.look_at_bead(Vec3::X);
    let before = rig;
    rig.update(0.0);
    rig.update(-1.0);
    assert_eq!(rig.eye, before.eye);
    assert_eq!(rig.target, before.target);
}

#[test]
fn billboard_axes_are_orthonormal() {
    let mut rig = CameraRig::new(Vec3::ZERO);
    rig.update(3.7);
    let (right, up) = rig.billboard_axes();
    assert!((right.length() - 1.0).abs() < 1e-4);
    assert!((up.length() - 1.0).abs() < 1e-4);
    assert!(right.dot(up).abs() < 1e-4);
    assert!(up.y > 0.9);
}

#[test]
fn view_proj_is_finite_for_degenerate_aspect() {
    let rig = CameraRig::new(Vec3::ZERO);
    for aspect in [0.0, 1.0, 16.0 / 9.0] {
        let m = rig.view_proj(aspect);
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Look-at camera that eases towards a goal with exponential smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    goal_eye: Vec3,
    goal_target: Vec3,
    elapsed: f32,
}

impl CameraRig {
    /// Starts settled on the overview of `center`.
    pub fn new(center: Vec3) -> Self {
        let eye = center + Vec3::Z * CAMERA_OVERVIEW_DISTANCE;
        Self {
            eye,
            target: center,
            goal_eye: eye,
            goal_target: center,
            elapsed: 0.0,
        }
    }

    pub fn look_at_bead(&mut self, position: Vec3) {
        self.goal_target = position;
        self.goal_eye = position + Vec3::Z * CAMERA_FOCUS_DISTANCE;
    }

    pub fn show_all(&mut self, center: Vec3) {
        self.goal_target = center;
        self.goal_eye = center + Vec3::Z * CAMERA_OVERVIEW_DISTANCE;
    }

    pub fn goal(&self) -> (Vec3, Vec3) {
        (self.goal_eye, self.goal_target)
    }

    pub fn update(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        let alpha = 1.0 - (-dt / CAMERA_TAU_SEC).exp();
        self.eye += (self.goal_eye - self.eye) * alpha;
        self.target += (self.goal_target - self.target) * alpha;
    }

    /// Eye position including the slow idle sway.
    pub fn swayed_eye(&self) -> Vec3 {
        let phase = std::f32::consts::TAU * self.elapsed / CAMERA_SWAY_PERIOD_SEC;
        self.eye + Vec3::new(phase.sin(), (phase * 0.5).cos(), 0.0) * CAMERA_SWAY_AMPLITUDE
    }

    /// World-space right and up vectors for camera-facing quads.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.swayed_eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            return (Vec3::X, Vec3::Y);
        }
        (right, right.cross(forward))
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(CAMERA_FOV_RAD, aspect.max(1e-3), 0.1, 200.0);
        let view = Mat4::look_at_rh(self.swayed_eye(), self.target, Vec3::Y);
        proj * view
    }
}

// Bead scene state: which bead is lit, where the camera is heading, and the dust.
//
// The session talks to the scene only through [`FocusSink`]; the frame loop calls
// [`BeadScene::update`] and hands [`BeadScene::instances`] to the renderer.

use crate::camera::CameraRig;
use crate::constants::*;
use crate::geometry::{focus_point, layout_beads, overview_center, BeadKind, BeadPlacement};
use glam::Vec3;
use rand::Rng;
use rosary_core::{BeadLayout, FocusSink, FocusTarget, RosaryStructure};

/// Per-instance vertex data (slot 1 of the bead pipeline).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BeadInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub glow: f32,
}

#[derive(Clone, Copy, Debug)]
struct DustMote {
    pos: Vec3,
    vel: Vec3,
}

pub struct BeadScene {
    beads: Vec<BeadPlacement>,
    /// Smoothed 0..1 highlight per bead.
    glow: Vec<f32>,
    focus: FocusTarget,
    center: Vec3,
    pub camera: CameraRig,
    dust: Vec<DustMote>,
}

impl BeadScene {
    pub fn new(structure: &RosaryStructure, layout: &BeadLayout) -> rosary_core::Result<Self> {
        let beads = layout_beads(structure, layout)?;
        let center = overview_center(&beads);
        let mut rng = rand::thread_rng();
        let dust = (0..DUST_PARTICLE_COUNT)
            .map(|_| DustMote {
                pos: center
                    + Vec3::new(
                        rng.gen_range(-DUST_FIELD_HALF_EXTENT..DUST_FIELD_HALF_EXTENT),
                        rng.gen_range(-DUST_FIELD_HALF_EXTENT..DUST_FIELD_HALF_EXTENT),
                        rng.gen_range(-6.0..2.0),
                    ),
                vel: Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(0.2..1.0),
                    0.0,
                ) * DUST_DRIFT_PER_SEC,
            })
            .collect();
        log::info!("[scene] {} beads, {} dust motes", beads.len(), DUST_PARTICLE_COUNT);
        Ok(Self {
            glow: vec![0.0; beads.len()],
            beads,
            focus: FocusTarget::Overview,
            center,
            camera: CameraRig::new(center),
            dust,
        })
    }

    pub fn bead_count(&self) -> usize {
        self.beads.len()
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn glow(&self, bead: usize) -> f32 {
        self.glow.get(bead).copied().unwrap_or(0.0)
    }

    pub fn update(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        let alpha_up = 1.0 - (-dt / HIGHLIGHT_RISE_TAU_SEC).exp();
        let alpha_down = 1.0 - (-dt / HIGHLIGHT_FALL_TAU_SEC).exp();
        let lit = self.focus.bead();
        for (i, g) in self.glow.iter_mut().enumerate() {
            let target = if lit == Some(i) { 1.0 } else { 0.0 };
            let alpha = if target > *g { alpha_up } else { alpha_down };
            *g += (target - *g) * alpha;
        }
        self.camera.update(dt);

        let lo = self.center - Vec3::splat(DUST_FIELD_HALF_EXTENT);
        let hi = self.center + Vec3::splat(DUST_FIELD_HALF_EXTENT);
        for m in &mut self.dust {
            m.pos += m.vel * dt;
            // wrap vertically, bounce sideways
            if m.pos.y > hi.y {
                m.pos.y = lo.y;
            }
            if m.pos.x < lo.x || m.pos.x > hi.x {
                m.vel.x = -m.vel.x;
                m.pos.x = m.pos.x.clamp(lo.x, hi.x);
            }
        }
    }

    pub fn instances(&self) -> Vec<BeadInstance> {
        let mut out = Vec::with_capacity(self.beads.len() + self.dust.len());
        for (bead, &glow) in self.beads.iter().zip(&self.glow) {
            let (base_scale, base_color) = match bead.kind {
                BeadKind::Spacer => continue,
                BeadKind::Crucifix => (CRUCIFIX_SCALE, CRUCIFIX_RGBA),
                BeadKind::Large => (LARGE_BEAD_SCALE, OUR_FATHER_BEAD_RGBA),
                BeadKind::Small => (SMALL_BEAD_SCALE, HAIL_MARY_BEAD_RGBA),
            };
            let mut color = base_color;
            for c in 0..3 {
                color[c] += (HIGHLIGHT_RGBA[c] - color[c]) * glow;
            }
            out.push(BeadInstance {
                pos: bead.position.to_array(),
                scale: base_scale * (1.0 + HIGHLIGHT_SCALE_BOOST * glow),
                color,
                glow,
            });
        }
        out.extend(self.dust.iter().map(|m| BeadInstance {
            pos: m.pos.to_array(),
            scale: DUST_SCALE,
            color: DUST_RGBA,
            glow: 0.0,
        }));
        out.truncate(MAX_INSTANCES);
        out
    }
}

impl FocusSink for BeadScene {
    fn set_focus(&mut self, target: FocusTarget) {
        let target = target.within(self.beads.len());
        self.focus = target;
        match focus_point(&self.beads, target) {
            Some(p) => self.camera.look_at_bead(p),
            None => self.camera.show_all(self.center),
        }
    }
}

// Where each bead sits in world space.
//
// The loop lies on a circle in the XY plane with the stem hanging below it. Bead indices follow
// the `BeadLayout` the focus map was built with, so a `FocusTarget::Bead(i)` always names
// `beads[i]`.

use glam::Vec3;
use rosary_core::{BeadLayout, FocusTarget, RosaryStructure};

pub const LOOP_RADIUS: f32 = 10.0;
/// Distance between the loop's lowest point and the top stem bead.
pub const STEM_GAP: f32 = 2.0;
pub const STEM_SPACING: f32 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeadKind {
    Crucifix,
    Large,
    Small,
    /// Loop slot kept free between decades; not drawn.
    Spacer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeadPlacement {
    pub position: Vec3,
    pub kind: BeadKind,
}

pub fn layout_beads(
    structure: &RosaryStructure,
    layout: &BeadLayout,
) -> rosary_core::Result<Vec<BeadPlacement>> {
    let (decades, per_decade, opening) = structure.counts()?;
    let count = layout.bead_count(structure)?;
    let mut beads = vec![
        BeadPlacement {
            position: Vec3::ZERO,
            kind: BeadKind::Spacer,
        };
        count
    ];

    let stride = layout.decade_stride(per_decade);
    let on_loop = (decades * stride).saturating_sub(layout.beads_between_decades);
    // Spread over the full stride count so the last gap closes the circle.
    let slots = (decades * stride).max(1) as f32;
    for k in 0..on_loop {
        let angle = -std::f32::consts::FRAC_PI_2
            + std::f32::consts::TAU * (k as f32 + 0.5) / slots;
        let kind = match k % stride {
            0 => BeadKind::Large,
            r if r <= per_decade => BeadKind::Small,
            _ => BeadKind::Spacer,
        };
        place(
            &mut beads,
            layout.first_decade_bead + k,
            Vec3::new(angle.cos() * LOOP_RADIUS, angle.sin() * LOOP_RADIUS, 0.0),
            kind,
        );
    }

    // Stem, praying upward from the crucifix towards the loop.
    let stem_y = |slot: usize| -LOOP_RADIUS - STEM_GAP - slot as f32 * STEM_SPACING;
    let glory_be_slot = 0;
    let hail_mary_slot = |i: usize| opening - i;
    let our_father_slot = opening + 1;
    let crucifix_slot = opening + 2;

    place(
        &mut beads,
        layout.pendant_glory_be,
        Vec3::new(0.0, stem_y(glory_be_slot), 0.0),
        BeadKind::Large,
    );
    for i in 0..opening {
        place(
            &mut beads,
            layout.pendant_first_hail_mary + i,
            Vec3::new(0.0, stem_y(hail_mary_slot(i)), 0.0),
            BeadKind::Small,
        );
    }
    place(
        &mut beads,
        layout.pendant_our_father,
        Vec3::new(0.0, stem_y(our_father_slot), 0.0),
        BeadKind::Large,
    );
    place(
        &mut beads,
        layout.crucifix,
        Vec3::new(0.0, stem_y(crucifix_slot) - STEM_SPACING * 0.5, 0.0),
        BeadKind::Crucifix,
    );
    Ok(beads)
}

fn place(beads: &mut [BeadPlacement], index: usize, position: Vec3, kind: BeadKind) {
    if let Some(slot) = beads.get_mut(index) {
        *slot = BeadPlacement { position, kind };
    } else {
        log::warn!("[geometry] bead {index} outside collection of {}", beads.len());
    }
}

/// Midpoint of the drawn beads, used as the overview camera target.
pub fn overview_center(beads: &[BeadPlacement]) -> Vec3 {
    let mut drawn = beads.iter().filter(|b| b.kind != BeadKind::Spacer);
    let Some(first) = drawn.next() else {
        return Vec3::ZERO;
    };
    let (min, max) = drawn.fold((first.position, first.position), |(lo, hi), b| {
        (lo.min(b.position), hi.max(b.position))
    });
    (min + max) * 0.5
}

/// World-space point the camera should look at for `target`.
pub fn focus_point(beads: &[BeadPlacement], target: FocusTarget) -> Option<Vec3> {
    match target {
        FocusTarget::Bead(i) => beads.get(i).map(|b| b.position),
        FocusTarget::Overview => None,
    }
}

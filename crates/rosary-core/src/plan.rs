//! Sequence and focus-map construction.
//!
//! Both outputs come from a single walk over the structure: every step is pushed together
//! with its focus target, so the two can never be built from different assumptions.

use crate::constants::OVERVIEW_SENTINEL;
use crate::error::Result;
use crate::mystery::MysterySet;
use crate::prayer::{PrayerId, PrayerStep};
use crate::structure::{BeadLayout, RosaryStructure};
use std::sync::Arc;

/// What the visualization should look at for a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Bead(usize),
    Overview,
}

impl FocusTarget {
    pub fn bead(self) -> Option<usize> {
        match self {
            FocusTarget::Bead(i) => Some(i),
            FocusTarget::Overview => None,
        }
    }

    /// Signed form used by renderers that address beads by index, `-1` for overview.
    pub fn as_signed(self) -> i32 {
        match self {
            FocusTarget::Bead(i) => i32::try_from(i).unwrap_or(OVERVIEW_SENTINEL),
            FocusTarget::Overview => OVERVIEW_SENTINEL,
        }
    }

    /// Falls back to `Overview` when the bead does not exist in a collection of `bead_count`.
    pub fn within(self, bead_count: usize) -> FocusTarget {
        match self {
            FocusTarget::Bead(i) if i < bead_count => self,
            FocusTarget::Bead(i) => {
                log::warn!("[focus] bead {i} outside collection of {bead_count}; showing overview");
                FocusTarget::Overview
            }
            FocusTarget::Overview => FocusTarget::Overview,
        }
    }
}

/// Sink for focus changes, implemented by visualizations.
pub trait FocusSink {
    fn set_focus(&mut self, target: FocusTarget);
}

/// Immutable ordered list of steps. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence(Arc<[PrayerStep]>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PrayerStep> {
        self.0.get(index)
    }

    pub fn steps(&self) -> &[PrayerStep] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrayerStep> {
        self.0.iter()
    }
}

/// Focus targets parallel to a [`Sequence`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusMap(Arc<[FocusTarget]>);

impl FocusMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<FocusTarget> {
        self.0.get(index).copied()
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.0
    }
}

/// A sequence and its focus map, always built and replaced together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosaryPlan {
    sequence: Sequence,
    focus_map: FocusMap,
    mystery_set: MysterySet,
}

impl RosaryPlan {
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn focus_map(&self) -> &FocusMap {
        &self.focus_map
    }

    pub fn mystery_set(&self) -> MysterySet {
        self.mystery_set
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<(PrayerStep, FocusTarget)> {
        Some((*self.sequence.get(index)?, self.focus_map.get(index)?))
    }
}

struct PlanWriter {
    steps: Vec<PrayerStep>,
    focus: Vec<FocusTarget>,
}

impl PlanWriter {
    fn with_capacity(n: usize) -> Self {
        Self {
            steps: Vec::with_capacity(n),
            focus: Vec::with_capacity(n),
        }
    }

    #[inline]
    fn push(&mut self, step: PrayerStep, focus: FocusTarget) {
        self.steps.push(step);
        self.focus.push(focus);
    }
}

/// Expands `structure` into a plan for `set`. Fails without side effects on a malformed
/// structure, including one longer than [`crate::constants::MAX_PLAN_STEPS`].
pub fn build_plan(
    set: MysterySet,
    structure: &RosaryStructure,
    layout: &BeadLayout,
) -> Result<RosaryPlan> {
    let (decades, per_decade, opening) = structure.counts()?;
    let mut w = PlanWriter::with_capacity(structure.step_count()?);

    // Opening block
    let open = Some(0);
    w.push(PrayerStep::prayer(PrayerId::SignOfCross, open), FocusTarget::Overview);
    w.push(
        PrayerStep::prayer(PrayerId::ApostlesCreed, open),
        FocusTarget::Bead(layout.crucifix),
    );
    w.push(
        PrayerStep::prayer(PrayerId::OurFather, open),
        FocusTarget::Bead(layout.pendant_our_father),
    );
    for i in 0..opening {
        w.push(
            PrayerStep::prayer(PrayerId::HailMary, open),
            FocusTarget::Bead(layout.pendant_first_hail_mary.saturating_add(i)),
        );
    }
    w.push(
        PrayerStep::prayer(PrayerId::GloryBe, open),
        FocusTarget::Bead(layout.pendant_glory_be),
    );

    // Decades; the bead cursor walks the loop and pins at usize::MAX for absurd layouts
    let mut bead = layout.first_decade_bead;
    for d in 0..decades {
        let decade = Some(d as u32 + 1);
        let large = bead;
        w.push(
            PrayerStep::announcement(set, d, d as u32 + 1),
            FocusTarget::Bead(large),
        );
        w.push(PrayerStep::prayer(PrayerId::OurFather, decade), FocusTarget::Bead(large));
        // Glory Be and Fatima stay on the large bead of a decade without Hail Marys
        let mut last_hail_mary = large;
        for _ in 0..per_decade {
            last_hail_mary = last_hail_mary.saturating_add(1);
            w.push(
                PrayerStep::prayer(PrayerId::HailMary, decade),
                FocusTarget::Bead(last_hail_mary),
            );
        }
        w.push(
            PrayerStep::prayer(PrayerId::GloryBe, decade),
            FocusTarget::Bead(last_hail_mary),
        );
        w.push(
            PrayerStep::prayer(PrayerId::FatimaPrayer, decade),
            FocusTarget::Bead(last_hail_mary),
        );
        bead = last_hail_mary
            .saturating_add(1)
            .saturating_add(layout.beads_between_decades);
    }

    // Closing block
    for prayer in [
        PrayerId::HailHolyQueen,
        PrayerId::FinalPrayer,
        PrayerId::SignOfCross,
    ] {
        w.push(PrayerStep::prayer(prayer, None), FocusTarget::Overview);
    }

    debug_assert_eq!(w.steps.len(), w.focus.len());
    log::debug!(
        "[plan] built {} steps for {} ({} decades x {} Hail Marys)",
        w.steps.len(),
        set,
        decades,
        per_decade
    );
    Ok(RosaryPlan {
        sequence: Sequence(w.steps.into()),
        focus_map: FocusMap(w.focus.into()),
        mystery_set: set,
    })
}

/// Steps only; see [`build_plan`].
pub fn build_sequence(set: MysterySet, structure: &RosaryStructure) -> Result<Sequence> {
    Ok(build_plan(set, structure, &BeadLayout::default())?.sequence)
}

/// Focus targets only; index-aligned with [`build_sequence`] for the same structure.
pub fn build_focus_map(structure: &RosaryStructure, layout: &BeadLayout) -> Result<FocusMap> {
    Ok(build_plan(MysterySet::default(), structure, layout)?.focus_map)
}

//! Structure and bead-layout descriptors consumed by the plan builder.

use crate::constants::*;
use crate::error::{Result, RosaryError};
use serde::{Deserialize, Serialize};

/// Shape of the prayer sequence. Signed so that malformed configuration can be reported
/// instead of silently wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosaryStructure {
    pub decades: i32,
    pub hail_marys_per_decade: i32,
    pub opening_hail_marys: i32,
}

impl Default for RosaryStructure {
    fn default() -> Self {
        Self::canonical()
    }
}

impl RosaryStructure {
    pub const fn canonical() -> Self {
        Self {
            decades: CANONICAL_DECADES,
            hail_marys_per_decade: CANONICAL_HAIL_MARYS_PER_DECADE,
            opening_hail_marys: CANONICAL_OPENING_HAIL_MARYS,
        }
    }

    pub const fn new(decades: i32, hail_marys_per_decade: i32, opening_hail_marys: i32) -> Self {
        Self {
            decades,
            hail_marys_per_decade,
            opening_hail_marys,
        }
    }

    /// Checked counts as `(decades, hail_marys_per_decade, opening_hail_marys)`.
    pub fn counts(&self) -> Result<(usize, usize, usize)> {
        Ok((
            non_negative("decades", self.decades)?,
            non_negative("hail_marys_per_decade", self.hail_marys_per_decade)?,
            non_negative("opening_hail_marys", self.opening_hail_marys)?,
        ))
    }

    /// Number of steps a sequence built from this structure has, at most [`MAX_PLAN_STEPS`].
    pub fn step_count(&self) -> Result<usize> {
        let (decades, per_decade, opening) = self.counts()?;
        // sign of cross, creed, Our Father, opening Hail Marys, Glory Be
        let opening_block = opening.checked_add(4);
        // announcement, Our Father, Hail Marys, Glory Be, Fatima prayer
        let decade_block = per_decade.checked_add(4);
        let steps = decade_block
            .and_then(|block| decades.checked_mul(block))
            .zip(opening_block)
            .and_then(|(loop_steps, opening_steps)| loop_steps.checked_add(opening_steps))
            .and_then(|n| n.checked_add(3))
            .filter(|&n| n <= MAX_PLAN_STEPS);
        steps.ok_or_else(|| self.too_large())
    }

    /// Blames the field that dominates the step count.
    fn too_large(&self) -> RosaryError {
        let widest = self.decades.max(self.hail_marys_per_decade);
        let (field, value) = if self.opening_hail_marys > widest {
            ("opening_hail_marys", self.opening_hail_marys)
        } else if self.decades >= self.hail_marys_per_decade {
            ("decades", self.decades)
        } else {
            ("hail_marys_per_decade", self.hail_marys_per_decade)
        };
        RosaryError::InvalidStructure {
            field,
            value,
            reason: "expands past the step limit",
        }
    }
}

fn non_negative(field: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| RosaryError::InvalidStructure {
        field,
        value,
        reason: "must be non-negative",
    })
}

/// Where the visualization keeps the beads the focus map points at.
///
/// These offsets belong to the presentation layer's bead collection; the builder only copies
/// them into focus targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeadLayout {
    pub crucifix: usize,
    pub pendant_our_father: usize,
    /// First of the consecutive opening Hail Mary beads.
    pub pendant_first_hail_mary: usize,
    pub pendant_glory_be: usize,
    /// Large bead of the first decade; the loop continues from here.
    pub first_decade_bead: usize,
    /// Beads skipped between the last Hail Mary of a decade and the next decade's large bead.
    pub beads_between_decades: usize,
}

impl Default for BeadLayout {
    fn default() -> Self {
        Self {
            crucifix: CRUCIFIX_BEAD,
            pendant_our_father: PENDANT_OUR_FATHER_BEAD,
            pendant_first_hail_mary: PENDANT_FIRST_HAIL_MARY_BEAD,
            pendant_glory_be: PENDANT_GLORY_BE_BEAD,
            first_decade_bead: FIRST_DECADE_BEAD,
            beads_between_decades: 0,
        }
    }
}

impl BeadLayout {
    /// Stem layout packed for `opening_hail_marys` pendant beads, loop right after it.
    pub fn packed_for(structure: &RosaryStructure) -> Result<Self> {
        let (_, _, opening) = structure.counts()?;
        let pendant_first_hail_mary = PENDANT_OUR_FATHER_BEAD + 1;
        let pendant_glory_be = pendant_first_hail_mary + opening;
        Ok(Self {
            crucifix: CRUCIFIX_BEAD,
            pendant_our_father: PENDANT_OUR_FATHER_BEAD,
            pendant_first_hail_mary,
            pendant_glory_be,
            first_decade_bead: pendant_glory_be + 1,
            beads_between_decades: 0,
        })
    }

    /// Beads one decade occupies on the loop: the large bead plus its Hail Marys.
    pub fn decade_stride(&self, hail_marys_per_decade: usize) -> usize {
        hail_marys_per_decade
            .saturating_add(1)
            .saturating_add(self.beads_between_decades)
    }

    /// Size of the bead collection a visualization needs for `structure`.
    ///
    /// Fails like [`RosaryStructure::step_count`], and also when the offsets put beads past
    /// `usize::MAX`.
    pub fn bead_count(&self, structure: &RosaryStructure) -> Result<usize> {
        structure.step_count()?;
        let (decades, per_decade, opening) = structure.counts()?;
        let overflow = || RosaryError::InvalidStructure {
            field: "decades",
            value: structure.decades,
            reason: "does not fit the bead layout",
        };
        let stem_end = [
            self.crucifix.checked_add(1),
            self.pendant_our_father.checked_add(1),
            self.pendant_first_hail_mary.checked_add(opening),
            self.pendant_glory_be.checked_add(1),
        ]
        .into_iter()
        .try_fold(0, |end, bead| bead.map(|b| end.max(b)))
        .ok_or_else(overflow)?;
        let loop_end = if decades == 0 {
            Some(self.first_decade_bead)
        } else {
            // the last decade is not followed by spacer beads
            decades
                .checked_mul(self.decade_stride(per_decade))
                .and_then(|n| n.checked_add(self.first_decade_bead))
                .map(|n| n - self.beads_between_decades)
        }
        .ok_or_else(overflow)?;
        Ok(stem_end.max(loop_end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_step_count() {
        assert_eq!(RosaryStructure::canonical().step_count().unwrap(), 80);
    }

    #[test]
    fn negative_fields_are_rejected() {
        let err = RosaryStructure::new(-1, 10, 3).counts().unwrap_err();
        assert!(matches!(
            err,
            RosaryError::InvalidStructure {
                field: "decades",
                value: -1,
                ..
            }
        ));
        assert!(RosaryStructure::new(5, -10, 3).step_count().is_err());
        assert!(RosaryStructure::new(5, 10, -3).step_count().is_err());
    }

    #[test]
    fn oversized_structures_are_rejected_not_allocated() {
        let err = RosaryStructure::new(i32::MAX, i32::MAX, 0)
            .step_count()
            .unwrap_err();
        assert!(matches!(err, RosaryError::InvalidStructure { field: "decades", .. }));
        let err = RosaryStructure::new(0, 0, i32::MAX).step_count().unwrap_err();
        assert!(matches!(
            err,
            RosaryError::InvalidStructure {
                field: "opening_hail_marys",
                ..
            }
        ));
        // 7 fixed steps + 9_999 decades of 10
        let at_limit = RosaryStructure::new(9_999, 6, 0).step_count().unwrap();
        assert_eq!(at_limit, 99_997);
        assert!(RosaryStructure::new(10_000, 6, 0).step_count().is_err());
    }

    #[test]
    fn bead_count_rejects_layouts_past_usize() {
        let layout = BeadLayout {
            first_decade_bead: usize::MAX - 5,
            ..BeadLayout::default()
        };
        assert!(layout.bead_count(&RosaryStructure::canonical()).is_err());
        let layout = BeadLayout {
            beads_between_decades: usize::MAX,
            ..BeadLayout::default()
        };
        assert!(layout.bead_count(&RosaryStructure::canonical()).is_err());
    }

    #[test]
    fn default_layout_matches_packed_canonical() {
        let packed = BeadLayout::packed_for(&RosaryStructure::canonical()).unwrap();
        assert_eq!(packed, BeadLayout::default());
    }

    #[test]
    fn canonical_bead_count() {
        let layout = BeadLayout::default();
        // 6 stem beads + 5 decades of 11
        assert_eq!(
            layout.bead_count(&RosaryStructure::canonical()).unwrap(),
            61
        );
    }
}

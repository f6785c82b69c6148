//! Text rendering of session events for the terminal.

use rosary_core::{ContentResolver, FocusSink, FocusTarget, StepContent, StepView};

/// Stands in for the bead scene: remembers where the camera would be looking.
#[derive(Debug)]
pub struct ConsoleFocus {
    bead_count: usize,
    current: FocusTarget,
}

impl ConsoleFocus {
    pub fn new(bead_count: usize) -> Self {
        Self {
            bead_count,
            current: FocusTarget::Overview,
        }
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    pub fn describe(&self) -> String {
        match self.current {
            FocusTarget::Bead(i) => format!("bead {}/{}", i + 1, self.bead_count),
            FocusTarget::Overview => "whole rosary".to_string(),
        }
    }
}

impl FocusSink for ConsoleFocus {
    fn set_focus(&mut self, target: FocusTarget) {
        self.current = target.within(self.bead_count);
    }
}

/// One block of output per step: header line, optional text, then the body.
pub fn step_block(view: &StepView, focus: &ConsoleFocus, content: &impl ContentResolver) -> String {
    let progress = view.progress();
    let mut out = format!(
        "[{:>3.0}%] {} | {} | {} ({})",
        progress.fraction() * 100.0,
        progress.label(),
        view.step.section_label(),
        view.step.indicator_name(),
        focus.describe(),
    );
    match content.resolve(&view.step) {
        Some(StepContent::Prayer(p)) => {
            out.push_str(&format!("\n  {}\n  {}", p.title, p.body));
        }
        Some(StepContent::Mystery(m)) => {
            out.push_str(&format!(
                "\n  {}\n  {}\n  Fruit: {}",
                m.title, m.description, m.fruits
            ));
            if let Some(s) = &m.scripture {
                out.push_str(&format!("\n  {s}"));
            }
        }
        None => log::warn!("[console] no text for step {}", view.index),
    }
    if !view.is_playing {
        out.push_str("\n  (paused)");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosary_core::{ContentStore, MysterySet, PrayerId, PrayerStep};

    fn view(step: PrayerStep, focus: FocusTarget, is_playing: bool) -> StepView {
        StepView {
            index: 0,
            total: 80,
            step,
            focus,
            is_playing,
            auto_advance: true,
        }
    }

    #[test]
    fn out_of_range_focus_falls_back_to_overview() {
        let mut focus = ConsoleFocus::new(61);
        focus.set_focus(FocusTarget::Bead(60));
        assert_eq!(focus.current(), FocusTarget::Bead(60));
        focus.set_focus(FocusTarget::Bead(61));
        assert_eq!(focus.current(), FocusTarget::Overview);
        assert_eq!(focus.describe(), "whole rosary");
    }

    #[test]
    fn prayer_block_has_header_and_text() {
        let content = ContentStore::english().unwrap();
        let focus = ConsoleFocus::new(61);
        let v = view(
            PrayerStep::prayer(PrayerId::SignOfCross, Some(0)),
            FocusTarget::Overview,
            true,
        );
        let block = step_block(&v, &focus, &content);
        let first = block.lines().next().unwrap();
        assert!(first.contains("Prayer 1 of 80"));
        assert!(first.contains("Opening Prayers"));
        assert!(block.lines().count() >= 3);
        assert!(!block.contains("(paused)"));
    }

    #[test]
    fn mystery_block_mentions_fruit_and_pause() {
        let content = ContentStore::english().unwrap();
        let mut focus = ConsoleFocus::new(61);
        focus.set_focus(FocusTarget::Bead(6));
        let v = view(
            PrayerStep::announcement(MysterySet::Joyful, 0, 1),
            FocusTarget::Bead(6),
            false,
        );
        let block = step_block(&v, &focus, &content);
        assert!(block.contains("bead 7/61"));
        assert!(block.contains("Fruit:"));
        assert!(block.ends_with("(paused)"));
    }
}

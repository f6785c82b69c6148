// Strings shown for a step, independent of the DOM.

use rosary_core::{ContentResolver, StepContent, StepView};

#[derive(Clone, Debug, PartialEq)]
pub struct MysteryPanel {
    pub title: String,
    pub description: String,
    pub fruits: String,
    pub scripture: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepText {
    pub title: String,
    pub instructions: String,
    pub body: String,
    pub mystery: Option<MysteryPanel>,
    pub indicator: &'static str,
    pub section: String,
    pub progress_label: String,
    pub progress_percent: f32,
    pub play_label: &'static str,
}

pub fn play_label(is_playing: bool) -> &'static str {
    if is_playing {
        "Pause"
    } else {
        "Play"
    }
}

/// Text for `view`; missing content falls back to the indicator name.
pub fn step_text(view: &StepView, content: &impl ContentResolver, show_scripture: bool) -> StepText {
    let progress = view.progress();
    let indicator = view.step.indicator_name();
    let mut text = StepText {
        title: indicator.to_string(),
        instructions: String::new(),
        body: String::new(),
        mystery: None,
        indicator,
        section: view.step.section_label(),
        progress_label: progress.label(),
        progress_percent: progress.fraction() * 100.0,
        play_label: play_label(view.is_playing),
    };
    match content.resolve(&view.step) {
        Some(StepContent::Prayer(p)) => {
            text.title = p.title.clone();
            text.instructions = p.instructions.clone();
            text.body = p.body.clone();
        }
        Some(StepContent::Mystery(m)) => {
            text.title = m.title.clone();
            text.instructions = "Meditate on this mystery".to_string();
            text.body = m.description.clone();
            text.mystery = Some(MysteryPanel {
                title: m.title.clone(),
                description: m.description.clone(),
                fruits: m.fruits.clone(),
                scripture: m.scripture.clone().filter(|_| show_scripture),
            });
        }
        None => log::warn!("[text] no content for step {}", view.index),
    }
    text
}

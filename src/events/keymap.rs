use rosary_core::MysterySet;

/// What a key press asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    TogglePlay,
    ToggleAutoAdvance,
    SelectMystery(MysterySet),
    Start,
}

#[inline]
pub fn mystery_for_digit(key: &str) -> Option<MysterySet> {
    match key {
        "1" => Some(MysterySet::Joyful),
        "2" => Some(MysterySet::Sorrowful),
        "3" => Some(MysterySet::Glorious),
        "4" => Some(MysterySet::Luminous),
        _ => None,
    }
}

#[inline]
pub fn intent_for_key(key: &str) -> Option<Intent> {
    if let Some(set) = mystery_for_digit(key) {
        return Some(Intent::SelectMystery(set));
    }
    match key {
        "ArrowRight" => Some(Intent::Next),
        "ArrowLeft" => Some(Intent::Previous),
        " " | "Spacebar" => Some(Intent::TogglePlay),
        "a" | "A" => Some(Intent::ToggleAutoAdvance),
        "Enter" => Some(Intent::Start),
        _ => None,
    }
}

/// `Start` during an unfinished run acts as `Next`, the same as Enter in the console.
#[inline]
pub fn resolve_start(intent: Intent, run_in_progress: bool) -> Intent {
    match intent {
        Intent::Start if run_in_progress => Intent::Next,
        other => other,
    }
}

/// Whether the focused element should get `key` instead of the global shortcuts.
/// `tag` is the upper-case tag name the DOM reports.
#[inline]
pub fn target_keeps_key(tag: &str, key: &str) -> bool {
    match tag {
        "INPUT" | "SELECT" | "TEXTAREA" => true,
        // focused buttons activate themselves
        "BUTTON" => matches!(key, "Enter" | " " | "Spacebar"),
        _ => false,
    }
}

/// Keys whose browser default (scrolling, button activation) should be suppressed.
#[inline]
pub fn suppresses_default(intent: Intent) -> bool {
    matches!(
        intent,
        Intent::TogglePlay | Intent::Next | Intent::Previous | Intent::Start
    )
}

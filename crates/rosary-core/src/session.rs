//! Prayer cursor and playback state machine.
//!
//! A session is `Idle` until the first [`RosarySession::start`], then `Active` with a plan and
//! a cursor into it. `is_playing` and `auto_advance` are independent flags. At most one
//! auto-advance timer is pending; every operation that changes the index or either flag
//! cancels it before deciding whether to schedule a new one.

use crate::error::{Result, RosaryError};
use crate::mystery::MysterySet;
use crate::plan::{build_plan, FocusTarget, RosaryPlan};
use crate::prayer::{PrayerStep, Progress};
use crate::scheduler::{Scheduler, TimerId};
use crate::structure::{BeadLayout, RosaryStructure};
use crate::timing::{MeditationLength, StepTiming};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub structure: RosaryStructure,
    pub layout: BeadLayout,
    /// Whether `start` begins playing immediately.
    pub autoplay_on_start: bool,
    pub auto_advance: bool,
    pub meditation: MeditationLength,
    pub show_scripture: bool,
    pub mystery_set: MysterySet,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            structure: RosaryStructure::canonical(),
            layout: BeadLayout::default(),
            autoplay_on_start: true,
            auto_advance: true,
            meditation: MeditationLength::default(),
            show_scripture: true,
            mystery_set: MysterySet::default(),
        }
    }
}

/// Snapshot handed to presentation after every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepView {
    pub index: usize,
    pub total: usize,
    pub step: PrayerStep,
    pub focus: FocusTarget,
    pub is_playing: bool,
    pub auto_advance: bool,
}

impl StepView {
    pub fn progress(&self) -> Progress {
        Progress {
            index: self.index,
            total: self.total,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Step(StepView),
    /// Emitted once per run when advancing past the final step.
    Completed { total: usize },
}

#[derive(Debug)]
struct Cursor {
    plan: RosaryPlan,
    index: usize,
    completed: bool,
}

pub struct RosarySession<S: Scheduler, T: StepTiming> {
    config: SessionConfig,
    active_set: MysterySet,
    cursor: Option<Cursor>,
    is_playing: bool,
    auto_advance: bool,
    pending: Option<TimerId>,
    scheduler: S,
    timing: T,
    events: SmallVec<[SessionEvent; 4]>,
}

impl<S: Scheduler, T: StepTiming> RosarySession<S, T> {
    pub fn new(config: SessionConfig, scheduler: S, timing: T) -> Self {
        Self {
            active_set: config.mystery_set,
            auto_advance: config.auto_advance,
            config,
            cursor: None,
            is_playing: false,
            pending: None,
            scheduler,
            timing,
            events: SmallVec::new(),
        }
    }

    // ---------------- Operations ----------------

    /// Builds a fresh plan for `set` and moves the cursor to its first step.
    ///
    /// A malformed structure leaves the session exactly as it was.
    pub fn start(&mut self, set: MysterySet) -> Result<()> {
        let plan = build_plan(set, &self.config.structure, &self.config.layout)?;
        self.cancel_pending();
        self.active_set = set;
        self.cursor = Some(Cursor {
            plan,
            index: 0,
            completed: false,
        });
        self.is_playing = self.config.autoplay_on_start;
        log::info!(
            "[session] started {} ({} steps), playing={}",
            set,
            self.total_steps().unwrap_or(0),
            self.is_playing
        );
        self.reschedule();
        self.emit_step();
        Ok(())
    }

    /// Starts with whatever set was last chosen through [`Self::jump_to_mystery_set`].
    pub fn start_active(&mut self) -> Result<()> {
        self.start(self.active_set)
    }

    pub fn advance(&mut self) -> Result<()> {
        let cursor = self.cursor_mut("advance")?;
        if cursor.index + 1 < cursor.plan.len() {
            cursor.index += 1;
            log::debug!("[session] advance -> {}", cursor.index);
            self.reschedule();
            self.emit_step();
        } else {
            self.complete();
        }
        Ok(())
    }

    pub fn retreat(&mut self) -> Result<()> {
        let cursor = self.cursor_mut("retreat")?;
        if cursor.index == 0 {
            return Ok(());
        }
        cursor.index -= 1;
        log::debug!("[session] retreat -> {}", cursor.index);
        self.reschedule();
        self.emit_step();
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<()> {
        self.cursor_mut("toggle_play")?;
        self.is_playing = !self.is_playing;
        log::debug!("[session] playing={}", self.is_playing);
        self.reschedule();
        self.emit_step();
        Ok(())
    }

    /// Allowed while idle; the flag then applies to the next run.
    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
        if self.cursor.is_none() {
            return;
        }
        self.reschedule();
        self.emit_step();
    }

    /// Chooses the set used by the next [`Self::start_active`]. A plan already in progress
    /// keeps the set it was built with.
    pub fn jump_to_mystery_set(&mut self, set: MysterySet) {
        if self.active_set != set {
            log::debug!("[session] mystery set {} -> {}", self.active_set, set);
        }
        self.active_set = set;
    }

    /// Delivers an elapsed timer. Ids other than the pending one are stale and ignored.
    pub fn fire_timer(&mut self, id: TimerId) {
        if self.pending != Some(id) {
            log::debug!("[session] ignoring stale timer {:?}", id);
            return;
        }
        self.pending = None;
        if !(self.is_playing && self.auto_advance) {
            return;
        }
        if let Err(e) = self.advance() {
            log::error!("[session] auto-advance failed: {e}");
        }
    }

    /// Takes every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    // ---------------- Queries ----------------

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.as_ref().map(|c| c.index)
    }

    pub fn total_steps(&self) -> Option<usize> {
        self.cursor.as_ref().map(|c| c.plan.len())
    }

    pub fn current(&self) -> Option<StepView> {
        let cursor = self.cursor.as_ref()?;
        let (step, focus) = cursor.plan.step(cursor.index)?;
        Some(StepView {
            index: cursor.index,
            total: cursor.plan.len(),
            step,
            focus,
            is_playing: self.is_playing,
            auto_advance: self.auto_advance,
        })
    }

    pub fn plan(&self) -> Option<&RosaryPlan> {
        self.cursor.as_ref().map(|c| &c.plan)
    }

    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor.as_ref().is_some_and(|c| c.completed)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance
    }

    pub fn active_mystery_set(&self) -> MysterySet {
        self.active_set
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Structure changes take effect on the next `start`.
    pub fn set_structure(&mut self, structure: RosaryStructure, layout: BeadLayout) {
        self.config.structure = structure;
        self.config.layout = layout;
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn timing(&self) -> &T {
        &self.timing
    }

    /// Timing changes apply from the next scheduled timer.
    pub fn timing_mut(&mut self) -> &mut T {
        &mut self.timing
    }

    // ---------------- Internals ----------------

    fn cursor_mut(&mut self, operation: &'static str) -> Result<&mut Cursor> {
        self.cursor
            .as_mut()
            .ok_or(RosaryError::InvalidState { operation })
    }

    fn complete(&mut self) {
        self.cancel_pending();
        self.is_playing = false;
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        let first = !cursor.completed;
        cursor.completed = true;
        let total = cursor.plan.len();
        self.emit_step();
        if first {
            log::info!("[session] sequence complete ({total} steps)");
            self.events.push(SessionEvent::Completed { total });
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    fn reschedule(&mut self) {
        self.cancel_pending();
        if !(self.is_playing && self.auto_advance) {
            return;
        }
        let Some(view) = self.current() else {
            return;
        };
        let delay = self.timing.duration_for(&view.step);
        self.pending = Some(self.scheduler.schedule_once(delay));
    }

    fn emit_step(&mut self) {
        if let Some(view) = self.current() {
            self.events.push(SessionEvent::Step(view));
        }
    }
}

impl<S: Scheduler, T: StepTiming> std::fmt::Debug for RosarySession<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosarySession")
            .field("active_set", &self.active_set)
            .field("index", &self.current_index())
            .field("total", &self.total_steps())
            .field("is_playing", &self.is_playing)
            .field("auto_advance", &self.auto_advance)
            .field("pending", &self.pending)
            .finish()
    }
}

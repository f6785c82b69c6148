//! Glue between the session, the DOM presenter, the bead scene and the chimes.

use crate::audio::Chimes;
use crate::events::keymap::{resolve_start, Intent};
use crate::notification::Notification;
use crate::presenter::Presenter;
use crate::scene::BeadScene;
use crate::scheduler::BrowserScheduler;
use crate::text::step_text;
use rosary_core::{
    ContentStore, ContentTiming, FocusSink, MeditationLength, RosarySession, SessionConfig,
    SessionEvent, TimerId,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub type WebSession = RosarySession<BrowserScheduler, ContentTiming>;

pub struct App {
    session: WebSession,
    content: Arc<ContentStore>,
    presenter: Presenter,
    notification: Notification,
    scene: Rc<RefCell<BeadScene>>,
    chimes: Option<Chimes>,
    last_index: Option<usize>,
}

impl App {
    pub fn new(
        config: SessionConfig,
        content: Arc<ContentStore>,
        presenter: Presenter,
        scene: Rc<RefCell<BeadScene>>,
        chimes: Option<Chimes>,
    ) -> Self {
        let timing = ContentTiming::new(content.clone(), config.meditation);
        let session = RosarySession::new(config, BrowserScheduler::new(), timing);
        presenter.mark_mystery(session.active_mystery_set());
        Self {
            session,
            content,
            presenter,
            notification: Notification::default(),
            scene,
            chimes,
            last_index: None,
        }
    }

    /// Routes elapsed browser timers back into `app`.
    pub fn install_timer_hook(app: &Rc<RefCell<App>>) {
        let weak = Rc::downgrade(app);
        app.borrow().session.scheduler().set_hook(move |id| {
            if let Some(app) = weak.upgrade() {
                app.borrow_mut().on_timer(id);
            }
        });
    }

    pub fn handle(&mut self, intent: Intent) {
        let intent = resolve_start(intent, self.run_in_progress());
        log::debug!("[app] {:?}", intent);
        let result = match intent {
            Intent::Next => self.session.advance(),
            Intent::Previous => self.session.retreat(),
            Intent::TogglePlay => self.session.toggle_play(),
            Intent::ToggleAutoAdvance => {
                let enabled = !self.session.auto_advance_enabled();
                self.session.set_auto_advance(enabled);
                Ok(())
            }
            Intent::SelectMystery(set) => {
                self.session.jump_to_mystery_set(set);
                self.presenter.mark_mystery(set);
                Ok(())
            }
            Intent::Start => self.start(),
        };
        if let Err(e) = result {
            log::error!("[app] {:?} rejected: {e}", intent);
        }
        self.flush();
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.session.set_auto_advance(enabled);
        self.flush();
    }

    /// Applies from the next scheduled step.
    pub fn set_meditation(&mut self, meditation: MeditationLength) {
        log::info!("[app] meditation {:?}", meditation);
        self.session.timing_mut().set_meditation(meditation);
    }

    fn run_in_progress(&self) -> bool {
        self.session.is_active() && !self.session.is_complete()
    }

    fn start(&mut self) -> rosary_core::Result<()> {
        if let Some(chimes) = &self.chimes {
            chimes.resume();
        }
        self.last_index = None;
        self.session.start_active()?;
        self.presenter.show_prayer_screen();
        Ok(())
    }

    fn on_timer(&mut self, id: TimerId) {
        self.session.fire_timer(id);
        self.flush();
    }

    fn flush(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::Step(view) => {
                    self.presenter.set_controls(view.is_playing, view.auto_advance);
                    if self.last_index == Some(view.index) {
                        continue;
                    }
                    self.last_index = Some(view.index);
                    let text = step_text(
                        &view,
                        self.content.as_ref(),
                        self.session.config().show_scripture,
                    );
                    self.presenter.render(text);
                    self.scene.borrow_mut().set_focus(view.focus);
                    if let Some(chimes) = &self.chimes {
                        chimes.step(view.step.is_announcement());
                    }
                }
                SessionEvent::Completed { total } => {
                    log::info!("[app] rosary complete after {total} prayers");
                    self.notification.show(
                        self.presenter.document(),
                        "Rosary Complete",
                        "You have completed praying the rosary. God bless you!",
                    );
                    if let Some(chimes) = &self.chimes {
                        chimes.complete();
                    }
                }
            }
        }
    }
}

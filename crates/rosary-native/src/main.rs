use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rosary_core::constants::MIN_TIME_SCALE;
use rosary_core::{
    BeadLayout, ContentStore, ContentTiming, FocusSink, MeditationLength, MysterySet,
    RosarySession, SessionConfig, SessionEvent, TimerQueue,
};

mod command;
mod console;

use command::{Command, HELP};
use console::{step_block, ConsoleFocus};

type ConsoleSession = RosarySession<TimerQueue, ContentTiming>;

/// Pray the rosary in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// joyful, sorrowful, glorious or luminous
    #[arg(short, long, default_value = "joyful")]
    mystery: MysterySet,

    /// JSON session config; flags below override its structure
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    decades: Option<i32>,

    #[arg(long)]
    hail_marys: Option<i32>,

    #[arg(long)]
    opening_hail_marys: Option<i32>,

    /// none, short, medium or long
    #[arg(long, value_parser = parse_meditation)]
    meditation: Option<MeditationLength>,

    /// Speed-up factor applied to every step duration
    #[arg(long, default_value_t = 1.0, value_parser = parse_time_scale)]
    time_scale: f32,

    /// Start paused; advance with Enter
    #[arg(long)]
    paused: bool,

    /// Disable auto-advance
    #[arg(long)]
    manual: bool,
}

fn parse_meditation(s: &str) -> Result<MeditationLength, String> {
    MeditationLength::parse(s).ok_or_else(|| format!("unknown meditation length `{s}`"))
}

fn parse_time_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|e| format!("`{s}`: {e}"))?;
    if scale.is_finite() && scale >= MIN_TIME_SCALE {
        Ok(scale)
    } else {
        Err(format!("time scale must be at least {MIN_TIME_SCALE}, got {s}"))
    }
}

fn load_config(args: &Args) -> anyhow::Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SessionConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    let custom_structure =
        args.decades.is_some() || args.hail_marys.is_some() || args.opening_hail_marys.is_some();
    if let Some(n) = args.decades {
        config.structure.decades = n;
    }
    if let Some(n) = args.hail_marys {
        config.structure.hail_marys_per_decade = n;
    }
    if let Some(n) = args.opening_hail_marys {
        config.structure.opening_hail_marys = n;
    }
    if custom_structure {
        config.layout = BeadLayout::packed_for(&config.structure)?;
    }
    if let Some(m) = args.meditation {
        config.meditation = m;
    }
    if args.paused {
        config.autoplay_on_start = false;
    }
    if args.manual {
        config.auto_advance = false;
    }
    config.mystery_set = args.mystery;
    Ok(config)
}

/// Forwards stdin lines to the session loop.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn apply(session: &mut ConsoleSession, cmd: Command) -> rosary_core::Result<()> {
    match cmd {
        Command::Next => session.advance(),
        Command::Previous => session.retreat(),
        Command::TogglePlay => session.toggle_play(),
        Command::ToggleAutoAdvance => {
            let enabled = !session.auto_advance_enabled();
            session.set_auto_advance(enabled);
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

/// Prints pending events; returns true once the rosary is complete.
fn flush(
    session: &mut ConsoleSession,
    focus: &mut ConsoleFocus,
    content: &ContentStore,
    last_index: &mut Option<usize>,
) -> bool {
    let mut done = false;
    for event in session.drain_events() {
        match event {
            SessionEvent::Step(view) => {
                if *last_index == Some(view.index) {
                    log::info!(
                        "playing={} auto-advance={}",
                        view.is_playing,
                        view.auto_advance
                    );
                    continue;
                }
                *last_index = Some(view.index);
                focus.set_focus(view.focus);
                println!("\n{}", step_block(&view, focus, content));
            }
            SessionEvent::Completed { total } => {
                println!("\nRosary complete ({total} prayers). God bless you!");
                done = true;
            }
        }
    }
    done
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let content = Arc::new(ContentStore::english()?);
    let timing =
        ContentTiming::new(content.clone(), config.meditation).with_time_scale(args.time_scale);
    let bead_count = config.layout.bead_count(&config.structure)?;
    let mut focus = ConsoleFocus::new(bead_count);
    let mut session = RosarySession::new(config, TimerQueue::new(), timing);

    session.start_active()?;
    println!("{} | {HELP}", session.active_mystery_set().display_name());

    let input = spawn_stdin_reader();
    let clock = Instant::now();
    let mut last_index = None;
    loop {
        if flush(&mut session, &mut focus, &content, &mut last_index) {
            return Ok(());
        }
        let wait = session
            .scheduler()
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(clock.elapsed()));
        let received = match wait {
            Some(wait) => input.recv_timeout(wait),
            None => input
                .recv()
                .map_err(|_| mpsc::RecvTimeoutError::Disconnected),
        };
        let command = match received {
            Ok(line) => match Command::parse(&line) {
                Some(Command::Quit) => return Ok(()),
                Some(cmd) => Some(cmd),
                None => {
                    println!("{HELP}");
                    None
                }
            },
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            // stdin is gone; keep going on the clock alone while timers remain
            Err(mpsc::RecvTimeoutError::Disconnected) => match wait {
                Some(wait) => {
                    thread::sleep(wait);
                    None
                }
                None => {
                    log::info!("input closed with nothing scheduled; stopping");
                    return Ok(());
                }
            },
        };
        // bring the queue up to wall time before anything new is scheduled against it
        for id in session.scheduler_mut().advance_to(clock.elapsed()) {
            session.fire_timer(id);
        }
        if let Some(cmd) = command {
            if let Err(e) = apply(&mut session, cmd) {
                log::error!("{:?} rejected: {e}", cmd);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Args::parse())
}

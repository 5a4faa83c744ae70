use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::config::Cli;
use space_shooter::display::{self, TerminalGuard};
use space_shooter::game::{Session, Simulation};
use space_shooter::input::{InputAdapter, InputCommand, KeyBindings};

fn init_logging(cli: &Cli) -> std::io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Drives the session in real time until the player quits.
///
/// Each frame: drain pending key events through the input adapter, step the
/// simulation (only while running), draw, then sleep off the rest of the
/// frame.  Once over, the overlay stays up until R or Q.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session<StdRng>,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<()> {
    let mut input = InputAdapter::new(KeyBindings::default(), frame);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match input.handle_key(session.state_mut(), &key) {
                InputCommand::Quit => return Ok(()),
                InputCommand::Restart => session.restart(),
                InputCommand::Continue => {}
            }
        }
        input.end_frame(session.state_mut());

        if !session.is_over() {
            session.step();
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, session.state(), cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

/// Everything that touches the terminal runs under the guard, so any early
/// return still restores it.
fn run(session: &mut Session<StdRng>, frame: Duration) -> std::io::Result<()> {
    let mut term = TerminalGuard::enter(BufWriter::new(stdout()))?;
    log::info!("keyboard enhancement: {}", term.keyboard_enhanced());

    // Blocking event reads live on their own thread so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    game_loop(term.out(), session, &rx, frame)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(cli.game_config(), rng);
    let frame = Duration::from_secs(1) / cli.fps;

    let result = run(&mut session, frame);

    if let Err(e) = &result {
        log::error!("terminal error: {e}");
    }
    result
}

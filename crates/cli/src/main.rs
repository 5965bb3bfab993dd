// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod input;
mod render;

use clap::Parser;
use config::{FileConfig, Overrides};
use input::{HELP, Input, drag_gestures, parse_line};
use render::{TerminalListener, render_state};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use weekstay::{
    Clock, DayIndex, EngineSettings, GesturePolicy, SelectionEngine, SelectorConfig,
};

/// Weekstay - pick a recurring run of week days from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fewest days a selection may contain
    #[arg(long)]
    min_days: Option<u8>,

    /// Most days a selection may contain
    #[arg(long)]
    max_days: Option<u8>,

    /// Accept selections that are not a single run of days
    #[arg(long)]
    allow_gaps: bool,

    /// Days selected at start, comma separated (e.g. `fri,sat,sun`)
    #[arg(long, value_delimiter = ',')]
    initial: Vec<DayIndex>,

    /// How clicks are interpreted: toggle-with-debounce, check-in-check-out or adjacency-hybrid
    #[arg(short, long)]
    policy: Option<GesturePolicy>,

    /// Quiet period before toggled selections are validated, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// How long errors stay visible, in milliseconds
    #[arg(long)]
    error_display_ms: Option<u64>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            min_days: self.min_days,
            max_days: self.max_days,
            allow_gaps: self.allow_gaps,
            initial: self.initial.clone(),
            policy: self.policy,
            debounce_ms: self.debounce_ms,
            error_display_ms: self.error_display_ms,
        }
    }
}

/// Sleeps until `deadline`, or forever when there is none.
async fn wait_for_deadline(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Applies one parsed input line. Returns false when the session should end.
fn handle_input<W: Write, C: Clock>(
    engine: &mut SelectionEngine<TerminalListener<W>, C>,
    input: Input,
) -> bool {
    match input {
        Input::Gesture(gesture) => engine.apply(gesture),
        Input::Drag { from, to } => {
            for gesture in drag_gestures(from, to) {
                engine.apply(gesture);
            }
        }
        Input::Show => {
            let state: String = render_state(engine);
            engine.listener_mut().line(&state);
        }
        Input::Help => engine.listener_mut().line(HELP),
        Input::Quit => return false,
    }
    true
}

/// Reads commands from `reader` until it ends or `quit` is entered, firing
/// engine timers as they come due.
async fn run_session<R, W, C>(
    engine: &mut SelectionEngine<TerminalListener<W>, C>,
    reader: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    C: Clock,
{
    let mut lines = reader.lines();

    loop {
        let deadline: Option<std::time::Instant> = engine.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_line(&line) {
                    Ok(input) => {
                        if !handle_input(engine, input) {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(%line, error = %err, "Rejected input");
                        engine.listener_mut().line(&format!("? {err}"));
                    }
                }
            }
            () = wait_for_deadline(deadline) => engine.poll(),
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing on stderr so it does not interleave with the picker output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let file_config: FileConfig = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };
    let (selector, settings): (SelectorConfig, EngineSettings) =
        file_config.resolve(args.overrides());

    let mut engine = SelectionEngine::new(
        selector,
        settings,
        TerminalListener::new(std::io::stdout()),
    )?;
    info!(
        policy = %engine.policy(),
        min_days = engine.config().min_days,
        max_days = engine.config().max_days,
        "Weekstay ready, type 'help' for commands"
    );
    let state: String = render_state(&engine);
    engine.listener_mut().line(&state);

    run_session(&mut engine, BufReader::new(tokio::io::stdin())).await?;

    engine.teardown();
    info!("Session ended");
    Ok(())
}

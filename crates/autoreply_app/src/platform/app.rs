use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use autoreply_core::{update, AppState, Msg};
use chrono::Utc;
use sim_logging::{sim_debug, sim_info, sim_warn};

use super::effects::EffectRunner;
use super::logging;
use super::settings::{load_settings, AppSettings, SETTINGS_FILENAME};
use super::ui;
use super::ui::input::{parse_line, InputAction};

pub fn run_app() -> anyhow::Result<()> {
    let settings_path = Path::new(SETTINGS_FILENAME);
    let (settings, settings_error) = match load_settings(settings_path) {
        Ok(settings) => (settings, None),
        Err(err) => (AppSettings::default(), Some(err)),
    };
    logging::initialize(settings.log_destination, settings.log_level);
    if let Some(err) = settings_error {
        sim_warn!("Ignoring {:?}, using defaults: {}", settings_path, err);
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(msg_tx.clone()).context("starting timer scheduler")?;
    spawn_input_reader(msg_tx).context("starting input reader")?;

    let mut state = AppState::with_settings(settings.simulator);
    write_lines(&ui::layout::banner())?;
    if state.consume_dirty() {
        write_lines(&ui::render::render(&state.view()))?;
    }

    sim_info!("Simulator ready");
    while let Ok(msg) = msg_rx.recv() {
        sim_debug!("Dispatching {:?}", msg);
        let (next, effects) = update(state, msg);
        state = next;
        let flow = runner.enqueue(effects);

        if state.consume_dirty() {
            write_lines(&ui::render::render(&state.view()))?;
        }
        if flow.is_break() {
            break;
        }
    }

    runner.shutdown();
    sim_info!("Simulator stopped");
    Ok(())
}

/// Reads commands from stdin on a background thread. End of input counts as
/// a quit request.
fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>) -> io::Result<()> {
    thread::Builder::new()
        .name("autoreply-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        sim_warn!("Failed to read input: {}", err);
                        break;
                    }
                };
                match parse_line(&line, Utc::now()) {
                    Ok(InputAction::Dispatch(msgs)) => {
                        for msg in msgs {
                            if msg_tx.send(msg).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(InputAction::ShowHelp) => {
                        let _ = write_lines(&ui::layout::help());
                    }
                    Err(err) => {
                        eprintln!("{err}; type `help` for the list of commands");
                    }
                }
            }
            let _ = msg_tx.send(Msg::QuitRequested);
        })?;
    Ok(())
}

/// Writes a block of lines under one stdout lock so blocks never interleave.
fn write_lines(lines: &[String]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}

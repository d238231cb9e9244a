//! Single-actor loop driving both the poll timer and user commands.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::app::clipboard_log::{ClipboardLog, Flow};
use crate::app::user_command::UserCommand;
use crate::ports::{ClipboardReader, Clock, FolderOpener, HistoryStore, LogSurface, Notifier};

/// Poll the clipboard every `interval` and serve commands in between.
///
/// The first poll happens immediately. Ticks keep a fixed cadence: a command
/// handled mid-interval does not push the next tick back. Returns when a
/// `Quit` command arrives; if the command channel closes, polling continues
/// until the process ends.
pub fn run<C, K, H, O, S>(
    app: &mut ClipboardLog<C, K, H, O, S>,
    commands: &Receiver<UserCommand>,
    interval: Duration,
) where
    C: ClipboardReader,
    K: Clock,
    H: HistoryStore,
    O: FolderOpener,
    S: LogSurface + Notifier,
{
    let mut next_tick = Instant::now();
    let mut input_open = true;

    loop {
        let now = Instant::now();
        if now >= next_tick {
            app.poll();
            next_tick += interval;
            let polled_at = Instant::now();
            if next_tick <= polled_at {
                // Missed ticks are dropped rather than replayed in a burst, and
                // a slow read still leaves room for commands before the next one.
                next_tick = polled_at + interval;
            }
            continue;
        }

        let wait = next_tick - now;
        if !input_open {
            thread::sleep(wait);
            continue;
        }

        match commands.recv_timeout(wait) {
            Ok(command) => {
                if app.handle(command) == Flow::Quit {
                    info!("quit requested");
                    return;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                debug!("command input closed; polling continues");
                input_open = false;
            }
        }
    }
}

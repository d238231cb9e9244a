//! Terminal input reader.

use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::warn;

use crate::app::user_command::UserCommand;

/// Forward parsed commands from `reader` until it ends or the loop is gone.
///
/// Reading blocks, so it runs on its own thread; the only state it shares
/// with the event loop is the channel.
pub fn spawn_input_reader<R>(reader: R, commands: Sender<UserCommand>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || forward_commands(reader, &commands))
}

fn forward_commands<R: BufRead>(reader: R, commands: &Sender<UserCommand>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                let Some(command) = UserCommand::parse(&line) else {
                    continue;
                };
                if commands.send(command).is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!("failed to read command input: {}", e);
                return;
            }
        }
    }
}

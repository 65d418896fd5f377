//! The OS MIDI backend: midir input ports bridged to the engine's
//! Universal MIDI Packet contract.

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use midir::MidiInput;

use gritsynth::midi::Listener;

const CLIENT_NAME: &str = "gritsynth";

/// A [Listener] that connects every available MIDI input port and wraps
/// each incoming MIDI 1.0 channel-voice message into the equivalent
/// Channel Voice 1.0 packet word.
pub fn receive_all() -> Listener {
    Box::new(run)
}

fn run(
    stop: Arc<AtomicBool>,
    deliver: &mut dyn FnMut(&[u32]),
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (tx, rx) = mpsc::channel::<u32>();

    let scan = MidiInput::new(&format!("{CLIENT_NAME} scan"))?;
    let mut connections = Vec::new();
    for port in scan.ports() {
        let input = MidiInput::new(CLIENT_NAME)?;
        let name = input.port_name(&port)?;
        let tx = tx.clone();
        match input.connect(
            &port,
            &name,
            move |_timestamp, bytes, _: &mut ()| {
                if let Some(word) = ump_from_bytes(bytes) {
                    let _ = tx.send(word);
                }
            },
            (),
        ) {
            Ok(conn) => {
                log::info!("connected to midi input {name}");
                connections.push(conn);
            }
            Err(err) => log::warn!("skipping midi input {name}: {err}"),
        }
    }
    if connections.is_empty() {
        log::warn!("no midi inputs connected");
    }
    drop(tx);

    while !stop.load(Ordering::Relaxed) {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(word) => deliver(&[word]),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}

// Wraps a classic MIDI 1.0 channel-voice message into a Channel Voice 1.0
// packet word on group 0. System and realtime messages have no place in
// that group and are dropped.
fn ump_from_bytes(bytes: &[u8]) -> Option<u32> {
    let &status = bytes.first()?;
    if !(0x80..0xf0).contains(&status) {
        return None;
    }
    let data1 = bytes.get(1).copied().unwrap_or(0) & 0x7f;
    let data2 = bytes.get(2).copied().unwrap_or(0) & 0x7f;
    Some(0x2000_0000 | ((status as u32) << 16) | ((data1 as u32) << 8) | data2 as u32)
}

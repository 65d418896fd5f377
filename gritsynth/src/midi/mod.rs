//! MIDI decoding and dispatch.
//!
//! The engine speaks Universal MIDI Packets: the OS backend hands over
//! batches of 32 bit words, [parse_messages] decodes the Channel Voice 1.0
//! messages out of them, and a [Dispatcher] fans the parsed messages out to
//! subscribers through bounded queues. Delivery never blocks the source
//! thread: a subscriber that falls behind loses messages instead of
//! stalling the device.

mod protocol;

pub use protocol::{
    note_off, note_on, parse_message, parse_messages, Cv1Kind, Message, ParseError,
};

use std::error::Error;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};

/// Matches every channel.
pub const ALL_CHANNELS: u16 = 0xffff;

// Messages a slow subscriber can fall behind by before losing some.
const SUBSCRIPTION_DEPTH: usize = 100;

/// Selects which messages a subscription receives: a bitmask of channels
/// (bit `n` admits channel `n`) and a set of admitted commands.
#[derive(Clone, Copy)]
pub struct Filter {
    channels: u16,
    kinds: [bool; 7],
}

impl Filter {
    /// A filter that admits everything.
    pub fn all() -> Self {
        Filter {
            channels: ALL_CHANNELS,
            kinds: [true; 7],
        }
    }

    /// A filter admitting only the listed commands, on every channel.
    pub fn only(kinds: &[Cv1Kind]) -> Self {
        let mut f = Filter {
            channels: ALL_CHANNELS,
            kinds: [false; 7],
        };
        for &k in kinds {
            f.kinds[k.index()] = true;
        }
        f
    }

    /// Restricts the filter to the channels set in `mask`.
    pub fn channels(mut self, mask: u16) -> Self {
        self.channels = mask;
        self
    }

    /// Removes one command from the filter.
    pub fn without(mut self, kind: Cv1Kind) -> Self {
        self.kinds[kind.index()] = false;
        self
    }

    fn matches(&self, msg: &Message) -> bool {
        self.channels & (1u16 << msg.channel) != 0 && self.kinds[msg.kind.index()]
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::all()
    }
}

struct Sub {
    filter: Filter,
    tx: Sender<Message>,
}

/// Routes parsed MIDI messages to a set of subscribers.
pub struct Dispatcher {
    subs: Mutex<Vec<Sub>>,
}

impl Dispatcher {
    /// A dispatcher with no subscribers.
    pub fn new() -> Self {
        Dispatcher {
            subs: Mutex::new(Vec::new()),
        }
    }

    /// Registers a subscription and returns its receiving end. The queue
    /// holds a bounded number of messages; once it is full, further
    /// matching messages are dropped until the subscriber catches up.
    pub fn subscribe(&self, filter: Filter) -> Receiver<Message> {
        let (tx, rx) = bounded(SUBSCRIPTION_DEPTH);
        self.subs.lock().unwrap().push(Sub { filter, tx });
        rx
    }

    /// Delivers one message to every matching subscription.
    pub fn dispatch(&self, msg: Message) {
        for sub in self.subs.lock().unwrap().iter() {
            if !sub.filter.matches(&msg) {
                continue;
            }
            if sub.tx.try_send(msg).is_err() {
                log::debug!("dropping {msg} for a slow subscriber");
            }
        }
    }

    /// Drops every subscription, closing the subscribers' receive loops.
    pub fn close(&self) {
        self.subs.lock().unwrap().clear();
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new()
    }
}

/// A source of raw packet words: a blocking function that watches the stop
/// flag and calls the supplied callback with each batch of words as it
/// arrives.
pub type Listener = Box<
    dyn FnOnce(
            Arc<AtomicBool>,
            &mut dyn FnMut(&[u32]),
        ) -> Result<(), Box<dyn Error + Send + Sync>>
        + Send,
>;

/// Runs a [Listener] on a background thread, parsing each batch it
/// produces and dispatching the messages. When the listener returns, its
/// error (if any) is logged and the dispatcher closes, ending all
/// subscriptions.
pub fn listen(stop: Arc<AtomicBool>, listener: Listener) -> Arc<Dispatcher> {
    let dispatcher = Arc::new(Dispatcher::new());
    let d = Arc::clone(&dispatcher);
    thread::spawn(move || {
        let mut deliver = |raw: &[u32]| match parse_messages(raw) {
            Ok(messages) => {
                for msg in messages {
                    d.dispatch(msg);
                }
            }
            Err(err) => log::error!("dropping midi batch: {err}"),
        };
        if let Err(err) = listener(stop, &mut deliver) {
            log::error!("midi listener failed: {err}");
        }
        d.close();
    });
    dispatcher
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(channel: u8, n: u8) -> Message {
        parse_messages(&[note_on(channel, n, 1)]).unwrap()[0]
    }

    #[test]
    fn filters_admit_by_kind() {
        let d = Dispatcher::new();
        let notes = d.subscribe(Filter::only(&[Cv1Kind::NoteOn, Cv1Kind::NoteOff]));
        let everything = d.subscribe(Filter::all());

        d.dispatch(note(0, 60));
        let cc = parse_messages(&[0x20b0_0740]).unwrap()[0];
        assert_eq!(cc.kind, Cv1Kind::ControlChange);
        d.dispatch(cc);

        let got: Vec<Message> = notes.try_iter().collect();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].note, 60);
        assert_eq!(everything.try_iter().count(), 2);
    }

    #[test]
    fn filters_admit_by_channel() {
        let d = Dispatcher::new();
        let ch2_only = d.subscribe(Filter::all().channels(1 << 2));
        d.dispatch(note(0, 60));
        d.dispatch(note(2, 61));
        let got: Vec<Message> = ch2_only.try_iter().collect();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].note, 61);
    }

    #[test]
    fn channel_zero_is_matchable() {
        let d = Dispatcher::new();
        let rx = d.subscribe(Filter::all().channels(1 << 0));
        d.dispatch(note(0, 60));
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn full_queues_drop_instead_of_blocking() {
        let d = Dispatcher::new();
        let rx = d.subscribe(Filter::all());
        for i in 0..2 * SUBSCRIPTION_DEPTH {
            d.dispatch(note(0, (i % 128) as u8));
        }
        // The dispatcher never stalled, and the queue holds exactly its
        // bound.
        assert_eq!(rx.try_iter().count(), SUBSCRIPTION_DEPTH);
    }

    #[test]
    fn close_ends_subscriptions() {
        let d = Dispatcher::new();
        let rx = d.subscribe(Filter::all());
        d.close();
        assert!(rx.recv().is_err());
    }

    #[test]
    fn listener_feeds_subscribers() {
        let stop = Arc::new(AtomicBool::new(false));
        let words = vec![note_on(0, 64, 100), note_off(0, 64, 0)];
        // Hold the listener back until the subscription below exists.
        let (ready_tx, ready_rx) = bounded::<()>(0);
        let d = listen(
            stop,
            Box::new(move |_stop, deliver| {
                ready_rx.recv().ok();
                deliver(&words);
                Ok(())
            }),
        );
        let rx = d.subscribe(Filter::all());
        ready_tx.send(()).unwrap();
        let mut got = Vec::new();
        while let Ok(msg) = rx.recv() {
            got.push(msg);
        }
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].kind, Cv1Kind::NoteOn);
        assert_eq!(got[1].kind, Cv1Kind::NoteOff);
    }
}

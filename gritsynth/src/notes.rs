//! Polyphonic note tracking.

use std::sync::{Arc, Mutex};
use std::thread;

use crate::fix::{S17, U08, U71};
use crate::graph::Ticker;
use crate::midi::{Cv1Kind, Dispatcher, Filter};

/// Tracks MIDI note on and off messages across a fixed set of voices and
/// plays them out as audio-rate channels: two per voice, the note number
/// (as [U71] bits) on the even channel and the velocity (as [U08] bits) on
/// the odd one.
///
/// A note-on lands on an idle voice if there is one and otherwise steals
/// the voice that has held its note longest. A note-off only zeroes the
/// voice's velocity: the note number keeps playing out so that whatever is
/// downstream (typically a release envelope gated on the velocity) still
/// knows the pitch of the tail it is rendering.
///
/// MIDI note 0 is not assignable: a zero note field is what marks a voice
/// as never used, so note-ons for note 0 are ignored.
pub struct MidiNotes {
    voices: usize,
    state: Arc<Mutex<VoiceState>>,
}

struct VoiceState {
    notes: Vec<U71>,
    velos: Vec<U08>,
    // The event counter value at each voice's last note-on, for picking
    // the oldest victim.
    when: Vec<u64>,
    events: u64,
}

impl VoiceState {
    fn note_on(&mut self, note: u8, velocity: u8) {
        if note == 0 {
            log::debug!("ignoring note on for unassignable note 0");
            return;
        }
        self.events += 1;
        let mut victim = 0;
        let mut oldest = u64::MAX;
        for (i, &when) in self.when.iter().enumerate() {
            if self.velos[i] == U08::ZERO {
                victim = i;
                break;
            }
            if when < oldest {
                oldest = when;
                victim = i;
            }
        }
        self.notes[victim] = U71::from_bits(note << 1);
        self.velos[victim] = U08::from_bits(velocity << 1);
        self.when[victim] = self.events;
    }

    fn note_off(&mut self, note: u8) {
        let encoded = U71::from_bits(note << 1);
        for (i, &n) in self.notes.iter().enumerate() {
            if n == encoded {
                // Only quiet the voice; the note keeps sounding through
                // whatever release is downstream.
                self.velos[i] = U08::ZERO;
                break;
            }
        }
    }
}

impl MidiNotes {
    /// A tracker for `voices` voices, fed note events by a subscription to
    /// `dispatcher`. The subscription thread ends when the dispatcher
    /// closes.
    pub fn new(voices: usize, dispatcher: &Dispatcher) -> Self {
        let tracker = MidiNotes::with_voices(voices);
        let rx = dispatcher.subscribe(Filter::only(&[Cv1Kind::NoteOn, Cv1Kind::NoteOff]));
        let state = Arc::clone(&tracker.state);
        thread::spawn(move || {
            for msg in rx.iter() {
                let mut voices = state.lock().unwrap();
                match msg.kind {
                    Cv1Kind::NoteOn => voices.note_on(msg.note, msg.velocity),
                    Cv1Kind::NoteOff => voices.note_off(msg.note),
                    _ => {}
                }
            }
        });
        tracker
    }

    fn with_voices(voices: usize) -> Self {
        assert!(voices > 0, "MidiNotes: no voices");
        MidiNotes {
            voices,
            state: Arc::new(Mutex::new(VoiceState {
                notes: vec![U71::ZERO; voices],
                velos: vec![U08::ZERO; voices],
                when: vec![0; voices],
                events: 0,
            })),
        }
    }
}

impl Ticker for MidiNotes {
    fn inputs(&self) -> usize {
        0
    }

    fn outputs(&self) -> usize {
        self.voices * 2
    }

    fn tick(&mut self, _inputs: &[&[S17]], outputs: &mut [&mut [S17]]) {
        for i in 0..self.voices {
            let (note, velocity) = {
                let state = self.state.lock().unwrap();
                (state.notes[i], state.velos[i])
            };
            if note == U71::ZERO {
                continue;
            }
            outputs[2 * i].fill(note.interpret_as_s17());
            outputs[2 * i + 1].fill(velocity.interpret_as_s17());
        }
    }

    fn label(&self) -> String {
        format!("MidiNotes({})", self.voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held_notes(m: &MidiNotes) -> Vec<(u8, u8)> {
        let state = m.state.lock().unwrap();
        state
            .notes
            .iter()
            .zip(&state.velos)
            .map(|(n, v)| (n.to_bits() >> 1, v.to_bits() >> 1))
            .collect()
    }

    #[test]
    fn distinct_notes_fill_voices_in_order() {
        let m = MidiNotes::with_voices(4);
        {
            let mut state = m.state.lock().unwrap();
            for (i, note) in [60, 64, 67, 71].into_iter().enumerate() {
                state.note_on(note, 100 + i as u8);
            }
        }
        assert_eq!(
            held_notes(&m),
            vec![(60, 100), (64, 101), (67, 102), (71, 103)],
        );
    }

    #[test]
    fn overflow_steals_the_oldest_voice() {
        let m = MidiNotes::with_voices(2);
        {
            let mut state = m.state.lock().unwrap();
            state.note_on(60, 10);
            state.note_on(61, 10);
            state.note_on(62, 10);
        }
        // 60 arrived first, so 62 took its voice.
        assert_eq!(held_notes(&m), vec![(62, 10), (61, 10)]);
    }

    #[test]
    fn note_off_keeps_the_pitch() {
        let m = MidiNotes::with_voices(2);
        {
            let mut state = m.state.lock().unwrap();
            state.note_on(60, 10);
            state.note_off(60);
        }
        assert_eq!(held_notes(&m), vec![(60, 0), (0, 0)]);
    }

    #[test]
    fn released_voices_are_reused_before_stealing() {
        let m = MidiNotes::with_voices(2);
        {
            let mut state = m.state.lock().unwrap();
            state.note_on(60, 10);
            state.note_on(61, 10);
            state.note_off(60);
            state.note_on(62, 10);
        }
        // 62 landed on the released voice, not on 61.
        assert_eq!(held_notes(&m), vec![(62, 10), (61, 10)]);
    }

    #[test]
    fn note_zero_is_not_assignable() {
        let m = MidiNotes::with_voices(1);
        m.state.lock().unwrap().note_on(0, 100);
        assert_eq!(held_notes(&m), vec![(0, 0)]);
    }

    #[test]
    fn tick_writes_note_and_velocity_channels() {
        let mut m = MidiNotes::with_voices(2);
        m.state.lock().unwrap().note_on(69, 50);
        let mut out = vec![vec![S17::ZERO; 4]; 4];
        let mut views: Vec<&mut [S17]> = out.iter_mut().map(|c| c.as_mut_slice()).collect();
        m.tick(&[], &mut views);
        assert!(out[0].iter().all(|&s| s.interpret_as_u71().to_bits() == 69 << 1));
        assert!(out[1].iter().all(|&s| s.interpret_as_u08().to_bits() == 50 << 1));
        // The untouched voice's channels stay as they were.
        assert!(out[2].iter().all(|&s| s == S17::ZERO));
        assert!(out[3].iter().all(|&s| s == S17::ZERO));
    }

    #[test]
    fn note_off_tail_keeps_writing_the_pitch() {
        let mut m = MidiNotes::with_voices(1);
        {
            let mut state = m.state.lock().unwrap();
            state.note_on(69, 50);
            state.note_off(69);
        }
        let mut note = vec![S17::ZERO; 4];
        let mut velocity = vec![S17::from_bits(99); 4];
        m.tick(&[], &mut [&mut note, &mut velocity]);
        assert!(note.iter().all(|&s| s.interpret_as_u71().to_bits() == 69 << 1));
        assert!(velocity.iter().all(|&s| s == S17::ZERO));
    }
}

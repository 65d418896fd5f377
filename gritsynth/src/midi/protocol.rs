use std::error::Error;
use std::fmt;

/// The command of a MIDI 1.0 Channel Voice message: the high nibble of the
/// status byte, carried in bits 20..24 of the packet word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cv1Kind {
    /// A key was released.
    NoteOff,
    /// A key was struck.
    NoteOn,
    /// Per-key pressure.
    PolyPressure,
    /// A controller moved.
    ControlChange,
    /// A program (patch) change.
    ProgramChange,
    /// Whole-channel pressure.
    ChannelPressure,
    /// The pitch wheel moved.
    PitchBend,
}

impl Cv1Kind {
    fn from_nibble(n: u8) -> Option<Cv1Kind> {
        match n {
            0x8 => Some(Cv1Kind::NoteOff),
            0x9 => Some(Cv1Kind::NoteOn),
            0xa => Some(Cv1Kind::PolyPressure),
            0xb => Some(Cv1Kind::ControlChange),
            0xc => Some(Cv1Kind::ProgramChange),
            0xd => Some(Cv1Kind::ChannelPressure),
            0xe => Some(Cv1Kind::PitchBend),
            _ => None,
        }
    }

    // A dense index for filter masks.
    pub(crate) fn index(self) -> usize {
        match self {
            Cv1Kind::NoteOff => 0,
            Cv1Kind::NoteOn => 1,
            Cv1Kind::PolyPressure => 2,
            Cv1Kind::ControlChange => 3,
            Cv1Kind::ProgramChange => 4,
            Cv1Kind::ChannelPressure => 5,
            Cv1Kind::PitchBend => 6,
        }
    }
}

/// A parsed MIDI 1.0 Channel Voice message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    /// The Universal MIDI Packet group.
    pub group: u8,
    /// The command.
    pub kind: Cv1Kind,
    /// The channel, 0 to 15.
    pub channel: u8,
    /// The MIDI note for note on/off and poly pressure, but also the
    /// controller index for control change and the program for program
    /// change.
    pub note: u8,
    /// The velocity for note on/off, or the pressure value.
    pub velocity: u8,
    /// The 14 bit pitch bend value, for pitch bend only.
    pub pitch_bend: u16,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Cv1Kind::PitchBend => write!(f, "ch{} PitchBend {}", self.channel, self.pitch_bend),
            kind => write!(
                f,
                "ch{} {:?} note={} velocity={}",
                self.channel, kind, self.note, self.velocity,
            ),
        }
    }
}

/// A malformed packet stream.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input ran out in the middle of a multi-word packet.
    Truncated {
        /// Words left in the input.
        have: usize,
        /// Words the packet needed.
        need: usize,
    },
    /// A Channel Voice packet with a command nibble outside 0x8..=0xe.
    BadChannelVoice(u8),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Truncated { have, need } => {
                write!(f, "truncated packet: have {have} words, need {need}")
            }
            ParseError::BadChannelVoice(n) => {
                write!(f, "invalid 1.0 channel voice message type: {n:#x}")
            }
        }
    }
}

impl Error for ParseError {}

// The Universal MIDI Packet message-type group, from the top nibble of the
// first word.
const MT_CHANNEL_VOICE1: u8 = 0x2;

// Packet sizes in words by message-type group. Reserved groups get one
// word so a stream with unknown content still advances.
fn message_size(mt: u8) -> usize {
    match mt {
        0x0 | 0x1 | 0x2 | 0x6 | 0x7 => 1,
        0x3 | 0x4 | 0x8 | 0x9 | 0xa => 2,
        0xb | 0xc => 3,
        0x5 | 0xd | 0xe | 0xf => 4,
        _ => 1,
    }
}

fn parse_channel_voice1(word: u32) -> Result<Message, ParseError> {
    let group = ((word >> 24) & 0xf) as u8;
    let nibble = ((word >> 20) & 0xf) as u8;
    let kind = Cv1Kind::from_nibble(nibble).ok_or(ParseError::BadChannelVoice(nibble))?;
    let mut msg = Message {
        group,
        kind,
        channel: ((word >> 16) & 0xf) as u8,
        note: 0,
        velocity: 0,
        pitch_bend: 0,
    };
    match kind {
        Cv1Kind::NoteOff | Cv1Kind::NoteOn | Cv1Kind::PolyPressure | Cv1Kind::ControlChange => {
            msg.note = ((word >> 8) & 0x7f) as u8;
            msg.velocity = (word & 0x7f) as u8;
        }
        Cv1Kind::ProgramChange => {
            msg.note = ((word >> 8) & 0x7f) as u8;
        }
        Cv1Kind::ChannelPressure => {
            msg.velocity = ((word >> 8) & 0x7f) as u8;
        }
        Cv1Kind::PitchBend => {
            let low = ((word >> 8) & 0x7f) as u16;
            let high = (word & 0x7f) as u16;
            msg.pitch_bend = (high << 7) | low;
        }
    }
    Ok(msg)
}

/// Parses one Universal MIDI Packet from the front of `raw`. Returns the
/// message, if the packet was a Channel Voice 1.0 message, and the rest of
/// the input; other packet groups are consumed and discarded.
pub fn parse_message(raw: &[u32]) -> Result<(Option<Message>, &[u32]), ParseError> {
    if raw.is_empty() {
        return Err(ParseError::Truncated { have: 0, need: 1 });
    }
    let mt = (raw[0] >> 28) as u8;
    let size = message_size(mt);
    if raw.len() < size {
        return Err(ParseError::Truncated {
            have: raw.len(),
            need: size,
        });
    }
    if mt == MT_CHANNEL_VOICE1 {
        return Ok((Some(parse_channel_voice1(raw[0])?), &raw[1..]));
    }
    Ok((None, &raw[size..]))
}

/// Calls [parse_message] until the input is exhausted, collecting the
/// Channel Voice messages.
pub fn parse_messages(mut raw: &[u32]) -> Result<Vec<Message>, ParseError> {
    let mut messages = Vec::new();
    while !raw.is_empty() {
        let (msg, rest) = parse_message(raw)?;
        if let Some(m) = msg {
            messages.push(m);
        }
        raw = rest;
    }
    Ok(messages)
}

/// Builds the Channel Voice 1.0 packet word for a note-on.
pub fn note_on(channel: u8, note: u8, velocity: u8) -> u32 {
    cv1_word(0x9, channel, note, velocity)
}

/// Builds the Channel Voice 1.0 packet word for a note-off.
pub fn note_off(channel: u8, note: u8, velocity: u8) -> u32 {
    cv1_word(0x8, channel, note, velocity)
}

fn cv1_word(command: u8, channel: u8, data1: u8, data2: u8) -> u32 {
    ((MT_CHANNEL_VOICE1 as u32) << 28)
        | (((command & 0xf) as u32) << 20)
        | (((channel & 0xf) as u32) << 16)
        | (((data1 & 0x7f) as u32) << 8)
        | ((data2 & 0x7f) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_on_round_trips() {
        let msgs = parse_messages(&[note_on(3, 69, 100)]).unwrap();
        assert_eq!(msgs.len(), 1);
        let m = msgs[0];
        assert_eq!(m.kind, Cv1Kind::NoteOn);
        assert_eq!(m.channel, 3);
        assert_eq!(m.note, 69);
        assert_eq!(m.velocity, 100);
    }

    #[test]
    fn pitch_bend_is_little_end_first() {
        // Status 0xE, lsb 0x01 in byte 2, msb 0x40 in byte 3.
        let word = 0x20e0_0140u32;
        let msgs = parse_messages(&[word]).unwrap();
        assert_eq!(msgs[0].kind, Cv1Kind::PitchBend);
        assert_eq!(msgs[0].pitch_bend, (0x40 << 7) | 0x01);
    }

    #[test]
    fn other_groups_are_skipped_by_size() {
        // A utility word, a two-word data packet, then a note.
        let raw = [0x0000_0000, 0x3000_0000, 0xdead_beef, note_on(0, 60, 1)];
        let msgs = parse_messages(&raw).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].note, 60);
    }

    #[test]
    fn truncated_packet_is_an_error() {
        // A four-word flex data packet with only one word present.
        let err = parse_messages(&[0xd000_0000]).unwrap_err();
        assert_eq!(err, ParseError::Truncated { have: 1, need: 4 });
    }

    #[test]
    fn bad_channel_voice_command_is_an_error() {
        // Group 2 with command nibble 0x3.
        let err = parse_messages(&[0x2030_0000]).unwrap_err();
        assert_eq!(err, ParseError::BadChannelVoice(0x3));
    }

    #[test]
    fn program_and_pressure_use_single_data_bytes() {
        let pc = 0x20c0_0500u32; // program change, program 5
        let cp = 0x20d0_2100u32; // channel pressure, value 0x21
        let msgs = parse_messages(&[pc, cp]).unwrap();
        assert_eq!(msgs[0].kind, Cv1Kind::ProgramChange);
        assert_eq!(msgs[0].note, 5);
        assert_eq!(msgs[1].kind, Cv1Kind::ChannelPressure);
        assert_eq!(msgs[1].velocity, 0x21);
    }
}

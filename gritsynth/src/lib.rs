//! Low bit depth audio synthesis.
//!
//! This crate does sound with 8 bits per sample. Audio moves through a
//! graph of processors ([graph::Ticker]s) in blocks of [fix::S17] samples;
//! the [fix] module supplies the family of 8 bit fixed-point types and the
//! saturating arithmetic the whole engine runs on. The point is the
//! texture: with this little resolution, quantisation and saturation are
//! part of the instrument rather than defects to engineer away.
//!
//! Graphs are wired up once with [serially] and [concurrently] and then
//! ticked from a single audio thread. Sources of change from outside the
//! audio thread (MIDI, in [midi] and [notes]) hand off through locks and
//! bounded queues and never make a tick wait.
//!
//! The building blocks:
//!
//! - [fix]: the number system, plus [fix::Rat44] rate multipliers.
//! - [graph]: the [graph::Ticker] contract and the plumbing combinators.
//! - [interp]: linear interpolation that survives saturation.
//! - [env]: attack-decay and ADSR envelopes.
//! - [osc]: wavetable oscillators.
//! - [buffer], [delay]: a fractional-rate ring buffer and a tape delay.
//! - [pluck]: Karplus-Strong string synthesis.
//! - [notes], [midi]: polyphonic voice allocation fed by Universal MIDI
//!   Packet decoding.
//! - [filter]: a fixed-point state-variable filter.

#![warn(missing_docs)]

pub mod buffer;
pub mod delay;
pub mod env;
pub mod filter;
pub mod fix;
pub mod graph;
pub mod interp;
pub mod midi;
pub mod notes;
pub mod osc;
pub mod pluck;

pub use fix::S17;
pub use graph::{concurrently, serially, Ticker, MAX_BLOCK, MAX_CHANNELS};

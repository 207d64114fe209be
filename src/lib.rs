//! Send side of a reliable-ordered channel over an unreliable link.
//!
//! # Sequence space
//!
//! ```text
//! 0                                                 MAX
//! +------------+---------------------+-----------+-----+
//! |   acked    |      in flight      | sendable  | ... |
//! +------------+---------------------+-----------+-----+
//!              ^                     ^
//!        first_sent            new_seq
//!              |<---------- wnd_size ----------->|
//! ```
//!
//! Numbers live in `[0, MAX]` and wrap around, so every range above may
//! straddle `MAX -> 0`.
//!
//! # Usage
//!
//! - [`utils::SendWnd`] tracks which numbers are in flight and classifies
//!   cumulative acknowledgments
//! - [`layer::Sender`] sits on top of it and retains payloads until they are
//!   acknowledged
//!
//! # Invariants
//!
//! - At most `wnd_size` numbers are in flight
//! - The in-flight numbers are contiguous and start right after the last
//!   acknowledged one
//! - An acknowledgment outside the in-flight range changes nothing

pub mod layer;
pub mod utils;

/// Window over the default 16-bit sequence space.
pub type SendWindow = utils::SendWnd<utils::Seq16>;

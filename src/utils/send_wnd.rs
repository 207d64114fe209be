use thiserror::Error;
use tracing::{debug, trace};

use crate::utils::Seq;

/// How [`SendWnd::on_acked`] classified an acknowledgment.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AckResult {
    /// Nothing in flight matched; the window is untouched.
    Rejected,
    /// The front of the window up to the acknowledged number was released.
    Accepted,
    /// The last sent number was acknowledged and the window drained.
    AcceptedLastSent,
}

impl AckResult {
    #[must_use]
    #[inline]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, AckResult::Rejected)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ResumeError {
    #[error("{sent} sequence numbers in flight exceed the window size {size}")]
    Overflow { sent: usize, size: usize },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct Sent<TSeq> {
    first: TSeq,
    last: TSeq, // inclusive
}

/// Send-side sliding window over a circular sequence space.
///
/// ```text
///      acked        in flight          sendable
/// ----------|-------------------|------------------|----------
///      last_acked  first ... last     new_seq ...
///                  |<------------ size ----------->|
/// ```
///
/// Issues at most `size` unacknowledged sequence numbers and applies
/// cumulative acknowledgments to the front of the in-flight range.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SendWnd<TSeq>
where
    TSeq: Seq,
{
    last_acked: Option<TSeq>,
    sent: Option<Sent<TSeq>>,
    size: usize,
}

impl<TSeq> SendWnd<TSeq>
where
    TSeq: Seq,
{
    fn check_rep(&self) {
        debug_assert!(self.size > 0);
        debug_assert!((self.size as u64) < TSeq::space_len());
        debug_assert!(self.sent_count() <= self.size);
        if let Some(sent) = &self.sent {
            debug_assert_eq!(sent.first, self.acked_edge().successor());
        }
    }

    fn assert_size(size: usize) {
        assert!(size > 0, "window size must be positive");
        assert!(
            (size as u64) < TSeq::space_len(),
            "window size {} must be smaller than the sequence space {}",
            size,
            TSeq::space_len()
        );
    }

    /// A window that has sent and acknowledged nothing.
    ///
    /// # Panics
    ///
    /// If `size` is zero or not smaller than the sequence space.
    /// [`Builder`](crate::layer::Builder) checks this without panicking.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::assert_size(size);
        let this = SendWnd {
            last_acked: None,
            sent: None,
            size,
        };
        this.check_rep();
        this
    }

    /// Restores a window from the last acknowledged and last sent numbers of
    /// an earlier connection.
    ///
    /// Equal seeds give an empty window. Otherwise every number after
    /// `last_acked` up to `last_sent` is in flight.
    ///
    /// # Panics
    ///
    /// Same as [`SendWnd::new`].
    pub fn resume(size: usize, last_acked: TSeq, last_sent: TSeq) -> Result<Self, ResumeError> {
        Self::assert_size(size);
        let sent = match last_sent.sub(&last_acked) {
            0 => None,
            n if n > size => return Err(ResumeError::Overflow { sent: n, size }),
            _ => Some(Sent {
                first: last_acked.successor(),
                last: last_sent,
            }),
        };
        let this = SendWnd {
            last_acked: Some(last_acked),
            sent,
            size,
        };
        this.check_rep();
        Ok(this)
    }

    /// Position before the next number to issue. A fresh window sits at `MAX`
    /// so that it issues `0` first.
    #[inline]
    fn acked_edge(&self) -> TSeq {
        self.last_acked.unwrap_or_else(TSeq::max_value)
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    #[inline]
    pub fn sent_count(&self) -> usize {
        match &self.sent {
            Some(sent) => sent.last.sub(&sent.first) + 1,
            None => 0,
        }
    }

    #[must_use]
    #[inline]
    pub fn sendable_count(&self) -> usize {
        self.size - self.sent_count()
    }

    /// Whether nothing is in flight.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sent.is_none()
    }

    #[must_use]
    #[inline]
    pub fn is_full(&self) -> bool {
        self.sendable_count() == 0
    }

    #[must_use]
    #[inline]
    pub fn first_sent(&self) -> Option<TSeq> {
        self.sent.map(|sent| sent.first)
    }

    #[must_use]
    #[inline]
    pub fn last_sent(&self) -> Option<TSeq> {
        self.sent.map(|sent| sent.last)
    }

    /// `None` until an acknowledgment is accepted, unless the window was
    /// resumed.
    #[must_use]
    #[inline]
    pub fn last_acked(&self) -> Option<TSeq> {
        self.last_acked
    }

    #[must_use]
    pub fn contains(&self, seq: TSeq) -> bool {
        match &self.sent {
            Some(sent) => seq.sub(&sent.first) <= sent.last.sub(&sent.first),
            None => false,
        }
    }

    /// In-flight numbers from first to last sent.
    pub fn iter_in_flight(&self) -> impl Iterator<Item = TSeq> {
        let first = self.acked_edge().successor();
        (0..self.sent_count()).map(move |i| first.add_usize(i))
    }

    /// The number the next outgoing packet must carry, or `None` if the
    /// window is full. Does not reserve the number.
    #[must_use]
    pub fn new_seq(&self) -> Option<TSeq> {
        if self.is_full() {
            return None;
        }
        let prev = match &self.sent {
            Some(sent) => sent.last,
            None => self.acked_edge(),
        };
        Some(prev.successor())
    }

    /// Records that the packet numbered by the last [`SendWnd::new_seq`] was
    /// put on the wire.
    pub fn on_sent(&mut self, seq: TSeq) {
        debug_assert_eq!(
            Some(seq),
            self.new_seq(),
            "sent sequence was not issued by the window"
        );
        let first = self.first_sent().unwrap_or(seq);
        self.sent = Some(Sent { first, last: seq });
        trace!(seq = %seq, in_flight = self.sent_count(), "sequence sent");
        self.check_rep();
    }

    /// Applies a cumulative acknowledgment of every in-flight number up to
    /// and including `seq`.
    ///
    /// Anything outside the in-flight range is rejected without touching the
    /// window, so it is safe to feed with values straight off the network.
    #[must_use]
    pub fn on_acked(&mut self, seq: TSeq) -> AckResult {
        let sent = match self.sent {
            Some(sent) => sent,
            None => {
                debug!(seq = %seq, "acknowledgment rejected: nothing in flight");
                return AckResult::Rejected;
            }
        };

        let offset = seq.sub(&sent.first);
        if offset > sent.last.sub(&sent.first) {
            debug!(
                seq = %seq,
                first = %sent.first,
                last = %sent.last,
                "acknowledgment rejected: outside the in-flight range"
            );
            return AckResult::Rejected;
        }

        self.last_acked = Some(seq);
        let result = if seq == sent.last {
            self.sent = None;
            AckResult::AcceptedLastSent
        } else {
            self.sent = Some(Sent {
                first: seq.successor(),
                last: sent.last,
            });
            AckResult::Accepted
        };
        trace!(
            seq = %seq,
            released = offset + 1,
            in_flight = self.sent_count(),
            "acknowledgment accepted"
        );
        self.check_rep();
        result
    }
}

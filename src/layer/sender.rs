use std::collections::VecDeque;

use crate::utils::{AckResult, Seq, SendWnd};

/// Hands back a payload the to-send queue had no room for.
#[derive(Debug)]
pub struct SendError<T>(pub T);

/// Outcome of [`Sender::on_ack`].
#[derive(Debug)]
pub struct Acked<T> {
    pub result: AckResult,
    /// Payloads released by the acknowledgment, oldest first.
    pub released: Vec<T>,
}

/// Reliable send path of one channel.
///
/// Queues outgoing payloads until the window has room, then retains each
/// sent payload until an acknowledgment covers it.
pub struct Sender<TSeq, T>
where
    TSeq: Seq,
{
    // modified by `to_send` and `output`
    to_send_queue: VecDeque<T>,
    unacked: VecDeque<(TSeq, T)>,
    wnd: SendWnd<TSeq>,

    // const
    to_send_queue_len_cap: usize,
}

impl<TSeq, T> Sender<TSeq, T>
where
    TSeq: Seq,
{
    fn check_rep(&self) {
        debug_assert!(self.to_send_queue.len() <= self.to_send_queue_len_cap);
        debug_assert_eq!(self.unacked.len(), self.wnd.sent_count());
        debug_assert!(self
            .unacked
            .iter()
            .map(|(seq, _)| *seq)
            .eq(self.wnd.iter_in_flight()));
    }

    #[must_use]
    pub(crate) fn new(wnd: SendWnd<TSeq>, to_send_queue_len_cap: usize) -> Self {
        debug_assert!(wnd.is_empty());
        let this = Sender {
            to_send_queue: VecDeque::new(),
            unacked: VecDeque::new(),
            wnd,
            to_send_queue_len_cap,
        };
        this.check_rep();
        this
    }

    #[must_use]
    #[inline]
    pub fn wnd(&self) -> &SendWnd<TSeq> {
        &self.wnd
    }

    #[must_use]
    #[inline]
    pub fn to_send_len(&self) -> usize {
        self.to_send_queue.len()
    }

    /// Nothing is waiting for the window and nothing is in flight.
    #[must_use]
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.to_send_queue.is_empty() && self.wnd.is_empty()
    }

    pub fn to_send(&mut self, payload: T) -> Result<(), SendError<T>> {
        if self.to_send_queue.len() >= self.to_send_queue_len_cap {
            return Err(SendError(payload));
        }
        self.to_send_queue.push_back(payload);
        self.check_rep();
        Ok(())
    }

    /// Numbers the oldest queued payload and returns it for the wire.
    ///
    /// `None` if nothing is queued or the window is full.
    pub fn output(&mut self) -> Option<(TSeq, &T)> {
        if self.to_send_queue.is_empty() {
            return None;
        }
        let seq = self.wnd.new_seq()?;
        let payload = self.to_send_queue.pop_front()?;
        self.wnd.on_sent(seq);
        self.unacked.push_back((seq, payload));
        self.check_rep();
        self.unacked.back().map(|(seq, payload)| (*seq, payload))
    }

    /// Applies an acknowledgment read off the network.
    pub fn on_ack(&mut self, seq: TSeq) -> Acked<T> {
        let in_flight = self.wnd.sent_count();
        let result = self.wnd.on_acked(seq);
        let released = match result {
            AckResult::Rejected => Vec::new(),
            AckResult::Accepted | AckResult::AcceptedLastSent => {
                let n = in_flight - self.wnd.sent_count();
                self.unacked.drain(..n).map(|(_, payload)| payload).collect()
            }
        };
        self.check_rep();
        Acked { result, released }
    }

    /// Sent payloads still waiting for an acknowledgment, oldest first.
    pub fn unacked(&self) -> impl Iterator<Item = (TSeq, &T)> + '_ {
        self.unacked.iter().map(|(seq, payload)| (*seq, payload))
    }

    /// The most recently sent payload, if it is still unacknowledged.
    #[must_use]
    pub fn latest(&self) -> Option<(TSeq, &T)> {
        self.unacked.back().map(|(seq, payload)| (*seq, payload))
    }

    #[must_use]
    pub fn get(&self, seq: TSeq) -> Option<&T> {
        let first = self.wnd.first_sent()?;
        if !self.wnd.contains(seq) {
            return None;
        }
        self.unacked.get(seq.sub(&first)).map(|(_, payload)| payload)
    }
}

mod sender;

use thiserror::Error;

use crate::utils::{ResumeError, Seq, SendWnd};
pub use sender::*;

pub const DEFAULT_WND_SIZE: usize = 4096;
pub const DEFAULT_TO_SEND_QUEUE_LEN_CAP: usize = 1024;

pub struct Builder {
    pub wnd_size: usize,
    pub to_send_queue_len_cap: usize,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum BuildError {
    #[error("window size must be positive")]
    ZeroWindow,
    #[error("window size {size} must be smaller than the sequence space {space}")]
    WindowTooLarge { size: usize, space: u64 },
    #[error("to-send queue capacity must be positive")]
    ZeroQueue,
    #[error(transparent)]
    Resume(#[from] ResumeError),
}

impl Builder {
    fn check_wnd_size<TSeq>(&self) -> Result<(), BuildError>
    where
        TSeq: Seq,
    {
        if self.wnd_size == 0 {
            return Err(BuildError::ZeroWindow);
        }
        let space = TSeq::space_len();
        if self.wnd_size as u64 >= space {
            return Err(BuildError::WindowTooLarge {
                size: self.wnd_size,
                space,
            });
        }
        Ok(())
    }

    pub fn build_wnd<TSeq>(&self) -> Result<SendWnd<TSeq>, BuildError>
    where
        TSeq: Seq,
    {
        self.check_wnd_size::<TSeq>()?;
        Ok(SendWnd::new(self.wnd_size))
    }

    /// Window restored from the state of an earlier connection.
    pub fn resume_wnd<TSeq>(
        &self,
        last_acked: TSeq,
        last_sent: TSeq,
    ) -> Result<SendWnd<TSeq>, BuildError>
    where
        TSeq: Seq,
    {
        self.check_wnd_size::<TSeq>()?;
        Ok(SendWnd::resume(self.wnd_size, last_acked, last_sent)?)
    }

    pub fn build<TSeq, T>(self) -> Result<Sender<TSeq, T>, BuildError>
    where
        TSeq: Seq,
    {
        if self.to_send_queue_len_cap == 0 {
            return Err(BuildError::ZeroQueue);
        }
        let wnd = self.build_wnd()?;
        Ok(Sender::new(wnd, self.to_send_queue_len_cap))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            wnd_size: DEFAULT_WND_SIZE,
            to_send_queue_len_cap: DEFAULT_TO_SEND_QUEUE_LEN_CAP,
        }
    }
}

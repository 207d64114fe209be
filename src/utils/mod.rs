mod mod_seq;
mod send_wnd;
mod seq;
mod seq16;

pub use mod_seq::*;
pub use send_wnd::*;
pub use seq::*;
pub use seq16::*;

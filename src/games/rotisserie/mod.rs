//! Rotisserie Nim.
//!
//! Piles of sticks wait in a queue. On a turn the player takes the whole
//! front pile and may put a strictly smaller, non-empty pile at the back
//! of the queue. Both players have the same options; the player facing
//! an empty queue cannot move and loses.
//!
//! Every move lowers the total number of sticks, so play always ends.

mod game;

pub use game::{RotisserieFactory, RotisserieNim};

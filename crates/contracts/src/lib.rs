//! Wire types shared between the analytics front end and its backend.

pub mod ai;
pub mod emissions;
pub mod enums;
pub mod system;

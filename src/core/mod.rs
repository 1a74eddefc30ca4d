//! Core puzzle engine: difficulty catalog, generation, weighing, guessing,
//! and the session that owns the live state.

#![allow(unused_imports)]

pub mod constants;
pub mod difficulty;
pub mod error;
pub mod generation;
pub mod guess;
pub mod instance;
pub mod session;
pub mod weighing;

pub use difficulty::*;
pub use error::*;
pub use generation::*;
pub use guess::*;
pub use instance::*;
pub use session::*;
pub use weighing::*;

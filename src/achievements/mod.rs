//! Achievements: declarative unlock table, state, and persistence.

#![allow(unused_imports)]

pub mod data;
pub mod persistence;
pub mod types;

pub use data::*;
pub use persistence::*;
pub use types::*;

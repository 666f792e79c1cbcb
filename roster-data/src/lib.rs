extern crate alloc;

mod common;
mod datastore;
mod habitats;
mod mons;
mod moves;
pub mod sources;
mod trainers;

pub use common::*;
pub use datastore::*;
pub use habitats::*;
pub use mons::*;
pub use moves::*;
pub use trainers::*;

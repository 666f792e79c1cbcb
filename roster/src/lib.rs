extern crate alloc;

pub mod config;
pub mod coverage;
pub mod error;
pub mod evolution;
pub mod generator;
pub mod index;
pub mod moveset;
pub mod repository;
pub mod selection;
pub mod teams;

mod test_util;

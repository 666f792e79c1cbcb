mod team_generator;

pub use team_generator::TeamGenerator;

mod difficulty;
mod notice;
mod request;
mod role;
mod team;

pub use difficulty::{
    Difficulty,
    DifficultyTable,
};
pub use notice::GenerationNotice;
pub use request::GenerationRequest;
pub use role::Role;
pub use team::{
    GeneratedTeam,
    Provenance,
    TeamMember,
};

mod candidate_index;
mod candidate_query;
mod generation;

pub use candidate_index::CandidateIndex;
pub use candidate_query::CandidateQuery;
pub use generation::{
    Generation,
    GenerationScope,
};

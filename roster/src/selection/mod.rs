mod selection_config;
mod selection_engine;
mod team_state;

pub use selection_config::{
    BstCurve,
    SelectionConfig,
    TierWeightBand,
};
pub use selection_engine::{
    Pick,
    SelectionEngine,
    SlotContext,
};
pub(crate) use team_state::threatened_by;
pub use team_state::TeamState;

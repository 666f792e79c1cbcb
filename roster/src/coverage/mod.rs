mod coverage_analyzer;
mod coverage_config;
mod coverage_report;

pub use coverage_analyzer::{
    CoverageAnalyzer,
    SuggestionScope,
};
pub use coverage_config::{
    CoverageConfig,
    GradeThresholds,
};
pub use coverage_report::{
    CoverageReport,
    CoverageSuggestion,
    DefensiveProfile,
    Grade,
    SuggestionReason,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    coverage::Grade,
    teams::DifficultyTable,
};

/// Minimum scores for each passing grade. Anything below `d` is an F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl GradeThresholds {
    pub fn grade(&self, score: f64) -> Grade {
        if score >= self.a {
            Grade::A
        } else if score >= self.b {
            Grade::B
        } else if score >= self.c {
            Grade::C
        } else if score >= self.d {
            Grade::D
        } else {
            Grade::F
        }
    }
}

/// Tuning for team coverage grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Points deducted from the graded score per critical weakness.
    pub critical_weakness_penalty: f64,
    pub grade_thresholds: DifficultyTable<GradeThresholds>,
    /// Maximum replacement candidates proposed per suggestion.
    pub max_suggestion_candidates: usize,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            critical_weakness_penalty: 10.0,
            grade_thresholds: DifficultyTable {
                easy: GradeThresholds {
                    a: 60.0,
                    b: 45.0,
                    c: 30.0,
                    d: 15.0,
                },
                normal: GradeThresholds {
                    a: 70.0,
                    b: 55.0,
                    c: 40.0,
                    d: 25.0,
                },
                hard: GradeThresholds {
                    a: 80.0,
                    b: 65.0,
                    c: 50.0,
                    d: 35.0,
                },
                expert: GradeThresholds {
                    a: 90.0,
                    b: 75.0,
                    c: 60.0,
                    d: 45.0,
                },
            },
            max_suggestion_candidates: 5,
        }
    }
}

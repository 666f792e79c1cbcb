use std::fmt::Display;

use thiserror::Error;

/// A fatal error in a generation request or the data backing it.
///
/// Every problem found is reported at once, so a caller can fix a request in one pass.
#[derive(Debug, Default, Error)]
pub struct ConfigurationError {
    problems: Vec<String>,
}

impl ConfigurationError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Adds a problem.
    pub fn add_problem<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into());
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Returns `Ok` if no problems were found.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid configuration: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ConfigurationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

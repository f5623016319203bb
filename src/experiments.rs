//! Active A/B experiment registry.
//!
//! The remote `/me` endpoint wants the caller's active experiment names as
//! a CSV query parameter so variant assignment stays consistent across the
//! bootstrap boundary.

/// One active A/B test. The datestamp identifies the experiment's
/// assignment epoch and is part of its wire identity
/// (e.g. `signupFlow_20250818`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    pub name: String,
    pub datestamp: String,
}

impl Experiment {
    #[must_use]
    pub fn new(name: impl Into<String>, datestamp: impl Into<String>) -> Self {
        Self { name: name.into(), datestamp: datestamp.into() }
    }
}

/// The set of experiments currently running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentSet {
    tests: Vec<Experiment>,
}

impl ExperimentSet {
    #[must_use]
    pub fn new(tests: Vec<Experiment>) -> Self {
        Self { tests }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Render the active test names as CSV, optionally suffixing each name
    /// with its assignment datestamp.
    #[must_use]
    pub fn active_test_names(&self, append_datestamp: bool) -> String {
        self.tests
            .iter()
            .map(|t| {
                if append_datestamp {
                    format!("{}_{}", t.name, t.datestamp)
                } else {
                    t.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
#[path = "experiments_test.rs"]
mod tests;

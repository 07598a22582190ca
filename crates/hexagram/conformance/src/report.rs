use std::fmt;

/// Result of running a single conformance check.
#[derive(Clone, Debug)]
pub struct CheckResult {
    /// Short name of the check, e.g. "codec.bijection".
    pub name: String,
    /// Whether the guarantee holds.
    pub passed: bool,
    /// What was checked.
    pub description: String,
    /// Details when the check failed.
    pub details: Option<String>,
}

impl CheckResult {
    pub fn pass(name: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            passed: true,
            description: description.into(),
            details: None,
        }
    }

    pub fn fail(name: &str, description: &str, details: &str) -> Self {
        Self {
            name: name.into(),
            passed: false,
            description: description.into(),
            details: Some(details.into()),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}: {}", status, self.name, self.description)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Aggregate outcome of the whole suite.
#[derive(Clone, Debug, Default)]
pub struct ConformanceReport {
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// True when every check passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Names of the checks that failed.
    pub fn failures(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.name.as_str())
            .collect()
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        let failed = self.results.iter().filter(|r| !r.passed).count();
        write!(
            f,
            "{} checks, {} failed",
            self.results.len(),
            failed
        )
    }
}

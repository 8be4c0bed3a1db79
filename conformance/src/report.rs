//! Conformance report types: results, severity levels, and report aggregation.

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check found something unusual that does not break consumers.
    Warning,
    /// The check failed.
    Failure,
}

impl Severity {
    /// Short uppercase tag used in printed reports.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Identifier of the validator that produced this result, e.g. `table/range`.
    pub validator: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending lines or entries, one per item.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: &'static str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Creates a warning result.
    pub fn warn(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Passes when `details` is empty, otherwise fails listing them.
    pub fn from_violations(
        validator: &'static str,
        pass_message: impl Into<String>,
        fail_message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        if details.is_empty() {
            Self::pass(validator, pass_message)
        } else {
            Self {
                details,
                ..Self::fail(validator, fail_message)
            }
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All individual results, in the order the validators ran.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Failed results produced by `validator`.
    pub fn failures_from<'a>(
        &'a self,
        validator: &'a str,
    ) -> impl Iterator<Item = &'a TestResult> + 'a {
        self.results
            .iter()
            .filter(move |r| r.is_failure() && r.validator == validator)
    }
}

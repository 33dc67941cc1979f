//! Finding and category result types.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Costs many points; fix first
    Critical,
    /// Worth fixing
    Warning,
    /// Minor or advisory
    Info,
}

/// Marker for findings that report something done right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// A passed check
    Success,
}

/// One reported fact about the page.
///
/// Exactly one of `severity` and `kind` is set: issues carry a severity,
/// successes carry `kind = Success`. Use [`Finding::issue`] and
/// [`Finding::success`] to build them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity of an issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Set for successes
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FindingKind>,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// A problem with the given severity.
    pub fn issue(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity: Some(severity),
            kind: None,
            message: message.into(),
        }
    }

    /// A passed check.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: None,
            kind: Some(FindingKind::Success),
            message: message.into(),
        }
    }

    /// Whether this finding reports a passed check.
    pub fn is_success(&self) -> bool {
        self.kind == Some(FindingKind::Success)
    }
}

/// Value of an auxiliary metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// A count or measurement
    Integer(u64),
    /// A yes/no fact
    Bool(bool),
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::Integer(v)
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Integer(v as u64)
    }
}

impl From<bool> for MetricValue {
    fn from(v: bool) -> Self {
        MetricValue::Bool(v)
    }
}

/// Auxiliary data reported next to a score, in insertion order.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics(Vec<(&'static str, MetricValue)>);

impl Metrics {
    /// Creates an empty set of metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a metric (builder style).
    pub fn with(mut self, name: &'static str, value: impl Into<MetricValue>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    /// Looks up a metric by name.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    /// Iterates over metrics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, MetricValue)> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Outcome of one category analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResult {
    /// Score in `0..=100`
    pub score: u8,
    /// Successes and issues in the order they were emitted
    pub findings: Vec<Finding>,
    /// Auxiliary data
    pub metrics: Option<Metrics>,
}

impl CategoryResult {
    /// Attaches metrics to the result.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Issues only (successes filtered out).
    pub fn issues(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_success())
    }

    /// Whether some finding's message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.findings.iter().any(|f| f.message.contains(needle))
    }
}

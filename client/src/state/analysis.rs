//! Static comparison data for the analysis view.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

/// One row of the comparison chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceMetric {
    pub name: &'static str,
    pub traditional: f64,
    pub blockchain: f64,
}

pub const PERFORMANCE_METRICS: [PerformanceMetric; 5] = [
    PerformanceMetric { name: "Query Time", traditional: 120.0, blockchain: 80.0 },
    PerformanceMetric { name: "Verification Time", traditional: 200.0, blockchain: 150.0 },
    PerformanceMetric { name: "Security Score", traditional: 75.0, blockchain: 95.0 },
    PerformanceMetric { name: "Decentralization", traditional: 20.0, blockchain: 100.0 },
    PerformanceMetric { name: "Cost Efficiency", traditional: 60.0, blockchain: 85.0 },
];

/// Which system a chart series describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum System {
    Traditional,
    Blockchain,
}

impl System {
    pub const ALL: [Self; 2] = [Self::Traditional, Self::Blockchain];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Traditional => "Traditional",
            Self::Blockchain => "Blockchain",
        }
    }

    /// Stroke colour of the series line.
    #[must_use]
    pub fn stroke(self) -> &'static str {
        match self {
            Self::Traditional => "#8884d8",
            Self::Blockchain => "#82ca9d",
        }
    }

    #[must_use]
    pub fn value(self, metric: &PerformanceMetric) -> f64 {
        match self {
            Self::Traditional => metric.traditional,
            Self::Blockchain => metric.blockchain,
        }
    }
}

/// Values of one system across all metrics, in table order.
pub fn series(system: System) -> Vec<f64> {
    PERFORMANCE_METRICS.iter().map(|m| system.value(m)).collect()
}

/// Largest value in the table, used to scale the chart.
pub fn max_value() -> f64 {
    PERFORMANCE_METRICS
        .iter()
        .flat_map(|m| [m.traditional, m.blockchain])
        .fold(0.0, f64::max)
}

/// Qualitative claim shown beneath the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDifference {
    pub title: &'static str,
    pub claim: &'static str,
}

pub const KEY_DIFFERENCES: [KeyDifference; 4] = [
    KeyDifference {
        title: "Security",
        claim: "Blockchain provides enhanced security through cryptographic proofs",
    },
    KeyDifference { title: "Decentralization", claim: "No single point of failure" },
    KeyDifference { title: "Immutability", claim: "Records cannot be altered once verified" },
    KeyDifference { title: "Transparency", claim: "All verifications are publicly auditable" },
];

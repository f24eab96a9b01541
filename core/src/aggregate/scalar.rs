//! Scalar statistics: rendered as a single labeled value, never previewed.

use shorts_types::AnalysisAggregate;

use super::format::{format_decimal, humanize_key};

/// Qualitative bucket for a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    VeryStrong,
    Strong,
    Weak,
    Negligible,
    NotApplicable,
}

impl CorrelationStrength {
    /// `|r| >= 0.7` very strong, `>= 0.4` strong, `>= 0.2` weak, else negligible.
    pub fn classify(r: Option<f64>) -> Self {
        let Some(r) = r.filter(|r| r.is_finite()) else {
            return CorrelationStrength::NotApplicable;
        };
        let magnitude = r.abs();
        if magnitude >= 0.7 {
            CorrelationStrength::VeryStrong
        } else if magnitude >= 0.4 {
            CorrelationStrength::Strong
        } else if magnitude >= 0.2 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorrelationStrength::VeryStrong => "very strong",
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::Weak => "weak",
            CorrelationStrength::Negligible => "negligible",
            CorrelationStrength::NotApplicable => "not applicable",
        }
    }
}

/// A single labeled value card.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarStat {
    pub label: String,
    pub value: String,
    /// Correlation bucket, for correlation cards only
    pub strength: Option<CorrelationStrength>,
}

/// Average title length followed by every correlation in payload order.
pub fn scalar_stats(analysis: &AnalysisAggregate) -> Vec<ScalarStat> {
    let mut stats = vec![ScalarStat {
        label: "Average Title Length".to_string(),
        value: format!(
            "{} chars",
            format_decimal(analysis.title_length_analysis.average_title_length)
        ),
        strength: None,
    }];

    for (name, r) in analysis.correlation_analysis.entries() {
        let strength = CorrelationStrength::classify(*r);
        let value = match r {
            Some(r) if strength != CorrelationStrength::NotApplicable => format!("{r:+.2}"),
            _ => "n/a".to_string(),
        };
        stats.push(ScalarStat {
            label: humanize_key(name),
            value,
            strength: Some(strength),
        });
    }

    stats
}

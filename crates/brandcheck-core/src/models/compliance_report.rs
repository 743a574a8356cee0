use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Criterion, CriterionResult};

/// Aggregated outcome of one assessment request.
///
/// `total_score` is derived from `results` at construction and the fields are
/// read-only afterwards, so `total_score == Σ max(verdict, 0)` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    total_score: u8,
    results: Vec<CriterionResult>,
}

impl ComplianceReport {
    /// Build a report from results already in evaluation order.
    pub fn from_results(results: Vec<CriterionResult>) -> Self {
        let total_score = results
            .iter()
            .fold(0u8, |total, r| total.saturating_add(r.verdict.contribution()));
        Self {
            total_score,
            results,
        }
    }

    pub fn total_score(&self) -> u8 {
        self.total_score
    }

    pub fn results(&self) -> &[CriterionResult] {
        &self.results
    }

    /// Look up the result for one criterion.
    pub fn get(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.results.iter().find(|r| r.criterion == criterion)
    }

    /// Whether every criterion passed.
    pub fn is_fully_compliant(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.verdict.is_compliant())
    }

    /// Render the JSON shape handed back across the transport boundary.
    pub fn to_transport(&self) -> TransportReport {
        TransportReport {
            value: self.total_score,
            reasoning: Reasoning(
                self.results
                    .iter()
                    .map(|r| (r.criterion.label().to_string(), r.explanation.clone()))
                    .collect(),
            ),
        }
    }
}

/// `{ "value": <total>, "reasoning": { "<label>": "<explanation>", ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportReport {
    pub value: u8,
    pub reasoning: Reasoning,
}

/// Label → explanation pairs, serialized as a JSON object in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reasoning(pub Vec<(String, String)>);

impl Reasoning {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Reasoning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, explanation) in &self.0 {
            map.serialize_entry(label, explanation)?;
        }
        map.end()
    }
}

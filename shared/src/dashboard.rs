//! AI manufacturing snapshot served by `/ai-manufacturing/dashboard` and
//! `/ai-manufacturing/analyze`.

use crate::format::round_half_up;
use crate::thresholds::{
    Band, EQUIPMENT_FAILURE, ENERGY_EFFICIENCY, QUALITY_ISSUES, Severity, Tone, status_tone,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Predictions {
    pub production_efficiency: f64,
    pub quality_prediction: f64,
    pub defect_probability: f64,
    pub energy_optimization: f64,
    /// Days until the next maintenance window.
    pub maintenance_prediction: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsight {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub confidence: f64,
    pub action: String,
    pub icon: String,
}

impl AiInsight {
    pub fn severity_level(&self) -> Severity {
        Severity::parse(&self.severity)
    }

    pub fn tone(&self) -> Tone {
        self.severity_level().tone()
    }

    pub fn severity_badge(&self) -> String {
        self.severity.to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    pub ai_accuracy: f64,
    /// Terabytes.
    pub data_processed: f64,
    pub models_running: u64,
    pub predictions_today: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturingStatus {
    pub name: String,
    pub status: String,
    pub description: String,
    pub badge: String,
}

impl ManufacturingStatus {
    pub fn tone(&self) -> Tone {
        status_tone(&self.status)
    }
}

/// Wire shape; every section may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    pub predictions: Option<Predictions>,
    pub insights: Option<Vec<AiInsight>>,
    pub performance: Option<PerformanceMetrics>,
    pub status: Option<Vec<ManufacturingStatus>>,
    /// Naive ISO timestamp, only sent by the analyze route.
    pub last_update: Option<String>,
}

/// What the dashboard renders after applying a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub predictions: Predictions,
    pub insights: Vec<AiInsight>,
    pub performance: PerformanceMetrics,
    pub status: Vec<ManufacturingStatus>,
    /// `HH:MM:SS` of the last refresh, when known.
    pub last_update: Option<String>,
}

fn clock_label(timestamp: &str) -> Option<String> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(timestamp, pattern).ok())
        .map(|at| at.format("%H:%M:%S").to_string())
}

impl DashboardState {
    /// Missing predictions and metrics keep their previous values, missing
    /// lists are cleared.
    pub fn merge(&self, snapshot: DashboardSnapshot) -> Self {
        Self {
            predictions: snapshot
                .predictions
                .unwrap_or_else(|| self.predictions.clone()),
            insights: snapshot.insights.unwrap_or_default(),
            performance: snapshot
                .performance
                .unwrap_or_else(|| self.performance.clone()),
            status: snapshot.status.unwrap_or_default(),
            last_update: snapshot.last_update.as_deref().and_then(clock_label),
        }
    }

    pub fn with_last_update(mut self, label: impl Into<String>) -> Self {
        if self.last_update.is_none() {
            self.last_update = Some(label.into());
        }
        self
    }
}

impl From<DashboardSnapshot> for DashboardState {
    fn from(snapshot: DashboardSnapshot) -> Self {
        DashboardState::default().merge(snapshot)
    }
}

/// Short-range projections shown on the predictions tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forecast {
    pub next_day_output: i64,
    pub next_week_efficiency: i64,
    pub next_month_defect_reduction: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub label: &'static str,
    pub band: Band,
    pub percent: i64,
}

impl RiskAssessment {
    pub fn badge_text(&self) -> String {
        format!("{} ({}%)", self.band.risk_label(), self.percent)
    }
}

impl Predictions {
    pub fn forecast(&self) -> Forecast {
        Forecast {
            next_day_output: round_half_up(self.production_efficiency / 100.0 * 12.0) as i64,
            next_week_efficiency: round_half_up(self.production_efficiency / 100.0 * 8.0) as i64,
            next_month_defect_reduction: round_half_up(self.defect_probability * 0.8) as i64,
        }
    }

    pub fn risk_assessments(&self) -> Vec<RiskAssessment> {
        vec![
            RiskAssessment {
                label: "Equipment Failure Risk",
                band: EQUIPMENT_FAILURE.classify(self.maintenance_prediction),
                percent: round_half_up((30.0 - self.maintenance_prediction) / 30.0 * 100.0) as i64,
            },
            RiskAssessment {
                label: "Quality Issues Risk",
                band: QUALITY_ISSUES.classify(self.defect_probability),
                percent: round_half_up(self.defect_probability) as i64,
            },
            RiskAssessment {
                label: "Energy Efficiency Risk",
                band: ENERGY_EFFICIENCY.classify(self.energy_optimization),
                percent: round_half_up(100.0 - self.energy_optimization) as i64,
            },
        ]
    }
}

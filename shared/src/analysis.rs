//! Workforce analytics aggregate served by `/analysis`, and its reshaping into
//! chart-ready series.

use crate::format::{dollars, fixed, round_half_up, truncate};
use crate::thresholds::Tone;
use derive_more::Deref;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// JSON object decoded as a list of entries in document order.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Keyed<T>(Vec<(String, T)>);

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Keyed(Vec::new())
    }
}

impl<T> Keyed<T> {
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
            type Value = Keyed<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(Keyed(entries))
            }
        }

        deserializer.deserialize_map(KeyedVisitor(PhantomData))
    }
}

/// Label → count (or rate) pairs.
pub type Distribution = Keyed<f64>;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub total_employees: u64,
    pub attrition_rate: f64,
    pub avg_age: f64,
    pub avg_monthly_income: f64,
    pub avg_years_at_company: f64,
}

/// Scores are fractions in `0..=1`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SkillAnalysis {
    pub avg_operator_skill: f64,
    pub avg_required_skill: f64,
    pub skill_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SalaryStats {
    pub mean: f64,
    pub median: f64,
    pub std: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TrainingAnalysis {
    pub avg_training_last_year: f64,
    pub total_training_sessions: f64,
    pub employees_needing_training: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PerformanceSummary {
    pub avg_performance_rating: f64,
    pub high_performers: f64,
    pub avg_job_involvement: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DistanceAnalysis {
    pub avg_distance: f64,
    pub max_distance: f64,
    pub remote_workers: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TenureAnalysis {
    pub avg_years_at_company: f64,
    pub avg_years_in_role: f64,
    pub avg_years_since_promotion: f64,
    pub avg_years_with_manager: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub department_distribution: Distribution,
    pub job_role_distribution: Distribution,
    pub gender_distribution: Distribution,
    pub marital_status_distribution: Distribution,
    pub skill_analysis: SkillAnalysis,
    pub education_field_distribution: Distribution,
    pub job_satisfaction_distribution: Distribution,
    pub salary_by_department: Keyed<SalaryStats>,
    pub salary_by_role: Distribution,
    pub training_analysis: TrainingAnalysis,
    pub performance_metrics: PerformanceSummary,
    pub work_life_balance: Distribution,
    pub distance_analysis: DistanceAnalysis,
    pub overtime_analysis: Distribution,
    pub attrition_by_department: Distribution,
    pub attrition_rate_by_department: Distribution,
    pub tenure_analysis: TenureAnalysis,
    pub age_group_distribution: Distribution,
    pub income_group_distribution: Distribution,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub full_label: String,
    pub value: f64,
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub value: f64,
    pub percent: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBar {
    pub department: String,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttritionBar {
    pub department: String,
    pub count: f64,
    pub rate: Option<f64>,
}

/// Text card on the insights tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub tone: Tone,
    pub title: String,
    pub body: String,
}

impl Distribution {
    pub fn points(&self) -> Vec<ChartPoint> {
        self.iter()
            .map(|(label, value)| ChartPoint {
                label: label.clone(),
                full_label: label.clone(),
                value: *value,
            })
            .collect()
    }

    /// Long labels are cut for the axis; `full_label` keeps the original.
    pub fn truncated_points(&self, max_chars: usize, limit: usize) -> Vec<ChartPoint> {
        self.iter()
            .take(limit)
            .map(|(label, value)| ChartPoint {
                label: truncate(label, max_chars),
                full_label: label.clone(),
                value: *value,
            })
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    pub fn shares(&self) -> Vec<Share> {
        let total = self.total();
        self.iter()
            .map(|(label, value)| Share {
                label: label.clone(),
                value: *value,
                percent: if total > 0.0 {
                    round_half_up(value / total * 100.0) as i64
                } else {
                    0
                },
            })
            .collect()
    }
}

impl AnalysisReport {
    pub fn department_chart(&self) -> Vec<ChartPoint> {
        self.department_distribution.points()
    }

    pub fn job_role_chart(&self) -> Vec<ChartPoint> {
        self.job_role_distribution.truncated_points(15, 9)
    }

    pub fn education_chart(&self) -> Vec<ChartPoint> {
        self.education_field_distribution
            .truncated_points(15, usize::MAX)
    }

    pub fn work_life_chart(&self) -> Vec<ChartPoint> {
        self.work_life_balance
            .iter()
            .map(|(level, value)| ChartPoint {
                label: format!("Level {}", level),
                full_label: format!("Level {}", level),
                value: *value,
            })
            .collect()
    }

    pub fn salary_chart(&self) -> Vec<SalaryBar> {
        self.salary_by_department
            .iter()
            .map(|(department, stats)| SalaryBar {
                department: department.clone(),
                mean: stats.mean,
                median: stats.median,
            })
            .collect()
    }

    pub fn attrition_chart(&self) -> Vec<AttritionBar> {
        self.attrition_by_department
            .iter()
            .map(|(department, count)| AttritionBar {
                department: department.clone(),
                count: *count,
                rate: self.attrition_rate_by_department.get(department).copied(),
            })
            .collect()
    }

    /// The backend already orders roles by pay, highest first.
    pub fn top_paying_roles(&self) -> Vec<(String, f64)> {
        self.salary_by_role.iter().take(5).cloned().collect()
    }

    pub fn retention_rate(&self) -> f64 {
        100.0 - self.summary.attrition_rate
    }

    pub fn overtime_yes(&self) -> f64 {
        self.overtime_analysis.get("Yes").copied().unwrap_or(0.0)
    }

    pub fn overtime_no(&self) -> f64 {
        self.overtime_analysis.get("No").copied().unwrap_or(0.0)
    }

    pub fn overtime_share(&self) -> f64 {
        if self.summary.total_employees == 0 {
            return 0.0;
        }
        self.overtime_yes() / self.summary.total_employees as f64 * 100.0
    }

    pub fn high_performer_share(&self) -> f64 {
        if self.summary.total_employees == 0 {
            return 0.0;
        }
        self.performance_metrics.high_performers / self.summary.total_employees as f64 * 100.0
    }

    /// Findings worded from the report itself.
    pub fn narrative_insights(&self) -> Vec<Narrative> {
        let mut insights = Vec::new();
        let average = self.summary.attrition_rate;

        let hot_spots: Vec<(&String, f64)> = self
            .attrition_rate_by_department
            .iter()
            .filter(|(_, rate)| *rate > average)
            .map(|(department, rate)| (department, *rate))
            .collect();

        if hot_spots.is_empty() {
            insights.push(Narrative {
                tone: Tone::Positive,
                title: "Attrition Within Company Average".to_string(),
                body: format!(
                    "No department exceeds the company attrition rate of {}%.",
                    fixed(average, 1)
                ),
            });
        } else {
            let names: Vec<&str> = hot_spots.iter().map(|(d, _)| d.as_str()).collect();
            let rates: Vec<String> = hot_spots
                .iter()
                .map(|(d, rate)| format!("{} {}%", d, fixed(*rate, 2)))
                .collect();
            insights.push(Narrative {
                tone: Tone::Critical,
                title: format!("High Risk: Attrition in {}", names.join(" & ")),
                body: format!(
                    "{} (above company average of {}%). Focus on employee satisfaction surveys and retention programs.",
                    rates.join(", "),
                    fixed(average, 1)
                ),
            });
        }

        insights.push(Narrative {
            tone: Tone::Caution,
            title: "Overtime Concerns".to_string(),
            body: format!(
                "{}% of employees work overtime. Consider hiring additional staff to improve work-life balance.",
                fixed(self.overtime_share(), 1)
            ),
        });

        insights.push(Narrative {
            tone: Tone::Info,
            title: "Training Opportunities".to_string(),
            body: format!(
                "{} employees haven't received training in the past year. Implement a structured training program to upskill workforce.",
                self.training_analysis.employees_needing_training
            ),
        });

        let skill = &self.skill_analysis;
        let operator = fixed(skill.avg_operator_skill * 100.0, 1);
        let required = fixed(skill.avg_required_skill * 100.0, 1);
        if skill.avg_operator_skill >= skill.avg_required_skill {
            insights.push(Narrative {
                tone: Tone::Positive,
                title: "Positive: Operator Skills Exceed Requirements".to_string(),
                body: format!(
                    "On average, operator skills ({}%) exceed required levels ({}%).",
                    operator, required
                ),
            });
        } else {
            insights.push(Narrative {
                tone: Tone::Caution,
                title: "Operator Skills Below Requirements".to_string(),
                body: format!(
                    "On average, operator skills ({}%) trail required levels ({}%). Prioritise role-specific training.",
                    operator, required
                ),
            });
        }

        let top = self
            .salary_by_department
            .iter()
            .max_by(|(_, a), (_, b)| a.mean.total_cmp(&b.mean));
        if let Some((department, stats)) = top {
            let company = self.summary.avg_monthly_income;
            let spread = if company > 0.0 {
                self.salary_by_department
                    .iter()
                    .map(|(_, s)| ((s.mean - company) / company * 100.0).abs())
                    .fold(0.0, f64::max)
            } else {
                0.0
            };
            insights.push(Narrative {
                tone: Tone::Neutral,
                title: "Compensation Equity".to_string(),
                body: format!(
                    "{} leads with highest average salary ({}), while department averages stay within ±{}% of the company mean.",
                    department,
                    dollars(round_half_up(stats.mean)),
                    fixed(spread, 1)
                ),
            });
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"{
        "summary": {
            "total_employees": 200,
            "attrition_rate": 14.5,
            "avg_age": 36.92,
            "avg_monthly_income": 65000.0,
            "avg_years_at_company": 7.15
        },
        "department_distribution": {"Production": 80, "Maintenance": 50, "Logistics": 40, "Farm Operations": 30},
        "job_role_distribution": {
            "Milk Processing Operator": 30, "Maintenance Engineer": 25, "Dairy Quality Analyst": 20,
            "Logistics & Supply Chain Coordinator": 18, "Cold Storage Supervisor": 16, "Packaging Operator": 15,
            "Plant Manager": 14, "Boiler Operator": 12, "Lab Technician": 10, "Driver": 8
        },
        "gender_distribution": {"Male": 120, "Female": 80},
        "skill_analysis": {"avg_operator_skill": 0.612, "avg_required_skill": 0.548, "skill_gap": -0.064},
        "education_field_distribution": {"Mechanical Engineering": 60, "Dairy Science": 140},
        "salary_by_department": {
            "Farm Operations": {"mean": 63000.0, "median": 62000.0, "std": 9000.5},
            "Logistics": {"mean": 64000.0, "median": 63500.0, "std": null},
            "Maintenance": {"mean": 66500.0, "median": 66000.0, "std": 8100.0}
        },
        "salary_by_role": {"Plant Manager": 98000.0, "Maintenance Engineer": 76000.0, "Lab Technician": 70000.0,
                           "Boiler Operator": 65000.0, "Driver": 52000.0, "Packaging Operator": 48000.0},
        "training_analysis": {"avg_training_last_year": 2.8, "total_training_sessions": 560, "employees_needing_training": 7},
        "performance_metrics": {"avg_performance_rating": 3.1, "high_performers": 47, "avg_job_involvement": 2.73},
        "work_life_balance": {"1": 10, "2": 45, "3": 120, "4": 25},
        "overtime_analysis": {"No": 150, "Yes": 50},
        "attrition_by_department": {"Production": 9, "Maintenance": 9, "Logistics": 5},
        "attrition_rate_by_department": {"Production": 11.25, "Maintenance": 18.0, "Logistics": 12.5}
    }"#;

    fn report() -> AnalysisReport {
        serde_json::from_str(REPORT).unwrap()
    }

    #[test]
    fn distributions_keep_document_order() {
        let labels: Vec<String> = report().department_chart().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Production", "Maintenance", "Logistics", "Farm Operations"]);
    }

    #[test]
    fn job_roles_are_capped_and_truncated() {
        let chart = report().job_role_chart();
        assert_eq!(chart.len(), 9);
        assert_eq!(chart[0].label, "Milk Processing");
        assert_eq!(chart[0].full_label, "Milk Processing Operator");
        assert_eq!(chart[8].label, "Lab Technician");
    }

    #[test]
    fn attrition_joins_counts_with_rates() {
        let chart = report().attrition_chart();
        assert_eq!(
            chart[1],
            AttritionBar {
                department: "Maintenance".into(),
                count: 9.0,
                rate: Some(18.0),
            }
        );
    }

    #[test]
    fn salary_series_and_top_roles() {
        let report = report();
        let salary = report.salary_chart();
        assert_eq!(salary.len(), 3);
        assert_eq!(salary[2].mean, 66500.0);
        assert_eq!(report.salary_by_department.get("Logistics").unwrap().std, None);

        let roles: Vec<String> = report.top_paying_roles().into_iter().map(|(r, _)| r).collect();
        assert_eq!(roles.len(), 5);
        assert_eq!(roles[0], "Plant Manager");
    }

    #[test]
    fn pie_shares_are_whole_percentages() {
        let shares = report().gender_distribution.shares();
        assert_eq!(shares[0].percent, 60);
        assert_eq!(shares[1].percent, 40);
        assert!(Distribution::default().shares().is_empty());
    }

    #[test]
    fn derived_rates() {
        let report = report();
        assert_eq!(report.retention_rate(), 85.5);
        assert_eq!(report.overtime_share(), 25.0);
        assert_eq!(report.work_life_chart()[0].label, "Level 1");
    }

    #[test]
    fn narratives_are_computed_from_the_report() {
        let insights = report().narrative_insights();
        assert_eq!(insights.len(), 5);

        assert_eq!(insights[0].tone, Tone::Critical);
        assert_eq!(insights[0].title, "High Risk: Attrition in Maintenance");
        assert!(insights[0].body.starts_with("Maintenance 18.00%"));

        assert!(insights[1].body.starts_with("25.0% of employees"));
        assert!(insights[2].body.starts_with("7 employees"));
        assert_eq!(insights[3].tone, Tone::Positive);
        assert!(insights[4].body.starts_with("Maintenance leads with highest average salary ($66,500)"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let report: AnalysisReport = serde_json::from_str(r#"{"summary": {"total_employees": 0}}"#).unwrap();
        assert!(report.department_chart().is_empty());
        assert_eq!(report.overtime_share(), 0.0);
        assert_eq!(report.narrative_insights().len(), 4);
    }
}

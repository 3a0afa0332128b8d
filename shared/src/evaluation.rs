//! Employee evaluation records, skill-gap scoring and the bundled sample roster.

use crate::error::ApiError;
use crate::filter::Searchable;
use crate::format::round_half_up;
use crate::thresholds::{Band, FitLabel, PERFORMANCE, SKILL_COVERAGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: f64,
    pub required: f64,
}

impl Skill {
    /// Current level as a percentage of the required level.
    pub fn coverage(&self) -> f64 {
        if self.required <= 0.0 {
            return 100.0;
        }
        self.level / self.required * 100.0
    }

    /// Points missing to reach the required level, if any.
    pub fn gap(&self) -> Option<f64> {
        (self.level < self.required).then(|| self.required - self.level)
    }

    pub fn band(&self) -> Band {
        SKILL_COVERAGE.classify(self.coverage())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Performance {
    pub productivity: f64,
    pub quality: f64,
    pub safety: f64,
    pub attendance: f64,
    pub teamwork: f64,
}

impl Performance {
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Productivity", self.productivity),
            ("Quality", self.quality),
            ("Safety", self.safety),
            ("Attendance", self.attendance),
            ("Teamwork", self.teamwork),
        ]
    }

    pub fn average(&self) -> f64 {
        let entries = self.entries();
        entries.iter().map(|(_, score)| score).sum::<f64>() / entries.len() as f64
    }
}

/// Colour band of a single performance score.
pub fn score_band(score: f64) -> Band {
    PERFORMANCE.classify(score)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyScore {
    pub week: String,
    pub productivity: f64,
    pub quality: f64,
    pub safety: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub education: String,
    pub certifications: Vec<String>,
    pub previous_roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub skills: Vec<Skill>,
    pub performance: Performance,
    pub weekly_data: Vec<WeeklyScore>,
    pub resume: Resume,
    pub job_fit: String,
    pub fit_score: f64,
    pub recommendations: Vec<String>,
}

impl Employee {
    pub fn fit(&self) -> FitLabel {
        FitLabel::parse(&self.job_fit)
    }

    pub fn skills_below_required(&self) -> usize {
        self.skills.iter().filter(|skill| skill.gap().is_some()).count()
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.department.as_str(),
        ]
    }
}

/// First letter of every word, `"Rajesh Kumar"` gives `"RK"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Roster shown by the evaluation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRoster {
    pub employees: Vec<Employee>,
    pub error: Option<String>,
    pub from_samples: bool,
}

impl EvaluationRoster {
    /// An empty list or a failed fetch falls back to [`sample_employees`];
    /// only the failure keeps an error message.
    pub fn resolve(result: Result<Vec<Employee>, ApiError>) -> Self {
        match result {
            Ok(employees) if !employees.is_empty() => EvaluationRoster {
                employees,
                error: None,
                from_samples: false,
            },
            Ok(_) => {
                log::warn!("Evaluation list is empty, showing sample employees");
                EvaluationRoster {
                    employees: sample_employees(),
                    error: None,
                    from_samples: true,
                }
            }
            Err(err) => {
                log::warn!("Error loading employees: {}, showing sample employees", err);
                EvaluationRoster {
                    employees: sample_employees(),
                    error: Some(err.to_string()),
                    from_samples: true,
                }
            }
        }
    }
}

/// Row of the side-by-side comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub fit: FitLabel,
    pub job_fit: String,
    pub fit_score: f64,
    /// Mean of the five performance scores, rounded.
    pub average_performance: f64,
    pub skills_below_required: usize,
}

pub fn comparison_rows(employees: &[Employee]) -> Vec<ComparisonRow> {
    employees
        .iter()
        .map(|employee| ComparisonRow {
            id: employee.id,
            name: employee.name.clone(),
            role: employee.role.clone(),
            fit: employee.fit(),
            job_fit: employee.job_fit.clone(),
            fit_score: employee.fit_score,
            average_performance: round_half_up(employee.performance.average()),
            skills_below_required: employee.skills_below_required(),
        })
        .collect()
}

fn skill(name: &str, level: f64, required: f64) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        required,
    }
}

fn week(number: u8, productivity: f64, quality: f64, safety: f64) -> WeeklyScore {
    WeeklyScore {
        week: format!("Week {}", number),
        productivity,
        quality,
        safety,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Three bundled employees shown when the backend has nothing to offer.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Rajesh Kumar".into(),
            role: "Pasteurization Operator".into(),
            department: "Production".into(),
            email: "rajesh@flavi.com".into(),
            phone: "+91 98765 43210".into(),
            experience: "8 years".into(),
            skills: vec![
                skill("Pasteurization", 95.0, 90.0),
                skill("Quality Control", 90.0, 85.0),
                skill("Safety Protocols", 88.0, 95.0),
                skill("Equipment Maintenance", 85.0, 80.0),
            ],
            performance: Performance {
                productivity: 92.0,
                quality: 88.0,
                safety: 95.0,
                attendance: 96.0,
                teamwork: 85.0,
            },
            weekly_data: vec![
                week(1, 88.0, 85.0, 92.0),
                week(2, 90.0, 87.0, 94.0),
                week(3, 92.0, 88.0, 95.0),
                week(4, 94.0, 90.0, 96.0),
            ],
            resume: Resume {
                education: "Diploma in Dairy Technology".into(),
                certifications: strings(&[
                    "Food Safety Certification",
                    "HACCP",
                    "Equipment Operation",
                ]),
                previous_roles: strings(&["Junior Operator - 3 years", "Senior Operator - 5 years"]),
            },
            job_fit: "Perfect Match".into(),
            fit_score: 92.0,
            recommendations: Vec::new(),
        },
        Employee {
            id: 2,
            name: "Priya Sharma".into(),
            role: "Packaging Supervisor".into(),
            department: "Packaging".into(),
            email: "priya@flavi.com".into(),
            phone: "+91 98765 43211".into(),
            experience: "5 years".into(),
            skills: vec![
                skill("Team Leadership", 92.0, 85.0),
                skill("Packaging Operations", 88.0, 90.0),
                skill("Inventory Management", 75.0, 80.0),
                skill("Quality Assurance", 60.0, 85.0),
            ],
            performance: Performance {
                productivity: 85.0,
                quality: 78.0,
                safety: 88.0,
                attendance: 92.0,
                teamwork: 95.0,
            },
            weekly_data: vec![
                week(1, 82.0, 75.0, 85.0),
                week(2, 84.0, 77.0, 87.0),
                week(3, 85.0, 78.0, 88.0),
                week(4, 87.0, 80.0, 90.0),
            ],
            resume: Resume {
                education: "Bachelor in Management".into(),
                certifications: strings(&["Leadership Training", "Packaging Standards"]),
                previous_roles: strings(&["Team Lead - 3 years", "Supervisor - 2 years"]),
            },
            job_fit: "Needs Training".into(),
            fit_score: 78.0,
            recommendations: strings(&["Quality Assurance Training", "Inventory Management Course"]),
        },
        Employee {
            id: 3,
            name: "Amit Patel".into(),
            role: "Quality Control Analyst".into(),
            department: "Quality".into(),
            email: "amit@flavi.com".into(),
            phone: "+91 98765 43212".into(),
            experience: "2 years".into(),
            skills: vec![
                skill("Lab Testing", 70.0, 90.0),
                skill("Data Analysis", 65.0, 85.0),
                skill("Documentation", 80.0, 75.0),
                skill("Compliance", 45.0, 90.0),
            ],
            performance: Performance {
                productivity: 65.0,
                quality: 70.0,
                safety: 85.0,
                attendance: 88.0,
                teamwork: 75.0,
            },
            weekly_data: vec![
                week(1, 60.0, 65.0, 80.0),
                week(2, 62.0, 68.0, 82.0),
                week(3, 65.0, 70.0, 85.0),
                week(4, 68.0, 72.0, 88.0),
            ],
            resume: Resume {
                education: "Bachelor in Chemistry".into(),
                certifications: strings(&["Basic QA Training"]),
                previous_roles: strings(&["Junior Analyst - 2 years"]),
            },
            job_fit: "Poor Match".into(),
            fit_score: 65.0,
            recommendations: strings(&[
                "Advanced Lab Testing Course",
                "Data Analysis Training",
                "Compliance Workshop",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_records;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn skill_gap_and_band() {
        let strong = skill("Pasteurization", 95.0, 90.0);
        assert_eq!(strong.gap(), None);
        assert_eq!(strong.band(), Band::Good);

        let close = skill("Safety Protocols", 88.0, 95.0);
        assert_eq!(close.gap(), Some(7.0));
        assert_eq!(close.band(), Band::Fair);

        let weak = skill("Compliance", 45.0, 90.0);
        assert_eq!(weak.coverage(), 50.0);
        assert_eq!(weak.band(), Band::Poor);
    }

    #[test]
    fn exact_requirement_counts_as_covered() {
        let exact = skill("Documentation", 80.0, 80.0);
        assert_eq!(exact.gap(), None);
        assert_eq!(exact.band(), Band::Good);
    }

    #[test]
    fn performance_bands_are_inclusive() {
        assert_eq!(score_band(90.0), Band::Good);
        assert_eq!(score_band(75.0), Band::Fair);
        assert_eq!(score_band(74.9), Band::Poor);
    }

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(initials("Rajesh Kumar"), "RK");
        assert_eq!(initials("  Amit   Patel "), "AP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn decodes_backend_records() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "name": "Kavya Nair",
            "role": "Lab Technician",
            "department": "Quality Control",
            "skills": [{"name": "Lab Testing", "level": 81, "required": 90}],
            "performance": {"productivity": 80, "quality": 91, "safety": 88, "attendance": 95, "teamwork": 86},
            "weeklyData": [{"week": "Week 1", "productivity": 78, "quality": 90, "safety": 87}],
            "resume": {"education": "B.Sc Microbiology", "certifications": [], "previousRoles": ["Intern - 1 year"]},
            "jobFit": "Needs Training",
            "fitScore": 81,
            "recommendations": ["Lab Testing Refresher"]
        }))
        .unwrap();

        assert_eq!(employee.fit(), FitLabel::NeedsTraining);
        assert_eq!(employee.weekly_data.len(), 1);
        assert_eq!(employee.resume.previous_roles, vec!["Intern - 1 year"]);
        assert_eq!(employee.email, "");
        assert_eq!(employee.skills_below_required(), 1);
    }

    #[test]
    fn resolve_keeps_a_non_empty_list() {
        let fetched = vec![Employee {
            id: 9,
            name: "Suresh Rao".into(),
            ..Employee::default()
        }];
        let roster = EvaluationRoster::resolve(Ok(fetched.clone()));
        assert_eq!(roster.employees, fetched);
        assert_eq!(roster.error, None);
        assert!(!roster.from_samples);
    }

    #[test]
    fn resolve_falls_back_on_empty_list_without_error() {
        let roster = EvaluationRoster::resolve(Ok(Vec::new()));
        assert_eq!(roster.employees.len(), 3);
        assert_eq!(roster.error, None);
        assert!(roster.from_samples);
    }

    #[test]
    fn resolve_falls_back_on_failure_with_error() {
        let roster = EvaluationRoster::resolve(Err(ApiError::Status {
            status: 500,
            body: "boom".into(),
        }));
        let names: Vec<&str> = roster.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rajesh Kumar", "Priya Sharma", "Amit Patel"]);
        assert_eq!(roster.error.as_deref(), Some("Server error: 500 - boom"));
    }

    #[test]
    fn search_covers_name_role_and_department() {
        let employees = sample_employees();
        let by_role: Vec<i64> = filter_records(&employees, "supervisor").iter().map(|e| e.id).collect();
        assert_eq!(by_role, vec![2]);
        let by_department: Vec<i64> = filter_records(&employees, "QUALITY").iter().map(|e| e.id).collect();
        assert_eq!(by_department, vec![3]);
        assert!(filter_records(&employees, "flavi.com").is_empty());
    }

    #[test]
    fn comparison_rows_summarise_each_employee() {
        let rows = comparison_rows(&sample_employees());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].average_performance, 91.0);
        assert_eq!(rows[0].skills_below_required, 1);
        assert_eq!(rows[1].fit, FitLabel::NeedsTraining);
        assert_eq!(rows[2].skills_below_required, 3);
        assert_eq!(rows[2].average_performance, 77.0);
    }
}

use crate::filter::Searchable;
use crate::format::{fixed, rupees};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};

const NOT_AVAILABLE: &str = "N/A";

/// Departments offered by the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Department {
    Production,
    Maintenance,
    #[strum(serialize = "Quality Control")]
    QualityControl,
    Logistics,
    #[strum(serialize = "Farm Operations")]
    FarmOperations,
}

/// The CSV dataset behind `/workers` stores phone numbers and similar fields
/// either as text or as bare numbers depending on the row.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// A row exactly as the backend returns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkerRecord {
    #[serde(rename = "EmployeeNumber", default)]
    pub employee_number: Option<f64>,
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(rename = "Phone Number", default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(rename = "Department", default, deserialize_with = "lenient_text")]
    pub department: Option<String>,
    #[serde(rename = "JobRole", default, deserialize_with = "lenient_text")]
    pub job_role: Option<String>,
    #[serde(rename = "Age", default)]
    pub age: Option<f64>,
    #[serde(rename = "Gender", default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(rename = "MonthlyIncome", default)]
    pub monthly_income: Option<f64>,
    #[serde(rename = "YearsAtCompany", default)]
    pub years_at_company: Option<f64>,
    #[serde(rename = "OverTime", default, deserialize_with = "lenient_text")]
    pub over_time: Option<String>,
    #[serde(rename = "OperatorSkillScore", default)]
    pub operator_skill_score: Option<f64>,
    #[serde(rename = "RequiredSkillByRole", default)]
    pub required_skill_by_role: Option<f64>,
    #[serde(rename = "Skills", default, deserialize_with = "lenient_text")]
    pub skills: Option<String>,
}

/// Worker as displayed in the management grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_role: String,
    pub age: Option<f64>,
    pub gender: String,
    pub monthly_income: f64,
    pub years_at_company: f64,
    pub over_time: String,
    pub operator_skill_score: f64,
    pub required_skill_by_role: f64,
    pub skills: String,
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn number_or_zero(value: Option<f64>) -> f64 {
    value.filter(|n| n.is_finite()).unwrap_or(0.0)
}

impl From<WorkerRecord> for Worker {
    fn from(record: WorkerRecord) -> Self {
        Self {
            id: number_or_zero(record.employee_number) as i64,
            name: text_or(record.name, NOT_AVAILABLE),
            email: text_or(record.email, NOT_AVAILABLE),
            phone: text_or(record.phone, NOT_AVAILABLE),
            department: text_or(record.department, NOT_AVAILABLE),
            job_role: text_or(record.job_role, NOT_AVAILABLE),
            age: record.age.filter(|age| *age != 0.0 && age.is_finite()),
            gender: text_or(record.gender, NOT_AVAILABLE),
            monthly_income: number_or_zero(record.monthly_income),
            years_at_company: number_or_zero(record.years_at_company),
            over_time: text_or(record.over_time, "No"),
            operator_skill_score: number_or_zero(record.operator_skill_score),
            required_skill_by_role: number_or_zero(record.required_skill_by_role),
            skills: record.skills.unwrap_or_default(),
        }
    }
}

impl Worker {
    pub fn age_label(&self) -> String {
        self.age
            .map(|age| age.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn income_label(&self) -> String {
        rupees(self.monthly_income)
    }
}

impl Searchable for Worker {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.department.as_str(),
            self.email.as_str(),
        ]
    }
}

/// Values of the add/edit dialog, kept as typed text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub skills: String,
    pub experience: String,
}

/// `POST /workers` body. The create route reads lowercase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkerRequest {
    pub department: String,
    pub experience: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
}

/// `PUT /workers/{id}` body, keyed by dataset column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkerRequest {
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "YearsAtCompany")]
    pub years_at_company: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone Number")]
    pub phone: String,
    #[serde(rename = "Skills")]
    pub skills: String,
}

/// Acknowledgement returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WriteAck {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "employeeNumber", default)]
    pub employee_number: i64,
}

/// Leading integer of `text` (`"8 years"` is 8); anything unparsable is 0.
pub fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

impl WorkerForm {
    /// Prefill for editing an existing worker.
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            name: worker.name.clone(),
            email: worker.email.clone(),
            phone: worker.phone.clone(),
            department: worker.department.clone(),
            skills: worker.skills.clone(),
            experience: worker.years_at_company.to_string(),
        }
    }

    /// Labels of required inputs that are still blank.
    pub fn required_missing(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.name),
            ("Email", &self.email),
            ("Phone Number", &self.phone),
            ("Years of Experience", &self.experience),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn create_request(&self) -> CreateWorkerRequest {
        CreateWorkerRequest {
            department: self.department.clone(),
            experience: self.experience.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: self.skills.clone(),
        }
    }

    pub fn update_request(&self) -> UpdateWorkerRequest {
        UpdateWorkerRequest {
            department: self.department.clone(),
            years_at_company: parse_leading_int(&self.experience),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Header cards above the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    pub total: usize,
    pub departments: usize,
    pub average_years: f64,
}

impl RosterStats {
    pub fn from_workers(workers: &[Worker]) -> Self {
        let departments = workers
            .iter()
            .map(|w| w.department.as_str())
            .collect::<HashSet<_>>()
            .len();
        let average_years = if workers.is_empty() {
            0.0
        } else {
            workers.iter().map(|w| w.years_at_company).sum::<f64>() / workers.len() as f64
        };

        Self {
            total: workers.len(),
            departments,
            average_years,
        }
    }

    pub fn average_years_label(&self) -> String {
        format!("{} years", fixed(self.average_years, 1))
    }
}

/// Sortable grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum WorkerColumn {
    Id,
    Name,
    Email,
    Phone,
    Department,
    JobRole,
    YearsAtCompany,
    MonthlyIncome,
}

impl WorkerColumn {
    pub fn header(&self) -> &'static str {
        match self {
            WorkerColumn::Id => "ID",
            WorkerColumn::Name => "Name",
            WorkerColumn::Email => "Email",
            WorkerColumn::Phone => "Phone",
            WorkerColumn::Department => "Department",
            WorkerColumn::JobRole => "Job Role",
            WorkerColumn::YearsAtCompany => "Years at Company",
            WorkerColumn::MonthlyIncome => "Monthly Income",
        }
    }

    fn compare(&self, a: &Worker, b: &Worker) -> Ordering {
        let text = |x: &str, y: &str| x.to_lowercase().cmp(&y.to_lowercase());
        match self {
            WorkerColumn::Id => a.id.cmp(&b.id),
            WorkerColumn::Name => text(&a.name, &b.name),
            WorkerColumn::Email => text(&a.email, &b.email),
            WorkerColumn::Phone => text(&a.phone, &b.phone),
            WorkerColumn::Department => text(&a.department, &b.department),
            WorkerColumn::JobRole => text(&a.job_role, &b.job_role),
            WorkerColumn::YearsAtCompany => a.years_at_company.total_cmp(&b.years_at_company),
            WorkerColumn::MonthlyIncome => a.monthly_income.total_cmp(&b.monthly_income),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSort {
    pub column: WorkerColumn,
    pub ascending: bool,
}

impl Default for WorkerSort {
    fn default() -> Self {
        Self {
            column: WorkerColumn::Id,
            ascending: true,
        }
    }
}

impl WorkerSort {
    /// Clicking the active column flips direction, another column starts ascending.
    pub fn toggle(self, column: WorkerColumn) -> Self {
        if self.column == column {
            Self {
                column,
                ascending: !self.ascending,
            }
        } else {
            Self {
                column,
                ascending: true,
            }
        }
    }

    pub fn apply(&self, rows: &mut [&Worker]) {
        rows.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_records;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn workers() -> Vec<Worker> {
        let rows: Vec<WorkerRecord> = serde_json::from_value(json!([
            {"EmployeeNumber": 1, "Name": "Anita Rao", "Email": "anita@flavi.com",
             "Phone Number": 9876500001u64, "Department": "Production", "YearsAtCompany": 4,
             "MonthlyIncome": 72000},
            {"EmployeeNumber": 2, "Name": "Vikram Singh", "Email": "vikram@flavi.com",
             "Phone Number": "+91 98765 00002", "Department": "Logistics", "YearsAtCompany": 9,
             "MonthlyIncome": 64000.5},
            {"EmployeeNumber": 3.0, "Name": "", "Department": "Production", "YearsAtCompany": 2}
        ]))
        .unwrap();
        rows.into_iter().map(Worker::from).collect()
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let list = workers();
        let blank = &list[2];
        assert_eq!(blank.id, 3);
        assert_eq!(blank.name, "N/A");
        assert_eq!(blank.email, "N/A");
        assert_eq!(blank.over_time, "No");
        assert_eq!(blank.monthly_income, 0.0);
        assert_eq!(blank.age_label(), "N/A");
    }

    #[test]
    fn numeric_phone_numbers_are_kept_as_text() {
        assert_eq!(workers()[0].phone, "9876500001");
        assert_eq!(workers()[0].income_label(), "₹72,000");
    }

    #[test]
    fn search_without_hits_is_empty() {
        let list = workers();
        assert!(filter_records(&list, "maintenance").is_empty());
    }

    #[test]
    fn search_by_department_returns_every_member() {
        let list = workers();
        let ids: Vec<i64> = filter_records(&list, "Production").iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_matches_email() {
        let list = workers();
        let hits = filter_records(&list, "VIKRAM@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].department, "Logistics");
    }

    #[test]
    fn create_body_uses_lowercase_keys() {
        let form = WorkerForm {
            name: "Meena Das".into(),
            email: "meena@flavi.com".into(),
            phone: "+91 90000 11111".into(),
            department: Department::QualityControl.to_string(),
            skills: String::new(),
            experience: "6".into(),
        };
        let body = serde_json::to_value(form.create_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "department": "Quality Control",
                "experience": "6",
                "name": "Meena Das",
                "email": "meena@flavi.com",
                "phone": "+91 90000 11111",
                "skills": ""
            })
        );
    }

    #[test]
    fn update_body_uses_dataset_columns() {
        let worker = &workers()[1];
        let mut form = WorkerForm::from_worker(worker);
        assert_eq!(form.experience, "9");
        form.experience = "11 years".into();

        let body = serde_json::to_value(form.update_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "Department": "Logistics",
                "YearsAtCompany": 11,
                "Name": "Vikram Singh",
                "Email": "vikram@flavi.com",
                "Phone Number": "+91 98765 00002",
                "Skills": ""
            })
        );
    }

    #[test]
    fn experience_parsing_matches_parse_int() {
        assert_eq!(parse_leading_int("8"), 8);
        assert_eq!(parse_leading_int("  12 yrs"), 12);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
    }

    #[test]
    fn required_fields_mirror_form_inputs() {
        let form = WorkerForm {
            name: "Kiran".into(),
            ..WorkerForm::default()
        };
        assert_eq!(
            form.required_missing(),
            vec!["Email", "Phone Number", "Years of Experience"]
        );
    }

    #[test]
    fn stats_count_distinct_departments() {
        let stats = RosterStats::from_workers(&workers());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.departments, 2);
        assert_eq!(stats.average_years_label(), "5.0 years");
        assert_eq!(RosterStats::from_workers(&[]).average_years, 0.0);
    }

    #[test]
    fn sorting_toggles_direction() {
        let list = workers();
        let mut rows: Vec<&Worker> = list.iter().collect();

        let sort = WorkerSort::default().toggle(WorkerColumn::MonthlyIncome);
        sort.apply(&mut rows);
        assert_eq!(rows.iter().map(|w| w.id).collect::<Vec<_>>(), vec![3, 2, 1]);

        let sort = sort.toggle(WorkerColumn::MonthlyIncome);
        assert!(!sort.ascending);
        sort.apply(&mut rows);
        assert_eq!(rows.iter().map(|w| w.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn department_options() {
        let names: Vec<String> = Department::iter().map(|d| d.to_string()).collect();
        assert_eq!(
            names,
            vec!["Production", "Maintenance", "Quality Control", "Logistics", "Farm Operations"]
        );
        assert_eq!(WorkerColumn::iter().count(), 8);
    }
}

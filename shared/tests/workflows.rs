use futures::executor::block_on;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared::analysis::AnalysisReport;
use shared::client::{
    load_evaluation_roster, load_workers, remove_worker, rerun_workforce_analysis, save_worker,
    AnalysisRunAck, HealthStatus,
};
use shared::dashboard::DashboardSnapshot;
use shared::evaluation::Employee;
use shared::workers::{
    CreateWorkerRequest, UpdateWorkerRequest, WorkerForm, WorkerRecord, WriteAck,
};
use shared::{ApiError, WorkforceApi};
use std::cell::RefCell;

/// In-memory backend that records every call it receives.
#[derive(Default)]
struct MockApi {
    calls: RefCell<Vec<String>>,
    bodies: RefCell<Vec<Value>>,
    rows: RefCell<Vec<Value>>,
    fail_writes: bool,
    fail_reads: bool,
    evaluation: Option<Result<Vec<Employee>, ApiError>>,
}

impl MockApi {
    fn with_rows(rows: Vec<Value>) -> Self {
        MockApi {
            rows: RefCell::new(rows),
            ..MockApi::default()
        }
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == call).count()
    }

    fn write_result(&self, status: &str, id: i64) -> Result<WriteAck, ApiError> {
        if self.fail_writes {
            return Err(ApiError::Status {
                status: 500,
                body: "Failed to write dataset".into(),
            });
        }
        Ok(WriteAck {
            status: status.into(),
            employee_number: id,
        })
    }
}

impl WorkforceApi for MockApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record("GET /health");
        Ok(HealthStatus { status: "ok".into() })
    }

    async fn dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.record("GET /ai-manufacturing/dashboard");
        Ok(DashboardSnapshot::default())
    }

    async fn run_manufacturing_analysis(&self) -> Result<DashboardSnapshot, ApiError> {
        self.record("POST /ai-manufacturing/analyze");
        Ok(DashboardSnapshot::default())
    }

    async fn analysis(&self) -> Result<AnalysisReport, ApiError> {
        self.record("GET /analysis");
        Ok(serde_json::from_value(json!({
            "summary": {"total_employees": self.rows.borrow().len(), "attrition_rate": 12.0}
        }))?)
    }

    async fn run_analysis(&self) -> Result<AnalysisRunAck, ApiError> {
        self.record("POST /analysis/run");
        Ok(serde_json::from_value(json!({
            "status": "updated",
            "summary": {"total_employees": self.rows.borrow().len()}
        }))?)
    }

    async fn list_workers(&self) -> Result<Vec<WorkerRecord>, ApiError> {
        self.record("GET /workers");
        if self.fail_reads {
            return Err(ApiError::network("Failed to fetch"));
        }
        Ok(serde_json::from_value(Value::Array(self.rows.borrow().clone()))?)
    }

    async fn create_worker(&self, request: &CreateWorkerRequest) -> Result<WriteAck, ApiError> {
        self.record("POST /workers");
        self.bodies.borrow_mut().push(serde_json::to_value(request)?);
        let ack = self.write_result("created", 1001)?;
        self.rows.borrow_mut().push(json!({
            "EmployeeNumber": ack.employee_number,
            "Name": request.name,
            "Department": request.department,
        }));
        Ok(ack)
    }

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Result<WriteAck, ApiError> {
        self.record("PUT /workers/{id}");
        self.bodies.borrow_mut().push(serde_json::to_value(request)?);
        self.write_result("updated", id)
    }

    async fn delete_worker(&self, id: i64) -> Result<WriteAck, ApiError> {
        self.record("DELETE /workers/{id}");
        let ack = self.write_result("deleted", id)?;
        self.rows
            .borrow_mut()
            .retain(|row| row["EmployeeNumber"].as_i64() != Some(id));
        Ok(ack)
    }

    async fn evaluation_list(&self) -> Result<Vec<Employee>, ApiError> {
        self.record("GET /workers/evaluation/list");
        self.evaluation.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn seeded_rows() -> Vec<Value> {
    vec![
        json!({
            "EmployeeNumber": 1, "Name": "Ravi Verma", "Email": "ravi@flavi.com",
            "Phone Number": 9876543210u64, "Department": "Production", "YearsAtCompany": 4,
            "OverTime": "Yes", "MonthlyIncome": 42000
        }),
        json!({
            "EmployeeNumber": 2, "Name": "Meena Iyer", "Department": "Logistics",
            "YearsAtCompany": 9, "Age": 0
        }),
    ]
}

fn new_worker_form() -> WorkerForm {
    WorkerForm {
        name: "Anita Desai".into(),
        email: "anita@flavi.com".into(),
        phone: "+91 98765 40000".into(),
        department: "Quality Control".into(),
        skills: "HACCP, Lab Testing".into(),
        experience: "6".into(),
    }
}

#[test]
fn load_workers_maps_rows_to_view_records() {
    let api = MockApi::with_rows(seeded_rows());
    let workers = block_on(load_workers(&api)).unwrap();

    assert_eq!(workers.len(), 2);
    assert_eq!(workers[0].phone, "9876543210");
    assert_eq!(workers[1].email, "N/A");
    assert_eq!(workers[1].over_time, "No");
    assert_eq!(workers[1].age_label(), "N/A");
}

#[test]
fn creating_a_worker_posts_once_and_reloads_once() {
    let api = MockApi::with_rows(seeded_rows());
    let outcome = block_on(save_worker(&api, None, &new_worker_form())).unwrap();
    assert_eq!(outcome.ack.employee_number, 1001);
    let workers = outcome.workers.unwrap();

    assert_eq!(api.count("POST /workers"), 1);
    assert_eq!(api.count("PUT /workers/{id}"), 0);
    assert_eq!(api.count("GET /workers"), 1);
    assert_eq!(workers.len(), 3);
    assert_eq!(workers[2].name, "Anita Desai");

    assert_eq!(
        api.bodies.borrow()[0],
        json!({
            "department": "Quality Control",
            "experience": "6",
            "name": "Anita Desai",
            "email": "anita@flavi.com",
            "phone": "+91 98765 40000",
            "skills": "HACCP, Lab Testing"
        })
    );
}

#[test]
fn editing_a_worker_puts_dataset_columns() {
    let api = MockApi::with_rows(seeded_rows());
    let mut form = new_worker_form();
    form.experience = "8 years".into();
    block_on(save_worker(&api, Some(2), &form)).unwrap();

    assert_eq!(api.calls.borrow().clone(), vec!["PUT /workers/{id}", "GET /workers"]);
    assert_eq!(
        api.bodies.borrow()[0],
        json!({
            "Department": "Quality Control",
            "YearsAtCompany": 8,
            "Name": "Anita Desai",
            "Email": "anita@flavi.com",
            "Phone Number": "+91 98765 40000",
            "Skills": "HACCP, Lab Testing"
        })
    );
}

#[test]
fn failed_save_does_not_reload() {
    let api = MockApi {
        fail_writes: true,
        ..MockApi::with_rows(seeded_rows())
    };
    let err = block_on(save_worker(&api, None, &new_worker_form())).unwrap_err();

    assert_eq!(err.to_string(), "Server error: 500 - Failed to write dataset");
    assert_eq!(api.count("GET /workers"), 0);
}

#[test]
fn failed_reload_after_create_still_reports_the_write() {
    let api = MockApi {
        fail_reads: true,
        ..MockApi::with_rows(seeded_rows())
    };
    let outcome = block_on(save_worker(&api, None, &new_worker_form()))
        .expect("create was accepted by the backend");

    assert_eq!(outcome.ack.status, "created");
    assert_eq!(api.count("POST /workers"), 1);
    assert_eq!(api.count("GET /workers"), 1);
    assert_eq!(api.rows.borrow().len(), 3);
    assert_eq!(
        outcome.workers.unwrap_err(),
        ApiError::network("Failed to fetch")
    );
}

#[test]
fn failed_reload_after_delete_still_reports_the_write() {
    let api = MockApi {
        fail_reads: true,
        ..MockApi::with_rows(seeded_rows())
    };
    let outcome = block_on(remove_worker(&api, 1)).expect("delete was accepted by the backend");

    assert_eq!(outcome.ack.employee_number, 1);
    assert_eq!(api.rows.borrow().len(), 1);
    assert!(outcome.workers.is_err());
}

#[test]
fn deleting_a_worker_reloads_the_roster() {
    let api = MockApi::with_rows(seeded_rows());
    let workers = block_on(remove_worker(&api, 1)).unwrap().workers.unwrap();

    assert_eq!(api.calls.borrow().clone(), vec!["DELETE /workers/{id}", "GET /workers"]);
    let ids: Vec<i64> = workers.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn evaluation_failure_falls_back_to_three_samples() {
    let api = MockApi {
        evaluation: Some(Err(ApiError::network("Failed to fetch"))),
        ..MockApi::default()
    };
    let roster = block_on(load_evaluation_roster(&api));

    let names: Vec<&str> = roster.employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Rajesh Kumar", "Priya Sharma", "Amit Patel"]);
    assert_eq!(roster.error.as_deref(), Some("Network error: Failed to fetch"));
    assert!(roster.from_samples);
}

#[test]
fn empty_evaluation_list_uses_samples_without_error() {
    let api = MockApi::default();
    let roster = block_on(load_evaluation_roster(&api));

    assert_eq!(roster.employees.len(), 3);
    assert_eq!(roster.error, None);
}

#[test]
fn rerun_analysis_posts_then_fetches_the_report() {
    let api = MockApi::with_rows(seeded_rows());
    let report = block_on(rerun_workforce_analysis(&api)).unwrap();

    assert_eq!(api.calls.borrow().clone(), vec!["POST /analysis/run", "GET /analysis"]);
    assert_eq!(report.summary.total_employees, 2);
    assert_eq!(report.retention_rate(), 88.0);
}

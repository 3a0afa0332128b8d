//! Backend contract and the multi-call workflows built on top of it.
//!
//! [`WorkforceApi`] has one method per route the dashboard calls. The browser
//! implements it over `fetch`; tests implement it in memory. The free
//! functions below are the sequences of calls a screen performs.

use crate::analysis::{AnalysisReport, Summary};
use crate::dashboard::DashboardSnapshot;
use crate::error::ApiError;
use crate::evaluation::{Employee, EvaluationRoster};
use crate::workers::{
    CreateWorkerRequest, UpdateWorkerRequest, Worker, WorkerForm, WorkerRecord, WriteAck,
};
use serde::{Deserialize, Serialize};

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// `POST /analysis/run` body: the recomputed headline numbers only.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisRunAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub summary: Summary,
}

#[allow(async_fn_in_trait)]
pub trait WorkforceApi {
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    async fn dashboard(&self) -> Result<DashboardSnapshot, ApiError>;

    /// Re-runs the manufacturing models; answers with a fresh snapshot.
    async fn run_manufacturing_analysis(&self) -> Result<DashboardSnapshot, ApiError>;

    async fn analysis(&self) -> Result<AnalysisReport, ApiError>;

    async fn run_analysis(&self) -> Result<AnalysisRunAck, ApiError>;

    async fn list_workers(&self) -> Result<Vec<WorkerRecord>, ApiError>;

    async fn create_worker(&self, request: &CreateWorkerRequest) -> Result<WriteAck, ApiError>;

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Result<WriteAck, ApiError>;

    async fn delete_worker(&self, id: i64) -> Result<WriteAck, ApiError>;

    async fn evaluation_list(&self) -> Result<Vec<Employee>, ApiError>;
}

pub async fn load_workers<A: WorkforceApi>(api: &A) -> Result<Vec<Worker>, ApiError> {
    let records = api.list_workers().await?;
    log::info!("Loaded {} workers", records.len());
    Ok(records.into_iter().map(Worker::from).collect())
}

/// A write the backend accepted, followed by one roster reload.
///
/// `workers` is the reload alone: an `Err` there means the list could not be
/// refreshed, not that the write failed.
#[derive(Debug)]
pub struct WriteOutcome {
    pub ack: WriteAck,
    pub workers: Result<Vec<Worker>, ApiError>,
}

async fn reload_after_write<A: WorkforceApi>(api: &A, ack: WriteAck) -> WriteOutcome {
    log::info!("Worker {} {}", ack.employee_number, ack.status);
    let workers = load_workers(api).await;
    if let Err(err) = &workers {
        log::error!("Roster reload after write failed: {}", err);
    }
    WriteOutcome { ack, workers }
}

/// Creates (`editing == None`) or updates a worker, then reloads the roster once.
///
/// A failed write skips the reload so the caller keeps its current list.
pub async fn save_worker<A: WorkforceApi>(
    api: &A,
    editing: Option<i64>,
    form: &WorkerForm,
) -> Result<WriteOutcome, ApiError> {
    let ack = match editing {
        Some(id) => api.update_worker(id, &form.update_request()).await?,
        None => api.create_worker(&form.create_request()).await?,
    };
    Ok(reload_after_write(api, ack).await)
}

pub async fn remove_worker<A: WorkforceApi>(api: &A, id: i64) -> Result<WriteOutcome, ApiError> {
    let ack = api.delete_worker(id).await?;
    Ok(reload_after_write(api, ack).await)
}

/// Never fails: an unusable answer falls back to the bundled samples.
pub async fn load_evaluation_roster<A: WorkforceApi>(api: &A) -> EvaluationRoster {
    EvaluationRoster::resolve(api.evaluation_list().await)
}

/// Recomputes the aggregate server-side, then fetches the full report.
pub async fn rerun_workforce_analysis<A: WorkforceApi>(
    api: &A,
) -> Result<AnalysisReport, ApiError> {
    let ack = api.run_analysis().await?;
    log::info!(
        "Analysis {} for {} employees",
        ack.status,
        ack.summary.total_employees
    );
    api.analysis().await
}

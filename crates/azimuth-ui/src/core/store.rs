//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep fetched job summaries in one store so every view reads the same snapshot.
//! - Tag each load with a generation so responses for a superseded job are dropped.

use crate::core::error::ApiError;
use crate::core::remote::Remote;
use azimuth_api_models::{DatasetInfo, JobConfig};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Summaries for the job currently on screen.
    pub job: JobSlice,
}

/// Fetched summaries for a single job.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct JobSlice {
    /// Job the summaries belong to; `None` before the first load.
    pub job_id: Option<String>,
    /// Monotonic counter bumped on every load.
    pub generation: u64,
    /// Job configuration (pipelines).
    pub config: Remote<JobConfig>,
    /// Dataset-level availability flags.
    pub dataset_info: Remote<DatasetInfo>,
}

/// Identity of an issued load, checked before a response is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    /// Job the load was issued for.
    pub job_id: String,
    /// Generation at issue time.
    pub generation: u64,
}

/// Whether a response was stored or discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Response matched the current load and was stored.
    Applied,
    /// Response belonged to a superseded load and was ignored.
    Stale,
}

/// Reset the job slice for `job_id` and return the ticket for its requests.
pub fn begin_job_load(store: &mut AppStore, job_id: &str) -> LoadTicket {
    let slice = &mut store.job;
    slice.generation = slice.generation.wrapping_add(1);
    slice.job_id = Some(job_id.to_string());
    slice.config = Remote::Pending;
    slice.dataset_info = Remote::Pending;
    LoadTicket {
        job_id: job_id.to_string(),
        generation: slice.generation,
    }
}

/// Store a job-config response if `ticket` is still current.
pub fn apply_config(
    store: &mut AppStore,
    ticket: &LoadTicket,
    result: Result<Option<JobConfig>, ApiError>,
) -> ApplyOutcome {
    if !is_current(&store.job, ticket) {
        return ApplyOutcome::Stale;
    }
    store.job.config = Remote::from_result(result);
    ApplyOutcome::Applied
}

/// Store a dataset-info response if `ticket` is still current.
pub fn apply_dataset_info(
    store: &mut AppStore,
    ticket: &LoadTicket,
    result: Result<Option<DatasetInfo>, ApiError>,
) -> ApplyOutcome {
    if !is_current(&store.job, ticket) {
        return ApplyOutcome::Stale;
    }
    store.job.dataset_info = Remote::from_result(result);
    ApplyOutcome::Applied
}

impl JobSlice {
    /// Summaries for `job_id`; anything loaded for another job reads as pending.
    #[must_use]
    pub fn summaries_for(&self, job_id: &str) -> (Remote<JobConfig>, Remote<DatasetInfo>) {
        if self.job_id.as_deref() == Some(job_id) {
            (self.config.clone(), self.dataset_info.clone())
        } else {
            (Remote::Pending, Remote::Pending)
        }
    }
}

fn is_current(slice: &JobSlice, ticket: &LoadTicket) -> bool {
    slice.generation == ticket.generation && slice.job_id.as_deref() == Some(&ticket.job_id)
}

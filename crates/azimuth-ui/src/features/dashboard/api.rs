//! Fetch orchestration for the dashboard.
//!
//! # Design
//! - Issue both summary requests independently; either may land first.
//! - Apply a response only while its ticket is current; log and drop the rest.

use crate::core::store::{
    AppStore, ApplyOutcome, LoadTicket, apply_config, apply_dataset_info, begin_job_load,
};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Reset the store for `job_id` and fetch its config and dataset info.
pub(crate) fn load_job(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>, job_id: String) {
    let mut ticket = None;
    dispatch.reduce_mut(|store| {
        ticket = Some(begin_job_load(store, &job_id));
    });
    let Some(ticket) = ticket else {
        return;
    };

    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let ticket = ticket.clone();
        yew::platform::spawn_local(async move {
            let result = client.fetch_config(&ticket.job_id).await;
            if let Err(err) = &result {
                console::warn!("job config unavailable", ticket.job_id.clone(), err.to_string());
            }
            let mut result = Some(result);
            let mut outcome = ApplyOutcome::Stale;
            dispatch.reduce_mut(|store| {
                if let Some(result) = result.take() {
                    outcome = apply_config(store, &ticket, result);
                }
            });
            log_stale("config", &ticket, outcome);
        });
    }

    yew::platform::spawn_local(async move {
        let result = client.fetch_dataset_info(&ticket.job_id).await;
        if let Err(err) = &result {
            console::error!("dataset info fetch failed", ticket.job_id.clone(), err.to_string());
        }
        let mut result = Some(result);
        let mut outcome = ApplyOutcome::Stale;
        dispatch.reduce_mut(|store| {
            if let Some(result) = result.take() {
                outcome = apply_dataset_info(store, &ticket, result);
            }
        });
        log_stale("dataset_info", &ticket, outcome);
    });
}

fn log_stale(resource: &'static str, ticket: &LoadTicket, outcome: ApplyOutcome) {
    if outcome == ApplyOutcome::Stale {
        console::debug!(
            "dropped stale response",
            resource,
            ticket.job_id.clone(),
            ticket.generation.to_string()
        );
    }
}

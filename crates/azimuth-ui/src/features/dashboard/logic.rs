//! Dashboard visibility rules.
//!
//! # Design
//! - Evaluate once per render from the two fetched summaries plus selection state.
//! - Dataset info gates everything; job config only gates the compare label.
//! - A job-config failure behaves like "fewer than two pipelines".

use crate::core::logic::{error_message_or_fallback, job_view_path, split_view_path};
use crate::core::query::QueryState;
use crate::core::remote::Remote;
use crate::features::dashboard::state::{
    COMPARE_PIPELINES_LABEL, DASHBOARD_DESCRIPTION, DASHBOARD_TITLE, DashboardDecision,
    DashboardError, DashboardHeader, DashboardLayout, EXPLORE_LABEL, PreviewSection,
    SMART_TAGS_MAX_HEIGHT_PX, SectionKind,
};
use azimuth_api_models::{DatasetInfo, DatasetSplitName, JobConfig};

/// Exploration view segment targeted by the call-to-action.
pub const EXPLORATION_SEGMENT: &str = "prediction_overview";

/// Inputs for a single dashboard evaluation.
#[derive(Clone, Copy, Debug)]
pub struct DashboardInput<'a> {
    /// Job being analysed.
    pub job_id: &'a str,
    /// Selection state from the current URL.
    pub query: &'a QueryState,
    /// Job-config fetch state.
    pub config: &'a Remote<JobConfig>,
    /// Dataset-info fetch state.
    pub dataset_info: &'a Remote<DatasetInfo>,
}

/// First split, in priority order, reported as available.
///
/// # Errors
/// Returns [`DashboardError::NoAvailableDatasetSplit`] when every split is absent.
pub fn first_available_dataset_split(
    info: &DatasetInfo,
) -> Result<DatasetSplitName, DashboardError> {
    DatasetSplitName::ALL
        .into_iter()
        .find(|split| info.split_available(*split))
        .ok_or(DashboardError::NoAvailableDatasetSplit)
}

/// Splits reported as available, in priority order.
#[must_use]
pub fn available_dataset_splits(info: &DatasetInfo) -> Vec<DatasetSplitName> {
    DatasetSplitName::ALL
        .into_iter()
        .filter(|split| info.split_available(*split))
        .collect()
}

/// Link label for the pipeline metrics card.
#[must_use]
pub fn compare_pipelines_label(config: &Remote<JobConfig>) -> Option<&'static str> {
    config
        .ready()
        .filter(|config| config.has_multiple_pipelines())
        .map(|_| COMPARE_PIPELINES_LABEL)
}

/// Decide what the dashboard renders.
///
/// # Errors
/// Returns [`DashboardError::NoAvailableDatasetSplit`] when dataset info is
/// loaded but reports no available split.
pub fn decide_dashboard(input: DashboardInput<'_>) -> Result<DashboardDecision, DashboardError> {
    let info = match input.dataset_info {
        Remote::Pending => return Ok(DashboardDecision::Loading),
        Remote::Failed { message } => {
            return Ok(DashboardDecision::Unavailable {
                message: error_message_or_fallback(message.as_deref()),
            });
        }
        Remote::Empty => {
            return Ok(DashboardDecision::Unavailable {
                message: error_message_or_fallback(None),
            });
        }
        Remote::Ready(info) => info,
    };

    let default_split = first_available_dataset_split(info)?;
    let job_id = input.job_id;
    let search = input.query.search_string.as_str();

    let header = DashboardHeader {
        title: DASHBOARD_TITLE,
        description: DASHBOARD_DESCRIPTION,
        explore_label: EXPLORE_LABEL,
        explore_to: split_view_path(job_id, default_split, EXPLORATION_SEGMENT, search),
        default_split,
    };

    let fixed = |kind: SectionKind| PreviewSection {
        kind,
        to: job_view_path(job_id, kind.segment(), search),
        link_label: None,
        split_selector: None,
        max_height_px: None,
    };

    let mut sections = vec![fixed(SectionKind::DatasetWarnings)];

    if info.split_available(DatasetSplitName::Train) && info.similarity_available {
        sections.push(PreviewSection {
            to: split_view_path(
                job_id,
                DatasetSplitName::Train,
                SectionKind::ClassOverlap.segment(),
                search,
            ),
            ..fixed(SectionKind::ClassOverlap)
        });
    }

    if let Some(pipeline) = input.query.pipeline {
        sections.push(PreviewSection {
            link_label: compare_pipelines_label(input.config),
            split_selector: Some(default_split),
            ..fixed(SectionKind::PipelineMetrics)
        });
        sections.push(PreviewSection {
            split_selector: Some(default_split),
            max_height_px: Some(SMART_TAGS_MAX_HEIGHT_PX),
            ..fixed(SectionKind::SmartTags)
        });
        if info.perturbation_testing_available {
            sections.push(fixed(SectionKind::BehavioralTesting));
        }
        if info.split_available(DatasetSplitName::Eval)
            && info.postprocessing_editable_for(pipeline.index)
        {
            sections.push(fixed(SectionKind::PostProcessing));
        }
    }

    Ok(DashboardDecision::Ready(DashboardLayout { header, sections }))
}

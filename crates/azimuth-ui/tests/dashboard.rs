use azimuth_api_models::{DatasetInfo, DatasetSplitName, JobConfig};
use azimuth_ui::core::query::QueryState;
use azimuth_ui::core::remote::Remote;
use azimuth_ui::core::store::{AppStore, apply_config, apply_dataset_info, begin_job_load};
use azimuth_ui::features::dashboard::logic::{DashboardInput, decide_dashboard};
use azimuth_ui::features::dashboard::state::{
    COMPARE_PIPELINES_LABEL, DashboardDecision, DashboardLayout, SectionKind,
};
use serde_json::json;

fn decode_info(value: serde_json::Value) -> DatasetInfo {
    serde_json::from_value(value).expect("dataset info fixture decodes")
}

fn decode_config(value: serde_json::Value) -> JobConfig {
    serde_json::from_value(value).expect("config fixture decodes")
}

fn ready_layout(store: &AppStore, job_id: &str, query: &QueryState) -> DashboardLayout {
    let (config, dataset_info) = store.job.summaries_for(job_id);
    match decide_dashboard(DashboardInput {
        job_id,
        query,
        config: &config,
        dataset_info: &dataset_info,
    }) {
        Ok(DashboardDecision::Ready(layout)) => layout,
        other => panic!("expected ready layout, got {other:?}"),
    }
}

#[test]
fn training_only_job_without_pipeline_shows_warnings_only() {
    let mut store = AppStore::default();
    let ticket = begin_job_load(&mut store, "local");
    apply_dataset_info(
        &mut store,
        &ticket,
        Ok(Some(decode_info(json!({
            "availableDatasetSplits": { "train": true, "eval": false },
            "similarityAvailable": false,
            "perturbationTestingAvailable": false,
            "postprocessingEditable": null,
        })))),
    );

    let query = QueryState::from_search("");
    let layout = ready_layout(&store, "local", &query);
    assert_eq!(layout.kinds(), vec![SectionKind::DatasetWarnings]);
    assert_eq!(layout.header.default_split, DatasetSplitName::Train);
    assert_eq!(
        layout.header.explore_to,
        "/local/dataset_splits/train/prediction_overview"
    );
}

#[test]
fn fully_available_job_with_pipeline_shows_every_section() {
    let mut store = AppStore::default();
    let ticket = begin_job_load(&mut store, "local");
    apply_config(
        &mut store,
        &ticket,
        Ok(Some(decode_config(json!({
            "name": "banking77",
            "pipelines": [{ "name": "distilbert" }, { "name": "distilbert_no_postprocessing" }],
        })))),
    );
    apply_dataset_info(
        &mut store,
        &ticket,
        Ok(Some(decode_info(json!({
            "availableDatasetSplits": { "train": true, "eval": true },
            "similarityAvailable": true,
            "perturbationTestingAvailable": true,
            "postprocessingEditable": [true, false],
        })))),
    );

    let query = QueryState::from_search("?pipeline_index=0&data_action=relabel");
    let layout = ready_layout(&store, "local", &query);
    assert_eq!(
        layout.kinds(),
        vec![
            SectionKind::DatasetWarnings,
            SectionKind::ClassOverlap,
            SectionKind::PipelineMetrics,
            SectionKind::SmartTags,
            SectionKind::BehavioralTesting,
            SectionKind::PostProcessing,
        ]
    );
    let metrics = layout
        .section(SectionKind::PipelineMetrics)
        .expect("pipeline metrics");
    assert_eq!(metrics.link_label, Some(COMPARE_PIPELINES_LABEL));
    assert_eq!(
        metrics.to,
        "/local/pipeline_metrics?pipeline_index=0&data_action=relabel"
    );
    assert_eq!(
        layout.section(SectionKind::ClassOverlap).map(|s| s.to.as_str()),
        Some("/local/dataset_splits/train/class_overlap?pipeline_index=0&data_action=relabel")
    );

    let second_pipeline = QueryState::from_search("?pipeline_index=1");
    let layout = ready_layout(&store, "local", &second_pipeline);
    assert!(layout.section(SectionKind::PostProcessing).is_none());
}

#[test]
fn late_response_for_previous_job_does_not_leak() {
    let mut store = AppStore::default();
    let old = begin_job_load(&mut store, "job-a");
    let _current = begin_job_load(&mut store, "job-b");
    apply_dataset_info(
        &mut store,
        &old,
        Ok(Some(decode_info(json!({
            "availableDatasetSplits": { "eval": true },
        })))),
    );

    let (config, dataset_info) = store.job.summaries_for("job-b");
    let decision = decide_dashboard(DashboardInput {
        job_id: "job-b",
        query: &QueryState::default(),
        config: &config,
        dataset_info: &dataset_info,
    });
    assert_eq!(decision, Ok(DashboardDecision::Loading));
    assert_eq!(store.job.dataset_info, Remote::Pending);
}

#[test]
fn selecting_a_pipeline_adds_pipeline_sections() {
    let mut store = AppStore::default();
    let ticket = begin_job_load(&mut store, "local");
    apply_dataset_info(
        &mut store,
        &ticket,
        Ok(Some(decode_info(json!({
            "availableDatasetSplits": { "eval": true, "train": true },
            "similarityAvailable": true,
            "perturbationTestingAvailable": true,
            "postprocessingEditable": [true],
        })))),
    );

    let before = ready_layout(&store, "local", &QueryState::from_search("?data_action=relabel"));
    assert_eq!(
        before.kinds(),
        vec![SectionKind::DatasetWarnings, SectionKind::ClassOverlap]
    );

    let after = ready_layout(
        &store,
        "local",
        &QueryState::from_search("data_action=relabel&pipeline_index=0"),
    );
    assert_eq!(after.kinds().len(), 6);
    assert_eq!(
        after.section(SectionKind::SmartTags).map(|s| s.to.as_str()),
        Some("/local/smart_tags?data_action=relabel&pipeline_index=0")
    );
}

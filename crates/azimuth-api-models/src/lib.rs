#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Azimuth dashboard API.
//!
//! The dashboard consumes two job-scoped summaries: the job configuration and
//! the dataset info computed by the backend startup tasks. Both are decoded
//! here so the UI and any tooling agree on the wire contract.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error document returned by the backend.
///
/// Accepts both RFC9457 problem documents and the bare `{"detail": ...}`
/// bodies produced by the backend framework, where `detail` may be a string
/// or a list of validation errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    /// URI reference identifying the problem type.
    pub kind: String,
    #[serde(default)]
    /// Short, human-readable summary of the issue.
    pub title: String,
    #[serde(default)]
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Diagnostic payload; usually a string, sometimes structured.
    pub detail: Option<Value>,
}

impl ProblemDetails {
    /// Most specific human-readable message carried by the document.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(detail_text)
            .or_else(|| non_blank(&self.title).map(str::to_string))
    }
}

fn non_blank(text: &str) -> Option<&str> {
    Some(text).filter(|text| !text.trim().is_empty())
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(text) => non_blank(text).map(str::to_string),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .filter_map(non_blank)
                .collect();
            if messages.is_empty() {
                Some(detail.to_string())
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

/// Named partitions of the dataset analysed by a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSplitName {
    /// Evaluation split.
    Eval,
    /// Training split.
    Train,
}

impl DatasetSplitName {
    /// Every split, in the priority order used to pick a default split.
    pub const ALL: [Self; 2] = [Self::Eval, Self::Train];

    /// Path segment / wire value for the split.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eval => "eval",
            Self::Train => "train",
        }
    }

    /// Human-readable label used by split selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eval => "Evaluation set",
            Self::Train => "Training set",
        }
    }

    /// Parse a path segment or select value into a split name.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|split| split.as_str() == value.trim())
    }
}

impl fmt::Display for DatasetSplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trained model plus its post-processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineDefinition {
    /// Display name of the pipeline.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Post-processing steps; opaque to the dashboard.
    pub postprocessors: Option<Vec<Value>>,
}

/// Job configuration as reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobConfig {
    #[serde(default)]
    /// Project name configured for the job.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Label designated as "no prediction", when configured.
    pub rejection_class: Option<String>,
    #[serde(default)]
    /// Pipelines under analysis; absent or `null` decodes as empty.
    #[serde(deserialize_with = "null_as_default")]
    pub pipelines: Vec<PipelineDefinition>,
}

impl JobConfig {
    /// Whether the job exposes more than one pipeline to compare.
    #[must_use]
    pub fn has_multiple_pipelines(&self) -> bool {
        self.pipelines.len() > 1
    }
}

/// Dataset-level summary produced by the backend startup tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    #[serde(default)]
    /// Project name the dataset belongs to.
    pub project_name: String,
    #[serde(default)]
    /// Class names in label order.
    pub class_names: Vec<String>,
    #[serde(default)]
    /// Presence flag per dataset split.
    pub available_dataset_splits: BTreeMap<DatasetSplitName, bool>,
    #[serde(default)]
    /// Whether semantic-similarity computation succeeded.
    pub similarity_available: bool,
    #[serde(default)]
    /// Whether behavioral/perturbation test results exist.
    pub perturbation_testing_available: bool,
    #[serde(default)]
    /// Whether predictions are available for the dataset.
    pub prediction_available: bool,
    #[serde(default)]
    /// Model contract the job was configured with.
    pub model_contract: String,
    #[serde(default, deserialize_with = "null_as_default")]
    /// Post-processing edit permission, indexed by pipeline index.
    pub postprocessing_editable: Vec<bool>,
}

impl DatasetInfo {
    /// Whether the given split was reported as present.
    #[must_use]
    pub fn split_available(&self, split: DatasetSplitName) -> bool {
        self.available_dataset_splits
            .get(&split)
            .copied()
            .unwrap_or(false)
    }

    /// Whether post-processing may be edited for a pipeline; unknown indices are not editable.
    #[must_use]
    pub fn postprocessing_editable_for(&self, pipeline_index: usize) -> bool {
        self.postprocessing_editable
            .get(pipeline_index)
            .copied()
            .unwrap_or(false)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dataset_info_decodes_camel_case_payload() {
        let info: DatasetInfo = serde_json::from_value(json!({
            "projectName": "banking77",
            "classNames": ["card_arrival", "REJECTION_CLASS"],
            "availableDatasetSplits": { "eval": true, "train": false },
            "similarityAvailable": true,
            "perturbationTestingAvailable": false,
            "postprocessingEditable": [true, false],
            "modelContract": "hf_text_classification",
        }))
        .expect("dataset info decodes");

        assert_eq!(info.project_name, "banking77");
        assert!(info.split_available(DatasetSplitName::Eval));
        assert!(!info.split_available(DatasetSplitName::Train));
        assert!(info.similarity_available);
        assert!(info.postprocessing_editable_for(0));
        assert!(!info.postprocessing_editable_for(1));
        assert!(!info.postprocessing_editable_for(7));
    }

    #[test]
    fn null_postprocessing_editable_means_not_editable() {
        let info: DatasetInfo = serde_json::from_value(json!({
            "availableDatasetSplits": { "train": true },
            "postprocessingEditable": null,
        }))
        .expect("dataset info decodes");
        assert!(info.postprocessing_editable.is_empty());
        assert!(!info.postprocessing_editable_for(0));
        assert!(!info.split_available(DatasetSplitName::Eval));
    }

    #[test]
    fn job_config_counts_pipelines() {
        let config: JobConfig = serde_json::from_value(json!({
            "name": "demo",
            "pipelines": [{ "name": "p0" }, { "name": "p1", "postprocessors": null }],
        }))
        .expect("config decodes");
        assert!(config.has_multiple_pipelines());

        let without: JobConfig =
            serde_json::from_value(json!({ "pipelines": null })).expect("config decodes");
        assert!(without.pipelines.is_empty());
        assert!(!without.has_multiple_pipelines());
    }

    #[test]
    fn split_names_round_trip_through_values() {
        assert_eq!(DatasetSplitName::from_value("eval"), Some(DatasetSplitName::Eval));
        assert_eq!(DatasetSplitName::from_value(" train "), Some(DatasetSplitName::Train));
        assert_eq!(DatasetSplitName::from_value("test"), None);
        assert_eq!(DatasetSplitName::Train.to_string(), "train");
    }

    #[test]
    fn problem_message_prefers_detail() {
        let problem = ProblemDetails {
            kind: "about:blank".to_string(),
            title: "Not Found".to_string(),
            status: 404,
            detail: Some(json!("job 'abc' does not exist")),
        };
        assert_eq!(problem.message().as_deref(), Some("job 'abc' does not exist"));

        let bare = ProblemDetails {
            detail: Some(json!("  ")),
            ..problem
        };
        assert_eq!(bare.message().as_deref(), Some("Not Found"));
    }

    #[test]
    fn bare_detail_body_decodes_into_message() {
        let problem: ProblemDetails =
            serde_json::from_str(r#"{"detail":"Dataset split train is not available."}"#)
                .expect("detail-only body decodes");
        assert_eq!(problem.status, 0);
        assert!(problem.title.is_empty());
        assert_eq!(
            problem.message().as_deref(),
            Some("Dataset split train is not available.")
        );
    }

    #[test]
    fn validation_detail_list_joins_messages() {
        let problem: ProblemDetails = serde_json::from_value(json!({
            "detail": [
                { "loc": ["path", "job_id"], "msg": "field required", "type": "value_error.missing" },
                { "loc": ["query", "pipeline_index"], "msg": "value is not a valid integer" },
            ]
        }))
        .expect("validation body decodes");
        assert_eq!(
            problem.message().as_deref(),
            Some("field required; value is not a valid integer")
        );

        let opaque: ProblemDetails =
            serde_json::from_value(json!({ "detail": { "code": 7 } })).expect("object detail");
        assert_eq!(opaque.message().as_deref(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn empty_document_has_no_message() {
        let problem: ProblemDetails = serde_json::from_str("{}").expect("empty body decodes");
        assert_eq!(problem.message(), None);
    }
}

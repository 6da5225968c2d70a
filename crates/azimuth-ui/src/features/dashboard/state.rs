//! Dashboard render decision types.
//!
//! # Design
//! - Describe what to render, never how; the view maps these onto components.
//! - Sections carry fully-built link targets so views do no path math.
//! - Split selectors hold only their initial value; the live value is section-local.

use azimuth_api_models::DatasetSplitName;
use thiserror::Error;

/// Label on the exploration call-to-action.
pub const EXPLORE_LABEL: &str = "Go to exploration space";
/// Dashboard heading.
pub const DASHBOARD_TITLE: &str = "Dashboard";
/// Dashboard subheading.
pub const DASHBOARD_DESCRIPTION: &str = "Explore the analyses of your datasets and pipelines. \
     Open a section to see more details.";
/// Link label offered when more than one pipeline can be compared.
pub const COMPARE_PIPELINES_LABEL: &str = "Compare pipelines";
/// Height cap for the smart tag preview scroll region.
pub const SMART_TAGS_MAX_HEIGHT_PX: u32 = 496;

/// Analysis previews the dashboard can show, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Class size, imbalance, and split shift warnings.
    DatasetWarnings,
    /// Semantic overlap between class pairs in the training split.
    ClassOverlap,
    /// Pipeline metrics broken down by data subpopulation.
    PipelineMetrics,
    /// Smart tag prevalence and associated performance.
    SmartTags,
    /// Perturbation testing results.
    BehavioralTesting,
    /// Post-processing threshold analysis.
    PostProcessing,
}

impl SectionKind {
    /// Card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DatasetWarnings => "Dataset Warnings",
            Self::ClassOverlap => "Class Overlap",
            Self::PipelineMetrics => "Pipeline Metrics by Data Subpopulation",
            Self::SmartTags => "Smart Tag Analysis",
            Self::BehavioralTesting => "Behavioral Testing",
            Self::PostProcessing => "Post-processing Analysis",
        }
    }

    /// Card description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DatasetWarnings => {
                "Investigate issues related to class size, class imbalance, or dataset shift \
                 between your training and evaluation sets."
            }
            Self::ClassOverlap => {
                "Assess semantic overlap between class pairs in the training set."
            }
            Self::PipelineMetrics => {
                "Assess pipeline performance through prediction metrics on subpopulations \
                 of the data."
            }
            Self::SmartTags => {
                "Assess the proportion of utterances with smart tags and the associated \
                 pipeline performance."
            }
            Self::BehavioralTesting => {
                "Assess the robustness of your pipeline to perturbations of the utterances."
            }
            Self::PostProcessing => {
                "Assess the quality of the post-processing thresholds on the evaluation set."
            }
        }
    }

    /// Path segment of the analysis view the card links to.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::DatasetWarnings => "dataset_warnings",
            Self::ClassOverlap => "class_overlap",
            Self::PipelineMetrics => "pipeline_metrics",
            Self::SmartTags => "smart_tags",
            Self::BehavioralTesting => "behavioral_testing_summary",
            Self::PostProcessing => "thresholds",
        }
    }
}

/// Section-local "current split" cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSelection {
    current: DatasetSplitName,
}

impl SplitSelection {
    /// Start from the dashboard's default split.
    #[must_use]
    pub const fn new(initial: DatasetSplitName) -> Self {
        Self { current: initial }
    }

    /// Currently shown split.
    #[must_use]
    pub const fn current(self) -> DatasetSplitName {
        self.current
    }

    /// Switch to another split, returning the updated cell.
    #[must_use]
    pub const fn select(self, split: DatasetSplitName) -> Self {
        Self { current: split }
    }
}

/// One eligible preview card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSection {
    /// Which analysis the card previews.
    pub kind: SectionKind,
    /// Navigation target, search suffix included.
    pub to: String,
    /// Custom link label; `None` keeps the card's default label.
    pub link_label: Option<&'static str>,
    /// Initial split for sections that let the user switch splits.
    pub split_selector: Option<DatasetSplitName>,
    /// Height cap for the card body scroll region.
    pub max_height_px: Option<u32>,
}

impl PreviewSection {
    /// Card title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Card description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Always-present page header with the exploration call-to-action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardHeader {
    /// Heading text.
    pub title: &'static str,
    /// Static description under the heading.
    pub description: &'static str,
    /// Call-to-action label.
    pub explore_label: &'static str,
    /// Exploration view for the default split.
    pub explore_to: String,
    /// First available split in priority order.
    pub default_split: DatasetSplitName,
}

/// Everything rendered once dataset info is available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Page header.
    pub header: DashboardHeader,
    /// Eligible previews in display order.
    pub sections: Vec<PreviewSection>,
}

impl DashboardLayout {
    /// Look up an eligible section by kind.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&PreviewSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Kinds of the eligible sections, in display order.
    #[must_use]
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|section| section.kind).collect()
    }
}

/// Outcome of evaluating the dashboard for the current inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardDecision {
    /// Dataset info is still loading.
    Loading,
    /// Dataset info failed or was empty.
    Unavailable {
        /// Fetch error message, or the fallback text.
        message: String,
    },
    /// Render the header and sections.
    Ready(DashboardLayout),
}

/// Precondition violations detected while deciding the layout.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// Dataset info reported no available split, so no default split exists.
    #[error("dataset info reports no available dataset split")]
    NoAvailableDatasetSplit,
}

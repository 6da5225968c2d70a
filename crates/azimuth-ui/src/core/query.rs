//! Query-string state carried across dashboard navigation.
//!
//! # Design
//! - Keep the raw search suffix verbatim so filters survive navigation untouched.
//! - Decode only the pipeline selection; every other parameter is opaque here.

/// Query parameter naming the selected pipeline.
pub const PIPELINE_INDEX_PARAM: &str = "pipeline_index";

/// Pipeline picked by the user, identified by its index in the job config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineSelection {
    /// Index into the job's pipeline list.
    pub index: usize,
}

/// Selection state derived from the current URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Selected pipeline; `None` when no pipeline is chosen.
    pub pipeline: Option<PipelineSelection>,
    /// Raw query suffix (leading `?` included) appended to generated links.
    pub search_string: String,
}

impl QueryState {
    /// Parse `window.location.search`-style input.
    #[must_use]
    pub fn from_search(raw: &str) -> Self {
        let search_string = if raw.trim_start_matches('?').is_empty() {
            String::new()
        } else if raw.starts_with('?') {
            raw.to_string()
        } else {
            format!("?{raw}")
        };
        let pipeline = query_param(&search_string, PIPELINE_INDEX_PARAM)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .map(|index| PipelineSelection { index });
        Self {
            pipeline,
            search_string,
        }
    }
}

/// Return the decoded value of the first occurrence of `name`.
fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode(key).as_deref() == Some(name))
        .and_then(|(_, value)| decode(value))
}

fn decode(value: &str) -> Option<String> {
    urlencoding::decode(&value.replace('+', " "))
        .ok()
        .map(std::borrow::Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_has_no_selection() {
        assert_eq!(QueryState::from_search(""), QueryState::default());
        assert_eq!(QueryState::from_search("?"), QueryState::default());
    }

    #[test]
    fn pipeline_index_is_decoded_and_search_kept() {
        let state = QueryState::from_search("?confidence_min=0.2&pipeline_index=1");
        assert_eq!(state.pipeline, Some(PipelineSelection { index: 1 }));
        assert_eq!(state.search_string, "?confidence_min=0.2&pipeline_index=1");
    }

    #[test]
    fn missing_question_mark_is_normalized() {
        let state = QueryState::from_search("pipeline_index=0");
        assert_eq!(state.search_string, "?pipeline_index=0");
        assert_eq!(state.pipeline, Some(PipelineSelection { index: 0 }));
    }

    #[test]
    fn invalid_pipeline_index_means_no_pipeline() {
        assert_eq!(QueryState::from_search("?pipeline_index=-1").pipeline, None);
        assert_eq!(QueryState::from_search("?pipeline_index=").pipeline, None);
        assert_eq!(QueryState::from_search("?pipeline_index").pipeline, None);
        assert_eq!(QueryState::from_search("?label=a%20b").pipeline, None);
    }

    #[test]
    fn encoded_values_are_decoded() {
        let state = QueryState::from_search("?pipeline%5Findex=%32");
        assert_eq!(state.pipeline, Some(PipelineSelection { index: 2 }));
    }
}

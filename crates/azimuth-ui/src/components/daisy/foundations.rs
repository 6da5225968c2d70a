use yew::prelude::*;

/// Color tokens used by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Primary,
    Info,
    Error,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Sizing tokens for controls and indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisySize {
    Sm,
    Lg,
}

impl DaisySize {
    #[must_use]
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }

    /// Adds a prefix (e.g. `select`) to the size suffix.
    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

/// `"{prefix}-{color}"` when a tone is set.
#[must_use]
pub(crate) fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}

/// Base class followed by any consumer classes.
#[must_use]
pub(crate) fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    let mut classes = Classes::from(base);
    classes.push(extra.clone());
    classes
}

use serde::{Deserialize, Serialize};

/// Outcome of validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    /// Human-readable reason, suitable for direct display in a form.
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Glucemia verdict with a soft-warning flag.
///
/// A reading outside the 70-150 mg/dL band but inside the 0-500 mg/dL
/// hard bounds is still valid; `warning` marks it as clinically atypical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlucemiaVerdict {
    pub valid: bool,
    pub message: String,
    pub warning: bool,
}

impl GlucemiaVerdict {
    pub fn normal(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
            warning: false,
        }
    }

    pub fn atypical(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
            warning: true,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            warning: false,
        }
    }
}

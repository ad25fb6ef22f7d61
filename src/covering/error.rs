use crate::types::BoxSize;

/// Failures surfaced by covering construction and generation.
#[derive(Clone, Debug, PartialEq)]
pub enum CoveringError {
    /// Box dimensions or counts that can never describe a covering.
    InvalidArgument {
        width: usize,
        height: usize,
        reason: &'static str,
    },
    /// Selection found no refinable cache entry for `target`. The self-entry
    /// should always qualify, so this points at a defect.
    InvalidState {
        target: BoxSize,
        resolution: BoxSize,
    },
}

impl CoveringError {
    pub(crate) fn invalid(size: BoxSize, reason: &'static str) -> Self {
        CoveringError::InvalidArgument {
            width: size.width,
            height: size.height,
            reason,
        }
    }
}

impl std::fmt::Display for CoveringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoveringError::InvalidArgument {
                width,
                height,
                reason,
            } => write!(f, "invalid box size {width}x{height}: {reason}"),
            CoveringError::InvalidState { target, resolution } => write!(
                f,
                "no valid subcovering for target {target} in feature at resolution {resolution}"
            ),
        }
    }
}

impl std::error::Error for CoveringError {}

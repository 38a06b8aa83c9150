use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage a failure is attributed to in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Parse,
    Analysis,
    Summary,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::Parse => "parse",
            Stage::Analysis => "analysis",
            Stage::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which selector an invalid argument was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Analysis,
    Summary,
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Analysis => f.write_str("analysis"),
            Selector::Summary => f.write_str("summary"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {msg}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        msg: String,
    },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("invalid {selector} selector {value:?} (expected one of: {expected})")]
    InvalidArgument {
        selector: Selector,
        value: String,
        expected: &'static str,
    },

    #[error("cannot average an empty discrepancy vector")]
    EmptyInput,
}

impl CompareError {
    pub fn stage(&self) -> Stage {
        match self {
            CompareError::NotFound { .. } | CompareError::Io { .. } => Stage::Load,
            CompareError::Parse { .. } => Stage::Parse,
            CompareError::ShapeMismatch(_) => Stage::Analysis,
            CompareError::InvalidArgument { selector, .. } => match selector {
                Selector::Analysis => Stage::Analysis,
                Selector::Summary => Stage::Summary,
            },
            CompareError::EmptyInput => Stage::Summary,
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            CompareError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CompareError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::authority::AuthorityError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error opening and reading accounts file [{}]: {source}", path.display())]
    InputAccess {
        path: PathBuf,
        source: io::Error
    },
    #[error("Error exporting accounts to [{}]: {source}", path.display())]
    OutputAccess {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Update authority failed on line [{line}]: {source}")]
    Authority {
        line: usize,
        source: AuthorityError
    }
}

impl EngineError {
    pub fn input_access(path: &Path, source: io::Error) -> Self {
        Self::InputAccess { path: path.to_path_buf(), source }
    }

    pub fn output_access(path: &Path, source: impl Into<csv::Error>) -> Self {
        Self::OutputAccess { path: path.to_path_buf(), source: source.into() }
    }

    pub fn authority(line: usize, source: AuthorityError) -> Self {
        Self::Authority { line, source }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("{} has no src directory", .0.display())]
    NotARepository(PathBuf),
    #[error("{} not found", .0.display())]
    MissingTarget(PathBuf),
    #[error("{} is not inside the repository root", .0.display())]
    OutsideRepository(PathBuf),
    #[error("failed to {} {}", .action, .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| FixError::Io {
            action,
            path,
            source,
        }
    }
}

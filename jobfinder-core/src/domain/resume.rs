//! Resume file selection

use std::path::{Path, PathBuf};

/// Name sent to the bridge when no resume file was chosen
pub const DEFAULT_RESUME_NAME: &str = "default_resume.txt";

/// A resume file chosen by the user
///
/// Only [`ResumeFile::name`] is ever transmitted; the path is kept so the
/// view can show what was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub path: PathBuf,
}

impl ResumeFile {
    /// Builds a selection from a path, using its final component as the name
    ///
    /// Returns `None` for paths without a file name (e.g. `/` or `..`).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            path: path.to_path_buf(),
        })
    }
}

/// Resume name for an apply request
pub fn resume_name(resume: Option<&ResumeFile>) -> &str {
    resume.map_or(DEFAULT_RESUME_NAME, |r| r.name.as_str())
}

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{common::RelativePath, source::SourceFile},
    error::DomainError,
};

/// The full set of units one generation run produces.
///
/// Pure data: built by the orchestrator, rendered and written by the
/// application service.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(
        &mut self,
        artifact: impl Into<String>,
        path: RelativePath,
        content: FileContent,
    ) {
        self.entries.push(FsEntry::File(FileToWrite {
            artifact: artifact.into(),
            path,
            content,
        }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = match entry {
                FsEntry::File(f) => &f.path,
                FsEntry::Directory(d) => &d.path,
            };

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Look up a planned file by its path relative to the root.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path.as_path() == path)
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

/// What a planned file holds before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Go source, rendered by a `SourceRenderer`.
    Source(SourceFile),
    /// Flat JSON object of string values, keys in the given order.
    Json(Vec<(String, String)>),
    /// Literal text written verbatim.
    Text(String),
}

impl FileContent {
    pub fn as_source(&self) -> Option<&SourceFile> {
        match self {
            Self::Source(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    /// Human-readable unit name used in error messages.
    pub artifact: String,
    pub path: RelativePath,
    pub content: FileContent,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_paths_are_rejected() {
        let mut structure = ProjectStructure::new("out");
        let path = RelativePath::try_new("main.go").unwrap();
        structure.add_file("entry point", path.clone(), FileContent::Text(String::new()));
        structure.add_file("entry point", path, FileContent::Text(String::new()));

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn lookup_by_relative_path() {
        let mut structure = ProjectStructure::new("out");
        structure.add_directory(RelativePath::try_new("models").unwrap());
        structure.add_file(
            "models for User",
            RelativePath::try_new("models/user.go").unwrap(),
            FileContent::Text("package models\n".into()),
        );

        assert!(structure.validate().is_ok());
        assert_eq!(structure.file_count(), 1);
        assert_eq!(structure.directory_count(), 1);
        assert_eq!(
            structure.file("models/user.go").map(|f| f.artifact.as_str()),
            Some("models for User")
        );
        assert!(structure.file("models/order.go").is_none());
    }
}

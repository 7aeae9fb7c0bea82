//! Lesson document corpus loading
//!
//! The extractor core never touches the filesystem; it consumes [`Document`]s
//! produced by a [`DocumentSource`]. [`CourseCorpus`] is the filesystem-backed
//! source used by the CLI: an ordered list of course directories, each scanned
//! for `*.mbl` documents and sorted lexicographically before concatenation.
//! The source order is part of the output contract — listing indices follow
//! the concatenated, per-directory-sorted document order.

use globset::{Glob, GlobMatcher};
use once_cell::sync::Lazy;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fixed pattern for lesson documents; compiled once.
static MBL_GLOB: Lazy<GlobMatcher> = Lazy::new(|| {
    Glob::new("*.mbl")
        .expect("static glob pattern compiles")
        .compile_matcher()
});

/// Errors raised while resolving or loading corpus documents
#[derive(Debug, Clone)]
pub enum CorpusError {
    SourceUnavailable(String),
    ReadFailed(String),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::SourceUnavailable(msg) => write!(f, "Corpus source unavailable: {}", msg),
            CorpusError::ReadFailed(msg) => write!(f, "Failed to read document: {}", msg),
        }
    }
}

impl std::error::Error for CorpusError {}

/// A lesson document: an ordered line sequence plus the path it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Build a document by splitting `text` into lines (terminators stripped)
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

/// Trait for pluggable document sources
///
/// The returned order is the processing order; implementations own whatever
/// sorting contract they promise.
pub trait DocumentSource {
    fn documents(&self) -> Result<Vec<Document>, CorpusError>;
}

/// Filesystem corpus over an ordered list of course directories
///
/// Each directory is scanned (non-recursively) for `*.mbl` files; matches are
/// sorted lexicographically by path within their directory, then directories
/// are concatenated in declared order.
pub struct CourseCorpus {
    course_dirs: Vec<PathBuf>,
}

impl CourseCorpus {
    pub fn new(course_dirs: Vec<PathBuf>) -> Self {
        Self { course_dirs }
    }

    /// The fixed demo-course layout: `demo-ma1` then `demo-ma2` under the
    /// sibling course-repository checkout.
    pub fn demo_courses(checkout_root: &Path) -> Self {
        Self::new(vec![
            checkout_root.join("demo-ma1"),
            checkout_root.join("demo-ma2"),
        ])
    }

    /// Resolve the ordered list of document paths without loading them
    pub fn resolve(&self) -> Result<Vec<PathBuf>, CorpusError> {
        let mut paths = Vec::new();
        for dir in &self.course_dirs {
            let mut matches = Vec::new();
            for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
                let entry = entry
                    .map_err(|e| CorpusError::SourceUnavailable(format!("{}: {}", dir.display(), e)))?;
                if entry.file_type().is_file() && MBL_GLOB.is_match(entry.file_name()) {
                    matches.push(entry.into_path());
                }
            }
            matches.sort();
            paths.extend(matches);
        }
        Ok(paths)
    }
}

impl DocumentSource for CourseCorpus {
    fn documents(&self) -> Result<Vec<Document>, CorpusError> {
        let mut documents = Vec::new();
        for path in self.resolve()? {
            let text = fs::read_to_string(&path)
                .map_err(|e| CorpusError::ReadFailed(format!("{}: {}", path.display(), e)))?;
            documents.push(Document::from_text(path.display().to_string(), &text));
        }
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("write test file");
    }

    #[test]
    fn resolves_sorted_within_each_directory() {
        let root = tempfile::tempdir().expect("tempdir");
        let ma1 = root.path().join("demo-ma1");
        let ma2 = root.path().join("demo-ma2");
        fs::create_dir_all(&ma1).unwrap();
        fs::create_dir_all(&ma2).unwrap();
        // Created out of order on purpose; resolution must sort per directory.
        write_file(&ma1, "b.mbl", "");
        write_file(&ma1, "a.mbl", "");
        write_file(&ma2, "a.mbl", "");
        write_file(&ma1, "notes.txt", "ignored");

        let corpus = CourseCorpus::demo_courses(root.path());
        let paths = corpus.resolve().expect("resolve");
        let names: Vec<String> = paths
            .iter()
            .map(|p| {
                let file = p.file_name().unwrap().to_string_lossy();
                let dir = p.parent().unwrap().file_name().unwrap().to_string_lossy();
                format!("{}/{}", dir, file)
            })
            .collect();
        assert_eq!(
            names,
            vec!["demo-ma1/a.mbl", "demo-ma1/b.mbl", "demo-ma2/a.mbl"]
        );
    }

    #[test]
    fn loads_document_lines_with_terminators_stripped() {
        let root = tempfile::tempdir().expect("tempdir");
        let ma1 = root.path().join("demo-ma1");
        fs::create_dir_all(&ma1).unwrap();
        write_file(&ma1, "lesson.mbl", "@code\nx = 1\n@text\n");

        let corpus = CourseCorpus::new(vec![ma1]);
        let documents = corpus.documents().expect("documents");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].lines, vec!["@code", "x = 1", "@text"]);
    }

    #[test]
    fn missing_course_directory_is_fatal() {
        let root = tempfile::tempdir().expect("tempdir");
        let corpus = CourseCorpus::demo_courses(root.path());
        let err = corpus.resolve().unwrap_err();
        assert!(matches!(err, CorpusError::SourceUnavailable(_)));
    }
}

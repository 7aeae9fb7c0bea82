//! Prototype collector: tagged declaration lines to a generated bundle
//!
//! Interpreter modules annotate their dispatchable functions with comment
//! lines of the form `//G signature -> target;`. The collector gathers those
//! lines from a fixed ordered module list, qualifies the target with the
//! owning module's identifier, and renders one generated source block that
//! the caller redirects into `src/prototypes.rs` of the interpreter.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Tag prefix (including its trailing space) marking a declaration line
pub const PROTO_TAG: &str = "//G ";
/// Separator between a declaration's signature and its target
pub const SEPARATOR: &str = " -> ";

/// The interpreter modules scanned for declarations, in bundle order.
pub const DEFAULT_MODULES: [&str; 5] = [
    "interpret_basic.rs",
    "interpret_set.rs",
    "interpret_complex.rs",
    "interpret_matrix.rs",
    "interpret_term.rs",
];

/// Fixed header stamped onto the generated bundle
pub const BUNDLE_HEADER: &str = "\
// THIS FILE IS GENERATED AUTOMATICALLY BY RUNNING
// `smpl-tools collect-prototypes > src/prototypes.rs`
// DO NOT EDIT.
";
/// Named text-block opener for the bundle
pub const BUNDLE_OPEN: &str = "pub const FUNCTION_PROTOTYPES: &str = r#\"";
/// Text-block closer for the bundle
pub const BUNDLE_CLOSE: &str = "\"#;";

/// Errors raised while loading interpreter modules
#[derive(Debug, Clone)]
pub enum CollectError {
    ModuleUnavailable { path: PathBuf, message: String },
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::ModuleUnavailable { path, message } => {
                write!(f, "Module '{}' unavailable: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CollectError {}

/// An interpreter source module: its file name plus line sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SourceModule {
    pub file_name: String,
    pub lines: Vec<String>,
}

impl SourceModule {
    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self {
            file_name: file_name.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Module identifier: the file name with its extension stripped
    pub fn identifier(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file_name)
    }
}

/// Trait for pluggable module sources
pub trait ModuleSource {
    fn load(&self, file_name: &str) -> Result<SourceModule, CollectError>;
}

/// Loads modules from a single source directory
pub struct DirModules {
    root: PathBuf,
}

impl DirModules {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModuleSource for DirModules {
    fn load(&self, file_name: &str) -> Result<SourceModule, CollectError> {
        let path = self.root.join(file_name);
        let text = fs::read_to_string(&path).map_err(|e| CollectError::ModuleUnavailable {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(SourceModule::from_text(file_name, &text))
    }
}

/// Qualify a declaration's target with its owning module identifier.
///
/// Only the first ` -> ` is rewritten; a declaration without the separator
/// passes through unchanged.
pub fn qualify(declaration: &str, module_id: &str) -> String {
    declaration.replacen(SEPARATOR, &format!("{}{}.", SEPARATOR, module_id), 1)
}

/// Collect every tagged declaration line across `modules`, in order.
///
/// Lines are trimmed before the tag check; the tag and its trailing space are
/// stripped from the emitted line. Modules without tagged lines contribute
/// nothing.
pub fn collect_prototypes(modules: &[SourceModule]) -> String {
    let mut prototypes = String::new();
    for module in modules {
        let module_id = module.identifier();
        for line in &module.lines {
            if let Some(declaration) = line.trim().strip_prefix(PROTO_TAG) {
                prototypes.push_str(&qualify(declaration, module_id));
                prototypes.push('\n');
            }
        }
    }
    prototypes
}

/// Wrap collected prototype text in the generated-bundle framing
pub fn render_bundle(prototypes: &str) -> String {
    format!(
        "{}\n{}\n{}{}\n",
        BUNDLE_HEADER, BUNDLE_OPEN, prototypes, BUNDLE_CLOSE
    )
}

/// Load every declared module from `source` and render the full bundle.
///
/// Any unreadable module aborts the whole generation; a partial bundle is
/// never produced.
pub fn build_bundle(
    source: &impl ModuleSource,
    module_files: &[&str],
) -> Result<String, CollectError> {
    let mut modules = Vec::with_capacity(module_files.len());
    for file_name in module_files {
        modules.push(source.load(file_name)?);
    }
    Ok(render_bundle(&collect_prototypes(&modules)))
}

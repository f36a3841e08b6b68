//! Repo-local lint that keeps the impact engine free of side effects.
//!
//! `impact-engine` is the pure computational core of the calculator. All
//! input, output, logging, and configuration belong to the `calculator`
//! presentation crate. This crate provides a lightweight lint that:
//!
//! - forbids engine modules from importing I/O or ambient-state modules of
//!   `std` (`fs`, `io`, `net`, `env`, `process`, `thread`, `time`, `sync`,
//!   `cell`)
//! - forbids engine modules from depending on presentation or
//!   infrastructure crates (`tracing`, `clap`, `ortho_config`, ...)
//! - forbids data modules (`catalog`, `selection`, `standard_catalog`,
//!   `error`) from depending on the arithmetic modules (`engine`,
//!   `interpretation`)
//!
//! Items inside `#[cfg(test)]` modules are not linted.
//!
//! The lint is executed via `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

const ENGINE_CRATE: &str = "impact_engine";

const FORBIDDEN_STD_MODULES: [&str; 9] = [
    "fs", "io", "net", "env", "process", "thread", "time", "sync", "cell",
];

const FORBIDDEN_CRATES: [&str; 6] = [
    "calculator",
    "clap",
    "ortho_config",
    "serde_json",
    "tracing",
    "tracing_subscriber",
];

/// A single purity violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `crates/impact-engine/src`.
    pub file: PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the purity lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    Io(io::Error),
    /// Rust source parsing failed.
    Parse {
        /// File that could not be parsed or classified.
        file: PathBuf,
        /// Parser or classification message.
        message: String,
    },
    /// One or more purity violations were found.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error while linting the impact engine: {err}"),
            Self::Parse { file, message } => write!(
                f,
                "Failed to parse Rust source while linting the impact engine ({}): {message}",
                file.display()
            ),
            Self::Violations(violations) => {
                writeln!(f, "Impact engine purity violations:")?;
                for violation in violations {
                    writeln!(f, "- {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Lint the engine crate sources on disk.
///
/// `engine_dir` must be the `crates/impact-engine/` directory at the
/// repository root.
///
/// # Errors
///
/// Returns [`ArchitectureLintError`] when the sources cannot be read or
/// parsed, or when any rule is violated.
pub fn lint_engine_sources(engine_dir: &Path) -> Result<(), ArchitectureLintError> {
    let src_dir = engine_dir.join("src");
    let mut sources = Vec::new();
    collect_sources_under(&src_dir, &src_dir, &mut sources)?;
    sources.sort_by(|left, right| left.file.cmp(&right.file));
    lint_sources(&sources)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::Parse`] for unparseable or unclassified
/// files and [`ArchitectureLintError::Violations`] listing every violation.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let layer = ModuleLayer::infer_from_path(&source.file).ok_or_else(|| {
            ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: "unable to infer module layer from file path".to_owned(),
            }
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(lint_parsed_source(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `crates/impact-engine/src`.
    pub file: PathBuf,
    /// Rust source text.
    pub contents: String,
}

/// The role of an engine module, inferred from its top-level file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleLayer {
    Root,
    Data,
    Arithmetic,
}

impl ModuleLayer {
    fn infer_from_path(relative_path: &Path) -> Option<Self> {
        let first = relative_path.components().next()?.as_os_str();
        let stem = Path::new(first).file_stem()?.to_string_lossy();
        match stem.as_ref() {
            "lib" => Some(Self::Root),
            "catalog" | "selection" | "standard_catalog" | "error" => Some(Self::Data),
            "engine" | "interpretation" | "parameters" => Some(Self::Arithmetic),
            _ => None,
        }
    }

    fn forbidden_module_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Data => BTreeSet::from(["engine", "interpretation"]),
            Self::Root | Self::Arithmetic => BTreeSet::new(),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Root => "crate root",
            Self::Data => "data",
            Self::Arithmetic => "arithmetic",
        }
    }
}

fn lint_parsed_source(file: &Path, layer: ModuleLayer, parsed: &syn::File) -> Vec<Violation> {
    let forbidden_modules = layer.forbidden_module_roots();
    let forbidden_std = BTreeSet::from(FORBIDDEN_STD_MODULES);
    let forbidden_crates = BTreeSet::from(FORBIDDEN_CRATES);
    let layer_name = layer.name();

    let mut collector = PathCollector::default();
    collector.visit_file(parsed);

    let mut messages = BTreeSet::new();
    for segments in &collector.paths {
        if let Some(root) = forbidden_internal_module_root(segments, &forbidden_modules) {
            messages.insert(format!(
                "{layer_name} module must not depend on crate::{root}"
            ));
        }

        if let Some(module) = forbidden_std_module(segments, &forbidden_std) {
            messages.insert(format!(
                "{layer_name} module must not depend on std::{module}"
            ));
        }

        if let Some(root) = forbidden_external_crate_root(segments, &forbidden_crates) {
            messages.insert(format!(
                "{layer_name} module must not depend on external crate `{root}`"
            ));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn forbidden_internal_module_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = internal_module_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn forbidden_std_module(
    segments: &[String],
    forbidden_modules: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let mut iter = segments.iter();
    if iter.next()?.as_str() != "std" {
        return None;
    }
    forbidden_modules.get(iter.next()?.as_str()).copied()
}

fn forbidden_external_crate_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = external_crate_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn is_relative_module_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

fn internal_module_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    let start_index = match first {
        "crate" | "self" | "super" => segments
            .iter()
            .position(|segment| !is_relative_module_segment(segment.as_str()))?,
        ENGINE_CRATE => 1,
        _ => return None,
    };
    segments.get(start_index).map(String::as_str)
}

fn external_crate_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    if is_relative_module_segment(root) || root == ENGINE_CRATE {
        return None;
    }
    Some(root)
}

fn is_test_module(node: &syn::ItemMod) -> bool {
    node.attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_path(&mut self, path: &syn::Path) {
        let segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();
        if segments.is_empty() {
            return;
        }
        self.paths.insert(segments);
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                let mut next = prefix;
                next.push(path.ident.to_string());
                self.record_use_tree(&path.tree, next);
            }
            syn::UseTree::Name(name) => {
                let mut segments = prefix;
                segments.push(name.ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Rename(rename) => {
                let mut segments = prefix;
                segments.push(rename.ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Glob(_) => {
                let mut segments = prefix;
                segments.push("*".to_owned());
                self.paths.insert(segments);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        self.record_path(node);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }

    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if is_test_module(node) {
            return;
        }
        syn::visit::visit_item_mod(self, node);
    }
}

fn collect_sources_under(
    src_root: &Path,
    current: &Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sources_under(src_root, &path, sources)?;
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }

        let relative = path
            .strip_prefix(src_root)
            .map_err(|err| ArchitectureLintError::Parse {
                file: path.clone(),
                message: err.to_string(),
            })?
            .to_path_buf();
        let contents = fs::read_to_string(&path)?;
        sources.push(LintSource {
            file: relative,
            contents,
        });
    }
    Ok(())
}

//! An in-memory, read-only virtual file system backed by a flat map.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::core::{FileSystem, FsError, Result};
use crate::vfs::entry::Entry;
use crate::vfs::handle::Handle;
use crate::vfs::path::{leaf_of, parent_of};

/// A read-only virtual file system built from a flat mapping of absolute
/// slash-separated paths to string content.
///
/// `EmbedFs` serves a fixed set of embedded assets (typically web app
/// static files baked into the binary at build time) as if they were files
/// on disk, without touching the host file system.
///
/// ### Internal state
///
/// * `files` — the caller-supplied content map. Keys are inner absolute
///   paths (always start with `/`, `/` is the only separator); values are
///   the file contents. Owned exclusively by the instance, so the
///   no-mutation-after-construction contract of the backing map is enforced
///   by the ownership transfer itself.
/// * `dirs` — the directory index, computed once inside the constructor.
///   Maps every implied directory to its sorted list of direct children.
///
/// ### Invariants
///
/// 1. **Root existence**: `/` is always a key of `dirs`, even for an empty
///    content map.
/// 2. **Parent chain**: for any file at `/a/b/c`, the whole chain `/a/b`,
///    `/a`, `/` is present in `dirs`. Directories are implied by file
///    paths, never declared.
/// 3. **No file/directory overlap**: directory keys derive strictly from
///    *other* entries' parents; lookups check `files` first.
/// 4. **Listing uniqueness**: a child name appears at most once per
///    directory, and no directory lists itself.
///
/// ### Thread safety
///
/// The index is built synchronously in the constructor and nothing is
/// mutated afterwards. `open` takes `&self` and every handle carries its
/// own cursor, so an `EmbedFs` shared between threads needs no locks.
///
/// ### Example
///
/// ```
/// use std::io::Read;
/// use embedfs::{EmbedFs, FileSystem};
///
/// let fs = EmbedFs::builder()
///     .file("/index.html", "<html></html>")
///     .file("/js/app.js", "console.log('hi');")
///     .build();
///
/// let mut page = fs.open("/index.html").unwrap();
/// let mut html = String::new();
/// page.read_to_string(&mut html).unwrap();
/// assert_eq!(html, "<html></html>");
///
/// let js = fs.open("/js").unwrap();
/// assert!(js.is_dir());
/// ```
#[derive(Debug, Clone)]
pub struct EmbedFs {
    files: HashMap<String, String>, // inner absolute paths to content
    dirs: HashMap<String, Vec<Entry>>, // implied directories to sorted children
}

impl EmbedFs {
    /// Builds a file system from `files`, a map of absolute slash-separated
    /// paths to string content.
    ///
    /// The directory index is computed eagerly, before the instance is
    /// returned. Keys must start with `/`; a key violating that contract is
    /// not rejected but produces unspecified directory entries.
    pub fn new(files: HashMap<String, String>) -> EmbedFs {
        let dirs = synthesize_dirs(&files);
        debug!(
            files = files.len(),
            dirs = dirs.len(),
            "directory index built"
        );
        EmbedFs { files, dirs }
    }

    /// Returns a builder for fluent construction.
    pub fn builder() -> EmbedFsBuilder {
        EmbedFsBuilder::new()
    }

    /// Checks if `path` exists, as either a file or an implied directory.
    pub fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.dirs.contains_key(path)
    }

    /// Checks if `path` is a regular file.
    pub fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Checks if `path` is an implied directory.
    pub fn is_dir(&self, path: &str) -> bool {
        !self.files.contains_key(path) && self.dirs.contains_key(path)
    }

    /// Number of files in the content map.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl Default for EmbedFs {
    /// An empty file system: no files, a single empty root directory.
    fn default() -> EmbedFs {
        EmbedFs::new(HashMap::new())
    }
}

impl FileSystem for EmbedFs {
    /// Dispatches the lookup: a content-map hit yields a file handle with a
    /// fresh read cursor, a directory-index hit yields a directory handle
    /// over the precomputed child list, anything else is `NotFound`.
    fn open(&self, path: &str) -> Result<Handle<'_>> {
        if let Some(content) = self.files.get(path) {
            trace!(path, "open file");
            return Ok(Handle::file(path, content));
        }
        match self.dirs.get(path) {
            Some(children) => {
                trace!(path, "open directory");
                Ok(Handle::directory(path, children))
            }
            None => {
                trace!(path, "open miss");
                Err(FsError::NotFound {
                    path: path.to_string(),
                })
            }
        }
    }
}

/// Derives the directory index from the content map's key set.
///
/// Registers every ancestor of every file path as a known directory, down
/// to the root, then computes each directory's direct children: files whose
/// parent it is (sized by content length) and other known directories whose
/// parent it is (size 0). Children are sorted by name, so listings are
/// deterministic.
///
/// Runs once at construction; O(files x directories) is acceptable for a
/// bounded embedded-asset set.
fn synthesize_dirs(files: &HashMap<String, String>) -> HashMap<String, Vec<Entry>> {
    let mut dirs: HashMap<String, Vec<Entry>> = HashMap::new();
    dirs.insert("/".to_string(), Vec::new());

    for path in files.keys() {
        let mut dir = parent_of(path);
        while !dirs.contains_key(dir) {
            dirs.insert(dir.to_string(), Vec::new());
            dir = parent_of(dir);
        }
    }

    let known: Vec<String> = dirs.keys().cloned().collect();
    for d in &known {
        let d = d.as_str();

        let mut children: Vec<Entry> = files
            .iter()
            .filter(|(path, _)| parent_of(path) == d)
            .map(|(path, content)| Entry::file(leaf_of(path), content.len() as u64))
            .collect();

        // The root is its own parent under parent_of; skipping d2 == d
        // keeps `/` from listing itself as its own child.
        children.extend(
            known
                .iter()
                .filter(|d2| d2.as_str() != d && parent_of(d2) == d)
                .map(|d2| Entry::directory(leaf_of(d2))),
        );

        children.sort_by(|a, b| a.name().cmp(b.name()));
        dirs.insert(d.to_string(), children);
    }

    dirs
}

/// Fluent construction of an [`EmbedFs`].
///
/// Convenient in tests and for generated asset-embedding code:
///
/// ```
/// use embedfs::EmbedFs;
///
/// let fs = EmbedFs::builder()
///     .file("/index.html", "<html></html>")
///     .build();
/// assert_eq!(fs.file_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EmbedFsBuilder {
    files: HashMap<String, String>,
}

impl EmbedFsBuilder {
    pub fn new() -> EmbedFsBuilder {
        EmbedFsBuilder {
            files: HashMap::new(),
        }
    }

    /// Adds one file. `path` must be absolute and slash-separated; adding
    /// the same path twice replaces the earlier content.
    pub fn file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Builds the file system, computing the directory index.
    pub fn build(self) -> EmbedFs {
        EmbedFs::new(self.files)
    }
}

//! An in-memory, read-only virtual file system for embedded assets.
//! Serves a fixed set of files, typically web app static files baked into
//! the binary by a build-time embedding step, through a file-system-like
//! interface without touching the real file system.
//!
//! ### Overview
//!
//! `embedfs` is built from a flat map of absolute slash-separated paths to
//! string content. At construction the map's key set is expanded into a
//! consistent directory tree: every ancestor of every file becomes a known
//! directory with a precomputed child list, down to the root `/`.
//!
//! **Key ideas**:
//! - **Read-only**: the content map is handed over once; ownership moves
//!   into the file system, so nothing can mutate it afterwards.
//! - **Implied directories**: directories are inferred from file paths,
//!   never declared. The root always exists, even for an empty map.
//! - **Cheap handles**: every `open` yields an independent handle with its
//!   own read cursor; concurrent reads need no locks.
//! - **Std traits at the seams**: file handles implement `std::io::Read`
//!   and `std::io::Seek`, so they plug into anything that streams bytes.
//!
//! ### Example
//!
//! ```
//! use std::io::Read;
//! use embedfs::{EmbedFs, FileSystem};
//!
//! let fs = EmbedFs::builder()
//!     .file("/index.html", "<html></html>")
//!     .file("/js/app.js", "console.log('hi');")
//!     .build();
//!
//! let root = fs.open("/").unwrap();
//! let names: Vec<_> = root.read_dir(0).iter().map(|e| e.name()).collect();
//! assert_eq!(names, vec!["index.html", "js"]);
//!
//! let mut app = fs.open("/js/app.js").unwrap();
//! let mut source = String::new();
//! app.read_to_string(&mut source).unwrap();
//! assert_eq!(source, "console.log('hi');");
//!
//! assert!(fs.open("/missing").unwrap_err().is_not_found());
//! ```

mod core;
mod vfs;

pub use core::{FileSystem, FsError, Result};
pub use vfs::{EmbedFs, EmbedFsBuilder, Entry, EntryType, Handle};

use std::io::{self, Cursor, Read, Seek, SeekFrom};

use crate::vfs::entry::Entry;

/// An open file or directory.
///
/// Handles are created per `open` call and borrow from the owning file
/// system. A file handle wraps a fresh byte cursor over the entry's
/// content; a directory handle wraps the precomputed child list. Each
/// handle carries its own read position, so handles opened concurrently
/// over the same path never affect each other.
///
/// File handles implement [`std::io::Read`] and [`std::io::Seek`]. On a
/// directory handle both are lenient no-ops: `read` yields 0 bytes and
/// `seek` reports position 0, since there is no byte cursor behind it.
#[derive(Debug)]
pub struct Handle<'fs> {
    name: String,
    state: State<'fs>,
}

#[derive(Debug)]
enum State<'fs> {
    File(Cursor<&'fs [u8]>),
    Directory(&'fs [Entry]),
}

impl<'fs> Handle<'fs> {
    pub(crate) fn file(name: &str, content: &'fs str) -> Handle<'fs> {
        Handle {
            name: name.to_string(),
            state: State::File(Cursor::new(content.as_bytes())),
        }
    }

    pub(crate) fn directory(name: &str, children: &'fs [Entry]) -> Handle<'fs> {
        Handle {
            name: name.to_string(),
            state: State::Directory(children),
        }
    }

    /// Returns `true` if the handle refers to a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.state, State::Directory(_))
    }

    /// Metadata for the open entry. The name is the path the handle was
    /// opened with.
    pub fn stat(&self) -> Entry {
        match &self.state {
            State::File(cursor) => Entry::file(&self.name, cursor.get_ref().len() as u64),
            State::Directory(_) => Entry::directory(&self.name),
        }
    }

    /// Lists the directory's children.
    ///
    /// The complete precomputed list comes back in one call regardless of
    /// `count`; there is no pagination. On a file handle the list is empty.
    pub fn read_dir(&self, count: usize) -> &'fs [Entry] {
        let _ = count;
        match self.state {
            State::File(_) => &[],
            State::Directory(children) => children,
        }
    }

    /// Releases the handle. Equivalent to dropping it: only the transient
    /// read cursor goes away, the content stays in the owning map.
    pub fn close(self) {}
}

impl Read for Handle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.state {
            State::File(cursor) => cursor.read(buf),
            State::Directory(_) => Ok(0),
        }
    }
}

impl Seek for Handle<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match &mut self.state {
            State::File(cursor) => cursor.seek(pos),
            State::Directory(_) => Ok(0),
        }
    }
}

mod embed_fs;
mod entry;
mod handle;
mod path;

pub use embed_fs::{EmbedFs, EmbedFsBuilder};
pub use entry::{Entry, EntryType};
pub use handle::Handle;

mod fs_snapshot_writer;
mod snapshot_writer;

pub use fs_snapshot_writer::FsSnapshotWriter;
pub use snapshot_writer::{SnapshotError, SnapshotWriter};

//! libquality-file - Filesystem-backed key-value storage.

mod store;

pub use store::FileStore;

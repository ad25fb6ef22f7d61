//! Serializable reports describing a sweep and the resulting covering cache.
pub mod cache;
pub mod sweep;

pub use self::cache::{CacheEntryReport, CacheReport, EntryKind};
pub use self::sweep::{SweepLevelReport, SweepReport};

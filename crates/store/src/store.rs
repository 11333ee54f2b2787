use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::tag::{NewTag, ProgrammedTag};

/// Persistence operations for registered tags.
///
/// Records are write-once: implementations insert and list, nothing
/// updates or deletes an existing row.
#[async_trait]
pub trait TagStore: Send + Sync + fmt::Debug {
    /// Persist a newly programmed tag and return the stored record.
    async fn insert(&self, tag: NewTag) -> Result<ProgrammedTag>;

    /// All registered tags, newest first.
    async fn list(&self) -> Result<Vec<ProgrammedTag>>;
}

//! Per-video engagement records.

use std::ops::Deref;

use crate::domain::AppError;

/// Number of uploads inspected per analysis. Fixed, not paginated.
pub const PAGE_SIZE: usize = 10;

/// One row of the engagement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub thumbnail_url: String,
}

/// Ordered engagement table, never longer than [`PAGE_SIZE`].
///
/// Order follows the upstream response and is kept as-is for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoRecordSet {
    records: Vec<VideoRecord>,
}

impl VideoRecordSet {
    pub fn new(records: Vec<VideoRecord>) -> Result<Self, AppError> {
        if records.len() > PAGE_SIZE {
            return Err(AppError::InvalidInput(format!(
                "record set holds at most {} videos, got {}",
                PAGE_SIZE,
                records.len()
            )));
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The first `n` records in existing order (fewer if the set is shorter).
    pub fn head(&self, n: usize) -> &[VideoRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn into_records(self) -> Vec<VideoRecord> {
        self.records
    }
}

impl Deref for VideoRecordSet {
    type Target = [VideoRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> IntoIterator for &'a VideoRecordSet {
    type Item = &'a VideoRecord;
    type IntoIter = std::slice::Iter<'a, VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

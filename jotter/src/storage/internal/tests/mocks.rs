use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use tokio::io;
use uuid::Uuid;

use crate::rng::{make_uuid, SyncRng};
use crate::storage::internal::data::NotesData;
use crate::storage::internal::io_trait::NoteStoreIo;
use crate::storage::StorageError;

pub const START_TIME: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

/// Keeps the "file" in memory and records every write.
pub struct TestNoteStoreIo {
    file: Mutex<Option<NotesData>>,
    writes: Mutex<Vec<NotesData>>,
    time: Mutex<OffsetDateTime>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    rng: SyncRng<StdRng>,
}

impl TestNoteStoreIo {
    pub fn new() -> Self {
        Self::with_file(None)
    }

    pub fn with_file(file: Option<NotesData>) -> Self {
        TestNoteStoreIo {
            file: Mutex::new(file),
            writes: Mutex::new(Vec::new()),
            time: Mutex::new(START_TIME),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            rng: SyncRng::new(StdRng::seed_from_u64(42)),
        }
    }

    pub fn unreadable() -> Self {
        let io = Self::new();
        io.fail_reads.store(true, Ordering::Relaxed);
        io
    }

    pub fn advance_time(&self, by: Duration) {
        *self.time.lock().unwrap() += by;
    }

    pub fn set_time(&self, time: OffsetDateTime) {
        *self.time.lock().unwrap() = time;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    pub fn get_writes(&self) -> Vec<NotesData> {
        self.writes.lock().unwrap().clone()
    }

    pub fn get_file(&self) -> Option<NotesData> {
        self.file.lock().unwrap().clone()
    }
}

#[async_trait]
impl NoteStoreIo for TestNoteStoreIo {
    async fn read_notes_file(
        &self,
    ) -> Result<NotesData, StorageError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied).into())
        }
        Ok(self.get_file().unwrap_or_default())
    }

    async fn write_notes_file(
        &self,
        notes_data: &NotesData,
    ) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(io::Error::from(io::ErrorKind::StorageFull).into())
        }
        self.writes.lock().unwrap().push(notes_data.clone());
        *self.file.lock().unwrap() = Some(notes_data.clone());
        Ok(())
    }

    fn get_time(&self) -> OffsetDateTime {
        *self.time.lock().unwrap()
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut *self.rng.get_rng())
    }
}

//! JSON file snapshot store

use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::{error::AppResult, models::snapshot::Snapshot};

use super::SnapshotStore;

/// Stores the snapshot as a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn read(&self) -> AppResult<Option<Snapshot>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(snapshot))
    }

    fn write(&self, snapshot: &Snapshot) -> AppResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);

        if self.pretty {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
            snapshot.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut writer, snapshot)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

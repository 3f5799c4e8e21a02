//! CSV-backed lead record store
//!
//! One header row followed by one row per lead. Every append reopens the file,
//! counts the rows already present, derives the lead ID from that position and
//! appends a single row. Nothing is cached between requests.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::LeadStore;
use crate::types::{LeadRecord, LeadSubmission, LEAD_HEADERS};
use shared::{service_debug, service_info, ServiceId};

/// Row number of the first lead; row 1 holds the headers
const FIRST_LEAD_ROW: usize = 2;

/// Real CSV record store
pub struct RealLeadStore {
    path: PathBuf,
    id_prefix: String,
    /// Held across count + append so two requests in this process never read
    /// the same row count. Other processes writing the same file are not covered.
    write_lock: Mutex<()>,
}

impl RealLeadStore {
    pub fn new(path: impl Into<PathBuf>, id_prefix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id_prefix: id_prefix.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn persistence_error(&self, err: impl Display) -> WebServerError {
        WebServerError::PersistenceFailed {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create the file with headers when it is missing or empty
    async fn ensure_header(&self) -> WebServerResult<bool> {
        match fs::metadata(&self.path).await {
            Ok(meta) if meta.len() > 0 => return Ok(false),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .await
                        .map_err(|e| self.persistence_error(e))?;
                }
            }
            Err(e) => return Err(self.persistence_error(e)),
        }

        let header = encode_row(&LEAD_HEADERS).map_err(|e| self.persistence_error(e))?;
        fs::write(&self.path, header)
            .await
            .map_err(|e| self.persistence_error(e))?;
        Ok(true)
    }

    async fn read_store(&self) -> WebServerResult<Vec<u8>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.persistence_error(e)),
        }
    }

    async fn count_rows(&self) -> WebServerResult<usize> {
        let bytes = self.read_store().await?;
        count_data_rows(&bytes).map_err(|e| self.persistence_error(e))
    }
}

#[async_trait]
impl LeadStore for RealLeadStore {
    async fn initialize(&self) -> WebServerResult<()> {
        let _guard = self.write_lock.lock().await;
        if self.ensure_header().await? {
            service_info!(ServiceId::current(), "✅ Created lead store: {}", self.path.display());
        }
        Ok(())
    }

    async fn append(&self, lead: &LeadSubmission) -> WebServerResult<LeadRecord> {
        let _guard = self.write_lock.lock().await;
        self.ensure_header().await?;

        let existing = self.read_store().await?;
        let position = count_data_rows(&existing).map_err(|e| self.persistence_error(e))? + FIRST_LEAD_ROW;
        let now = Local::now();
        let record = LeadRecord {
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            lead_id: format_lead_id(&self.id_prefix, now.date_naive(), position),
            lead: lead.clone(),
        };

        let mut line = Vec::new();
        // Close off a last row saved without its terminator
        if needs_terminator(&existing) {
            line.push(b'\n');
        }
        line.extend(encode_row(&record.to_row()).map_err(|e| self.persistence_error(e))?);
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.persistence_error(e))?;
        file.write_all(&line).await.map_err(|e| self.persistence_error(e))?;
        file.flush().await.map_err(|e| self.persistence_error(e))?;
        file.sync_data().await.map_err(|e| self.persistence_error(e))?;

        service_debug!(ServiceId::current(), "💾 Appended lead {} at row {}", record.lead_id, position);
        Ok(record)
    }

    async fn row_count(&self) -> WebServerResult<usize> {
        self.count_rows().await
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// `PREFIX-YYYYMMDD-NNNN`, NNNN being the row the lead occupies in the file
pub fn format_lead_id(prefix: &str, date: NaiveDate, row: usize) -> String {
    format!("{}-{}-{:04}", prefix, date.format("%Y%m%d"), row)
}

/// Serialize one CSV record including its line terminator
fn encode_row(fields: &[&str]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::new(e.error().kind(), e.error().to_string())))
}

fn needs_terminator(bytes: &[u8]) -> bool {
    bytes.last().is_some_and(|last| *last != b'\n')
}

/// Count records after the header row
fn count_data_rows(bytes: &[u8]) -> Result<usize, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut count = 0;
    for record in reader.byte_records() {
        record?;
        count += 1;
    }
    Ok(count)
}

/// Read every stored row, header excluded. Used by tests and tooling.
pub fn read_rows(path: &Path) -> WebServerResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

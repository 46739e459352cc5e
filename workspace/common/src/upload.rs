//! CSV upload: client-side validation and the upload widget's state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const VALIDATION_MESSAGE: &str = "Please upload a valid CSV file under 5MB";
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to upload file";

/// What the browser tells us about a picked or dropped file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileMeta {
    /// CSV by MIME type, or by extension when the browser reports something
    /// else (some platforms label CSV files as spreadsheets).
    pub fn is_csv(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case(CSV_MIME_TYPE)
            || self.name.to_ascii_lowercase().ends_with(".csv")
    }

    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("{}", VALIDATION_MESSAGE)]
    NotCsv { name: String },
    #[error("{}", VALIDATION_MESSAGE)]
    TooLarge { name: String, size: u64 },
    #[error("{}", VALIDATION_MESSAGE)]
    TooManyFiles(usize),
}

pub fn validate_file(file: &FileMeta) -> Result<(), UploadRejection> {
    if !file.is_csv() {
        return Err(UploadRejection::NotCsv {
            name: file.name.clone(),
        });
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge {
            name: file.name.clone(),
            size: file.size,
        });
    }
    Ok(())
}

/// A file handle paired with its metadata. `F` is the browser `File` in the
/// app and `()` in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<F> {
    pub meta: FileMeta,
    pub handle: F,
}

/// Accepts exactly one valid file. An empty selection is not an error.
pub fn validate_selection<F>(mut files: Vec<Candidate<F>>) -> Result<Option<Candidate<F>>, UploadRejection> {
    if files.len() > 1 {
        return Err(UploadRejection::TooManyFiles(files.len()));
    }
    match files.pop() {
        Some(candidate) => {
            validate_file(&candidate.meta)?;
            Ok(Some(candidate))
        }
        None => Ok(None),
    }
}

/// Body of a successful `POST /api/upload/csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    pub rows_processed: u64,
    #[serde(default)]
    pub message: String,
}

pub fn success_message(rows_processed: u64) -> String {
    format!("Successfully processed {} orders", rows_processed)
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadMsg<F> {
    FilesSelected(Vec<Candidate<F>>),
    Submit,
    Succeeded { rows_processed: u64 },
    Failed(String),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEffect<F> {
    Upload(Candidate<F>),
    /// Fire the caller's completion callback after the confirmation delay.
    ScheduleCompletion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<F> {
    held: Option<Candidate<F>>,
    uploading: bool,
    error: Option<String>,
    success: Option<String>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            held: None,
            uploading: false,
            error: None,
            success: None,
        }
    }
}

impl<F: Clone> UploadState<F> {
    pub fn held(&self) -> Option<&FileMeta> {
        self.held.as_ref().map(|c| &c.meta)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Confirm/cancel controls are shown only while a file waits for confirmation.
    pub fn shows_actions(&self) -> bool {
        self.held.is_some() && self.success.is_none()
    }

    pub fn update(&mut self, msg: UploadMsg<F>) -> Option<UploadEffect<F>> {
        match msg {
            UploadMsg::FilesSelected(files) => {
                if self.uploading {
                    tracing::debug!("Ignoring file selection during upload");
                    return None;
                }
                self.error = None;
                self.success = None;
                match validate_selection(files) {
                    Ok(Some(candidate)) => {
                        tracing::debug!(
                            "Holding {} ({} bytes) for upload",
                            candidate.meta.name,
                            candidate.meta.size
                        );
                        self.held = Some(candidate);
                    }
                    Ok(None) => {}
                    Err(rejection) => {
                        tracing::info!("Rejected upload selection: {:?}", rejection);
                        self.error = Some(rejection.to_string());
                    }
                }
                None
            }
            UploadMsg::Submit => {
                if self.uploading {
                    return None;
                }
                let candidate = self.held.clone()?;
                self.uploading = true;
                self.error = None;
                self.success = None;
                Some(UploadEffect::Upload(candidate))
            }
            UploadMsg::Succeeded { rows_processed } => {
                if !self.uploading {
                    return None;
                }
                self.uploading = false;
                self.held = None;
                self.success = Some(success_message(rows_processed));
                Some(UploadEffect::ScheduleCompletion)
            }
            UploadMsg::Failed(message) => {
                if !self.uploading {
                    return None;
                }
                self.uploading = false;
                self.error = Some(message);
                None
            }
            UploadMsg::Cancel => {
                if self.uploading {
                    return None;
                }
                self.held = None;
                self.error = None;
                None
            }
        }
    }
}

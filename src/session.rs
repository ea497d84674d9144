//! Session State
//! The uploaded table and image, and the transition applied on each upload.

use crate::data::{SpreadsheetLoader, Table};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// One picked file.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// Readiness of the tabular dataset.
#[derive(Debug, Clone, Default)]
pub enum DataState {
    #[default]
    NoDataLoaded,
    Loaded(Arc<Table>),
    LoadFailed { file_name: String, reason: String },
}

impl DataState {
    pub fn table(&self) -> Option<&Table> {
        match self {
            DataState::Loaded(table) => Some(table.as_ref()),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            DataState::LoadFailed { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            DataState::NoDataLoaded => None,
            DataState::Loaded(table) => Some(table.source_name()),
            DataState::LoadFailed { file_name, .. } => Some(file_name.as_str()),
        }
    }
}

/// A decoded image, kept as RGBA8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl UploadedImage {
    pub fn decode(upload: &Upload) -> Result<Self, image::ImageError> {
        let rgba = image::load_from_memory(&upload.bytes)?.to_rgba8();
        Ok(Self {
            name: upload.name.clone(),
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Empty,
    Loaded(Arc<UploadedImage>),
    Failed { file_name: String, reason: String },
}

/// Inputs that change the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SpreadsheetUploaded(Upload),
    SpreadsheetCleared,
    ImageUploaded(Upload),
    ImageCleared,
}

/// Everything the user has supplied during this run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub data: DataState,
    pub image: ImageSlot,
}

impl Session {
    pub fn table(&self) -> Option<&Table> {
        self.data.table()
    }

    /// Apply one event. An upload always replaces its slot outright; a failed
    /// spreadsheet upload leaves no table behind.
    pub fn apply(self, event: SessionEvent) -> Session {
        match event {
            SessionEvent::SpreadsheetUploaded(upload) => Session {
                data: Self::load_spreadsheet(&upload),
                ..self
            },
            SessionEvent::SpreadsheetCleared => Session {
                data: DataState::NoDataLoaded,
                ..self
            },
            SessionEvent::ImageUploaded(upload) => Session {
                image: Self::load_image(&upload),
                ..self
            },
            SessionEvent::ImageCleared => Session {
                image: ImageSlot::Empty,
                ..self
            },
        }
    }

    fn load_spreadsheet(upload: &Upload) -> DataState {
        match SpreadsheetLoader::load_bytes(&upload.name, &upload.bytes) {
            Ok(table) => {
                info!(
                    file = %upload.name,
                    rows = table.row_count(),
                    columns = table.column_count(),
                    "spreadsheet loaded"
                );
                DataState::Loaded(Arc::new(table))
            }
            Err(e) => {
                warn!(file = %upload.name, error = %e, "spreadsheet rejected");
                DataState::LoadFailed {
                    file_name: upload.name.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn load_image(upload: &Upload) -> ImageSlot {
        match UploadedImage::decode(upload) {
            Ok(image) => {
                info!(
                    file = %upload.name,
                    width = image.width,
                    height = image.height,
                    "image loaded"
                );
                ImageSlot::Loaded(Arc::new(image))
            }
            Err(e) => {
                warn!(file = %upload.name, error = %e, "image rejected");
                ImageSlot::Failed {
                    file_name: upload.name.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{airline_rows, delay_rows, png_bytes, xlsx_bytes};

    fn spreadsheet(name: &str, rows: &[Vec<&str>]) -> SessionEvent {
        SessionEvent::SpreadsheetUploaded(Upload::new(name, xlsx_bytes(rows)))
    }

    #[test]
    fn new_session_has_nothing_loaded() {
        let session = Session::default();
        assert!(session.table().is_none());
        assert!(matches!(session.image, ImageSlot::Empty));
    }

    #[test]
    fn valid_upload_loads_table() {
        let session = Session::default().apply(spreadsheet("airline.xlsx", &airline_rows()));
        let table = session.table().expect("table loaded");
        assert_eq!(table.column_count(), 6);
        assert_eq!(session.data.file_name(), Some("airline.xlsx"));
    }

    #[test]
    fn malformed_upload_leaves_table_null_with_reason() {
        let session = Session::default().apply(SessionEvent::SpreadsheetUploaded(Upload::new(
            "broken.xlsx",
            b"PK\x03\x04 not really a zip".to_vec(),
        )));
        assert!(session.table().is_none());
        assert!(session.data.failure().is_some());
        assert_eq!(session.data.file_name(), Some("broken.xlsx"));
    }

    #[test]
    fn second_upload_replaces_first() {
        let session = Session::default()
            .apply(spreadsheet("airline.xlsx", &airline_rows()))
            .apply(spreadsheet("delays.xlsx", &delay_rows()));
        let table = session.table().unwrap();
        assert_eq!(
            table.column_names(),
            vec!["Type of Travel", "Departure Delay in Minutes"]
        );
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.source_name(), "delays.xlsx");
    }

    #[test]
    fn failed_upload_after_success_drops_old_table() {
        let session = Session::default()
            .apply(spreadsheet("airline.xlsx", &airline_rows()))
            .apply(SessionEvent::SpreadsheetUploaded(Upload::new("bad.xls", vec![0u8; 16])));
        assert!(session.table().is_none());
        assert!(session.data.failure().is_some());
    }

    #[test]
    fn clearing_spreadsheet_keeps_image() {
        let session = Session::default()
            .apply(SessionEvent::ImageUploaded(Upload::new("plane.png", png_bytes())))
            .apply(spreadsheet("airline.xlsx", &airline_rows()))
            .apply(SessionEvent::SpreadsheetCleared);
        assert!(matches!(session.data, DataState::NoDataLoaded));
        assert!(matches!(session.image, ImageSlot::Loaded(_)));
    }

    #[test]
    fn image_is_decoded_to_rgba() {
        let session = Session::default().apply(SessionEvent::ImageUploaded(Upload::new(
            "plane.png",
            png_bytes(),
        )));
        let ImageSlot::Loaded(image) = &session.image else {
            panic!("image should load");
        };
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(&image.rgba[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn undecodable_image_is_reported() {
        let session = Session::default()
            .apply(SessionEvent::ImageUploaded(Upload::new("plane.jpg", b"nope".to_vec())))
            .apply(SessionEvent::SpreadsheetCleared);
        assert!(matches!(session.image, ImageSlot::Failed { .. }));

        let cleared = session.apply(SessionEvent::ImageCleared);
        assert!(matches!(cleared.image, ImageSlot::Empty));
    }
}

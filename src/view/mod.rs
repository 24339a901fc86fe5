//! Record list view.
//!
//! Owns the client-side cache of records and the per-row actions: detail
//! view, deletion behind an explicit confirmation, certificate export and
//! copy-public-link. The cache is only ever invalidated and re-fetched after
//! a mutation completes, never patched in place, so it cannot diverge from
//! the remote source of truth.

mod public;

pub use public::{details, fetch_public, format_details, public_vehicle_url};

use std::fs;
use std::path::{Path, PathBuf};

use crate::certificate::CertificateRenderer;
use crate::client::VehicleClient;
use crate::errors::AppError;
use crate::models::Vehicle;

/// Seam for the blocking delete confirmation.
pub trait ConfirmDelete {
    /// Whether the user confirmed deleting the labelled record.
    fn confirm(&self, label: &str) -> bool;
}

/// Seam for placing text on the system clipboard.
pub trait ClipboardSink {
    fn set_text(&self, text: &str) -> Result<(), AppError>;
}

/// The cached record set displayed by the list view.
#[derive(Debug, Default)]
pub struct VehicleList {
    records: Vec<Vehicle>,
    loaded: bool,
}

impl VehicleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the initial fetch has completed at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn records(&self) -> &[Vehicle] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&Vehicle> {
        self.records.iter().find(|v| v.id == id)
    }

    /// Drop the loaded flag so the next display forces a fresh read.
    pub fn invalidate(&mut self) {
        self.loaded = false;
    }

    /// Replace the cache with the remote service's current record set.
    pub async fn refresh(&mut self, client: &VehicleClient) -> Result<(), AppError> {
        self.records = client.list().await?;
        self.loaded = true;
        Ok(())
    }

    /// Render the list as a terminal table, with loading and empty states.
    pub fn table(&self) -> String {
        if !self.loaded {
            return "Loading vehicles...".to_string();
        }
        if self.records.is_empty() {
            return "No vehicles found. Add your first vehicle record.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:<6} {:<12} {:<16} {:<16} {:<6} {:<12} {}\n",
            "ID", "VCC No", "Brand", "Model", "Year", "Color", "Owner"
        ));
        for v in &self.records {
            out.push_str(&format!(
                "{:<6} {:<12} {:<16} {:<16} {:<6} {:<12} {}\n",
                v.id,
                v.vcc_no,
                v.vehicle_brand_name,
                v.vehicle_model,
                v.year_of_built,
                v.vehicle_color,
                v.owner_name
            ));
        }
        out
    }

    /// Delete a record after explicit confirmation.
    ///
    /// Declining leaves the record set untouched and issues no network call.
    /// On confirmation the delete is dispatched and the list re-fetched only
    /// after the delete completes. Returns whether a delete was dispatched.
    pub async fn delete(
        &mut self,
        client: &VehicleClient,
        id: i64,
        confirm: &dyn ConfirmDelete,
    ) -> Result<bool, AppError> {
        let label = self
            .find(id)
            .map(|v| v.vcc_no.clone())
            .unwrap_or_else(|| id.to_string());

        if !confirm.confirm(&label) {
            tracing::debug!("Delete of {} declined", label);
            return Ok(false);
        }

        client.delete(id).await?;
        self.invalidate();
        self.refresh(client).await?;
        Ok(true)
    }

    /// Export the certificate for a cached record into `dir`, returning the
    /// written path. The document is rendered fully in memory first; a
    /// render failure produces no file at all.
    pub async fn export_certificate(
        &self,
        renderer: &CertificateRenderer,
        id: i64,
        dir: &Path,
    ) -> Result<PathBuf, AppError> {
        let vehicle = self
            .find(id)
            .ok_or_else(|| AppError::Remote(format!("Record {} is not in the current list", id)))?;

        let bytes = renderer.render(vehicle)?;

        fs::create_dir_all(dir)?;
        let path = dir.join(CertificateRenderer::file_name(vehicle));
        fs::write(&path, bytes)?;
        tracing::info!("Exported certificate to {:?}", path);
        Ok(path)
    }

    /// Derive the public URL for a record and place it on the clipboard.
    pub fn copy_public_link(
        &self,
        clipboard: &dyn ClipboardSink,
        origin: &str,
        id: i64,
    ) -> Result<String, AppError> {
        let url = public_vehicle_url(origin, id);
        clipboard.set_text(&url)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use std::cell::RefCell;

    struct Decline;
    impl ConfirmDelete for Decline {
        fn confirm(&self, _label: &str) -> bool {
            false
        }
    }

    struct Accept;
    impl ConfirmDelete for Accept {
        fn confirm(&self, _label: &str) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }
    impl ClipboardSink for RecordingClipboard {
        fn set_text(&self, text: &str) -> Result<(), AppError> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn loaded_list() -> VehicleList {
        VehicleList {
            records: vec![fixtures::vehicle()],
            loaded: true,
        }
    }

    #[test]
    fn test_loading_and_empty_states() {
        let list = VehicleList::new();
        assert_eq!(list.table(), "Loading vehicles...");

        let empty = VehicleList {
            records: vec![],
            loaded: true,
        };
        assert_eq!(
            empty.table(),
            "No vehicles found. Add your first vehicle record."
        );
    }

    #[test]
    fn test_table_lists_rows() {
        let table = loaded_list().table();
        assert!(table.contains("VCC-1001"));
        assert!(table.contains("Toyota"));
        assert!(table.contains("Ali Hassan"));
    }

    #[tokio::test]
    async fn test_declined_delete_touches_nothing() {
        // The client points nowhere; declining must return before any request.
        let client = VehicleClient::new("http://127.0.0.1:9", None);
        let mut list = loaded_list();

        let dispatched = list.delete(&client, 42, &Decline).await.unwrap();
        assert!(!dispatched);
        assert_eq!(list.records().len(), 1);
        assert_eq!(list.records()[0].vcc_no, "VCC-1001");
        assert!(list.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_cache_intact() {
        let client = VehicleClient::new("http://127.0.0.1:9", None);
        let mut list = loaded_list();

        let result = list.delete(&client, 42, &Accept).await;
        assert!(result.is_err());
        assert_eq!(list.records().len(), 1);
    }

    #[test]
    fn test_copy_public_link() {
        let list = loaded_list();
        let clipboard = RecordingClipboard::default();

        let url = list
            .copy_public_link(&clipboard, "https://example.com", 42)
            .unwrap();
        assert_eq!(url, "https://example.com/public/vehicle/42");
        assert_eq!(clipboard.copied.borrow().as_slice(), [url]);
    }

    #[tokio::test]
    async fn test_export_writes_named_file() {
        let list = loaded_list();
        let renderer = CertificateRenderer::new("https://example.com");
        let dir = tempfile::TempDir::new().unwrap();

        let path = list
            .export_certificate(&renderer, 42, dir.path())
            .await
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "VCC_VCC-1001.pdf");
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_unknown_id_writes_nothing() {
        let list = loaded_list();
        let renderer = CertificateRenderer::new("https://example.com");
        let dir = tempfile::TempDir::new().unwrap();

        assert!(list
            .export_certificate(&renderer, 999, dir.path())
            .await
            .is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

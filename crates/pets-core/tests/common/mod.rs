#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use pets_core::{ChangeNotifier, Database, PetProvider, PetServiceBuilder, PetUri};
use tempfile::TempDir;

/// Notifier that remembers every change it was told about.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    changes: Arc<Mutex<Vec<PetUri>>>,
}

impl RecordingNotifier {
    pub fn changes(&self) -> Vec<PetUri> {
        self.changes.lock().expect("notifier lock").clone()
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn notify_change(&self, uri: &PetUri) {
        self.changes.lock().expect("notifier lock").push(*uri);
    }
}

/// Helper function to create a provider over a fresh database file
pub fn create_test_provider() -> (TempDir, PetProvider, RecordingNotifier) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(temp_dir.path().join("test.db")).expect("Failed to open database");
    let notifier = RecordingNotifier::default();
    let provider = PetProvider::new(db, notifier.clone());
    (temp_dir, provider, notifier)
}

/// Helper function to create a test service
pub async fn create_test_service() -> (TempDir, pets_core::PetService) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let service = PetServiceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create service");
    (temp_dir, service)
}

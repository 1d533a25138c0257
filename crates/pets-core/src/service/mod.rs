//! Async facade over the record access component.
//!
//! [`PetService`] owns one [`PetProvider`] for the life of the process and runs
//! each operation on the blocking thread pool, so callers on an async runtime
//! never wait on SQLite directly.
//!
//! ```rust,no_run
//! use pets_core::{contract::CONTENT_URI, PetServiceBuilder, PetValues};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = PetServiceBuilder::new()
//!     .with_database_path(Some("shelter.db"))
//!     .build()
//!     .await?;
//!
//! let values = PetValues::new().name("Toto").breed("Terrier").gender(1).weight(7);
//! let uri = service.insert(CONTENT_URI, values).await?;
//! println!("Saved {uri:?}");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tokio::task;

pub mod builder;

pub use builder::PetServiceBuilder;

use crate::{
    error::{PetError, Result},
    models::{Filter, Pet, PetValues, ResultSet},
    notify::{ChangeBroadcaster, ChangeSubscription},
    provider::PetProvider,
    uri::PetUri,
};

/// Shared handle to the pet store.
#[derive(Clone)]
pub struct PetService {
    pub(crate) provider: Arc<Mutex<PetProvider>>,
    pub(crate) broadcaster: ChangeBroadcaster,
    pub(crate) db_path: PathBuf,
}

impl PetService {
    /// Runs `f` against the provider on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut PetProvider) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        task::spawn_blocking(move || {
            let mut guard = provider.lock().map_err(|_| PetError::Configuration {
                message: "Pet provider lock poisoned".to_string(),
            })?;
            f(&mut *guard)
        })
        .await
        .map_err(PetError::join)?
    }

    /// MIME type of the rows `identifier` addresses.
    pub fn get_type(&self, identifier: &str) -> Result<&'static str> {
        Ok(PetUri::resolve(identifier)?.mime_type())
    }

    /// Reads pets. See [`PetProvider::query`].
    pub async fn query(
        &self,
        identifier: &str,
        projection: Option<&[&str]>,
        filter: Option<Filter>,
        sort_order: Option<&str>,
    ) -> Result<ResultSet> {
        let identifier = identifier.to_string();
        let projection: Option<Vec<String>> =
            projection.map(|cols| cols.iter().map(|c| c.to_string()).collect());
        let sort_order = sort_order.map(String::from);

        self.run(move |provider| {
            let projection: Option<Vec<&str>> = projection
                .as_ref()
                .map(|cols| cols.iter().map(String::as_str).collect());
            provider.query(
                &identifier,
                projection.as_deref(),
                filter.as_ref(),
                sort_order.as_deref(),
            )
        })
        .await
    }

    /// Adds a pet. See [`PetProvider::insert`].
    pub async fn insert(&self, identifier: &str, values: PetValues) -> Result<Option<PetUri>> {
        let identifier = identifier.to_string();
        self.run(move |provider| provider.insert(&identifier, values))
            .await
    }

    /// Changes pets. See [`PetProvider::update`].
    pub async fn update(
        &self,
        identifier: &str,
        values: PetValues,
        filter: Option<Filter>,
    ) -> Result<usize> {
        let identifier = identifier.to_string();
        self.run(move |provider| provider.update(&identifier, values, filter.as_ref()))
            .await
    }

    /// Removes pets. See [`PetProvider::delete`].
    pub async fn delete(&self, identifier: &str, filter: Option<Filter>) -> Result<usize> {
        let identifier = identifier.to_string();
        self.run(move |provider| provider.delete(&identifier, filter.as_ref()))
            .await
    }

    /// Lists every pet matching `filter`, in `sort_order` or by id.
    pub async fn list_pets(
        &self,
        filter: Option<Filter>,
        sort_order: Option<&str>,
    ) -> Result<Vec<Pet>> {
        let sort_order = sort_order.map(String::from);
        let identifier = PetUri::Collection.to_string();
        self.run(move |provider| {
            let order = sort_order.as_deref().or(Some(crate::contract::COLUMN_ID));
            provider
                .query(&identifier, None, filter.as_ref(), order)?
                .to_pets()
        })
        .await
    }

    /// Retrieves one pet by id.
    pub async fn get_pet(&self, id: u64) -> Result<Option<Pet>> {
        let identifier = PetUri::Item(id).to_string();
        self.run(move |provider| {
            let pets = provider.query(&identifier, None, None, None)?.to_pets()?;
            Ok(pets.into_iter().next())
        })
        .await
    }

    /// Watches `uri` for changes made through this service.
    pub fn subscribe(&self, uri: PetUri, notify_for_descendants: bool) -> ChangeSubscription {
        self.broadcaster.subscribe(uri, notify_for_descendants)
    }

    /// Broadcaster the provider announces changes on.
    pub fn broadcaster(&self) -> &ChangeBroadcaster {
        &self.broadcaster
    }

    /// Location of the database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Closes the store.
    ///
    /// # Errors
    ///
    /// Returns `PetError::Configuration` while other clones of this service
    /// are still alive.
    pub async fn shutdown(self) -> Result<()> {
        let mutex = Arc::try_unwrap(self.provider).map_err(|_| PetError::Configuration {
            message: "Pet service is still in use".to_string(),
        })?;
        let provider = mutex.into_inner().map_err(|_| PetError::Configuration {
            message: "Pet provider lock poisoned".to_string(),
        })?;
        task::spawn_blocking(move || provider.shutdown())
            .await
            .map_err(PetError::join)?
    }
}

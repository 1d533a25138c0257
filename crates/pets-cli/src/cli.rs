//! Command handlers for the pets CLI.

use anyhow::{bail, Context, Result};
use log::debug;
use pets_core::{
    contract::CONTENT_URI, CreateResult, DeleteResult, Gender, Pet, PetService, PetUri,
    PetValues, Pets, UpdateResult,
};
use serde_json::json;

use crate::{
    args::{AddArgs, Commands, DeleteAllArgs, DeleteArgs, EditArgs, ListArgs, ShowArgs, TypeArgs},
    renderer::TerminalRenderer,
};

/// The dummy pet offered by the catalog's "insert dummy data" action.
fn dummy_pet() -> PetValues {
    PetValues::new()
        .name("Toto")
        .breed("Terrier")
        .gender(Gender::Male)
        .weight(7)
}

pub struct Cli {
    service: PetService,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(service: PetService, renderer: TerminalRenderer) -> Self {
        Self { service, renderer }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::List(args) => self.list_pets(&args).await,
            Commands::Show(args) => self.show_pet(&args).await,
            Commands::Add(args) => self.add_pet(args).await,
            Commands::Edit(args) => self.edit_pet(args).await,
            Commands::Delete(args) => self.delete_pet(&args).await,
            Commands::DeleteAll(args) => self.delete_all(&args).await,
            Commands::Seed => self.seed().await,
            Commands::Type(args) => self.show_type(&args),
        }
    }

    pub async fn list_pets(&self, args: &ListArgs) -> Result<()> {
        let sort_order = args.sort_order();
        let pets = self
            .service
            .list_pets(args.filter(), Some(&sort_order))
            .await
            .context("Failed to list pets")?;
        debug!("Listing {} pets", pets.len());

        let pets = Pets(pets);
        self.renderer.emit(&pets, &pets.0)
    }

    async fn show_pet(&self, args: &ShowArgs) -> Result<()> {
        let pet = self.fetch(args.id).await?;
        self.renderer.emit(&pet, &pet)
    }

    async fn add_pet(&self, args: AddArgs) -> Result<()> {
        self.create(args.into()).await
    }

    async fn seed(&self) -> Result<()> {
        self.create(dummy_pet()).await
    }

    async fn create(&self, values: PetValues) -> Result<()> {
        let uri = self
            .service
            .insert(CONTENT_URI, values)
            .await
            .context("Failed to add pet")?;
        let Some(id) = uri.and_then(|uri| uri.id()) else {
            bail!("Error with saving pet");
        };

        let result = CreateResult::new(self.fetch(id).await?);
        self.renderer.emit(&result, &result.resource)
    }

    async fn edit_pet(&self, args: EditArgs) -> Result<()> {
        let id = args.id;
        let changes = args.changes();
        if changes.is_empty() {
            bail!("Nothing to change; pass at least one of --name, --breed, --gender, --weight");
        }

        let updated = self
            .service
            .update(&PetUri::Item(id).to_string(), args.into(), None)
            .await
            .context("Failed to update pet")?;
        if updated == 0 {
            bail!("Pet with ID {id} not found");
        }

        let result = UpdateResult::with_changes(self.fetch(id).await?, changes);
        self.renderer.emit(&result, &result.resource)
    }

    async fn delete_pet(&self, args: &DeleteArgs) -> Result<()> {
        self.delete(PetUri::Item(args.id)).await
    }

    async fn delete_all(&self, args: &DeleteAllArgs) -> Result<()> {
        if !args.confirm {
            bail!("Refusing to delete every pet without --confirm");
        }
        self.delete(PetUri::Collection).await
    }

    async fn delete(&self, uri: PetUri) -> Result<()> {
        let count = self
            .service
            .delete(&uri.to_string(), None)
            .await
            .context("Failed to delete pets")?;

        let result = DeleteResult::new(uri, count);
        self.renderer
            .emit(&result, &json!({ "uri": uri.to_string(), "deleted": count }))
    }

    fn show_type(&self, args: &TypeArgs) -> Result<()> {
        let mime = self
            .service
            .get_type(&args.identifier)
            .with_context(|| format!("Failed to resolve '{}'", args.identifier))?;

        self.renderer.emit(
            &format!("{mime}\n"),
            &json!({ "identifier": args.identifier, "type": mime }),
        )
    }

    async fn fetch(&self, id: u64) -> Result<Pet> {
        self.service
            .get_pet(id)
            .await
            .context("Failed to read pet")?
            .with_context(|| format!("Pet with ID {id} not found"))
    }

    /// Closes the store once every command has run.
    pub async fn shutdown(self) -> Result<()> {
        self.service
            .shutdown()
            .await
            .context("Failed to close pet store")
    }
}

//! Command-line arguments for the pets CLI.
//!
//! Each command's clap structure converts into the core request types
//! (`PetValues`, `Filter`) so clap attributes never leak into `pets-core`.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use pets_core::{contract, Filter, Gender, PetValues};

/// Keep records of the pets in your shelter
///
/// Pets are stored in a local SQLite database. Every command accepts
/// `--database-file` to point at a different store and `--json` for machine
/// readable output.
#[derive(Parser)]
#[command(version, about, name = "pets")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pets/shelter.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, every pet is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// List pets
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show one pet
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Add a pet
    #[command(alias = "a")]
    Add(AddArgs),
    /// Change fields of a pet
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Delete one pet
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Delete every pet
    DeleteAll(DeleteAllArgs),
    /// Insert a dummy pet (Toto the terrier)
    Seed,
    /// Print the MIME type of an identifier
    Type(TypeArgs),
}

/// Column to order listings by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Breed,
    Gender,
    Weight,
}

impl SortKey {
    pub fn column(self) -> &'static str {
        match self {
            SortKey::Id => contract::COLUMN_ID,
            SortKey::Name => contract::COLUMN_NAME,
            SortKey::Breed => contract::COLUMN_BREED,
            SortKey::Gender => contract::COLUMN_GENDER,
            SortKey::Weight => contract::COLUMN_WEIGHT,
        }
    }
}

#[derive(ClapArgs, Default)]
pub struct ListArgs {
    /// Only list pets of this breed
    #[arg(short, long)]
    pub breed: Option<String>,
    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Id)]
    pub sort: SortKey,
    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,
}

impl ListArgs {
    pub fn filter(&self) -> Option<Filter> {
        self.breed.as_ref().map(|breed| {
            Filter::new(format!("{} = ?", contract::COLUMN_BREED)).arg(breed.clone())
        })
    }

    pub fn sort_order(&self) -> String {
        let direction = if self.desc { "DESC" } else { "ASC" };
        format!("{} {direction}", self.sort.column())
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "ID of the pet to show")]
    pub id: u64,
}

#[derive(ClapArgs)]
pub struct AddArgs {
    /// Name of the pet
    pub name: String,
    /// Breed, empty when unknown
    #[arg(short, long, default_value = "")]
    pub breed: String,
    /// Gender: unknown, male or female
    #[arg(short, long)]
    pub gender: Option<Gender>,
    /// Weight in kilograms
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: Option<i64>,
}

impl From<AddArgs> for PetValues {
    fn from(val: AddArgs) -> Self {
        let mut values = PetValues::new().name(val.name).breed(val.breed);
        if let Some(gender) = val.gender {
            values = values.gender(gender);
        }
        if let Some(weight) = val.weight {
            values = values.weight(weight);
        }
        values
    }
}

#[derive(ClapArgs)]
pub struct EditArgs {
    #[arg(help = "ID of the pet to change")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New breed")]
    pub breed: Option<String>,
    #[arg(short, long, help = "New gender (unknown, male, female)")]
    pub gender: Option<Gender>,
    #[arg(short, long, allow_hyphen_values = true, help = "New weight in kilograms")]
    pub weight: Option<i64>,
}

impl EditArgs {
    /// Human readable list of what this edit changes.
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Name set to {name}"));
        }
        if let Some(breed) = &self.breed {
            changes.push(format!("Breed set to {breed}"));
        }
        if let Some(gender) = self.gender {
            changes.push(format!("Gender set to {gender}"));
        }
        if let Some(weight) = self.weight {
            changes.push(format!("Weight set to {weight} kg"));
        }
        changes
    }
}

impl From<EditArgs> for PetValues {
    fn from(val: EditArgs) -> Self {
        let mut values = PetValues::new();
        if let Some(name) = val.name {
            values = values.name(name);
        }
        if let Some(breed) = val.breed {
            values = values.breed(breed);
        }
        if let Some(gender) = val.gender {
            values = values.gender(gender);
        }
        if let Some(weight) = val.weight {
            values = values.weight(weight);
        }
        values
    }
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "ID of the pet to delete")]
    pub id: u64,
}

#[derive(ClapArgs)]
pub struct DeleteAllArgs {
    /// Required; deleting every pet cannot be undone
    #[arg(long)]
    pub confirm: bool,
}

#[derive(ClapArgs)]
pub struct TypeArgs {
    #[arg(help = "Identifier such as content://com.example.android.pets/pets/1")]
    pub identifier: String,
}

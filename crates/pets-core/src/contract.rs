//! Schema contract for the pets store.
//!
//! Table, column, and identifier constants shared by the storage adapter and
//! the provider, so neither side spells a column name by hand.

/// URI scheme of every pet identifier.
pub const CONTENT_SCHEME: &str = "content";

/// Authority under which the pet resources are published.
pub const CONTENT_AUTHORITY: &str = "com.example.android.pets";

/// Path segment naming the pet collection.
pub const PATH_PETS: &str = "pets";

/// Identifier of the whole pet collection.
pub const CONTENT_URI: &str = "content://com.example.android.pets/pets";

/// MIME type of a query over the whole collection.
pub const CONTENT_LIST_TYPE: &str = "vnd.android.cursor.dir/com.example.android.pets/pets";

/// MIME type of a query over a single pet.
pub const CONTENT_ITEM_TYPE: &str = "vnd.android.cursor.item/com.example.android.pets/pets";

/// Default file name of the database.
pub const DATABASE_NAME: &str = "shelter.db";

/// Current schema version. Bump when the table shape changes.
pub const DATABASE_VERSION: u32 = 1;

pub const TABLE_NAME: &str = "pets";
pub const COLUMN_ID: &str = "_id";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_BREED: &str = "breed";
pub const COLUMN_GENDER: &str = "gender";
pub const COLUMN_WEIGHT: &str = "weight";

/// Every column in table order.
pub const ALL_COLUMNS: [&str; 5] = [
    COLUMN_ID,
    COLUMN_NAME,
    COLUMN_BREED,
    COLUMN_GENDER,
    COLUMN_WEIGHT,
];

pub const GENDER_UNKNOWN: i64 = 0;
pub const GENDER_MALE: i64 = 1;
pub const GENDER_FEMALE: i64 = 2;

/// Returns true if `gender` is one of the stored gender codes.
pub fn is_valid_gender(gender: i64) -> bool {
    matches!(gender, GENDER_UNKNOWN | GENDER_MALE | GENDER_FEMALE)
}

/// Returns true if `column` belongs to the pets table.
pub fn is_known_column(column: &str) -> bool {
    ALL_COLUMNS.contains(&column)
}

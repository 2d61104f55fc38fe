/// Catalog rows use SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

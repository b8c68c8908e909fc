/// Primary keys of the `weather` table (SQLite `INTEGER PRIMARY KEY`).
pub type DbId = i64;

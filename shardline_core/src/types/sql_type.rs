use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of a top-level statement, used for dispatch and for log fields.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SQLType {
    #[strum(to_string = "SELECT")]
    Select,
    #[strum(to_string = "DELETE")]
    Delete,
    #[strum(to_string = "UPDATE")]
    Update,
    #[strum(to_string = "INSERT")]
    Insert,
    #[strum(to_string = "INSERT SELECT")]
    InsertSelect,
    #[strum(to_string = "REPLACE")]
    Replace,
    #[strum(to_string = "TRUNCATE")]
    Truncate,
    #[strum(to_string = "DROP TABLE")]
    DropTable,
    #[strum(to_string = "ALTER TABLE")]
    AlterTable,
    #[strum(to_string = "RENAME TABLE")]
    RenameTable,
    #[strum(to_string = "CREATE TABLE")]
    CreateTable,
    #[strum(to_string = "CREATE INDEX")]
    CreateIndex,
    #[strum(to_string = "DROP INDEX")]
    DropIndex,
    #[strum(to_string = "SHOW DATABASES")]
    ShowDatabases,
    #[strum(to_string = "SHOW TABLES")]
    ShowTables,
    #[strum(to_string = "SHOW INDEX")]
    ShowIndex,
    #[strum(to_string = "SHOW COLUMNS")]
    ShowColumns,
    #[strum(to_string = "SHOW CREATE")]
    ShowCreate,
    #[strum(to_string = "SHOW VARIABLES")]
    ShowVariables,
    #[strum(to_string = "DESCRIBE")]
    Describe,
    #[strum(to_string = "UNION")]
    Union,
    #[strum(to_string = "KILL")]
    Kill,
}

impl SQLType {
    /// Whether statements of this kind change schema rather than rows.
    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            SQLType::Truncate
                | SQLType::DropTable
                | SQLType::AlterTable
                | SQLType::RenameTable
                | SQLType::CreateTable
                | SQLType::CreateIndex
                | SQLType::DropIndex
        )
    }
}

pub mod prompt;
pub mod table_export;

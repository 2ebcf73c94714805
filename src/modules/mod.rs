pub mod catalog;
pub mod entry_import;
pub mod external_source;
pub mod lookup;
pub mod selection;

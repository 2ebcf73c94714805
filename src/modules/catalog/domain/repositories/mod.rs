mod entry_importer;

pub use entry_importer::*;

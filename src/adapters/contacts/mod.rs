pub mod csv_provider;

pub use csv_provider::CsvContactsProvider;

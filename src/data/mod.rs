//! Country data: the record model, the network loader, the name filter and
//! number formatting used when rendering records.

mod country;
mod error;
mod filter;
mod format;
pub mod loader;

pub use country::{Country, CountryName, Currency, Flags, MISSING};
pub use error::LoadError;
pub use filter::filter_countries;
pub use format::Grouping;
pub use loader::{CountrySource, HttpSource, LoadHandle, LoadUpdate, LoaderOptions};

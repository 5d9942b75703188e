pub mod error;
pub mod handle;
pub mod types;
pub mod exports;
pub mod protocol;
pub mod store;
pub mod snapshot;

pub mod api;

pub use api::{MdfAttachment, MdfDataGroup, MdfEvent, MdfFileHistory, MdfHeader, MdfMetaData};
pub use error::MdfError;
pub use store::MdfStore;

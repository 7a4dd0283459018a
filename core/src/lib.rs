pub mod advisory;
pub mod aggregate;
pub mod classify;
pub mod daypart;
mod error;
pub mod facts;
pub mod phrases;
pub mod pollutant;
pub mod template;
pub mod tier;
pub use error::EngineError;

/// Message returned in place of an advisory when no sensor reported anything.
pub const DATA_UNAVAILABLE_MESSAGE: &str =
    "Air quality data is unavailable at this time. Please check back later.";

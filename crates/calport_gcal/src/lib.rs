// --- File: crates/calport_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod routes;
pub mod service;
pub mod session;

pub use error::ImportError;
pub use logic::{CalendarImporter, EventWindow, ImportRequest, ImportResult};
pub use session::{exchange_for_session, InMemorySessionStore};

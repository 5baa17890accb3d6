//! rocketdeck: search, sort, and page through a rocket catalog.
//!
//! The catalog arrives as a GraphQL response. Everything after that is
//! in-memory: [`processor::ResultSetProcessor`] derives the page to show
//! from the records and the user's [`model::QueryParameters`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod model;
pub mod navigation;
pub mod notice;
pub mod processor;

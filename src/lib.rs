//! Event bulletin for a student club: a JSON management API over a single
//! `events` table, and a chat bot that answers slash commands from it.

pub mod bot;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

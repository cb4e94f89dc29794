//! Client-side state and workflow layer for a product catalog service.
//!
//! The crate is organised around a single reactive [`catalog::ResultStore`]
//! written by three mutually exclusive producers (homepage, text search,
//! image search) via the [`dispatcher::QueryDispatcher`], plus the
//! [`authoring::AuthoringWorkflow`] pipeline that drives
//! upload → caption → generate → save for new products.

pub mod api;
pub mod authoring;
pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod mvi;

//! Access to the external tabular data service.
//!
//! All durable state — work items, time entries, user accounts, the weekly
//! rollup views — lives behind a generic tabular REST protocol plus a handful
//! of stored procedures. This crate owns that boundary: the authenticated
//! [`client::DataServiceClient`], the [`filter::Filter`] query builder, the
//! row models mirroring the external schema, and one repository per entity.
//!
//! Nothing in here caches. Every mutation is expected to be followed by a
//! fresh read; repositories return plain rows and leave aggregation to
//! `telas_core`.

pub mod client;
pub mod filter;
pub mod models;
pub mod repositories;

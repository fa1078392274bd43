//! Client core of an order-management dashboard.
//!
//! Order lists are fetched through a shared [`cache::QueryCache`]. Status transitions run
//! through [`dashboard::TransitionExecutor`], which patches every cached list in place once the
//! remote API accepts the change. The `handlers`, `routes`, `repositories` and `state` modules
//! make up an in-memory mock of that remote API.

pub mod cache;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod state;

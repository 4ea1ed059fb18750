//! e6model is a typed model layer for the e621/e926 api
//!
//! raw json responses are validated into strict records ([`models`]) through an
//! [`Envelope`](response::Envelope), posts carry memoized derived fields (their flattened tag
//! set and a canonical file), pools and sets expand their member posts on demand through a
//! [`PostSearch`](models::PostSearch), and a [`Blacklist`](blacklist::Blacklist) checks tag
//! sets against blacklist entries.
//!
//! a small blocking [`E6Client`](client::E6Client), a layered config ([`config`]) and
//! tracing setup ([`logging`]) are included for convenience.
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

#[macro_use]
mod macros;

pub mod blacklist;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod memo;
pub mod models;
pub mod response;
pub mod schema;
pub mod utils;

pub use {
    blacklist::Blacklist,
    client::E6Client,
    config::E6Cfg,
    error::{E6Error, Result},
    memo::Memo,
    response::{Envelope, RawResponse},
};

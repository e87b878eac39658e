//! zbx-rpc - JSON-RPC client for the Zabbix management API.
//!
//! The client owns a long-lived session: login configuration, the current
//! bearer credential, and an optional background task that re-authenticates
//! before the credential expires. Every remote operation goes through one
//! dispatch pipeline (envelope encode → HTTP exchange → envelope decode →
//! lenient projection into the caller's destination type).

mod api;
mod client;
mod config;
mod projector;
mod refresher;
mod rpc;
mod session;

pub use client::Client;
pub use config::{ClientConfig, ErrorCallback};
pub use refresher::REFRESH_MARGIN;

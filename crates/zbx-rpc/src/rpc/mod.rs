//! JSON-RPC wire layer: envelope codec and HTTP transport.

pub(crate) mod envelope;
pub(crate) mod transport;

//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output: the rmcp SDK owns the
//! byte-stream framing, this module only wires the handler to it and waits
//! for the session to finish.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;

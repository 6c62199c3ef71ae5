//! sync_support_rs: shared low-level primitives for the sync stack.
//!
//! This crate collects the leaf utilities used throughout the client and
//! server halves of the synchronization system:
//!
//! - **hex**: byte-to-hex encoding and SHA-1 hex digests.
//! - **ident**: random document/revision identifier generation.
//! - **sequence**: monotonic sequence-number comparison.
//! - **escape**: URL component escaping for IDs and query parameters.
//! - **quote**: backslash-escaped double-quote envelopes.
//! - **error**: structured HTTP/transport errors and offline classification.
//!
//! Nothing here performs I/O. Every function is total over its inputs;
//! malformed data is passed through or classified, never rejected.

pub mod core;

// Top-level re-exports for common usage
pub use crate::core::error::{
    http_error, is_offline_error, may_be_transient_error, ErrorDomain, ErrorValue,
    TransportFailure,
};
pub use crate::core::escape::{escape_id, escape_url_param, unescape};
pub use crate::core::hex::{hex_sha1_digest, hex_string};
pub use crate::core::ident::create_uuid;
pub use crate::core::quote::{quote_string, unquote_string};
pub use crate::core::sequence::{sequence_compare, SequenceNumber};

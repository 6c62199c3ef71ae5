//! Core support primitives for the sync stack.

pub mod error;
pub mod escape;
pub mod hex;
pub mod ident;
pub mod quote;
pub mod sequence;

pub use error::{
    http_error, is_offline_error, may_be_transient_error, ErrorDomain, ErrorValue,
    TransportFailure,
};
pub use escape::{escape_id, escape_url_param, unescape};
pub use hex::{hex_sha1_digest, hex_string};
pub use ident::create_uuid;
pub use quote::{quote_string, unquote_string};
pub use sequence::{sequence_compare, SequenceNumber};

//! Structured error values for the networking layer.
//!
//! The sync stack describes request failures with a small structured
//! value rather than a bare string: a classification namespace (the
//! [`ErrorDomain`]), a domain-specific integer code, a human-readable
//! reason, and optionally the URL that produced the failure. This module
//! builds those values ([`http_error`]) and classifies them
//! ([`is_offline_error`], [`may_be_transient_error`]).
//!
//! Classification is deliberately conservative: anything outside the
//! known code tables maps to [`TransportFailure::Unknown`] and is never
//! reported as offline.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// POSIX errno values for the socket layer, as surfaced by the transport.
pub mod transport_codes {
    pub const ENETDOWN: i64 = 100;
    pub const ENETUNREACH: i64 = 101;
    pub const ETIMEDOUT: i64 = 110;
    pub const ECONNREFUSED: i64 = 111;
    pub const EHOSTDOWN: i64 = 112;
    pub const EHOSTUNREACH: i64 = 113;
}

/// Resolver (`getaddrinfo`) failure codes for the DNS domain.
pub mod dns_codes {
    pub const EAI_NONAME: i64 = -2;
    pub const EAI_AGAIN: i64 = -3;
    pub const EAI_FAIL: i64 = -4;
}

/// Classification namespace an error code belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDomain {
    /// HTTP status codes from a remote response.
    Http,
    /// Socket-level failures, coded as POSIX errno values.
    Transport,
    /// Name-resolution failures, coded as resolver `EAI_*` values.
    Dns,
    /// Anything raised outside the taxonomies this crate knows about.
    Other(String),
}

impl std::fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorDomain::Http => write!(f, "http"),
            ErrorDomain::Transport => write!(f, "transport"),
            ErrorDomain::Dns => write!(f, "dns"),
            ErrorDomain::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A structured error raised by the networking layer.
///
/// Constructed by this crate for HTTP failures ([`http_error`]) or by
/// the transport glue for socket/resolver failures; inspected read-only
/// everywhere else.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[error("{domain} error {code}: {reason}{}", url_suffix(.url))]
pub struct ErrorValue {
    /// Namespace the code belongs to.
    pub domain: ErrorDomain,
    /// Domain-specific error code.
    pub code: i64,
    /// Human-readable description.
    pub reason: String,
    /// URL of the request that failed, when known.
    pub url: Option<Url>,
}

fn url_suffix(url: &Option<Url>) -> String {
    match url {
        Some(url) => format!(" ({})", url),
        None => String::new(),
    }
}

impl ErrorValue {
    /// Build an error value in an arbitrary domain.
    #[must_use]
    pub fn new(domain: ErrorDomain, code: i64, reason: impl Into<String>) -> Self {
        ErrorValue {
            domain,
            code,
            reason: reason.into(),
            url: None,
        }
    }

    /// Socket-level failure carrying a POSIX errno code.
    #[must_use]
    pub fn transport(code: i64) -> Self {
        let reason = TransportFailure::classify(&ErrorDomain::Transport, code).describe();
        ErrorValue::new(ErrorDomain::Transport, code, reason)
    }

    /// Name-resolution failure carrying a resolver code.
    #[must_use]
    pub fn dns(code: i64) -> Self {
        let reason = TransportFailure::classify(&ErrorDomain::Dns, code).describe();
        ErrorValue::new(ErrorDomain::Dns, code, reason)
    }

    /// Attach the URL the failing request was addressed to.
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Classify this error against the known transport failure kinds.
    #[must_use]
    pub fn transport_failure(&self) -> TransportFailure {
        TransportFailure::classify(&self.domain, self.code)
    }

    /// Convert to a JSON value, for structured log output.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "domain": self.domain.to_string(),
            "code": self.code,
            "reason": self.reason,
            "url": self.url.as_ref().map(Url::as_str),
        })
    }
}

/// The closed set of transport failures the offline classifier knows.
///
/// Every variant except [`TransportFailure::Unknown`] means the request
/// never reached the remote side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportFailure {
    /// Name resolution failed outright.
    DnsFailure,
    /// No route to the remote host, or the host is down.
    HostUnreachable,
    /// The local network is down or unreachable.
    NetworkDown,
    /// The remote host refused the connection.
    ConnectionRefused,
    /// The connection attempt timed out.
    TimedOut,
    /// Not a transport failure this crate recognizes.
    Unknown,
}

impl TransportFailure {
    /// Classify a `(domain, code)` pair against the fixed code tables.
    #[must_use]
    pub fn classify(domain: &ErrorDomain, code: i64) -> Self {
        match domain {
            ErrorDomain::Transport => match code {
                transport_codes::ENETDOWN | transport_codes::ENETUNREACH => {
                    TransportFailure::NetworkDown
                }
                transport_codes::ETIMEDOUT => TransportFailure::TimedOut,
                transport_codes::ECONNREFUSED => TransportFailure::ConnectionRefused,
                transport_codes::EHOSTDOWN | transport_codes::EHOSTUNREACH => {
                    TransportFailure::HostUnreachable
                }
                _ => TransportFailure::Unknown,
            },
            ErrorDomain::Dns => match code {
                dns_codes::EAI_NONAME | dns_codes::EAI_AGAIN | dns_codes::EAI_FAIL => {
                    TransportFailure::DnsFailure
                }
                _ => TransportFailure::Unknown,
            },
            _ => TransportFailure::Unknown,
        }
    }

    /// Classify an I/O error from the socket layer.
    ///
    /// Matches on [`std::io::ErrorKind`] first and falls back to the raw
    /// OS error code for kinds the standard library leaves uncategorized.
    #[must_use]
    pub fn from_io(err: &std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::ConnectionRefused => TransportFailure::ConnectionRefused,
            ErrorKind::TimedOut => TransportFailure::TimedOut,
            ErrorKind::HostUnreachable => TransportFailure::HostUnreachable,
            ErrorKind::NetworkDown | ErrorKind::NetworkUnreachable => TransportFailure::NetworkDown,
            _ => match err.raw_os_error() {
                Some(code) => TransportFailure::classify(&ErrorDomain::Transport, i64::from(code)),
                None => TransportFailure::Unknown,
            },
        }
    }

    /// Whether this failure means the local side is effectively offline.
    #[inline]
    #[must_use]
    pub fn is_offline(self) -> bool {
        !matches!(self, TransportFailure::Unknown)
    }

    /// Short description, used as a default reason string.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            TransportFailure::DnsFailure => "DNS lookup failed",
            TransportFailure::HostUnreachable => "host unreachable",
            TransportFailure::NetworkDown => "network down",
            TransportFailure::ConnectionRefused => "connection refused",
            TransportFailure::TimedOut => "connection timed out",
            TransportFailure::Unknown => "transport error",
        }
    }
}

/// Build an error value for an HTTP failure status.
///
/// Any status is accepted; codes outside the standard table get the
/// generic `"HTTP error"` reason phrase.
///
/// # Examples
///
/// ```
/// use sync_support_rs::http_error;
/// use url::Url;
///
/// let url = Url::parse("http://example.com/db/doc1").unwrap();
/// let err = http_error(404, &url);
/// assert_eq!(err.code, 404);
/// assert_eq!(err.reason, "Not Found");
/// ```
#[must_use]
pub fn http_error(status: u16, url: &Url) -> ErrorValue {
    let reason = http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("HTTP error");
    ErrorValue::new(ErrorDomain::Http, i64::from(status), reason).with_url(url.clone())
}

/// Whether this error appears to be due to the computer being offline or
/// the remote host being unreachable.
///
/// Conservative: anything outside the known transport/DNS code tables
/// returns `false`.
#[must_use]
pub fn is_offline_error(error: &ErrorValue) -> bool {
    let failure = error.transport_failure();
    if failure.is_offline() {
        tracing::debug!(
            "classified {} error {} as offline: {}",
            error.domain,
            error.code,
            failure.describe()
        );
        return true;
    }
    false
}

/// Whether a retry might succeed.
///
/// True for server-side throttling and gateway statuses, a transport
/// timeout, or a temporary resolver failure.
#[must_use]
pub fn may_be_transient_error(error: &ErrorValue) -> bool {
    match error.domain {
        ErrorDomain::Http => matches!(error.code, 408 | 425 | 429 | 502 | 503 | 504),
        ErrorDomain::Transport => error.transport_failure() == TransportFailure::TimedOut,
        ErrorDomain::Dns => error.code == dns_codes::EAI_AGAIN,
        ErrorDomain::Other(_) => false,
    }
}

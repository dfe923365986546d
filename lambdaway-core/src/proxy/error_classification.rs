use pingora::{Error, ErrorSource, ErrorType};
use std::fmt::{Display, Formatter};

/// Coarse class of a failed exchange with the invocation endpoint, logged
/// next to the Pingora error so failures can be grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Connect,
    Tls,
    Protocol,
    Timeout,
    Reset,
    Unknown,
}

impl TransportFailure {
    /// Classify `err`. Errors not caused by the endpoint are `Unknown`.
    pub fn of(err: &Error) -> Self {
        if err.esource() != &ErrorSource::Upstream {
            return Self::Unknown;
        }

        match err.etype() {
            ErrorType::ConnectTimedout
            | ErrorType::ConnectRefused
            | ErrorType::ConnectNoRoute
            | ErrorType::ConnectProxyFailure
            | ErrorType::ConnectError => Self::Connect,

            ErrorType::TLSHandshakeFailure
            | ErrorType::TLSHandshakeTimedout
            | ErrorType::TLSWantX509Lookup
            | ErrorType::InvalidCert
            | ErrorType::HandshakeError => Self::Tls,

            ErrorType::InvalidHTTPHeader
            | ErrorType::H1Error
            | ErrorType::H2Error
            | ErrorType::InvalidH2
            | ErrorType::H2Downgrade => Self::Protocol,

            ErrorType::ReadTimedout | ErrorType::WriteTimedout => Self::Timeout,

            ErrorType::ReadError | ErrorType::WriteError | ErrorType::ConnectionClosed => {
                Self::Reset
            }

            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Tls => "tls",
            Self::Protocol => "protocol",
            Self::Timeout => "timeout",
            Self::Reset => "reset",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for TransportFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Translation of an inbound HTTP request into a Lambda HTTP API (v2.0)
//! invocation event, and the rewrite that carries it to the invocation endpoint.

mod client_addr;
mod domain;
mod encoder;
mod error;
mod event;
mod headers;
mod outbound;
mod random;
mod time;

pub use client_addr::*;
pub use domain::*;
pub use encoder::*;
pub use error::*;
pub use event::*;
pub use headers::*;
pub use outbound::*;
pub use random::*;
pub use time::*;

mod inbound_request;
mod request_ctx;
mod request_id;

pub use inbound_request::*;
pub use request_ctx::*;
pub use request_id::*;

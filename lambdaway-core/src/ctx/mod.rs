mod request;
pub mod response_ctx;

pub use request::InboundRequest;
pub use request::RequestCtx;
pub use request::RequestId;
pub use response_ctx::ResponseCtx;

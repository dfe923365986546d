pub mod conf;
pub mod ctx;
pub mod device;
pub mod envelope;
pub mod logging;
pub mod proxy;
pub mod server;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Domain types: family keys, the capability and factory traits every wallet
//! family implements, and the request/outcome records clients exchange.

pub mod family;
pub mod ports;
pub mod request;

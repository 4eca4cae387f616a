pub mod error;
pub mod network;
pub mod request;
pub mod template;

pub use {error::*, network::*, request::*, template::*};

pub use anyhow;
pub use env_logger;
pub use log;
pub use percent_encoding;
pub use serde_json;
pub use toml;
pub use url;

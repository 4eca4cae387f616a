mod analytics;
#[cfg(feature = "browser")]
mod browser;
mod builder;
pub mod encode;
mod options;
pub mod popup;

pub use sharelink_model as model;

pub use analytics::{AnalyticsConfig, Library, Metrics, ReachGoal};
#[cfg(feature = "browser")]
pub use browser::SystemBrowser;
pub use builder::LinkBuilder;
pub use model::{Network, NetworkTemplate, ShareRequest};
pub use options::ShareOptions;
pub use popup::{
    Host, InteractionEvent, OpenOutcome, PopupConfig, RenderSurface, WindowOpener, WindowRequest,
};

use thiserror::Error;

pub mod prelude {
    pub use crate::popup::{Host, WindowOpener};
    pub use crate::ReachGoal;
}

/// Action name every analytics shape is called with.
pub(crate) const REACH_GOAL: &str = "reachGoal";

pub const DEFAULT_PREFIX: &str = "share_";
pub const DEFAULT_LIBRARY: &str = "vanilla";
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Configuration errors surfaced by [`LinkBuilder`] operations.
///
/// None of them is recovered internally, and all of them are raised before
/// any analytics call or window request happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Wrong site ({key}). Available: {available}")]
    UnknownNetwork { key: String, available: String },

    #[error("Chosen 'vanilla', please pass 'id'")]
    MissingAnalyticsId,

    #[error("Wrong library ({library}). Available: {available}")]
    UnsupportedLibrary { library: String, available: String },

    #[error("metrics callback has the '{metrics}' shape but library is '{library}'")]
    MetricsMismatch { library: Library, metrics: Library },
}

impl ShareError {
    /// Name of the error class, as reported to callers that only see strings.
    pub fn class(&self) -> &'static str {
        match self {
            Self::UnknownNetwork { .. } => "UnknownNetworkError",
            Self::MissingAnalyticsId => "MissingAnalyticsIdError",
            Self::UnsupportedLibrary { .. } => "UnsupportedLibraryError",
            Self::MetricsMismatch { .. } => "MetricsMismatchError",
        }
    }
}

impl From<model::ModelError> for ShareError {
    fn from(err: model::ModelError) -> Self {
        match err {
            model::ModelError::UnknownNetwork { key, available } => {
                Self::UnknownNetwork { key, available }
            }
        }
    }
}

pub type ShareResult<T> = Result<T, ShareError>;

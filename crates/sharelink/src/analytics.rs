use std::fmt;

use libs::log;
use sharelink_model::Network;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{ShareError, ShareResult, DEFAULT_LIBRARY, DEFAULT_PREFIX, REACH_GOAL};

/// Calling convention of the analytics counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Library {
    /// `counter(id, "reachGoal", goal)`
    Vanilla,
    /// `counter.reachGoal(goal)`
    Vue,
    /// `counter("reachGoal", goal)`
    React,
}

impl Library {
    pub fn from_name(name: &str) -> ShareResult<Self> {
        name.parse().map_err(|_| ShareError::UnsupportedLibrary {
            library: name.to_owned(),
            available: Self::available(),
        })
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn available() -> String {
        Self::iter().map(Self::name).collect::<Vec<_>>().join(",")
    }
}

/// An analytics object exposing a `reachGoal` method.
pub trait ReachGoal {
    fn reach_goal(&self, goal: &str);
}

/// Externally supplied analytics counter, one variant per calling
/// convention.
pub enum Metrics {
    Vanilla(Box<dyn Fn(&str, &str, &str)>),
    Vue(Box<dyn ReachGoal>),
    React(Box<dyn Fn(&str, &str)>),
}

impl Metrics {
    pub fn vanilla(counter: impl Fn(&str, &str, &str) + 'static) -> Self {
        Self::Vanilla(Box::new(counter))
    }

    pub fn vue(counter: impl ReachGoal + 'static) -> Self {
        Self::Vue(Box::new(counter))
    }

    pub fn react(counter: impl Fn(&str, &str) + 'static) -> Self {
        Self::React(Box::new(counter))
    }

    /// The library whose calling convention this counter follows.
    pub fn library(&self) -> Library {
        match self {
            Self::Vanilla(_) => Library::Vanilla,
            Self::Vue(_) => Library::Vue,
            Self::React(_) => Library::React,
        }
    }

    fn reach_goal(&self, id: &str, goal: &str) {
        match self {
            Self::Vanilla(counter) => counter(id, REACH_GOAL, goal),
            Self::Vue(counter) => counter.reach_goal(goal),
            Self::React(counter) => counter(REACH_GOAL, goal),
        }
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Metrics").field(&self.library()).finish()
    }
}

/// Analytics part of a share configuration.
#[derive(Debug)]
pub struct AnalyticsConfig {
    /// Goal names are `prefix` followed by the network key.
    pub prefix: String,
    /// Raw library name, checked when an operation runs.
    pub library: String,
    pub id: Option<String>,
    pub metrics: Option<Metrics>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            prefix: String::from(DEFAULT_PREFIX),
            library: String::from(DEFAULT_LIBRARY),
            id: None,
            metrics: None,
        }
    }
}

impl AnalyticsConfig {
    fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Checks the library selection against the rest of the configuration.
    ///
    /// A vanilla counter needs an `id` even when no counter is attached.
    pub fn validate(&self) -> ShareResult<Library> {
        if self.library == Library::Vanilla.name() && self.id().is_none() {
            return Err(ShareError::MissingAnalyticsId);
        }

        let library = Library::from_name(&self.library)?;

        match &self.metrics {
            Some(metrics) if metrics.library() != library => Err(ShareError::MetricsMismatch {
                library,
                metrics: metrics.library(),
            }),
            _ => Ok(library),
        }
    }

    pub fn goal_name(&self, network: Network) -> String {
        format!("{}{}", self.prefix, network.key())
    }

    /// Reports the share goal for `network` to the configured counter, if any.
    pub fn notify(&self, network: Network) -> ShareResult<()> {
        let Some(metrics) = &self.metrics else {
            return Ok(());
        };

        self.validate()?;

        let goal = self.goal_name(network);
        log::debug!("Reaching goal {} through {} counter", goal, metrics.library());
        metrics.reach_goal(self.id().unwrap_or_default(), &goal);
        Ok(())
    }
}

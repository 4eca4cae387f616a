use libs::log;
use sharelink_model::{Network, NetworkTemplate, ShareRequest};

use crate::analytics::{AnalyticsConfig, Metrics};
use crate::encode;
use crate::options::ShareOptions;
use crate::popup::{Host, OpenOutcome, PopupConfig};
use crate::ShareResult;

/// Builds share links for one piece of content and opens them.
///
/// The configuration is fixed once built. Nothing is validated up front:
/// configuration errors are reported by [`LinkBuilder::create`] and
/// [`LinkBuilder::open`], always before any side effect.
#[derive(Debug)]
pub struct LinkBuilder {
    request: ShareRequest,
    analytics: AnalyticsConfig,
    popup: PopupConfig,
}

impl LinkBuilder {
    #[must_use]
    pub fn new(options: ShareOptions) -> Self {
        Self {
            request: options.request(),
            analytics: options.analytics(),
            popup: options.popup(),
        }
    }

    /// Attaches the analytics counter goals are reported to.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.analytics.metrics = Some(metrics);
        self
    }

    pub fn request(&self) -> &ShareRequest {
        &self.request
    }

    pub fn analytics(&self) -> &AnalyticsConfig {
        &self.analytics
    }

    pub fn popup(&self) -> &PopupConfig {
        &self.popup
    }

    /// Looks up the template for `key` and checks the analytics settings.
    pub fn resolve(&self, key: &str) -> ShareResult<&'static NetworkTemplate> {
        let network = Network::from_key(key)?;
        self.analytics.validate()?;
        Ok(network.template())
    }

    /// Returns the share link for `key` without reporting any goal.
    pub fn create(&self, key: &str) -> ShareResult<String> {
        let template = self.resolve(key)?;
        Ok(self.build_url(template))
    }

    pub fn build_url(&self, template: &NetworkTemplate) -> String {
        let link = encode::render(template, &self.request);
        log::debug!("Built {} share link {}", template.network, link);
        link
    }

    pub fn goal_name(&self, network: Network) -> String {
        self.analytics.goal_name(network)
    }

    pub fn notify_analytics(&self, network: Network) -> ShareResult<()> {
        self.analytics.notify(network)
    }

    /// Reports the share goal and asks `host` to open the share link.
    ///
    /// With `is_canvas` set the window is requested on the next release
    /// event of the host's primary surface, replacing a request still
    /// waiting there.
    pub fn open(&self, key: &str, host: &dyn Host) -> ShareResult<OpenOutcome> {
        let template = self.resolve(key)?;
        self.notify_analytics(template.network)?;

        let request = self.popup.request(self.build_url(template));
        let window = host.window();

        if !self.popup.is_canvas {
            log::info!("Opening {} share window", template.network);
            window.open_window(&request);
            return Ok(OpenOutcome::Opened);
        }

        let Some(surface) = host.primary_surface() else {
            log::warn!(
                "No rendering surface to wait on, {} share window will not open",
                template.network
            );
            return Ok(OpenOutcome::NoSurface);
        };

        if surface.subscribe_once(move || window.open_window(&request)) {
            log::debug!("Replaced a share window still waiting for a gesture");
        }
        log::info!(
            "Deferring {} share window until the next pointer or touch release",
            template.network
        );
        Ok(OpenOutcome::Deferred)
    }
}

impl From<ShareOptions> for LinkBuilder {
    fn from(options: ShareOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShareError;

    fn options() -> ShareOptions {
        ShareOptions {
            url: Some("https://example.com/post?id=1".to_owned()),
            title: Some("Hello".to_owned()),
            library: Some("react".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn create_telegram_link() {
        let builder = LinkBuilder::new(options());
        assert_eq!(
            builder.create("tg").unwrap(),
            "https://telegram.me/share/url?url=https%3A%2F%2Fexample.com%2Fpost%3Fid%3D1&text=Hello"
        );
    }

    #[test]
    fn create_facebook_link_uses_u() {
        let builder = LinkBuilder::from(options());
        assert_eq!(
            builder.create("fb").unwrap(),
            "https://www.facebook.com/sharer.php?u=https%3A%2F%2Fexample.com%2Fpost%3Fid%3D1"
        );
    }

    #[test]
    fn unknown_network_is_checked_first() {
        let builder = LinkBuilder::new(ShareOptions::default());
        let err = builder.create("myspace").unwrap_err();
        assert_eq!(err.class(), "UnknownNetworkError");
    }

    #[test]
    fn analytics_settings_are_checked() {
        let builder = LinkBuilder::new(ShareOptions {
            library: Some("angular".to_owned()),
            ..Default::default()
        });
        assert!(matches!(
            builder.create("vk"),
            Err(ShareError::UnsupportedLibrary { .. })
        ));

        let builder = LinkBuilder::new(ShareOptions::default());
        assert_eq!(builder.create("vk"), Err(ShareError::MissingAnalyticsId));
    }

    #[test]
    fn goal_name_uses_default_prefix() {
        let builder = LinkBuilder::new(options());
        assert_eq!(builder.goal_name(Network::Odnoklassniki), "share_ok");
    }
}

use serde::{Deserialize, Serialize};

use crate::Network;

/// A piece of shareable content a query parameter is filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Url,
    Title,
    Image,
    Description,
}

/// Fixed share endpoint of a network and the query parameters it accepts.
///
/// `domain` already ends with `?`, so a rendered link is the domain followed
/// directly by the query string. `params` keeps the declared order, which is
/// the order parameters appear in the rendered link.
#[derive(Debug, PartialEq, Eq)]
pub struct NetworkTemplate {
    pub network: Network,
    pub domain: &'static str,
    pub params: &'static [(&'static str, Field)],
}

pub(crate) static VKONTAKTE: NetworkTemplate = NetworkTemplate {
    network: Network::VKontakte,
    domain: "https://vk.com/share.php?",
    params: &[
        ("url", Field::Url),
        ("title", Field::Title),
        ("description", Field::Description),
    ],
};

pub(crate) static FACEBOOK: NetworkTemplate = NetworkTemplate {
    network: Network::Facebook,
    domain: "https://www.facebook.com/sharer.php?",
    params: &[("u", Field::Url)],
};

pub(crate) static TWITTER: NetworkTemplate = NetworkTemplate {
    network: Network::Twitter,
    domain: "https://twitter.com/share?",
    params: &[("text", Field::Description), ("url", Field::Url)],
};

pub(crate) static ODNOKLASSNIKI: NetworkTemplate = NetworkTemplate {
    network: Network::Odnoklassniki,
    domain: "https://connect.ok.ru/offer?",
    params: &[
        ("url", Field::Url),
        ("title", Field::Title),
        ("imageUrl", Field::Image),
    ],
};

pub(crate) static TELEGRAM: NetworkTemplate = NetworkTemplate {
    network: Network::Telegram,
    domain: "https://telegram.me/share/url?",
    params: &[("url", Field::Url), ("text", Field::Title)],
};

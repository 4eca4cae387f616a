use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::template::{self, NetworkTemplate};
use crate::{ModelError, ModelResult};

/// A social network a link can be shared to.
///
/// The string form of each variant is the short key used by callers and in
/// analytics goal names (`vk`, `fb`, `tw`, `ok`, `tg`). Variants are declared
/// in table order, which is also the order [`Network::available`] reports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Network {
    #[strum(serialize = "vk")]
    #[serde(rename = "vk")]
    VKontakte,
    #[strum(serialize = "fb")]
    #[serde(rename = "fb")]
    Facebook,
    #[strum(serialize = "tw")]
    #[serde(rename = "tw")]
    Twitter,
    #[strum(serialize = "ok")]
    #[serde(rename = "ok")]
    Odnoklassniki,
    #[strum(serialize = "tg")]
    #[serde(rename = "tg")]
    Telegram,
}

impl Network {
    /// Parses a network from its short key.
    pub fn from_key(key: &str) -> ModelResult<Self> {
        key.parse().map_err(|_| ModelError::UnknownNetwork {
            key: key.to_owned(),
            available: Self::available(),
        })
    }

    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Comma separated list of every supported key, in table order.
    pub fn available() -> String {
        Self::iter().map(Self::key).collect::<Vec<_>>().join(",")
    }

    pub fn template(self) -> &'static NetworkTemplate {
        match self {
            Self::VKontakte => &template::VKONTAKTE,
            Self::Facebook => &template::FACEBOOK,
            Self::Twitter => &template::TWITTER,
            Self::Odnoklassniki => &template::ODNOKLASSNIKI,
            Self::Telegram => &template::TELEGRAM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_from_key() {
        assert_eq!(Network::from_key("vk"), Ok(Network::VKontakte));
        assert_eq!(Network::from_key("tg"), Ok(Network::Telegram));
    }

    #[test]
    fn network_from_unknown_key() {
        let err = Network::from_key("myspace").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong site (myspace). Available: vk,fb,tw,ok,tg"
        );
    }

    #[test]
    fn network_keys_are_case_sensitive() {
        assert!(Network::from_key("VK").is_err());
    }

    #[test]
    fn should_implement_trait_display() {
        assert_eq!(Network::Odnoklassniki.to_string(), "ok");
        assert_eq!(Network::Facebook.key(), "fb");
    }

    #[test]
    fn every_network_has_its_own_template() {
        for network in Network::iter() {
            assert_eq!(network.template().network, network);
        }
    }

    #[test]
    fn network_serializes_as_key() {
        let json = libs::serde_json::to_string(&Network::Twitter).unwrap();
        assert_eq!(json, r#""tw""#);
        let network: Network = libs::serde_json::from_str(r#""ok""#).unwrap();
        assert_eq!(network, Network::Odnoklassniki);
    }
}

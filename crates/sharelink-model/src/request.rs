use serde::{Deserialize, Serialize};

use crate::Field;

/// The content to share.
///
/// Every field is optional; absent or empty fields are left out of the
/// generated link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareRequest {
    pub url: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl ShareRequest {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: Some(url.to_owned()),
            ..Default::default()
        }
    }

    /// Returns the value of `field`, treating an empty string as absent.
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Url => &self.url,
            Field::Title => &self.title,
            Field::Image => &self.image,
            Field::Description => &self.description,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_reads_as_absent() {
        let request = ShareRequest {
            url: Some("https://example.com".to_owned()),
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(request.field(Field::Url), Some("https://example.com"));
        assert_eq!(request.field(Field::Title), None);
        assert_eq!(request.field(Field::Image), None);
    }

    #[test]
    fn request_from_url() {
        let request = ShareRequest::new("https://example.com");
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
        assert!(request.description.is_none());
    }
}

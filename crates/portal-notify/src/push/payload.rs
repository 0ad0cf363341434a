//! Notification payload handed to the browser's service worker

use serde::{Deserialize, Serialize};

/// JSON payload delivered inside the encrypted push message.
///
/// The service worker reads `title`/`body` for the notification and opens
/// `url` when the notification is clicked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NotificationPayload {
    /// Create a payload with title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: None,
        }
    }

    /// Set the URL to open on click
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Serialize to the bytes that get encrypted onto the wire
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_shape() {
        let payload = NotificationPayload::new("New article", "Quarterly results are out")
            .with_url("/news/42");
        let json: serde_json::Value =
            serde_json::from_slice(&payload.to_bytes().unwrap()).unwrap();

        assert_eq!(json["title"], "New article");
        assert_eq!(json["body"], "Quarterly results are out");
        assert_eq!(json["url"], "/news/42");
    }

    #[test]
    fn test_url_omitted_when_absent() {
        let payload = NotificationPayload::new("t", "b");
        let json = String::from_utf8(payload.to_bytes().unwrap()).unwrap();
        assert!(!json.contains("url"));
    }
}

//! News article entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A company news article.
///
/// Articles start as drafts; publishing stamps `published_at` and triggers
/// the push broadcast in the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<Uuid>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsArticle {
    /// Create a new draft article
    pub fn new(title: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            category: None,
            image_url: None,
            author_id: None,
            is_published: false,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the article as published, stamping the publication time once
    pub fn publish(&mut self) {
        let now = Utc::now();
        self.is_published = true;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_stamps_once() {
        let mut article = NewsArticle::new("Title".to_string(), "Body".to_string());
        assert!(!article.is_published);

        article.publish();
        let first = article.published_at;
        assert!(article.is_published);
        assert!(first.is_some());

        article.publish();
        assert_eq!(article.published_at, first);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a blog post, stored as two name parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Render as a single "first last" string, trimmed so a missing
    /// half does not leave a stray space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// BlogPost entity - one record in the posts collection.
///
/// The id is store-assigned at creation and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post. `created` defaults to the current time when
    /// the caller does not supply one.
    pub fn new(
        author: Author,
        title: String,
        content: String,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: created.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last() {
        let author = Author::new("Ada", "Lovelace");
        assert_eq!(author.display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_trims_when_half_is_missing() {
        assert_eq!(Author::new("Ada", "").display_name(), "Ada");
        assert_eq!(Author::new("", "Lovelace").display_name(), "Lovelace");
        assert_eq!(Author::default().display_name(), "");
    }

    #[test]
    fn new_post_defaults_created_to_now() {
        let before = Utc::now();
        let post = BlogPost::new(
            Author::new("Ada", "Lovelace"),
            "title".into(),
            "content".into(),
            None,
        );
        assert!(post.created >= before && post.created <= Utc::now());
    }

    #[test]
    fn new_post_keeps_explicit_created() {
        let stamp = "2020-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap();
        let post = BlogPost::new(Author::default(), "t".into(), "c".into(), Some(stamp));
        assert_eq!(post.created, stamp);
    }
}

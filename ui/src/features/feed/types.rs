use serde::{Deserialize, Serialize};

/// One blog post as stored in the document database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Document id within the posts collection
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub blog_contents: String,
    pub author_uid: String,
    /// Server-assigned RFC 3339 time
    pub timestamp: String,
    /// Thumbnail URL or asset path
    pub thumbnail: String,
    pub likes: u64,
}

impl Post {
    /// First `max_chars` characters of the contents, with an ellipsis when cut
    pub fn excerpt(&self, max_chars: usize) -> String {
        let contents = self.blog_contents.trim();
        match contents.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}…", contents[..cut].trim_end()),
            None => contents.to_string(),
        }
    }

    /// Calendar date part of the timestamp (`YYYY-MM-DD`)
    pub fn published_date(&self) -> &str {
        self.timestamp
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.timestamp)
    }

    pub fn likes_label(&self) -> String {
        match self.likes {
            1 => "1 like".to_string(),
            n => format!("{} likes", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(contents: &str) -> Post {
        Post {
            id: "p1".to_string(),
            title: "Hello".to_string(),
            blog_contents: contents.to_string(),
            author_uid: "uid-1".to_string(),
            timestamp: "2024-03-09T12:30:00.000Z".to_string(),
            thumbnail: "/thumbs/hello.png".to_string(),
            likes: 1,
        }
    }

    #[test]
    fn test_excerpt_short_contents_unchanged() {
        assert_eq!(post("  short text ").excerpt(50), "short text");
    }

    #[test]
    fn test_excerpt_cuts_on_char_boundary() {
        let excerpt = post("héllo wörld, this is long").excerpt(11);
        assert_eq!(excerpt, "héllo wörld…");
    }

    #[test]
    fn test_published_date() {
        assert_eq!(post("").published_date(), "2024-03-09");

        let mut untimed = post("");
        untimed.timestamp = "yesterday".to_string();
        assert_eq!(untimed.published_date(), "yesterday");
    }

    #[test]
    fn test_likes_label() {
        let mut p = post("");
        assert_eq!(p.likes_label(), "1 like");
        p.likes = 0;
        assert_eq!(p.likes_label(), "0 likes");
    }
}

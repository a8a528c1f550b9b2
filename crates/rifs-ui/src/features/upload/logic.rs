//! Share-link construction for uploaded images.

use crate::core::logic::image_url;

/// Copyable reference formats for one stored image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadLinks {
    /// Direct URL to the image.
    pub url: String,
    /// Markdown image snippet.
    pub markdown: String,
    /// HTML image snippet.
    pub html: String,
}

/// Build the copyable reference formats for an upload.
#[must_use]
pub fn build_links(base_url: &str, file_name: &str, hash: &str) -> UploadLinks {
    let url = image_url(base_url, hash);
    UploadLinks {
        markdown: format!("![{file_name}]({url})"),
        html: format!("<img src=\"{url}\" alt=\"{file_name}\" />"),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::build_links;

    #[test]
    fn links_cover_every_snippet_flavor() {
        let links = build_links("http://localhost:3000/", "cat.png", "abc123");
        assert_eq!(links.url, "http://localhost:3000/images/abc123");
        assert_eq!(links.markdown, "![cat.png](http://localhost:3000/images/abc123)");
        assert_eq!(
            links.html,
            "<img src=\"http://localhost:3000/images/abc123\" alt=\"cat.png\" />"
        );
    }
}

//! Utility functions and helpers.

pub mod http;
pub mod console;

use url::Url;

/// Append `href` to `base`, keeping any path the base carries.
///
/// Exactly one `/` separates the two parts; the href is not re-encoded.
pub fn prefix_url(base: &Url, href: &str) -> String {
    let base = base.as_str().trim_end_matches('/');
    if href.starts_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_url() {
        let base = Url::parse("https://www.imperial-library.info").unwrap();
        assert_eq!(
            prefix_url(&base, "/books/mybook"),
            "https://www.imperial-library.info/books/mybook"
        );
        assert_eq!(
            prefix_url(&base, "books/mybook"),
            "https://www.imperial-library.info/books/mybook"
        );
    }

    #[test]
    fn test_prefix_url_keeps_base_path() {
        let base = Url::parse("https://mirror.example/imperial").unwrap();
        assert_eq!(
            prefix_url(&base, "/books/mybook"),
            "https://mirror.example/imperial/books/mybook"
        );

        let base = Url::parse("https://mirror.example/imperial/").unwrap();
        assert_eq!(
            prefix_url(&base, "/books/mybook"),
            "https://mirror.example/imperial/books/mybook"
        );
    }

    #[test]
    fn test_prefix_url_does_not_encode_href() {
        let base = Url::parse("https://www.imperial-library.info").unwrap();
        assert_eq!(
            prefix_url(&base, "/books/The Wolf Queen"),
            "https://www.imperial-library.info/books/The Wolf Queen"
        );
    }
}

// src/services/extract.rs

//! Field extractors.
//!
//! Every extractor takes an optional fragment and returns `Option<String>`.
//! A missing fragment or a selector that matches nothing yields `None`; the
//! caller decides where the value goes.

use scraper::{ElementRef, Selector};
use url::Url;

use crate::utils::prefix_url;

/// All descendant text of an element, concatenated.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// First element under `fragment` matching `selector`.
pub fn find<'a>(fragment: Option<ElementRef<'a>>, selector: &Selector) -> Option<ElementRef<'a>> {
    fragment?.select(selector).next()
}

/// Text of the first match, outer whitespace trimmed.
pub fn extract_text(fragment: Option<ElementRef<'_>>, selector: &Selector) -> Option<String> {
    find(fragment, selector).map(|el| element_text(el).trim().to_string())
}

/// Book link of an index entry, appended to `base`.
///
/// When several anchors carry an `href`, the last one wins.
pub fn extract_link(
    fragment: Option<ElementRef<'_>>,
    selector: &Selector,
    base: &Url,
) -> Option<String> {
    fragment?
        .select(selector)
        .filter_map(|a| a.value().attr("href"))
        .last()
        .map(|href| prefix_url(base, href))
}

/// Author block of a book page with its label line removed.
pub fn extract_author(fragment: Option<ElementRef<'_>>, selector: &Selector) -> Option<String> {
    find(fragment, selector).map(|el| drop_label(&element_text(el), " "))
}

/// Comment block of a book page with its label line removed.
pub fn extract_comment(fragment: Option<ElementRef<'_>>, selector: &Selector) -> Option<String> {
    find(fragment, selector).map(|el| drop_label(&element_text(el), "\n"))
}

/// Trim every line, drop the first one (the field label), join the rest.
pub fn drop_label(raw: &str, separator: &str) -> String {
    raw.trim()
        .lines()
        .map(str::trim)
        .skip(1)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_selector;
    use scraper::Html;

    fn sel(s: &str) -> Selector {
        parse_selector(s).unwrap()
    }

    fn base() -> Url {
        Url::parse("https://www.imperial-library.info").unwrap()
    }

    #[test]
    fn test_drop_label_author() {
        assert_eq!(
            drop_label("Label:\n  Jane Doe\n  (Contributor)", " "),
            "Jane Doe (Contributor)"
        );
    }

    #[test]
    fn test_drop_label_comment() {
        assert_eq!(
            drop_label("Label:\nLine one\nLine two", "\n"),
            "Line one\nLine two"
        );
    }

    #[test]
    fn test_drop_label_only_label() {
        assert_eq!(drop_label("Author:", " "), "");
    }

    #[test]
    fn test_extract_author_from_markup() {
        let html = Html::parse_fragment(
            r#"<div class="field field-type-text field-field-author">
                 Author:
                   Jane Doe
                   (Contributor)
               </div>"#,
        );
        let author = extract_author(
            Some(html.root_element()),
            &sel(".field.field-type-text.field-field-author"),
        );
        assert_eq!(author.as_deref(), Some("Jane Doe (Contributor)"));
    }

    #[test]
    fn test_extract_comment_keeps_paragraphs() {
        let html = Html::parse_fragment(
            "<div class=\"comment\">Comment:\n<p>First.</p>\n<p>Second.</p></div>",
        );
        let comment = extract_comment(Some(html.root_element()), &sel(".comment"));
        assert_eq!(comment.as_deref(), Some("First.\nSecond."));
    }

    #[test]
    fn test_extract_text_trims_outer_whitespace_only() {
        let html = Html::parse_fragment(
            "<div class=\"prose\">\n   Line one\n   Line two  \n</div>",
        );
        let text = extract_text(Some(html.root_element()), &sel(".prose"));
        assert_eq!(text.as_deref(), Some("Line one\n   Line two"));
    }

    #[test]
    fn test_missing_element_is_none() {
        let html = Html::parse_fragment("<div><span>nothing here</span></div>");
        let root = Some(html.root_element());
        assert_eq!(extract_text(root, &sel(".title")), None);
        assert_eq!(extract_author(root, &sel(".author")), None);
        assert_eq!(extract_comment(root, &sel(".comment")), None);
        assert_eq!(extract_link(root, &sel("a"), &base()), None);
    }

    #[test]
    fn test_missing_fragment_is_none() {
        assert_eq!(extract_text(None, &sel(".title")), None);
        assert_eq!(extract_author(None, &sel(".author")), None);
        assert_eq!(extract_comment(None, &sel(".comment")), None);
        assert_eq!(extract_link(None, &sel("a"), &base()), None);
    }

    #[test]
    fn test_extract_link_prefixes_base() {
        let html = Html::parse_fragment(r#"<li><a href="/books/mybook">My Book</a></li>"#);
        let link = extract_link(Some(html.root_element()), &sel("a"), &base());
        assert_eq!(
            link.as_deref(),
            Some("https://www.imperial-library.info/books/mybook")
        );
    }

    #[test]
    fn test_extract_link_last_href_wins() {
        let html = Html::parse_fragment(
            r#"<li><a href="/books/first">1</a><a href="/books/second">2</a><a name="anchor">x</a></li>"#,
        );
        let link = extract_link(Some(html.root_element()), &sel("a"), &base());
        assert_eq!(
            link.as_deref(),
            Some("https://www.imperial-library.info/books/second")
        );
    }

    #[test]
    fn test_extract_link_keeps_base_path() {
        let html = Html::parse_fragment(r#"<li><a href="/books/mybook">My Book</a></li>"#);
        let mirror = Url::parse("https://mirror.example/imperial").unwrap();
        let link = extract_link(Some(html.root_element()), &sel("a"), &mirror);
        assert_eq!(
            link.as_deref(),
            Some("https://mirror.example/imperial/books/mybook")
        );
    }
}

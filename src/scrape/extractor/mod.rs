use scraper::{Html, Selector};

/// The three fields pulled from one page, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub headings: Vec<String>,
    pub links: Vec<String>,
    pub paragraphs: Vec<String>,
}

pub fn extract_all(doc: &Html) -> Extracted {
    Extracted {
        headings: extract_headings(doc),
        links: extract_links(doc),
        paragraphs: extract_paragraphs(doc),
    }
}

/// Text of every `h1`, trimmed.
pub fn extract_headings(doc: &Html) -> Vec<String> {
    trimmed_text(doc, "h1")
}

/// Raw `href` of every anchor that has one. Not trimmed, not resolved.
pub fn extract_links(doc: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("a[href]") else { return Vec::new() };
    doc.select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Text of every `p`, trimmed. Empty paragraphs stay as empty strings.
pub fn extract_paragraphs(doc: &Html) -> Vec<String> {
    trimmed_text(doc, "p")
}

fn trimmed_text(doc: &Html, selector: &str) -> Vec<String> {
    let Ok(sel) = Selector::parse(selector) else { return Vec::new() };
    doc.select(&sel)
        .map(|node| node.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html { Html::parse_document(html) }

    #[test]
    fn literal_fixture() {
        let d = doc(r#"<h1>A</h1><p>Hello</p><a href="/x">link</a><h1> B </h1>"#);
        assert_eq!(extract_headings(&d), vec!["A", "B"]);
        assert_eq!(extract_links(&d), vec!["/x"]);
        assert_eq!(extract_paragraphs(&d), vec!["Hello"]);
    }

    #[test]
    fn document_order_and_duplicates_kept() {
        let d = doc(r#"
        <html><body>
          <h1>First</h1>
          <div><h1>Second <em>nested</em></h1></div>
          <h1>First</h1>
          <h2>not a level-1</h2>
        </body></html>
        "#);
        assert_eq!(extract_headings(&d), vec!["First", "Second nested", "First"]);
    }

    #[test]
    fn links_are_verbatim_and_require_href() {
        let d = doc(r#"
        <a href=" relative/path ">one</a>
        <a name="anchor-only">two</a>
        <a href="">three</a>
        <a href="https://example.com/?q=a,b">four</a>
        <a href="/x">five</a><a href="/x">six</a>
        "#);
        assert_eq!(
            extract_links(&d),
            vec![" relative/path ", "", "https://example.com/?q=a,b", "/x", "/x"]
        );
    }

    #[test]
    fn empty_paragraphs_kept() {
        let d = doc("<p>  </p><p>\n  text\n</p><p></p>");
        assert_eq!(extract_paragraphs(&d), vec!["", "text", ""]);
    }

    #[test]
    fn empty_document_yields_empty_fields() {
        let d = doc("<html><head><title>t</title></head><body><div>nothing here</div></body></html>");
        assert_eq!(extract_all(&d), Extracted::default());
    }

    #[test]
    fn malformed_markup_degrades() {
        let d = doc("<a href=/z>z</a><h1>Open heading</h1><p>para one<p>para two</div>");
        assert_eq!(extract_headings(&d), vec!["Open heading"]);
        assert_eq!(extract_paragraphs(&d), vec!["para one", "para two"]);
        assert_eq!(extract_links(&d), vec!["/z"]);
    }
}

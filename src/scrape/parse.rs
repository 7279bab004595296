use scraper::Html;

/// Lenient html5ever parse. Malformed markup never fails.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

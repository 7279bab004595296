use scraper::{ElementRef, Html, Node};
use std::fmt::Write;

const INDENT: &str = " ";

// Elements that never carry children or a closing tag.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Indented rendering of the parsed tree: one tag, text run or comment per line,
/// one space of indent per nesting level. Whitespace-only text is dropped.
pub fn prettify(doc: &Html) -> String {
    let mut out = String::new();
    for child in doc.tree.root().children() {
        match child.value() {
            Node::Doctype(d) => push_line(&mut out, 0, &format!("<!DOCTYPE {}>", d.name())),
            Node::Comment(c) => push_line(&mut out, 0, &format!("<!--{}-->", &**c)),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) { render_element(el, 0, &mut out); }
            }
            _ => {}
        }
    }
    out
}

fn render_element(el: ElementRef<'_>, depth: usize, out: &mut String) {
    let e = el.value();
    let mut open = format!("<{}", e.name());
    for (k, v) in e.attrs() {
        let _ = write!(open, " {}=\"{}\"", k, escape(v, true));
    }
    open.push('>');
    push_line(out, depth, &open);

    if VOID.contains(&e.name()) { return; }

    for child in el.children() {
        match child.value() {
            Node::Text(t) => {
                let s = t.trim();
                if !s.is_empty() { push_line(out, depth + 1, &escape(s, false)); }
            }
            Node::Comment(c) => push_line(out, depth + 1, &format!("<!--{}-->", &**c)),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) { render_element(child_el, depth + 1, out); }
            }
            _ => {}
        }
    }
    push_line(out, depth, &format!("</{}>", e.name()));
}

fn push_line(out: &mut String, depth: usize, s: &str) {
    for _ in 0..depth { out.push_str(INDENT); }
    out.push_str(s);
    out.push('\n');
}

fn escape(s: &str, attr: bool) -> String {
    let mut buf = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' if attr => buf.push_str("&quot;"),
            c => buf.push(c),
        }
    }
    buf
}

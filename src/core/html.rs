// src/core/html.rs
// Owned, typed document tree.
//
// `scraper` (html5ever) does the tokenizing and tree building; the result is
// copied into two variants, elements and text, and everything downstream
// matches on those. Comments, doctypes and processing instructions are dropped.
// Tag and attribute names come out of html5ever lowercased.

use scraper::{ElementRef, Html};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Parse a whole page. Returns the `<html>` element; html5ever always
/// synthesizes one, so this never fails.
pub fn parse_document(html: &str) -> Element {
    let doc = Html::parse_document(html);
    from_scraper(doc.root_element())
}

fn from_scraper(el: ElementRef<'_>) -> Element {
    let value = el.value();
    let children = el
        .children()
        .filter_map(|child| match child.value() {
            scraper::Node::Text(text) => Some(Node::Text(text.to_string())),
            scraper::Node::Element(_) => ElementRef::wrap(child).map(|c| Node::Element(from_scraper(c))),
            _ => None,
        })
        .collect();

    Element {
        name: s!(value.name()),
        attrs: value.attrs().map(|(k, v)| (s!(k), s!(v))).collect(),
        children,
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Class membership, not substring: `class="a item_currency"` has `item_currency`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// All nodes below this element, pre-order (document order), self excluded.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: self.children.iter().rev().collect() }
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.descendants().filter_map(Node::as_element)
    }

    /// Every descendant element with this tag name, nested ones included.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |el| el.name == name)
    }

    pub fn find_all_with_class<'a>(
        &'a self,
        name: &'a str,
        class: &'a str,
    ) -> impl Iterator<Item = &'a Element> {
        self.find_all(name).filter(move |el| el.has_class(class))
    }

    /// First descendant element with this tag name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }

    /// Each descendant text node trimmed, empties dropped, glued with no separator.
    /// `<a> Distilled <b>Ire</b></a>` → "DistilledIre"; plain `<a> Distilled Ire </a>` → "Distilled Ire".
    pub fn stripped_text(&self) -> String {
        let mut out = s!();
        for node in self.descendants() {
            if let Node::Text(text) = node {
                out.push_str(text.trim());
            }
        }
        out
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        if let Node::Element(el) = node {
            self.stack.extend(el.children.iter().rev());
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(doc: &Element) -> &Element {
        doc.find("body").unwrap()
    }

    #[test]
    fn builds_typed_tree() {
        let doc = parse_document(r#"<p class="x y">hi <b>there</b><!-- gone --></p>"#);
        assert_eq!(doc.name, "html");
        let p = body(&doc).find("p").unwrap();
        assert_eq!(p.attr("class"), Some("x y"));
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.children[0], Node::Text(s!("hi ")));
        assert_eq!(p.children[1].as_element().unwrap().name, "b");
    }

    #[test]
    fn class_membership_not_substring() {
        let doc = parse_document(r#"<a class="item_currency big">A</a><a class="item_currency_old">B</a>"#);
        let hits: Vec<_> = doc.find_all_with_class("a", "item_currency").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].stripped_text(), "A");
    }

    #[test]
    fn find_all_is_document_order_and_nested() {
        let doc = parse_document(
            "<div id=1><div id=2></div></div><div id=3></div>",
        );
        let ids: Vec<_> = doc.find_all("div").filter_map(|d| d.attr("id")).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn stripped_text_trims_each_piece() {
        let doc = parse_document("<span>  Distilled <b> Ire </b>\n</span>");
        assert_eq!(doc.find("span").unwrap().stripped_text(), "DistilledIre");

        let doc = parse_document("<span>\n  Distilled Ire&nbsp;</span>");
        assert_eq!(doc.find("span").unwrap().stripped_text(), "Distilled Ire");
    }

    #[test]
    fn entities_are_decoded() {
        let doc = parse_document("<p>Fish &amp; Chips</p>");
        assert_eq!(doc.find("p").unwrap().stripped_text(), "Fish & Chips");
    }
}

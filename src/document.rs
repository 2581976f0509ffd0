//! Typed queries over a parsed HTML document.
//!
//! A thin layer over `scraper`: elements are located by tag plus an attribute
//! matcher, and text can be read with matching descendants pruned away.

use scraper::{node::Element, ElementRef, Html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    // class list contains the token.
    Class(&'static str),
    // attribute is present, whatever its value.
    HasAttr(&'static str),
    Any
}

impl Matcher {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Matcher::Class(class) => element.classes().any(|c| c == *class),
            Matcher::HasAttr(name) => element.attr(name).is_some(),
            Matcher::Any => true
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    tag: &'static str,
    matcher: Matcher
}

impl Query {
    pub const fn tag(tag: &'static str) -> Self {
        Query { tag, matcher: Matcher::Any }
    }

    pub const fn class(tag: &'static str, class: &'static str) -> Self {
        Query { tag, matcher: Matcher::Class(class) }
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.name() == self.tag && self.matcher.matches(element)
    }
}

pub struct Document {
    html: Html
}

impl Document {
    /// Parses `source` leniently. Empty or malformed input still produces a
    /// (mostly empty) tree, so queries on it simply find nothing.
    pub fn parse(source: &str) -> Self {
        Document {
            html: Html::parse_document(source)
        }
    }

    pub fn find_first(&self, query: Query) -> Option<Node<'_>> {
        self.find_all(query).next()
    }

    /// All matching elements in document order.
    pub fn find_all(&self, query: Query) -> impl Iterator<Item = Node<'_>> + '_ {
        self.html.root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| query.matches(el.value()))
            .map(Node)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn find_first(&self, query: Query) -> Option<Node<'a>> {
        self.find_all(query).next()
    }

    /// Matching descendants in document order, excluding the node itself.
    pub fn find_all(&self, query: Query) -> impl Iterator<Item = Node<'a>> + 'a {
        let root = self.0;
        root.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |el| query.matches(el.value()))
            .map(Node)
    }

    pub fn text(&self, trim: bool) -> String {
        let text = self.0.text().collect::<String>();
        if trim { text.trim().to_string() } else { text }
    }

    /// Text with every run of whitespace collapsed to one space, trimmed.
    pub fn flattened_text(&self) -> String {
        flatten_whitespace(&self.text(false))
    }

    /// A view of this node with every descendant element satisfying
    /// `matcher` (and its whole subtree) left out. The tree is not mutated.
    pub fn remove_matching_descendants(&self, matcher: Matcher) -> Pruned<'a> {
        Pruned {
            root: self.0,
            matcher
        }
    }
}

pub struct Pruned<'a> {
    root: ElementRef<'a>,
    matcher: Matcher
}

impl Pruned<'_> {
    pub fn text(&self, trim: bool) -> String {
        let mut text = String::new();
        push_text(self.root, self.matcher, &mut text);
        if trim { text.trim().to_string() } else { text }
    }

    pub fn flattened_text(&self) -> String {
        flatten_whitespace(&self.text(false))
    }
}

fn push_text(element: ElementRef<'_>, prune: Matcher, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            if !prune.matches(child.value()) {
                push_text(child, prune, out);
            }
        }
    }
}

pub fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

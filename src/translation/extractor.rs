/*!
 * Extraction of translations from dictionary pages.
 *
 * The page is reduced to a flat list of fragments: text pieces and
 * delimiters (`<br>` and `<span class="comma">`). Consecutive text pieces up
 * to a delimiter form one translation.
 */

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::errors::ExtractError;

/// Class of the container holding the headword
const HEADWORD_GROUP_CLASS: &str = "hgroup";

/// Id of the container holding the quick translations
const FAST_MEANINGS_ID: &str = "fastMeanings";

/// Class of the span separating translations
const COMMA_CLASS: &str = "comma";

/// One child of the translation block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text of a non-delimiter element
    Text(String),
    /// Entry separator
    Delimiter,
}

impl Fragment {
    /// Shorthand for `Fragment::Text`
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }
}

/// What to do with text after the last delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingFragment {
    /// Discard it, as earlier releases did
    #[default]
    Drop,
    /// Keep it as a final entry
    Commit,
}

/// Join fragments into translations
///
/// Each text fragment is appended to the current entry followed by a single
/// space; a delimiter closes the entry with that one trailing space removed.
/// Entries left empty after that trim are skipped, so `<a></a><br>` adds
/// nothing where earlier releases stored an empty string.
pub fn extract_translations<I>(fragments: I, trailing: TrailingFragment) -> Vec<String>
where
    I: IntoIterator<Item = Fragment>,
{
    let mut result = Vec::new();
    let mut current = String::new();

    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => {
                current.push_str(&text);
                current.push(' ');
            }
            Fragment::Delimiter => close_entry(&mut current, &mut result),
        }
    }

    if trailing == TrailingFragment::Commit {
        close_entry(&mut current, &mut result);
    }

    result
}

fn close_entry(current: &mut String, result: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }

    current.pop();
    let entry = std::mem::take(current);
    if !entry.is_empty() {
        result.push(entry);
    }
}

/// Headword and translations found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Headword as shown by the dictionary, or the query when absent
    pub word: String,
    /// Translations in document order
    pub translations: Vec<String>,
}

/// Page extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    trailing: TrailingFragment,
}

impl Extractor {
    /// Create an extractor with the given trailing-fragment policy
    pub fn new(trailing: TrailingFragment) -> Self {
        Self { trailing }
    }

    /// Parse a dictionary page fetched for `question`
    pub fn parse_page(&self, html: &str, question: &str) -> Result<ParsedPage, ExtractError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let body = find_first(&dom.document, |node, _| node_name(node) == Some("body"))
            .ok_or(ExtractError::MissingBody)?;

        let word = find_first(&body, |node, parent| {
            node_name(node) == Some("h1")
                && parent.is_some_and(|p| node_name(p) == Some("div") && has_class(p, HEADWORD_GROUP_CLASS))
        })
        .map(|h1| element_text(&h1))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| question.to_string());

        let translations = find_first(&body, |node, _| {
            node_name(node) == Some("div") && node_attr(node, "id").as_deref() == Some(FAST_MEANINGS_ID)
        })
        .map(|block| extract_translations(block_fragments(&block), self.trailing))
        .unwrap_or_default();

        Ok(ParsedPage { word, translations })
    }
}

/// Child elements of the translation block as fragments
fn block_fragments(block: &Handle) -> Vec<Fragment> {
    block
        .children
        .borrow()
        .iter()
        .filter_map(|child| match node_name(child) {
            Some("br") => Some(Fragment::Delimiter),
            Some("span") if has_class(child, COMMA_CLASS) => Some(Fragment::Delimiter),
            Some(_) => Some(Fragment::Text(element_text(child))),
            None => None,
        })
        .collect()
}

/// First node in document order accepted by `predicate`
///
/// The predicate also receives the node's parent, which rcdom only exposes
/// through a weak pointer. The walk keeps its own stack so page depth is not
/// bounded by the thread stack.
fn find_first(node: &Handle, predicate: impl Fn(&Handle, Option<&Handle>) -> bool) -> Option<Handle> {
    let mut stack: Vec<(Handle, Option<Handle>)> = vec![(node.clone(), None)];

    while let Some((current, parent)) = stack.pop() {
        if predicate(&current, parent.as_ref()) {
            return Some(current);
        }

        for child in current.children.borrow().iter().rev() {
            stack.push((child.clone(), Some(current.clone())));
        }
    }

    None
}

fn node_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn has_class(node: &Handle, class: &str) -> bool {
    node_attr(node, "class")
        .map(|value| value.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Whitespace-normalised text content of an element
fn element_text(node: &Handle) -> String {
    let mut raw = String::new();
    collect_text(node, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: &Handle, out: &mut String) {
    let mut stack = vec![node.clone()];

    while let Some(current) = stack.pop() {
        match &current.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { name, .. } if &*name.local == "br" => out.push(' '),
            _ => {}
        }

        for child in current.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
}

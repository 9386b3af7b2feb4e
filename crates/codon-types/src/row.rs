// ABOUTME: Rendered code rows as ordered trees of styled text runs
// ABOUTME: Mirrors the nesting a syntax highlighter produces without depending on it

use serde::{Deserialize, Serialize};

/// One node in a row's styled-run tree.
///
/// Highlighters wrap runs of characters in arbitrarily nested spans; position
/// math only ever sees the concatenation of the text leaves in document
/// order, so the nesting shape is carried but never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowNode {
    /// A leaf run of character data.
    Text(String),
    /// A styled wrapper around child runs (a highlighting span).
    Span(Vec<RowNode>),
}

impl RowNode {
    pub fn text(text: impl Into<String>) -> Self {
        RowNode::Text(text.into())
    }

    pub fn span(children: Vec<RowNode>) -> Self {
        RowNode::Span(children)
    }
}

/// One rendered line of code.
///
/// Owns its run tree read-only for resolution purposes; the row's characters
/// are exactly the concatenation, in depth-first pre-order, of the character
/// data of its text leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    nodes: Vec<RowNode>,
    left_inset: f64,
}

impl Row {
    pub fn new(nodes: Vec<RowNode>, left_inset: f64) -> Self {
        Self { nodes, left_inset }
    }

    /// A row holding a single unstyled run, with no left inset.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![RowNode::text(text)], 0.0)
    }

    /// Distance in pixels from the row element's left edge to the first
    /// character cell (the row's left padding inset).
    pub fn left_inset(&self) -> f64 {
        self.left_inset
    }

    pub fn nodes(&self) -> &[RowNode] {
        &self.nodes
    }

    /// Text runs in document order (depth-first, pre-order).
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            stack: vec![self.nodes.iter()],
        }
    }

    /// The row's full text: the concatenation of all runs.
    pub fn text(&self) -> String {
        self.runs().collect()
    }

    /// Number of character slots on the row, counted in UTF-16 code units to
    /// match how the rendered character data is indexed.
    pub fn len_utf16(&self) -> usize {
        self.runs().map(|run| run.encode_utf16().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs().all(str::is_empty)
    }
}

/// Iterator over a row's text runs in document order.
pub struct Runs<'a> {
    stack: Vec<std::slice::Iter<'a, RowNode>>,
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(RowNode::Text(text)) => return Some(text.as_str()),
                Some(RowNode::Span(children)) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

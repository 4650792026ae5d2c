#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layer {
    Script,  // top level statement text, by definition the base state
    Comment, // inside (* ... *), which nest
    Literal, // inside a "..." string
}

/// Stack of lexical layers entered while scanning a statement. Comments
/// nest, so the comment depth is the number of Comment layers present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scope {
    stack: Vec<Layer>,
}

impl Scope {
    pub(crate) fn new() -> Scope {
        Scope { stack: vec![] }
    }

    pub(crate) fn current(&self) -> Layer {
        match self
            .stack
            .last()
        {
            Some(layer) => *layer,
            None => Layer::Script,
        }
    }

    pub(crate) fn push(&mut self, layer: Layer) {
        self.stack
            .push(layer);
    }

    pub(crate) fn pop(&mut self) -> Layer {
        match self
            .stack
            .pop()
        {
            Some(layer) => layer,
            None => Layer::Script,
        }
    }

    pub(crate) fn comment_depth(&self) -> usize {
        self.stack
            .iter()
            .filter(|layer| **layer == Layer::Comment)
            .count()
    }

    /// Whether a scan stopping here would leave a comment or string open.
    pub(crate) fn is_open(&self) -> bool {
        !self
            .stack
            .is_empty()
    }
}

//! Tree builder: turns classified lines into a forest of nodes.

use swinggen_core::{Forest, Node, NodeId, ParseError};

use crate::lexer::{classify, split_keyword, split_lines, Classified, Line};

const COMMENT_TAG: &str = "COMMENT";

/// Parse a description source string into a [`Forest`].
pub fn parse(input: &str) -> Result<Forest, ParseError> {
    Builder::new().run(&split_lines(input))
}

/// Parser state: the arena under construction plus nesting bookkeeping.
struct Builder {
    forest: Forest,
    /// In-progress ancestors of `current`, as arena indices.
    stack: Vec<NodeId>,
    /// The node receiving properties and comments. Kept after a balanced
    /// close; whether a block is open is tracked separately in `open`.
    current: Option<NodeId>,
    open: bool,
    /// Last consumed 1-based line number, for diagnostics.
    line: u32,
}

impl Builder {
    fn new() -> Self {
        Self {
            forest: Forest::new(),
            stack: Vec::new(),
            current: None,
            open: false,
            line: 0,
        }
    }

    fn run(mut self, lines: &[Line<'_>]) -> Result<Forest, ParseError> {
        for line in lines {
            self.line = line.number;
            log::trace!("line {}: {}", line.number, line.content);
            match classify(line.content) {
                Classified::Comment(text) => self.comment(text),
                Classified::Word { keyword, rest } => match keyword.as_str() {
                    "BEGIN" => self.begin(rest)?,
                    "END" => self.end(rest)?,
                    _ => self.property(keyword, rest)?,
                },
            }
        }

        if !self.stack.is_empty() || self.open {
            return Err(ParseError::UnterminatedBlock { line: self.line });
        }
        Ok(self.forest)
    }

    /// `BEGIN <kind> [name]`: open a new node as a root or as a child of
    /// the node that was open before this directive.
    fn begin(&mut self, rest: Option<&str>) -> Result<(), ParseError> {
        let Some(rest) = rest else {
            return Err(ParseError::MissingKind { line: self.line });
        };

        let (tag, name) = split_keyword(rest);
        let mut node = Node::new(tag.clone(), self.line);
        // The pair (own kind -> optional name) is recorded as a property so
        // the emitter can recover an explicit identifier override later.
        node.properties.insert(tag, name.map(String::from));
        let id = self.forest.alloc(node);

        if self.open {
            // The enclosing node stays in progress while the child is built.
            if let Some(parent) = self.current {
                self.stack.push(parent);
                self.forest.add_child(parent, id);
            }
        } else {
            self.forest.add_root(id);
            self.open = true;
        }
        self.current = Some(id);
        Ok(())
    }

    /// `END [kind]`: close the current node, resuming the enclosing one.
    fn end(&mut self, rest: Option<&str>) -> Result<(), ParseError> {
        if !self.open {
            return Err(ParseError::UnmatchedClose { line: self.line });
        }

        if let Some(found) = rest {
            if let Some(node) = self.current.and_then(|id| self.forest.get(id)) {
                if !node.tag.eq_ignore_ascii_case(found) {
                    return Err(ParseError::CloseMismatch {
                        expected: node.tag.clone(),
                        found: found.to_string(),
                        line: self.line,
                    });
                }
            }
        }

        match self.stack.pop() {
            Some(parent) => self.current = Some(parent),
            None => self.open = false,
        }
        Ok(())
    }

    /// A `//` line: a child of the current node when a block is open,
    /// otherwise a standalone root.
    fn comment(&mut self, text: &str) {
        let mut node = Node::new(COMMENT_TAG, self.line);
        node.properties
            .insert(COMMENT_TAG.to_string(), Some(text.to_string()));
        let id = self.forest.alloc(node);

        if self.open {
            if let Some(parent) = self.current {
                self.forest.add_child(parent, id);
            }
        } else {
            self.forest.add_root(id);
        }
    }

    /// Any other line: a `KEY [value]` property on the current node.
    fn property(&mut self, keyword: String, rest: Option<&str>) -> Result<(), ParseError> {
        if !self.open {
            return Err(ParseError::PropertyOutsideBlock { line: self.line });
        }
        if let Some(node) = self.current.and_then(|id| self.forest.get_mut(id)) {
            // IndexMap keeps the original position on re-insert, so a
            // re-declared key wins by value while the declaration order of
            // the first occurrence is preserved.
            node.properties.insert(keyword, rest.map(String::from));
        }
        Ok(())
    }
}

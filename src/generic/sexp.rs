/*!
A reader and writer for S-expressions.

Expressions are tagged trees: a [Node] is an atom or a list of nodes.
The reader is a small recursive-descent parser which honours double-quoted atoms, and the writer produces the canonical `(a b (c d))` form.

Vocabulary declarations and induction-engine configuration files both use this representation; rewrites of a configuration (see [signature](crate::harness::signature)) are pure transformations of the tree, never string surgery.

```rust
# use spec_sieve::generic::sexp::{self, Node};
let node = sexp::parse("(config (signature (a b)) (depth 2))").unwrap();

let Node::List(entries) = &node else { panic!("expected a list") };
assert_eq!(entries.len(), 3);
assert_eq!(entries[0].as_atom(), Some("config"));
assert_eq!(node.to_string(), "(config (signature (a b)) (depth 2))");
```
*/

use std::{iter::Peekable, str::Chars};

use crate::types::err::{self};

/// A node of an S-expression tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Atom(String),
    List(Vec<Node>),
}

impl Node {
    /// An atom node.
    pub fn atom(content: impl Into<String>) -> Node {
        Node::Atom(content.into())
    }

    /// A list node.
    pub fn list(items: Vec<Node>) -> Node {
        Node::List(items)
    }

    /// The content of the node, if an atom.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Node::Atom(content) => Some(content),

            Node::List(_) => None,
        }
    }

    /// The items of the node, if a list.
    pub fn items(&self) -> Option<&[Node]> {
        match self {
            Node::Atom(_) => None,

            Node::List(items) => Some(items),
        }
    }
}

/// Reads a single S-expression from `text`.
///
/// Fails on an empty string, an unbalanced parenthesis or quote, and on text following the expression.
pub fn parse(text: &str) -> Result<Node, err::SexpError> {
    let mut chars = text.chars().peekable();

    skip_whitespace(&mut chars);
    let node = parse_node(&mut chars)?;
    skip_whitespace(&mut chars);

    match chars.next() {
        None => Ok(node),

        Some(_) => Err(err::SexpError::TrailingText),
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn parse_node(chars: &mut Peekable<Chars>) -> Result<Node, err::SexpError> {
    match chars.peek() {
        None => Err(err::SexpError::Empty),

        Some('(') => {
            chars.next();
            let mut items = Vec::default();

            loop {
                skip_whitespace(chars);

                match chars.peek() {
                    None => return Err(err::SexpError::UnbalancedParentheses),

                    Some(')') => {
                        chars.next();
                        return Ok(Node::List(items));
                    }

                    Some(_) => items.push(parse_node(chars)?),
                }
            }
        }

        Some(')') => Err(err::SexpError::UnbalancedParentheses),

        Some(_) => parse_atom(chars),
    }
}

fn parse_atom(chars: &mut Peekable<Chars>) -> Result<Node, err::SexpError> {
    let mut content = String::default();

    loop {
        match chars.peek() {
            Some('"') => {
                chars.next();

                loop {
                    match chars.next() {
                        None => return Err(err::SexpError::UnterminatedString),

                        Some('"') => break,

                        Some(c) => content.push(c),
                    }
                }
            }

            Some(c) if !c.is_whitespace() && *c != '(' && *c != ')' => {
                content.push(*c);
                chars.next();
            }

            _ => break,
        }
    }

    Ok(Node::Atom(content))
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Atom(content) => {
                let plain = !content.is_empty()
                    && !content
                        .chars()
                        .any(|c| c.is_whitespace() || c == '(' || c == ')' || c == '"');

                if plain {
                    write!(f, "{content}")
                } else {
                    write!(f, "\"{content}\"")
                }
            }

            Node::List(items) => {
                write!(f, "(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod sexp_tests {
    use super::*;

    #[test]
    fn nested_round_trip() {
        let text = "(config (signature (hd tl concat)) (depth 3))";
        let node = parse(text).unwrap();
        assert_eq!(node.to_string(), text);
    }

    #[test]
    fn quoted_atoms() {
        let node = parse("(say \"hello there\")").unwrap();
        let Node::List(items) = &node else {
            panic!("expected a list");
        };
        assert_eq!(items[1].as_atom(), Some("hello there"));
        assert_eq!(node.to_string(), "(say \"hello there\")");
    }

    #[test]
    fn unbalanced() {
        assert_eq!(parse("(a (b)"), Err(err::SexpError::UnbalancedParentheses));
        assert_eq!(parse("a)"), Err(err::SexpError::TrailingText));
        assert_eq!(parse("  "), Err(err::SexpError::Empty));
    }
}

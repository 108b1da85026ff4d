/*!
Transformations of induction-engine configuration trees.

An engine configuration is an S-expression with a `signature` entry declaring the operation symbols induction may draw on:

```text
(config
  (signature (hd tl concat))
  (depth 2))
```

A large signature is usually explored pairwise, so [split] enumerates one configuration per size-k combination of the declared symbols, each with the signature subtree rewritten and everything else untouched.
The rewrite is a pure transformation over the [tagged tree](crate::generic::sexp::Node) --- a fresh tree is returned and the source is never mutated.
*/

use crate::{generic::sexp::Node, types::err::{self}};

/// The head of an entry, if the entry is a list opening with an atom.
fn entry_head(entry: &Node) -> Option<&str> {
    entry.items().and_then(|items| items.first()).and_then(Node::as_atom)
}

/// The declared signature symbols of a configuration.
///
/// The expected shape is a single `(signature (…))` entry among the configuration's items.
pub fn signature(config: &Node) -> Result<&[Node], err::HarnessError> {
    let entries = match config.items() {
        Some(entries) => entries,

        None => return Err(err::HarnessError::MissingSignature),
    };

    for entry in entries {
        if entry_head(entry) != Some("signature") {
            continue;
        }

        let items = entry.items().unwrap_or(&[]);

        match items.get(1) {
            Some(Node::List(symbols)) if items.len() == 2 => return Ok(symbols),

            _ => return Err(err::HarnessError::MalformedSignature),
        }
    }

    Err(err::HarnessError::MissingSignature)
}

/// A copy of the configuration with the signature subtree replaced by `replacement`.
///
/// Entries other than the signature are untouched.
pub fn with_signature(config: &Node, replacement: &[Node]) -> Node {
    match config {
        Node::Atom(_) => config.clone(),

        Node::List(entries) => Node::List(
            entries
                .iter()
                .map(|entry| {
                    if entry_head(entry) == Some("signature") {
                        Node::list(vec![
                            Node::atom("signature"),
                            Node::list(replacement.to_vec()),
                        ])
                    } else {
                        entry.clone()
                    }
                })
                .collect(),
        ),
    }
}

/// One configuration per size-`k` combination of the declared signature.
///
/// A signature already within `k` yields the configuration unchanged.
/// Combinations are enumerated in the position order of the source signature.
pub fn split(config: &Node, k: usize) -> Result<Vec<Node>, err::HarnessError> {
    let symbols = signature(config)?;

    if symbols.len() <= k {
        return Ok(vec![config.clone()]);
    }

    Ok(combinations(symbols, k)
        .into_iter()
        .map(|combination| with_signature(config, &combination))
        .collect())
}

/// All size-`k` combinations of `items`, in position order.
fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();

    if k == 0 {
        return vec![Vec::default()];
    }

    if k > n {
        return Vec::default();
    }

    let mut indices: Vec<usize> = (0..k).collect();
    let mut result = Vec::default();

    loop {
        result.push(indices.iter().map(|&index| items[index].clone()).collect());

        // The rightmost index with room to advance.
        let mut position = k - 1;
        while indices[position] == position + n - k {
            match position {
                0 => return result,

                _ => position -= 1,
            }
        }

        indices[position] += 1;
        for index in position + 1..k {
            indices[index] = indices[index - 1] + 1;
        }
    }
}

/*!
The vocabulary database --- every symbol a candidate may reference.

The vocabulary is an explicit registry, complete before any record is processed: variables and operators are declared up front, and referencing an undeclared symbol while building a record is fatal.

Declarations may be made directly, or read from an S-expression of the shape:

```text
(vocabulary
  (vars x y z)
  (ops (valid 1 bool) (hd 1) (concat 2)))
```

where `(name arity)` declares a value-sorted operator and a trailing `bool` marks a predicate.

Note the whole declared variable table is universally quantified in every [oracle](crate::oracle) query --- not just the variables a formula mentions.
As a consequence, which candidates are judged redundant is coupled to the vocabulary: changing the declarations between runs can change verdicts.

```rust
# use spec_sieve::db::vocabulary::{Sort, Symbol, Vocabulary};
let mut vocabulary = Vocabulary::default();
let x = vocabulary.declare_variable("x").unwrap();
let hd = vocabulary.declare_operator("hd", 1, Sort::Value).unwrap();

assert_eq!(vocabulary.resolve("x"), Some(Symbol::Variable(x)));
assert_eq!(vocabulary.resolve("hd"), Some(Symbol::Operator(hd)));
assert_eq!(vocabulary.resolve("tl"), None);
```
*/

use std::collections::HashMap;

use crate::{
    generic::sexp::Node,
    structures::term::{Operator, Variable},
    types::err::{self, ErrorKind},
};

/// The result sort of an operator.
///
/// Operator arguments are always value-sorted; only the result distinguishes a function from a predicate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sort {
    /// The single uninterpreted value domain of the benchmark operations.
    Value,

    /// A boolean, making the operator a predicate.
    Bool,
}

/// What a name resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Symbol {
    Variable(Variable),
    Operator(Operator),
}

/// A declared operator.
#[derive(Clone, Debug)]
pub struct OperatorDetails {
    pub name: String,
    pub arity: usize,
    pub sort: Sort,
}

/// The vocabulary database.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// External names of variables, indexed by [Variable].
    variables: Vec<String>,

    /// Details of operators, indexed by [Operator].
    operators: Vec<OperatorDetails>,

    /// Resolution of external names.
    index: HashMap<String, Symbol>,
}

/// Names the surface grammar reserves.
const RESERVED: [&str; 1] = ["true"];

impl Vocabulary {
    /// Declares a fresh variable, returning its index.
    pub fn declare_variable(
        &mut self,
        name: impl Into<String>,
    ) -> Result<Variable, err::VocabularyError> {
        let name = name.into();
        self.check_name(&name)?;

        let variable = self.variables.len() as Variable;
        self.index.insert(name.clone(), Symbol::Variable(variable));
        self.variables.push(name);
        Ok(variable)
    }

    /// Declares a fresh operator, returning its index.
    pub fn declare_operator(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        sort: Sort,
    ) -> Result<Operator, err::VocabularyError> {
        let name = name.into();
        self.check_name(&name)?;

        let operator = self.operators.len() as Operator;
        self.index.insert(name.clone(), Symbol::Operator(operator));
        self.operators.push(OperatorDetails { name, arity, sort });
        Ok(operator)
    }

    fn check_name(&self, name: &str) -> Result<(), err::VocabularyError> {
        if RESERVED.contains(&name) {
            return Err(err::VocabularyError::ReservedSymbol(name.to_owned()));
        }

        if self.index.contains_key(name) {
            return Err(err::VocabularyError::DuplicateSymbol(name.to_owned()));
        }

        Ok(())
    }

    /// Resolves an external name, if declared.
    pub fn resolve(&self, name: &str) -> Option<Symbol> {
        self.index.get(name).copied()
    }

    /// The external name of a variable.
    pub fn variable_name(&self, variable: Variable) -> &str {
        &self.variables[variable as usize]
    }

    /// The details of an operator.
    pub fn operator(&self, operator: Operator) -> &OperatorDetails {
        &self.operators[operator as usize]
    }

    /// An iterator over the external names of all declared variables, in declaration order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|name| name.as_str())
    }

    /// An iterator over all declared operators, in declaration order.
    pub fn operators(&self) -> impl Iterator<Item = &OperatorDetails> {
        self.operators.iter()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Reads a vocabulary from its S-expression representation.
    pub fn from_sexp(node: &Node) -> Result<Vocabulary, ErrorKind> {
        let mut vocabulary = Vocabulary::default();

        let malformed = |node: &Node| {
            ErrorKind::from(err::VocabularyError::MalformedDeclaration(node.to_string()))
        };

        let Node::List(entries) = node else {
            return Err(malformed(node));
        };

        match entries.first().and_then(Node::as_atom) {
            Some("vocabulary") => {}

            _ => return Err(malformed(node)),
        }

        for entry in &entries[1..] {
            let Node::List(items) = entry else {
                return Err(malformed(entry));
            };

            match items.first().and_then(Node::as_atom) {
                Some("vars") => {
                    for item in &items[1..] {
                        match item.as_atom() {
                            Some(name) => vocabulary.declare_variable(name)?,

                            None => return Err(malformed(item)),
                        };
                    }
                }

                Some("ops") => {
                    for item in &items[1..] {
                        let Node::List(details) = item else {
                            return Err(malformed(item));
                        };

                        let name = match details.first().and_then(Node::as_atom) {
                            Some(name) => name,

                            None => return Err(malformed(item)),
                        };

                        let arity: usize = match details.get(1).and_then(Node::as_atom) {
                            Some(digits) => match digits.parse() {
                                Ok(arity) => arity,

                                Err(_) => return Err(malformed(item)),
                            },

                            None => return Err(malformed(item)),
                        };

                        let sort = match details.get(2).and_then(Node::as_atom) {
                            None => Sort::Value,

                            Some("bool") => Sort::Bool,

                            Some(_) => return Err(malformed(item)),
                        };

                        vocabulary.declare_operator(name, arity, sort)?;
                    }
                }

                _ => return Err(malformed(entry)),
            }
        }

        Ok(vocabulary)
    }
}

/*!
Parsing of a single candidate line into its surface parts.

A line has the shape:

```text
line     := relation ["|" guard] ["\t" metadata]
relation := group marker group,    marker ∈ { "===", "==>", "<==" }
group    := atom ("," atom)*
atom     := expr ["=" expr]
expr     := numeral | "true" | symbol | symbol "(" expr ("," expr)* ")"
```

Splitting is in two passes: the line is cut at the metadata tab, the guard separator, and the relation marker, and then each expression-group text is read by a small tokenizer and recursive-descent parser.
Commas inside an application's argument list are consumed by the application, so only top-level commas separate atoms.

A bare `=` inside an atom is a structural-equality test, never assignment --- there is nothing to assign to.
*/

use crate::{
    structures::relation::RelationKind,
    types::err::{self},
};

/// A line, cut at its separators.
#[derive(Debug, PartialEq)]
pub struct SplitLine<'l> {
    pub kind: RelationKind,
    pub guard: Option<&'l str>,
    pub left: &'l str,
    pub right: &'l str,
}

/// Cuts a line at the metadata tab, the guard separator, and the relation marker.
///
/// Exactly one relation marker must be present.
/// A blank guard segment is no guard at all.
pub fn split_line(line: &str) -> Result<SplitLine, err::ParseError> {
    if line.trim().is_empty() {
        return Err(err::ParseError::Empty);
    }

    // Anything after a tab is metadata, preserved on the record but ignored here.
    let logical = match line.split_once('\t') {
        Some((logical, _metadata)) => logical,

        None => line,
    };

    let (relation, guard) = match logical.split_once('|') {
        Some((relation, guard)) if !guard.trim().is_empty() => (relation, Some(guard)),

        Some((relation, _blank)) => (relation, None),

        None => (logical, None),
    };

    let kind = match RelationKind::identify(relation) {
        Some(kind) => kind,

        None => return Err(err::ParseError::NoRelationMarker),
    };

    let (left, right) = match relation.split_once(kind.marker()) {
        Some(split) => split,

        None => return Err(err::ParseError::NoRelationMarker),
    };

    Ok(SplitLine {
        kind,
        guard,
        left,
        right,
    })
}

/// A token of an expression group.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Symbol(String),
    Numeral(i64),
    LParen,
    RParen,
    Comma,
    Equals,
}

fn tokenize(text: &str) -> Result<Vec<Token>, err::ParseError> {
    let mut tokens = Vec::default();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }

            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }

            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }

            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }

            '=' => {
                chars.next();
                tokens.push(Token::Equals);
            }

            '-' => {
                chars.next();
                match chars.peek() {
                    Some(d) if d.is_ascii_digit() => {
                        let mut digits = String::from('-');
                        while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                            digits.push(d);
                        }
                        match digits.parse() {
                            Ok(numeral) => tokens.push(Token::Numeral(numeral)),

                            Err(_) => return Err(err::ParseError::NumeralOverflow),
                        }
                    }

                    _ => return Err(err::ParseError::UnexpectedCharacter('-')),
                }
            }

            _ if c.is_ascii_digit() => {
                let mut digits = String::default();
                while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                    digits.push(d);
                }
                match digits.parse() {
                    Ok(numeral) => tokens.push(Token::Numeral(numeral)),

                    Err(_) => return Err(err::ParseError::NumeralOverflow),
                }
            }

            _ if c.is_alphabetic() || c == '_' => {
                let mut symbol = String::default();
                while let Some(s) = chars.next_if(|s| s.is_alphanumeric() || *s == '_') {
                    symbol.push(s);
                }
                tokens.push(Token::Symbol(symbol));
            }

            other => return Err(err::ParseError::UnexpectedCharacter(other)),
        }
    }

    Ok(tokens)
}

/// A parsed expression, prior to resolution against the vocabulary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsedTerm {
    Symbol(String),
    Numeral(i64),
    Call(String, Vec<ParsedTerm>),
}

/// A parsed atom of an expression group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsedAtom {
    /// The literal constant truth.
    Truth,

    /// A bare expression, to be resolved as a predicate application.
    Plain(ParsedTerm),

    /// A structural-equality test, from a bare `=`.
    Equality(ParsedTerm, ParsedTerm),
}

/// Reads an expression-group text as a comma-separated list of atoms.
pub fn parse_group(text: &str) -> Result<Vec<ParsedAtom>, err::ParseError> {
    let tokens = tokenize(text)?;

    if tokens.is_empty() {
        return Err(err::ParseError::EmptyGroup);
    }

    let mut atoms = Vec::default();
    let mut cursor = 0;

    loop {
        atoms.push(parse_atom(&tokens, &mut cursor)?);

        match tokens.get(cursor) {
            None => break,

            Some(Token::Comma) => cursor += 1,

            Some(_) => return Err(err::ParseError::TrailingText),
        }
    }

    Ok(atoms)
}

fn parse_atom(tokens: &[Token], cursor: &mut usize) -> Result<ParsedAtom, err::ParseError> {
    let lhs = parse_expr(tokens, cursor)?;

    match tokens.get(*cursor) {
        Some(Token::Equals) => {
            *cursor += 1;
            let rhs = match parse_expr(tokens, cursor) {
                Ok(rhs) => rhs,

                Err(err::ParseError::EmptyGroup) => return Err(err::ParseError::DanglingEquality),

                Err(e) => return Err(e),
            };
            Ok(ParsedAtom::Equality(lhs, rhs))
        }

        _ => match lhs {
            ParsedTerm::Symbol(ref name) if name == "true" => Ok(ParsedAtom::Truth),

            _ => Ok(ParsedAtom::Plain(lhs)),
        },
    }
}

fn parse_expr(tokens: &[Token], cursor: &mut usize) -> Result<ParsedTerm, err::ParseError> {
    match tokens.get(*cursor) {
        None => Err(err::ParseError::EmptyGroup),

        Some(Token::Numeral(numeral)) => {
            *cursor += 1;
            Ok(ParsedTerm::Numeral(*numeral))
        }

        Some(Token::Symbol(name)) => {
            *cursor += 1;

            match tokens.get(*cursor) {
                Some(Token::LParen) => {
                    *cursor += 1;
                    let mut args = Vec::default();

                    if tokens.get(*cursor) == Some(&Token::RParen) {
                        *cursor += 1;
                        return Ok(ParsedTerm::Call(name.clone(), args));
                    }

                    loop {
                        args.push(parse_expr(tokens, cursor)?);

                        match tokens.get(*cursor) {
                            None => return Err(err::ParseError::UnbalancedParentheses),

                            Some(Token::Comma) => *cursor += 1,

                            Some(Token::RParen) => {
                                *cursor += 1;
                                return Ok(ParsedTerm::Call(name.clone(), args));
                            }

                            Some(_) => return Err(err::ParseError::TrailingText),
                        }
                    }
                }

                _ => Ok(ParsedTerm::Symbol(name.clone())),
            }
        }

        Some(Token::Equals) => Err(err::ParseError::DanglingEquality),

        Some(Token::RParen) => Err(err::ParseError::UnbalancedParentheses),

        Some(Token::LParen) => Err(err::ParseError::UnexpectedCharacter('(')),

        Some(Token::Comma) => Err(err::ParseError::EmptyGroup),
    }
}

#[cfg(test)]
mod line_tests {
    use super::*;

    #[test]
    fn marker_precedence() {
        let split = split_line("x=1 === x=1").unwrap();
        assert_eq!(split.kind, RelationKind::Biconditional);

        let split = split_line("sat(x) <== valid(x)").unwrap();
        assert_eq!(split.kind, RelationKind::Backward);
        assert_eq!(split.left.trim(), "sat(x)");
        assert_eq!(split.right.trim(), "valid(x)");
    }

    #[test]
    fn guard_and_metadata() {
        let split = split_line("hd(x)=y ==> concat(x,z)=w | valid(x)\t17\t3").unwrap();
        assert_eq!(split.guard.map(str::trim), Some("valid(x)"));

        let split = split_line("x=1 ==> y=2 | ").unwrap();
        assert!(split.guard.is_none());
    }

    #[test]
    fn no_marker() {
        assert_eq!(
            split_line("hd(x)=y"),
            Err(err::ParseError::NoRelationMarker)
        );
    }

    #[test]
    fn commas_nest_in_calls() {
        let atoms = parse_group("concat(x,y)=z, hd(x)=w").unwrap();
        assert_eq!(atoms.len(), 2);

        let ParsedAtom::Equality(lhs, _) = &atoms[0] else {
            panic!("expected an equality");
        };
        assert_eq!(
            *lhs,
            ParsedTerm::Call(
                "concat".to_owned(),
                vec![
                    ParsedTerm::Symbol("x".to_owned()),
                    ParsedTerm::Symbol("y".to_owned())
                ]
            )
        );
    }

    #[test]
    fn malformed_groups() {
        assert_eq!(parse_group(""), Err(err::ParseError::EmptyGroup));
        assert_eq!(
            parse_group("hd(x"),
            Err(err::ParseError::UnbalancedParentheses)
        );
        assert_eq!(parse_group("x="), Err(err::ParseError::DanglingEquality));
        assert_eq!(parse_group("x=1)"), Err(err::ParseError::TrailingText));
        assert_eq!(
            parse_group("x @ y"),
            Err(err::ParseError::UnexpectedCharacter('@'))
        );
    }

    #[test]
    fn negative_numerals() {
        let atoms = parse_group("x=-3").unwrap();
        assert_eq!(
            atoms[0],
            ParsedAtom::Equality(
                ParsedTerm::Symbol("x".to_owned()),
                ParsedTerm::Numeral(-3)
            )
        );
    }
}

use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;

// Bounded folds over zero or more occurrences of a parser. Iteration is
// fuel-limited exactly like `many`: `remaining + 1` rounds, one ungated
// first round plus `remaining` further ones, so an epsilon-succeeding
// parser cannot loop.

struct Rounds<'src, T> {
    values: Vec<T>,
    cursor: Cursor<'src>,
    consumed: bool,
    pending: Expected,
    /// Set when an occurrence consumed input before failing; the whole
    /// fold is then a committed error.
    poisoned: Option<Message<'src>>,
}

fn rounds<'src, P>(parser: &P, start: Cursor<'src>) -> Rounds<'src, P::Output>
where
    P: Parser<'src>,
{
    let mut values = Vec::new();
    let mut cursor = start;
    let mut consumed = false;
    let mut pending = Expected::empty();
    let mut fuel = start.remaining() + 1;

    while fuel > 0 {
        fuel -= 1;
        match parser.parse(cursor) {
            Reply::Ok {
                value,
                cursor: next,
                expected,
            } => {
                values.push(value);
                cursor = next;
                match expected {
                    None => consumed = true,
                    Some(labels) if !consumed => pending = pending.append(labels),
                    Some(_) => {}
                }
            }
            Reply::Err {
                message,
                consumed: true,
            } => {
                return Rounds {
                    values,
                    cursor,
                    consumed,
                    pending,
                    poisoned: Some(message),
                };
            }
            Reply::Err {
                message,
                consumed: false,
            } => {
                if !consumed {
                    pending = pending.append(message.into_expected());
                }
                break;
            }
        }
    }

    Rounds {
        values,
        cursor,
        consumed,
        pending,
        poisoned: None,
    }
}

/// Parser combinator that left-folds zero or more occurrences of a parser
/// into an accumulator.
pub struct FoldL<F, A, P> {
    step: F,
    init: A,
    parser: P,
}

impl<'src, F, A, P> Parser<'src> for FoldL<F, A, P>
where
    P: Parser<'src>,
    A: Clone,
    F: Fn(A, P::Output) -> A,
{
    type Output = A;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        let outcome = rounds(&self.parser, cursor);
        if let Some(message) = outcome.poisoned {
            return Reply::err_consumed(message);
        }
        let folded = outcome
            .values
            .into_iter()
            .fold(self.init.clone(), |acc, v| (self.step)(acc, v));
        if outcome.consumed {
            Reply::consumed_ok(folded, outcome.cursor)
        } else {
            Reply::eps_with(folded, outcome.cursor, outcome.pending)
        }
    }
}

/// Left fold: `foldl(f, a, p)` runs `p` as often as it matches, combining
/// `a` with each value left to right.
pub fn foldl<'src, F, A, P>(step: F, init: A, parser: P) -> FoldL<F, A, P>
where
    P: Parser<'src>,
    A: Clone,
    F: Fn(A, P::Output) -> A,
{
    FoldL { step, init, parser }
}

/// Parser combinator that right-folds zero or more occurrences of a parser
/// into a base value.
pub struct FoldR<F, P, B> {
    step: F,
    parser: P,
    init: B,
}

impl<'src, F, P, B> Parser<'src> for FoldR<F, P, B>
where
    P: Parser<'src>,
    B: Clone,
    F: Fn(P::Output, B) -> B,
{
    type Output = B;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        let outcome = rounds(&self.parser, cursor);
        if let Some(message) = outcome.poisoned {
            return Reply::err_consumed(message);
        }
        let folded = outcome
            .values
            .into_iter()
            .rev()
            .fold(self.init.clone(), |acc, v| (self.step)(v, acc));
        if outcome.consumed {
            Reply::consumed_ok(folded, outcome.cursor)
        } else {
            Reply::eps_with(folded, outcome.cursor, outcome.pending)
        }
    }
}

/// Right fold: `foldr(f, p, b)` runs `p` as often as it matches, combining
/// each value with the rest right to left.
pub fn foldr<'src, F, P, B>(step: F, parser: P, init: B) -> FoldR<F, P, B>
where
    P: Parser<'src>,
    B: Clone,
    F: Fn(P::Output, B) -> B,
{
    FoldR { step, parser, init }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::map::MapExt;
    use crate::satisfy::digit;

    #[test]
    fn test_foldl_accumulates_left_to_right() {
        let value_of = |c: char| c.to_digit(10).unwrap() as u64;
        let parser = foldl(move |acc, c| acc * 10 + value_of(c), 0u64, digit());
        match parser.parse(Cursor::new("123x")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, 123);
                assert_eq!(cursor.offset(), 3);
                assert!(expected.is_none());
            }
            _ => panic!("foldl failed"),
        }
    }

    #[test]
    fn test_foldl_zero_occurrences_yields_init() {
        let parser = foldl(|acc, _c| acc + 1, 0, digit());
        match parser.parse(Cursor::new("abc")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, 0);
                assert_eq!(cursor.offset(), 0);
                assert!(expected.is_some());
            }
            _ => panic!("foldl failed on zero occurrences"),
        }
    }

    #[test]
    fn test_foldr_combines_right_to_left() {
        // build a list with foldr: order must match the input
        let parser = foldr(
            |c, mut rest: Vec<char>| {
                rest.insert(0, c);
                rest
            },
            digit(),
            Vec::new(),
        );
        match parser.parse(Cursor::new("123")) {
            Reply::Ok { value, .. } => assert_eq!(value, vec!['1', '2', '3']),
            _ => panic!("foldr failed"),
        }
    }

    #[test]
    fn test_fold_stops_on_consumed_error() {
        let pair = digit().and(digit()).map(|(a, _)| a);
        let parser = foldl(|acc, _| acc + 1, 0, pair);
        // "12" then a lone "3" that consumes and fails
        match parser.parse(Cursor::new("123")) {
            Reply::Err { consumed, .. } => assert!(consumed),
            _ => panic!("foldl recovered across consumed input"),
        }
    }

    #[test]
    fn test_fold_terminates_on_epsilon_parser() {
        use crate::pure::pure;

        let parser = foldl(|acc, _| acc + 1, 0usize, pure(()));
        match parser.parse(Cursor::new("ab")) {
            Reply::Ok { value, cursor, .. } => {
                // fuel bounds the rounds: remaining + 1
                assert_eq!(value, 3);
                assert_eq!(cursor.offset(), 0);
            }
            _ => panic!("foldl of pure failed"),
        }
    }
}

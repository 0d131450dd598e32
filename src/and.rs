use crate::bind::sequence;
use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::reply::Reply;

/// Parser combinator that sequences two parsers and returns both results
/// as a tuple, under the same consumed/epsilon reconciliation as `bind`.
///
/// Both parsers are stored boxed: chained `.and()` calls would otherwise
/// nest their concrete types without bound, and flattening them keeps
/// compile times and recursive grammars workable.
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `((a, b), c)` rather than flat ones; the destructuring pattern is
/// explicit about the parsing order.
pub struct And<'src, A, B> {
    first: BoxedParser<'src, A>,
    second: BoxedParser<'src, B>,
}

impl<'src, A, B> And<'src, A, B> {
    pub fn new<P1, P2>(first: P1, second: P2) -> Self
    where
        P1: Parser<'src, Output = A> + 'src,
        P2: Parser<'src, Output = B> + 'src,
    {
        And {
            first: Box::new(first),
            second: Box::new(second),
        }
    }
}

impl<'src, A, B> Parser<'src> for And<'src, A, B> {
    type Output = (A, B);

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match self.first.parse(cursor) {
            Reply::Ok {
                value: first_value,
                cursor: mid,
                expected,
            } => {
                let second = self.second.parse(mid);
                sequence(expected, second.map(move |second_value| (first_value, second_value)))
            }
            Reply::Err { message, consumed } => Reply::Err { message, consumed },
        }
    }
}

/// Convenience function to create an And parser.
pub fn and<'src, P1, P2>(first: P1, second: P2) -> And<'src, P1::Output, P2::Output>
where
    P1: Parser<'src> + 'src,
    P2: Parser<'src> + 'src,
{
    And::new(first, second)
}

/// Extension trait to add .and() method support for parsers.
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> And<'src, Self::Output, P::Output>
    where
        P: Parser<'src> + 'src,
        Self: 'src,
    {
        And::new(self, other)
    }
}

impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satisfy::{digit, is_char};

    #[test]
    fn test_and_both_succeed() {
        let parser = is_char('A').and(digit());
        match parser.parse(Cursor::new("A5x")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, ('A', '5'));
                assert_eq!(cursor.offset(), 2);
                assert!(expected.is_none());
            }
            _ => panic!("and failed"),
        }
    }

    #[test]
    fn test_and_first_fails_epsilon() {
        let parser = and(is_char('A'), digit());
        match parser.parse(Cursor::new("B5")) {
            Reply::Err { message, consumed } => {
                assert!(!consumed);
                assert_eq!(message.cursor().offset(), 0);
            }
            _ => panic!("and succeeded with a failing first parser"),
        }
    }

    #[test]
    fn test_and_second_failure_is_committed() {
        let parser = is_char('A').and(digit());
        match parser.parse(Cursor::new("Ax")) {
            Reply::Err { message, consumed } => {
                assert!(consumed);
                assert_eq!(message.cursor().offset(), 1);
                assert_eq!(message.unexpected(), "'x'");
            }
            _ => panic!("and succeeded with a failing second parser"),
        }
    }

    #[test]
    fn test_and_chain() {
        let parser = is_char('a').and(is_char('b')).and(is_char('c'));
        match parser.parse(Cursor::new("abc")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value, (('a', 'b'), 'c'));
                assert!(cursor.at_end());
            }
            _ => panic!("and chain failed"),
        }
    }

    #[test]
    fn test_and_of_two_epsilon_parsers_is_epsilon() {
        use crate::pure::pure;

        let parser = pure(1).and(pure(2));
        match parser.parse(Cursor::new("abc")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, (1, 2));
                assert_eq!(cursor.offset(), 0);
                assert!(expected.is_some());
            }
            _ => panic!("and of pure parsers failed"),
        }
    }
}

use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::parser::Parser;
use crate::reply::Reply;

// Repetition is bounded by a fuel counter equal to the character count
// remaining at entry. A progressing iteration consumes at least one
// character, so it can happen at most `remaining` times anyway; an
// iteration that succeeds without progress burns fuel instead, which is
// what makes `many` of an epsilon-succeeding parser terminate.

fn finish<'src, T>(
    values: T,
    cursor: Cursor<'src>,
    consumed: bool,
    pending: Expected,
) -> Reply<'src, T> {
    if consumed {
        Reply::consumed_ok(values, cursor)
    } else {
        Reply::eps_with(values, cursor, pending)
    }
}

fn repeat1<'src, P>(parser: &P, start: Cursor<'src>) -> Reply<'src, Vec<P::Output>>
where
    P: Parser<'src>,
{
    let mut values = Vec::new();

    // the first occurrence decides the failure mode of the whole parser
    let (mut cursor, mut consumed, mut pending) = match parser.parse(start) {
        Reply::Ok {
            value,
            cursor,
            expected,
        } => {
            values.push(value);
            let consumed = expected.is_none();
            (cursor, consumed, expected.unwrap_or_default())
        }
        Reply::Err { message, consumed } => return Reply::Err { message, consumed },
    };

    let mut fuel = start.remaining();
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
                // an occurrence that consumed before failing poisons the
                // whole repetition
                return Reply::err_consumed(message);
            }
            Reply::Err {
                message,
                consumed: false,
            } => {
                return finish(values, cursor, consumed, pending.append(message.into_expected()));
            }
        }
    }

    finish(values, cursor, consumed, pending)
}

/// Parser combinator that matches one or more occurrences of the given
/// parser.
pub struct Many1<P> {
    parser: P,
}

impl<'src, P> Parser<'src> for Many1<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        repeat1(&self.parser, cursor)
    }
}

/// Convenience function to create a Many1 parser.
pub fn many1<'src, P>(parser: P) -> Many1<P>
where
    P: Parser<'src>,
{
    Many1 { parser }
}

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
pub struct Many<P> {
    parser: P,
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match repeat1(&self.parser, cursor) {
            Reply::Err {
                message,
                consumed: false,
            } => Reply::eps_with(Vec::new(), cursor, message.into_expected()),
            reply => reply,
        }
    }
}

/// Convenience function to create a Many parser.
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::pure::pure;
    use crate::satisfy::is_char;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(is_char('a'));
        match parser.parse(Cursor::new("xyz")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, vec![]);
                assert_eq!(cursor.offset(), 0);
                // the failed occurrence's labels are available for blame
                let expected = expected.expect("zero matches is an epsilon success");
                assert_eq!(expected.labels(), vec!["'a'"]);
            }
            _ => panic!("many failed on zero matches"),
        }
    }

    #[test]
    fn test_many_several_matches() {
        let parser = many(is_char('a'));
        match parser.parse(Cursor::new("aaab")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, vec!['a', 'a', 'a']);
                assert_eq!(cursor.offset(), 3);
                assert!(expected.is_none());
            }
            _ => panic!("many failed"),
        }
    }

    #[test]
    fn test_many_consumes_everything() {
        let parser = many(is_char('a'));
        match parser.parse(Cursor::new("aaaa")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value.len(), 4);
                assert!(cursor.at_end());
            }
            _ => panic!("many failed"),
        }
    }

    #[test]
    fn test_many_terminates_on_an_epsilon_parser() {
        // `pure` never progresses; fuel must stop the loop
        let parser = many(pure(()));
        match parser.parse(Cursor::new("ab")) {
            Reply::Ok { cursor, expected, .. } => {
                assert_eq!(cursor.offset(), 0);
                assert!(expected.is_some());
            }
            _ => panic!("many of pure failed"),
        }
    }

    #[test]
    fn test_many_terminates_on_empty_input_with_epsilon_parser() {
        let parser = many(pure(1));
        assert!(parser.parse(Cursor::new("")).is_ok());
    }

    #[test]
    fn test_many1_requires_one() {
        let parser = many1(is_char('a'));
        match parser.parse(Cursor::new("b")) {
            Reply::Err { message, consumed } => {
                assert!(!consumed);
                assert_eq!(message.expected().labels(), vec!["'a'"]);
            }
            _ => panic!("many1 accepted zero occurrences"),
        }
    }

    #[test]
    fn test_many1_one_match() {
        let parser = many1(is_char('a'));
        match parser.parse(Cursor::new("ab")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value, vec!['a']);
                assert_eq!(cursor.offset(), 1);
            }
            _ => panic!("many1 failed"),
        }
    }

    #[test]
    fn test_consumed_failure_inside_poisons_the_repetition() {
        // each occurrence is "ab"; the trailing lone 'a' consumes and then
        // fails, which must fail the whole repetition
        let parser = many(is_char('a').and(is_char('b')));
        match parser.parse(Cursor::new("ababa")) {
            Reply::Err { message, consumed } => {
                assert!(consumed);
                assert_eq!(message.cursor().offset(), 5);
            }
            _ => panic!("many recovered across consumed input"),
        }
    }

    #[test]
    fn test_many_with_attempted_occurrences_recovers() {
        use crate::attempt::AttemptExt;
        use crate::map::MapExt;

        let parser = many(is_char('a').and(is_char('b')).map(|(a, _)| a).attempt());
        match parser.parse(Cursor::new("ababa")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value, vec!['a', 'a']);
                assert_eq!(cursor.offset(), 4);
            }
            _ => panic!("attempted many failed"),
        }
    }
}

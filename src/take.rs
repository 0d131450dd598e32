use crate::cursor::Cursor;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;

fn matched<'src>(start: Cursor<'src>, end: Cursor<'src>) -> Reply<'src, &'src str> {
    let text = &start.source()[start.offset()..end.offset()];
    if text.is_empty() {
        Reply::eps(text, start)
    } else {
        Reply::consumed_ok(text, end)
    }
}

/// Parser that consumes exactly `count` characters.
///
/// `take(0)` is an epsilon success with an empty slice. Hitting the end of
/// input early fails at the position reached; the failure is consumed iff
/// characters were actually consumed on the way there.
pub struct Take {
    count: usize,
}

impl<'src> Parser<'src> for Take {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        let mut current = cursor;
        for _ in 0..self.count {
            if current.at_end() {
                return Reply::Err {
                    message: Message::end_of_input(current),
                    consumed: current.offset() > cursor.offset(),
                };
            }
            current = current.next();
        }
        matched(cursor, current)
    }
}

pub fn take(count: usize) -> Take {
    Take { count }
}

/// Parser that greedily consumes characters while a predicate holds.
///
/// With `at_least_one` unset it never fails: an immediate predicate
/// failure is an epsilon success with an empty slice.
pub struct TakeWhile<F> {
    predicate: F,
    at_least_one: bool,
}

impl<'src, F> Parser<'src> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        if self.at_least_one {
            match cursor.curr() {
                Err(_) => return Reply::err_eps(Message::end_of_input(cursor)),
                Ok(c) if !(self.predicate)(c) => {
                    return Reply::err_eps(Message::unexpected_char(cursor, c));
                }
                Ok(_) => {}
            }
        }

        let mut current = cursor;
        while let Ok(c) = current.curr() {
            if !(self.predicate)(c) {
                break;
            }
            current = current.next();
        }
        matched(cursor, current)
    }
}

/// Zero or more characters satisfying `predicate`. Never fails.
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile {
        predicate,
        at_least_one: false,
    }
}

/// One or more characters satisfying `predicate`.
pub fn take_while1<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile {
        predicate,
        at_least_one: true,
    }
}

/// Zero or more characters up to (not including) the first one satisfying
/// `predicate`. Never fails.
pub fn take_until<F>(predicate: F) -> TakeWhile<impl Fn(char) -> bool>
where
    F: Fn(char) -> bool,
{
    TakeWhile {
        predicate: move |c| !predicate(c),
        at_least_one: false,
    }
}

/// One or more characters up to the first one satisfying `predicate`.
pub fn take_until1<F>(predicate: F) -> TakeWhile<impl Fn(char) -> bool>
where
    F: Fn(char) -> bool,
{
    TakeWhile {
        predicate: move |c| !predicate(c),
        at_least_one: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_zero_is_epsilon() {
        match take(0).parse(Cursor::new("abc")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, "");
                assert_eq!(cursor.offset(), 0);
                assert!(expected.is_some());
            }
            _ => panic!("take(0) failed"),
        }
    }

    #[test]
    fn test_take_exact() {
        match take(2).parse(Cursor::new("héllo")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value, "hé");
                assert_eq!(cursor.curr().unwrap(), 'l');
            }
            _ => panic!("take(2) failed"),
        }
    }

    #[test]
    fn test_take_past_end_is_a_consumed_error() {
        match take(5).parse(Cursor::new("ab")) {
            Reply::Err { message, consumed } => {
                assert!(consumed);
                assert_eq!(message.unexpected(), "end of input");
                assert_eq!(message.cursor().offset(), 2);
            }
            _ => panic!("take(5) succeeded on two characters"),
        }
    }

    #[test]
    fn test_take_at_exhausted_input_is_epsilon() {
        // nothing was consumed, so the failure must stay recoverable
        match take(3).parse(Cursor::new("")) {
            Reply::Err { consumed, .. } => assert!(!consumed),
            _ => panic!("take(3) succeeded on empty input"),
        }
    }

    #[test]
    fn test_take_while_empty_match() {
        match take_while(|c| c.is_ascii_digit()).parse(Cursor::new("abc")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, "");
                assert_eq!(cursor.offset(), 0);
                assert!(expected.is_some());
            }
            _ => panic!("take_while failed on an empty match"),
        }
    }

    #[test]
    fn test_take_while_greedy() {
        match take_while(|c| c.is_ascii_digit()).parse(Cursor::new("123ab")) {
            Reply::Ok { value, cursor, expected } => {
                assert_eq!(value, "123");
                assert_eq!(cursor.offset(), 3);
                assert!(expected.is_none());
            }
            _ => panic!("take_while failed"),
        }
    }

    #[test]
    fn test_take_while_to_end_of_input() {
        match take_while(|_| true).parse(Cursor::new("all of it")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value, "all of it");
                assert!(cursor.at_end());
            }
            _ => panic!("take_while failed"),
        }
    }

    #[test]
    fn test_take_while1_requires_one() {
        match take_while1(|c| c.is_ascii_digit()).parse(Cursor::new("abc")) {
            Reply::Err { message, consumed } => {
                assert!(!consumed);
                assert_eq!(message.unexpected(), "'a'");
            }
            _ => panic!("take_while1 accepted zero characters"),
        }

        assert!(take_while1(|c| c.is_ascii_digit())
            .parse(Cursor::new("1"))
            .is_ok());
    }

    #[test]
    fn test_take_while1_at_end_of_input() {
        match take_while1(|_| true).parse(Cursor::new("")) {
            Reply::Err { message, consumed } => {
                assert!(!consumed);
                assert_eq!(message.unexpected(), "end of input");
            }
            _ => panic!("take_while1 succeeded on empty input"),
        }
    }

    #[test]
    fn test_take_until_stops_before_delimiter() {
        match take_until(|c| c == '"').parse(Cursor::new("hello\"rest")) {
            Reply::Ok { value, cursor, .. } => {
                assert_eq!(value, "hello");
                assert_eq!(cursor.curr().unwrap(), '"');
            }
            _ => panic!("take_until failed"),
        }
    }

    #[test]
    fn test_take_until1_requires_progress() {
        match take_until1(|c| c == '"').parse(Cursor::new("\"already there")) {
            Reply::Err { consumed, .. } => assert!(!consumed),
            _ => panic!("take_until1 accepted zero characters"),
        }
    }
}

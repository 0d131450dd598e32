use crate::cursor::Cursor;
use crate::message::Message;
use crate::parser::{BoxedParser, Parser};
use crate::reply::Reply;

/// Parser combinator that runs every alternative from the same starting
/// cursor and keeps whichever got furthest.
///
/// Each alternative is run in isolation: neither its consumption nor its
/// failure leaks into the others. If any succeed, the output is the list
/// of values from those whose end offset is furthest, in parser order, and
/// the cursor advances to that offset. If all fail, the error furthest
/// into the input wins; errors at the same furthest offset are merged, and
/// the combined failure counts as consumed only when that offset is past
/// the starting cursor.
pub struct LongestMatch<'src, T> {
    parsers: Vec<BoxedParser<'src, T>>,
}

impl<'src, T: 'src> Parser<'src> for LongestMatch<'src, T> {
    type Output = Vec<T>;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        let start = cursor.offset();
        let mut best: Option<(Cursor<'src>, Vec<T>)> = None;
        let mut worst: Option<Message<'src>> = None;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Reply::Ok {
                    value,
                    cursor: end,
                    ..
                } => {
                    let replace = match &best {
                        None => true,
                        Some((leader, _)) => end.offset() > leader.offset(),
                    };
                    if replace {
                        best = Some((end, vec![value]));
                    } else if let Some((leader, values)) = &mut best {
                        if end.offset() == leader.offset() {
                            values.push(value);
                        }
                    }
                }
                Reply::Err { message, .. } => {
                    worst = Some(match worst.take() {
                        None => message,
                        Some(leader) => {
                            if message.cursor().offset() > leader.cursor().offset() {
                                message
                            } else if message.cursor().offset() == leader.cursor().offset() {
                                leader.merge(message)
                            } else {
                                leader
                            }
                        }
                    });
                }
            }
        }

        match (best, worst) {
            (Some((end, values)), _) => {
                if end.offset() > start {
                    Reply::consumed_ok(values, end)
                } else {
                    Reply::eps(values, cursor)
                }
            }
            (None, Some(message)) => {
                let consumed = message.cursor().offset() > start;
                Reply::Err { message, consumed }
            }
            (None, None) => Reply::err_eps(Message::new(cursor, "failure")),
        }
    }
}

/// Convenience function to create a LongestMatch parser.
pub fn longest_match<'src, T>(parsers: Vec<BoxedParser<'src, T>>) -> LongestMatch<'src, T> {
    LongestMatch { parsers }
}

use crate::cursor::Cursor;
use crate::message::Message;
use crate::parser::{BoxedParser, Parser};
use crate::reply::Reply;
use std::rc::Rc;

// `fix(build)` hands `build` a parser standing for "the whole thing
// again", so simple recursive grammars can be written without declaring a
// named function for every production. The self-reference is fuel-bounded:
// each unrolling step spends one unit, and the bottom of the chain is an
// epsilon failure. Total applications of `build` per parse are
// `remaining + 1`, so a derivation that stops consuming runs out of fuel
// instead of recursing forever.

type Build<'src, T> = Rc<dyn Fn(BoxedParser<'src, T>) -> BoxedParser<'src, T> + 'src>;

/// Parser combinator for anonymous recursion.
pub struct Fix<'src, T> {
    build: Build<'src, T>,
}

struct Step<'src, T> {
    build: Build<'src, T>,
    fuel: usize,
}

impl<'src, T: 'src> Parser<'src> for Step<'src, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        if self.fuel == 0 {
            return Reply::err_eps(Message::new(cursor, "no progress"));
        }
        let deeper = Step {
            build: Rc::clone(&self.build),
            fuel: self.fuel - 1,
        };
        (self.build)(Box::new(deeper)).parse(cursor)
    }
}

impl<'src, T: 'src> Parser<'src> for Fix<'src, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        let step = Step {
            build: Rc::clone(&self.build),
            fuel: cursor.remaining(),
        };
        (self.build)(Box::new(step)).parse(cursor)
    }
}

/// Tie a recursive parser: `build` receives the parser being defined.
pub fn fix<'src, T, F>(build: F) -> Fix<'src, T>
where
    F: Fn(BoxedParser<'src, T>) -> BoxedParser<'src, T> + 'src,
{
    Fix {
        build: Rc::new(build),
    }
}

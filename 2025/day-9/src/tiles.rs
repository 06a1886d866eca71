use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// A red tile position on the floor.
pub type Point = glam::I64Vec2;

/// Largest accepted absolute coordinate, so rectangle areas fit in `u64`.
pub const COORDINATE_LIMIT: i64 = 1 << 30;

fn tile<'a>() -> impl Parser<'a, &'a str, Point, extra::Err<Rich<'a, char>>> {
    let hspace = any().filter(|c: &char| *c == ' ' || *c == '\t').repeated();

    let coord = just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            let value = digits.parse::<i64>().map_err(|e| Rich::custom(span, e))?;
            if !(-COORDINATE_LIMIT..=COORDINATE_LIMIT).contains(&value) {
                return Err(Rich::custom(
                    span,
                    format!("{value} is outside ±{COORDINATE_LIMIT}"),
                ));
            }
            Ok(value)
        })
        .padded_by(hspace);

    coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(end())
        .map(|(x, y)| Point::new(x, y))
}

/// One `x,y` red tile per non-blank line, in input order.
pub fn parse_tiles(input: &str) -> Result<Vec<Point>> {
    let parser = tile();

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parser.parse(line).into_result().map_err(|errors| {
                miette!(
                    code = "day9::parse",
                    help = "each line must hold two comma-separated integers, e.g. `7,1`",
                    "Parse failed on line {} ({line:?}): {}",
                    idx + 1,
                    errors.iter().join("; ")
                )
            })
        })
        .collect()
}

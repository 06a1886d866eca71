use std::{fs, path::Path};

use chumsky::prelude::*;
use itertools::Itertools;

use crate::{InputError, Point, COORDINATE_LIMIT};

/// `X,Y,Z` with optional spaces or tabs around each coordinate, each within
/// `±COORDINATE_LIMIT`.
fn point<'a>() -> impl Parser<'a, &'a str, Point, extra::Err<Rich<'a, char>>> {
    // Custom whitespace parser that excludes newlines
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
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(end())
        .map(|((x, y), z)| Point::new(x, y, z))
}

/// Parses one junction box per non-blank line, keeping load order.
///
/// The first malformed line aborts the whole parse; nothing is defaulted.
pub fn parse_points(input: &str) -> Result<Vec<Point>, InputError> {
    let parser = point();

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parser
                .parse(line)
                .into_result()
                .map_err(|errors| InputError::Parse {
                    line: idx + 1,
                    content: line.to_string(),
                    reason: errors.iter().join("; "),
                })
        })
        .collect()
}

/// Reads and parses the file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, InputError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let points = parse_points(&input)?;
    tracing::debug!(count = points.len(), "loaded junction boxes");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    use miette::IntoDiagnostic;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn parses_sample_lines() -> miette::Result<()> {
        let points = parse_points("162,817,812\n57,618,57\n906,360,560\n")?;
        assert_eq!(
            points,
            vec![
                Point::new(162, 817, 812),
                Point::new(57, 618, 57),
                Point::new(906, 360, 560),
            ]
        );
        Ok(())
    }

    #[test]
    fn tolerates_padding_signs_and_blank_lines() -> miette::Result<()> {
        let points = parse_points("\n 1 , -2 ,\t3 \r\n\n  \n-4,5,-6")?;
        assert_eq!(points, vec![Point::new(1, -2, 3), Point::new(-4, 5, -6)]);
        Ok(())
    }

    #[test]
    fn accepts_leading_zeros() -> miette::Result<()> {
        assert_eq!(parse_points("007,-00,10")?, vec![Point::new(7, 0, 10)]);
        Ok(())
    }

    #[rstest]
    #[case("536870912,0,0", Point::new(COORDINATE_LIMIT, 0, 0))]
    #[case("0,-536870912,536870912", Point::new(0, -COORDINATE_LIMIT, COORDINATE_LIMIT))]
    fn accepts_coordinates_at_the_limit(#[case] line: &str, #[case] expected: Point) -> miette::Result<()> {
        assert_eq!(parse_points(line)?, vec![expected]);
        Ok(())
    }

    #[test]
    fn keeps_coincident_points_distinct() -> miette::Result<()> {
        let points = parse_points("1,1,1\n1,1,1")?;
        assert_eq!(points.len(), 2);
        Ok(())
    }

    #[rstest]
    #[case::missing_coordinate("1,2")]
    #[case::letters("a,b,c")]
    #[case::extra_coordinate("1,2,3,4")]
    #[case::empty_field("1,,3")]
    #[case::trailing_comma("1,2,3,")]
    #[case::inner_space("1 2,3,4")]
    #[case::overflow("99999999999999999999,0,0")]
    #[case::above_limit("536870913,0,0")]
    #[case::below_limit("0,0,-536870913")]
    #[case::squared_distance_overflows("3037000500,0,0")]
    #[case::most_negative("-9223372036854775808,0,0")]
    fn rejects_malformed_lines(#[case] line: &str) {
        let input = format!("0,0,0\n\n{line}\n5,5,5");
        match parse_points(&input) {
            Err(InputError::Parse {
                line: number,
                content,
                ..
            }) => {
                assert_eq!(number, 3);
                assert_eq!(content, line);
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_has_no_points() -> miette::Result<()> {
        assert!(parse_points("")?.is_empty());
        assert!(parse_points("\n\n")?.is_empty());
        Ok(())
    }

    #[test]
    fn loads_points_from_disk() -> miette::Result<()> {
        let mut file = tempfile::NamedTempFile::new().into_diagnostic()?;
        writeln!(file, "1,2,3\n4,5,6").into_diagnostic()?;

        let points = load_points(file.path())?;
        assert_eq!(points, vec![Point::new(1, 2, 3), Point::new(4, 5, 6)]);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("input.txt");

        match load_points(&path) {
            Err(InputError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}

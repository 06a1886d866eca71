use miette::*;

use crate::{parse::parse_points, Circuits, ClusterConfig};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with(input, &ClusterConfig::default())
}

/// Connects the `config.connections` closest pairs and multiplies the sizes of
/// the `config.largest` biggest circuits.
#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, config: &ClusterConfig) -> Result<String> {
    let points = parse_points(input)?;

    let mut circuits = Circuits::new(&points);
    circuits.connect_closest(config.connections);

    Ok(circuits.largest_product(config.largest).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const INPUT: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    #[test]
    fn it_works() -> Result<()> {
        let config = ClusterConfig {
            connections: 10,
            ..ClusterConfig::default()
        };
        assert_eq!("40", process_with(INPUT, &config)?);
        Ok(())
    }

    #[rstest]
    #[case::nothing_connected(0, 3, "1")]
    #[case::everything_connected(1000, 3, "20")]
    #[case::two_largest(10, 2, "20")]
    fn thresholds(
        #[case] connections: usize,
        #[case] largest: usize,
        #[case] expected: &str,
    ) -> Result<()> {
        let config = ClusterConfig {
            connections,
            largest,
        };
        assert_eq!(expected, process_with(INPUT, &config)?);
        Ok(())
    }

    #[test]
    fn malformed_input_fails() {
        assert!(process("1,2,3\n1,2").is_err());
        assert!(process("a,b,c").is_err());
    }
}

use miette::*;

use crate::{parse::parse_points, Circuits, MergeOutcome, NOT_CONNECTED};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    let mut circuits = Circuits::new(&points);

    // Keep adding the closest unused pair until everything is one circuit
    let result = match circuits.merge_until_single() {
        MergeOutcome::Connected(edge) => circuits.x_product(edge),
        MergeOutcome::Exhausted { .. } => NOT_CONNECTED,
    };

    Ok(result.to_string())
}

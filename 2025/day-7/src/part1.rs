use miette::*;

use crate::Manifold;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let manifold: Manifold = input.parse()?;

    // Merged beams share a column, so every splitter is counted at most once
    let stats = manifold.simulate()?;

    Ok(stats.splits.to_string())
}

use miette::*;

use crate::Manifold;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let manifold: Manifold = input.parse()?;
    let stats = manifold.simulate()?;

    Ok(stats.timelines.to_string())
}

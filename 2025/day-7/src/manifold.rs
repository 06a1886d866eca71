use std::str::FromStr;

use miette::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    Splitter,
}

/// The tachyon manifold: a rectangular grid with a single beam source.
#[derive(Debug)]
pub struct Manifold {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    start: (usize, usize),
}

impl FromStr for Manifold {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut start = None;
        let mut width = None;
        let mut height = 0;

        // Trailing blank lines are just the end of the file
        for (y, line) in input.trim_end().lines().enumerate() {
            let row_width = line.chars().count();
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    bail!("row {} is {row_width} tiles wide, expected {w}", y + 1);
                }
                Some(_) => {}
            }

            for (x, c) in line.chars().enumerate() {
                let tile = match c {
                    'S' => {
                        if let Some((sx, sy)) = start.replace((x, y)) {
                            bail!(
                                "second beam source at row {} column {}, first one is at row {} column {}",
                                y + 1,
                                x + 1,
                                sy + 1,
                                sx + 1
                            );
                        }
                        // S behaves like empty space for physics
                        Tile::Empty
                    }
                    '^' => Tile::Splitter,
                    '.' => Tile::Empty,
                    other => {
                        bail!("unexpected {other:?} at row {} column {}", y + 1, x + 1);
                    }
                };
                tiles.push(tile);
            }
            height += 1;
        }

        let start = start.ok_or(miette!("No start position 'S' found in grid"))?;

        Ok(Manifold {
            width: width.unwrap_or(0),
            height,
            tiles,
            start,
        })
    }
}

/// What a single pass of the beam through the manifold produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamStats {
    /// Distinct splitters reached by at least one beam.
    pub splits: usize,
    /// Distinct paths a single particle could take out of the manifold.
    pub timelines: u128,
}

fn add_timelines(slot: &mut u128, count: u128) -> Result<()> {
    *slot = slot
        .checked_add(count)
        .ok_or_else(|| miette!("timeline count does not fit in 128 bits"))?;
    Ok(())
}

impl Manifold {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    fn tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[y * self.width + x]
    }

    /// Sends the beam down from the source, one row at a time.
    ///
    /// Beams landing in the same column merge; their timeline counts add up.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn simulate(&self) -> Result<BeamStats> {
        let (sx, sy) = self.start;

        let mut current: Vec<u128> = vec![0; self.width];
        let mut next: Vec<u128> = vec![0; self.width];
        current[sx] = 1;

        let mut splits = 0;
        // Timelines that left through the sides
        let mut exited: u128 = 0;

        for y in sy + 1..self.height {
            next.fill(0);

            for x in 0..self.width {
                let count = current[x];
                if count == 0 {
                    continue;
                }

                match self.tile(x, y) {
                    Tile::Empty => add_timelines(&mut next[x], count)?,
                    Tile::Splitter => {
                        splits += 1;

                        if x > 0 {
                            add_timelines(&mut next[x - 1], count)?;
                        } else {
                            add_timelines(&mut exited, count)?;
                        }

                        if x + 1 < self.width {
                            add_timelines(&mut next[x + 1], count)?;
                        } else {
                            add_timelines(&mut exited, count)?;
                        }
                    }
                }
            }

            std::mem::swap(&mut current, &mut next);
        }

        // Whatever is still travelling leaves through the bottom
        let mut timelines = exited;
        for count in current {
            add_timelines(&mut timelines, count)?;
        }

        tracing::debug!(splits, %timelines, "beam left the manifold");
        Ok(BeamStats { splits, timelines })
    }
}

use rand::{Rng, seq::IteratorRandom};

use crate::grid::{Cell, Grid, Occupancy};

/// Picks a free cell uniformly at random.
///
/// Samples straight from the complement of `occupied`, so a nearly full board
/// never falls into a retry loop. Returns `None` when every cell is occupied.
pub fn place_food<O, R>(grid: &Grid, occupied: &O, rng: &mut R) -> Option<Cell>
where
    O: Occupancy + ?Sized,
    R: Rng + ?Sized,
{
    let food = grid
        .all_cells()
        .filter(|cell| !occupied.occupies(*cell))
        .choose(rng);

    if food.is_none() {
        #[cfg(feature = "defmt")]
        defmt::warn!("no free cell left for food");
    }
    food
}

use rand::Rng;

use crate::consts::{HEIGHT, WIDTH};
use crate::Coords;

/// Picks a uniformly random cell for the next apple.
///
/// The snake's body is not consulted, so the apple can land underneath it.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Coords {
    (rng.gen_range(0..WIDTH), rng.gen_range(0..HEIGHT))
}

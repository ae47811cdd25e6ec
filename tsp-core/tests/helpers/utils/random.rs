use crate::models::common::Location;
use crate::models::problem::City;
use rand::prelude::*;
use std::sync::Arc;

/// Creates cities with random coordinates, names are unique.
pub fn create_random_cities(amount: usize, seed: u64) -> Vec<Arc<City>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..amount)
        .map(|idx| {
            let location = Location::new(rng.gen_range(-80_f64..80.), rng.gen_range(-180_f64..180.));
            Arc::new(City::new(format!("city{idx}"), location))
        })
        .collect()
}

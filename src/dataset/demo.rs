use rand::Rng;
use rand_distr::StandardNormal;

use crate::dataset::Dataset;

/// Customers generated per synthetic segment
pub const DEMO_SEGMENT_SIZE: usize = 150;

const DEMO_HEADERS: [&str; 3] = ["annual_spend", "visits_per_month", "email_open_rate"];

/// (means, standard deviations) per segment
const DEMO_SEGMENTS: [([f64; 3], [f64; 3]); 3] = [
    // low value, low engagement
    ([250.0, 1.2, 0.10], [40.0, 0.3, 0.02]),
    // mid value, mid engagement
    ([650.0, 2.5, 0.22], [60.0, 0.4, 0.03]),
    // high value, high engagement
    ([1500.0, 4.5, 0.38], [120.0, 0.6, 0.04]),
];

/// Three Gaussian customer segments for trying the explorer without data
pub fn demo_customers<R: Rng + ?Sized>(rng: &mut R) -> Dataset {
    let mut rows = Vec::with_capacity(DEMO_SEGMENT_SIZE * DEMO_SEGMENTS.len());

    for (means, sds) in DEMO_SEGMENTS {
        for _ in 0..DEMO_SEGMENT_SIZE {
            let row: Vec<f64> = means
                .iter()
                .zip(sds)
                .map(|(m, sd)| {
                    let z: f64 = rng.sample(StandardNormal);
                    m + sd * z
                })
                .collect();
            rows.push(row);
        }
    }

    Dataset::new(DEMO_HEADERS.iter().map(|h| h.to_string()).collect(), rows)
}

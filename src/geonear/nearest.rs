use crate::geonear::{
    error::Error,
    point::{ObservedPoint, ReferencePoint},
};
use std::thread;

/// Minimum euclidean distance from `p` to any point of `reference`.
/// Strict `<`, so the first minimum seen during the scan is the one kept.
pub fn nearest_distance(p: &ObservedPoint, reference: &[ReferencePoint]) -> Result<f64, Error> {
    if reference.is_empty() {
        return Err(Error::EmptyReferenceSet);
    }
    Ok(scan(p, reference))
}

fn scan(p: &ObservedPoint, reference: &[ReferencePoint]) -> f64 {
    let mut min_distance = std::f64::INFINITY;
    for r in reference {
        let d = p.distance_to(r);
        if d < min_distance {
            min_distance = d;
        }
    }
    min_distance
}

/// Assigns every observed point its nearest reference distance. Nothing is
/// assigned when the reference set is empty.
pub fn assign_distances(
    observed: &mut [ObservedPoint],
    reference: &[ReferencePoint],
) -> Result<(), Error> {
    if reference.is_empty() {
        return Err(Error::EmptyReferenceSet);
    }
    for p in observed.iter_mut() {
        p.distance = Some(nearest_distance(p, reference)?);
    }
    Ok(())
}

/// Same as `assign_distances`, with the observed points split into
/// contiguous chunks scanned on `workers` threads.
pub fn assign_distances_par(
    observed: &mut [ObservedPoint],
    reference: &[ReferencePoint],
    workers: usize,
) -> Result<(), Error> {
    if reference.is_empty() {
        return Err(Error::EmptyReferenceSet);
    }
    if workers <= 1 || observed.len() < 2 {
        return assign_distances(observed, reference);
    }

    let chunk_size = (observed.len() + workers - 1) / workers;
    log::debug!(
        "Scanning {} observed points on {} workers, {} per chunk",
        observed.len(),
        workers,
        chunk_size
    );
    thread::scope(|s| {
        for chunk in observed.chunks_mut(chunk_size) {
            s.spawn(move || {
                for p in chunk.iter_mut() {
                    p.distance = Some(scan(p, reference));
                }
            });
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::geonear::error::Error;
    use crate::geonear::nearest::{assign_distances, assign_distances_par, nearest_distance};
    use crate::geonear::point::{ObservedPoint, ReferencePoint};

    fn naive(p: &ObservedPoint, reference: &[ReferencePoint]) -> f64 {
        reference
            .iter()
            .map(|r| ((p.x - r.x).powi(2) + (p.y - r.y).powi(2)).sqrt())
            .fold(std::f64::INFINITY, f64::min)
    }

    // Deterministic scatter so failures are reproducible.
    fn scatter(n: usize, seed: u64) -> Vec<(f64, f64)> {
        let mut state = seed;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 100_000) as f64 / 100.0
        };
        (0..n).map(|_| (next(), next())).collect()
    }

    fn observed(n: usize, seed: u64) -> Vec<ObservedPoint> {
        scatter(n, seed)
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| ObservedPoint::new(x, y, format!("p{}", i)))
            .collect()
    }

    fn reference(n: usize, seed: u64) -> Vec<ReferencePoint> {
        scatter(n, seed)
            .into_iter()
            .map(|(x, y)| ReferencePoint::new(x, y))
            .collect()
    }

    #[test]
    fn test_nearest_of_two() {
        let refs = vec![ReferencePoint::new(0.0, 0.0), ReferencePoint::new(3.0, 4.0)];
        let p = ObservedPoint::new(0.0, 3.0, "a");
        assert_eq!(3.0, nearest_distance(&p, &refs).unwrap());
    }

    #[test]
    fn test_coincident_point() {
        let refs = vec![ReferencePoint::new(1.0, 1.0)];
        let p = ObservedPoint::new(1.0, 1.0, "a");
        assert_eq!(0.0, nearest_distance(&p, &refs).unwrap());
    }

    #[test]
    fn test_empty_reference_set() {
        let mut obs = vec![ObservedPoint::new(1.0, 1.0, "a")];
        match assign_distances(&mut obs, &[]) {
            Err(Error::EmptyReferenceSet) => (),
            other => panic!("expected EmptyReferenceSet, got {:?}", other),
        }
        assert_eq!(None, obs[0].distance);

        match assign_distances_par(&mut obs, &[], 4) {
            Err(Error::EmptyReferenceSet) => (),
            other => panic!("expected EmptyReferenceSet, got {:?}", other),
        }
        assert_eq!(None, obs[0].distance);
    }

    #[test]
    fn test_matches_naive_minimum() {
        let refs = reference(200, 7);
        let mut obs = observed(300, 11);
        assign_distances(&mut obs, &refs).unwrap();
        for p in &obs {
            let d = p.distance.expect("distance assigned");
            assert!(d >= 0.0);
            assert!((d - naive(p, &refs)).abs() < 1e-9, "{:?}", p);
        }
    }

    #[test]
    fn test_zero_only_on_coincidence() {
        let refs = reference(50, 3);
        let mut obs: Vec<ObservedPoint> = refs
            .iter()
            .enumerate()
            .map(|(i, r)| ObservedPoint::new(r.x, r.y, format!("on{}", i)))
            .collect();
        obs.push(ObservedPoint::new(-1.0, -1.0, "off"));
        assign_distances(&mut obs, &refs).unwrap();
        let (off, on) = obs.split_last().unwrap();
        assert!(on.iter().all(|p| p.distance == Some(0.0)));
        assert!(off.distance.unwrap() > 0.0);
    }

    #[test]
    fn test_idempotent() {
        let refs = reference(100, 5);
        let mut first = observed(100, 9);
        assign_distances(&mut first, &refs).unwrap();
        let mut second = first.clone();
        assign_distances(&mut second, &refs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let refs = reference(150, 21);
        let mut seq = observed(257, 42);
        let mut par = seq.clone();
        assign_distances(&mut seq, &refs).unwrap();
        assign_distances_par(&mut par, &refs, 4).unwrap();
        assert_eq!(seq, par);

        let mut more_workers_than_points = observed(3, 1);
        let mut expected = more_workers_than_points.clone();
        assign_distances(&mut expected, &refs).unwrap();
        assign_distances_par(&mut more_workers_than_points, &refs, 16).unwrap();
        assert_eq!(expected, more_workers_than_points);
    }
}

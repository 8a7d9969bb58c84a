use emb_core::reservoir::ReservoirRecord;
use rand::Rng;

/// Largest volume change of one simulated tick, in hm³.
pub const MAX_TICK_DELTA: f64 = 1.0;

/// Nudge every volume by a uniform delta in `[-1, 1]` hm³, clamped to
/// `[0, capacity]`, and recompute derived fields.
pub fn simulate_tick<R: Rng + ?Sized>(records: &mut [ReservoirRecord], rng: &mut R) {
    for record in records.iter_mut() {
        let delta = rng.gen_range(-MAX_TICK_DELTA..=MAX_TICK_DELTA);
        record.current_volume = (record.current_volume + delta).clamp(0.0, record.capacity);
        record.refresh_derived();
    }
    log::debug!("simulate: ticked {} reservoirs", records.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn records() -> Vec<ReservoirRecord> {
        vec![
            ReservoirRecord::new(1, "Vacío", "M", 10.0, 0.2),
            ReservoirRecord::new(2, "Lleno", "M", 10.0, 9.9),
            ReservoirRecord::new(3, "Medio", "M", 50.0, 25.0),
        ]
    }

    #[test]
    fn test_volumes_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut records = records();
        for _ in 0..500 {
            let before: Vec<f64> = records.iter().map(|r| r.current_volume).collect();
            simulate_tick(&mut records, &mut rng);
            for (r, prev) in records.iter().zip(before) {
                assert!(r.current_volume >= 0.0 && r.current_volume <= r.capacity);
                assert!((r.current_volume - prev).abs() <= MAX_TICK_DELTA + 1e-9);
            }
        }
    }

    #[test]
    fn test_derived_fields_follow_volume() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut records = records();
        simulate_tick(&mut records, &mut rng);
        for r in &records {
            let mut expected = r.clone();
            expected.refresh_derived();
            assert_eq!(r.fill_percentage, expected.fill_percentage);
            assert_eq!(r.tier, expected.tier);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut a = records();
        let mut b = records();
        simulate_tick(&mut a, &mut StdRng::seed_from_u64(3));
        simulate_tick(&mut b, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}

use super::*;

fn anim(w: u32, h: u32, count: u64) -> Animation {
    Animation::new(w, h, count, 24.0).unwrap()
}

fn seeded(opts: AnnealOpts, seed: u64) -> AnnealOpts {
    AnnealOpts {
        seed: Some(seed),
        ..opts
    }
}

#[test]
fn initial_layout_uses_square_root_budget() {
    assert_eq!(initial_layout(&anim(100, 100, 10)), Layout::new(3, 3));
    assert_eq!(initial_layout(&anim(100, 50, 8)), Layout::new(2, 4));
}

#[test]
fn energy_counts_unpacked_frames() {
    let a = anim(100, 100, 10);
    assert_eq!(layout_energy(&Layout::new(2, 4), &a), 2.0);
    assert_eq!(layout_energy(&Layout::new(2, 5), &a), 0.0);
    assert_eq!(layout_energy(&Layout::new(3, 4), &a), -2.0);
}

#[test]
fn mutation_moves_one_side_by_one_or_stays() {
    let a = anim(100, 100, 10);
    let mut rng = StdRng::seed_from_u64(5);
    let mut current = Layout::new(2, 4);
    for _ in 0..1000 {
        let next = mutate_layout(&current, &a, &mut rng);
        assert!(is_valid(next, &a));
        let dc = next.columns.abs_diff(current.columns);
        let dr = next.rows.abs_diff(current.rows);
        assert!(dc + dr <= 1);
        current = next;
    }
}

#[test]
fn mutation_never_leaves_valid_region_from_single_cell() {
    let a = anim(100, 100, 1);
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        assert_eq!(
            mutate_layout(&Layout::new(1, 1), &a, &mut rng),
            Layout::new(1, 1)
        );
    }
}

#[test]
fn annealing_finds_exact_fit() {
    let a = anim(100, 100, 10);
    for seed in [1, 2, 3] {
        let layout = anneal_layout(&a, &seeded(AnnealOpts::default(), seed));
        assert!(is_valid(layout, &a));
        assert_eq!(layout.capacity(), 10);
    }
}

#[test]
fn annealing_is_reproducible_with_seed() {
    let a = anim(64, 48, 37);
    let opts = seeded(AnnealOpts::default(), 77);
    assert_eq!(anneal_layout(&a, &opts), anneal_layout(&a, &opts));

    let mut r1 = StdRng::seed_from_u64(4);
    let mut r2 = StdRng::seed_from_u64(4);
    assert_eq!(
        anneal_layout_with(&a, &opts, &mut r1),
        anneal_layout_with(&a, &opts, &mut r2)
    );
}

#[test]
fn degenerate_start_is_returned_unchanged() {
    let a = anim(20_000, 10, 3);
    let start = initial_layout(&a);
    assert_eq!(start.columns, 0);

    let layout = anneal_layout(&a, &seeded(AnnealOpts::default(), 9));
    assert_eq!(layout, start);
    assert!(!is_valid(layout, &a));
}

#[test]
fn default_schedule_constants() {
    let opts = AnnealOpts::default();
    assert_eq!(opts.temp_max, 15.0);
    assert_eq!(opts.temp_min, 0.001);
    assert_eq!(opts.cooling_step, 0.001);
    assert_eq!(opts.seed, None);
}

#[test]
fn validate_rejects_non_terminating_schedules() {
    assert!(AnnealOpts::default().validate().is_ok());
    let stalled = AnnealOpts {
        cooling_step: 0.0,
        ..AnnealOpts::default()
    };
    assert!(matches!(
        stalled.validate(),
        Err(PackError::InvalidOptions(_))
    ));
    let warming = AnnealOpts {
        cooling_step: -1.0,
        ..AnnealOpts::default()
    };
    assert!(warming.validate().is_err());
    let unbounded = AnnealOpts {
        temp_max: f64::INFINITY,
        ..AnnealOpts::default()
    };
    assert!(unbounded.validate().is_err());
}

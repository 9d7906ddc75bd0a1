use quadseek_core::{
    find_centroid, score_quadrants, Centroid, CentroidError, CentroidSearch, Mask, MaskImage,
    MaskView, Quadrant, Region,
};

/// Small deterministic generator so the masks are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn random_mask(rng: &mut Lcg, width: usize, height: usize, density_pct: u64) -> MaskImage {
    MaskImage::from_fn(width, height, |_, _| {
        if rng.next() % 100 < density_pct {
            (1 + rng.next() % 255) as u8
        } else {
            0
        }
    })
    .unwrap()
}

fn brute_force_count(mask: &MaskImage, region: Region) -> u64 {
    let mut n = 0;
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            if mask.sample(x, y) > 0 {
                n += 1;
            }
        }
    }
    n
}

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

const SIZES: &[(usize, usize)] = &[
    (1, 1),
    (1, 9),
    (9, 1),
    (2, 2),
    (3, 3),
    (7, 5),
    (8, 8),
    (16, 9),
    (31, 64),
    (100, 3),
    (127, 129),
];

#[test]
fn quadrant_scores_conserve_mass() {
    let mut rng = Lcg(7);
    for &(w, h) in SIZES {
        let mask = random_mask(&mut rng, w, h, 30);
        for _ in 0..20 {
            let left = rng.below(w);
            let top = rng.below(h);
            let right = left + 1 + rng.below(w - left);
            let bottom = top + 1 + rng.below(h - top);
            let region = Region::new(left, top, right, bottom);
            let scores = score_quadrants(&mask, region).unwrap();
            assert_eq!(scores.total(), brute_force_count(&mask, region), "{region:?}");
        }
    }
}

#[test]
fn every_step_conserves_mass_and_follows_winner() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = Lcg(11);
    for &(w, h) in SIZES {
        let mask = random_mask(&mut rng, w, h, 20);
        let res = CentroidSearch::default().search(&mask).unwrap();
        for pair in res.steps.windows(2) {
            assert_eq!(pair[1].region, pair[0].region.quadrant(pair[0].winner));
        }
        for step in &res.steps {
            assert_eq!(step.scores.total(), brute_force_count(&mask, step.region));
            assert_eq!(step.winner, step.scores.winner());
        }
        assert_eq!(res.mass, brute_force_count(&mask, Region::full(w, h)));
    }
}

#[test]
fn search_is_deterministic() {
    let mut rng = Lcg(3);
    let mask = random_mask(&mut rng, 64, 48, 10);
    let search = CentroidSearch::default();
    let a = search.search(&mask).unwrap();
    let b = search.search(&mask.clone()).unwrap();
    assert_eq!(a, b);
    assert_eq!(find_centroid(&mask.view()).unwrap(), a.centroid);
}

#[test]
fn step_count_is_logarithmic() {
    let mut rng = Lcg(5);
    for &(w, h) in SIZES {
        for density in [0, 5, 50, 100] {
            let mask = random_mask(&mut rng, w, h, density);
            let res = CentroidSearch::default().search(&mask).unwrap();
            assert!(
                res.steps.len() <= ceil_log2(w.max(h)),
                "{w}x{h}: {} steps",
                res.steps.len()
            );
        }
    }
}

#[test]
fn terminal_region_reports_its_own_midpoint() {
    let mut rng = Lcg(13);
    for &(w, h) in SIZES {
        let mask = random_mask(&mut rng, w, h, 40);
        let res = CentroidSearch::default().search(&mask).unwrap();
        let t = res.terminal;
        assert!(t.is_terminal());
        assert!(!t.is_empty());
        assert_eq!(
            res.centroid,
            Centroid {
                x: (t.left + t.right) / 2,
                y: (t.top + t.bottom) / 2
            }
        );
        assert!(t.contains(res.centroid.x, res.centroid.y));
        assert!(res.centroid.x < w && res.centroid.y < h);
    }
}

#[test]
fn single_pixel_off_the_split_lines_is_found() {
    // (6, 6) in 8x8 lands on the second-level midpoint; the answer is still
    // within one pixel on each axis.
    let mask = MaskImage::from_fn(8, 8, |x, y| u8::from(x == 6 && y == 6)).unwrap();
    let c = find_centroid(&mask).unwrap();
    assert!(c.x.abs_diff(6) <= 1 && c.y.abs_diff(6) <= 1, "{c:?}");

    // Pixels strictly inside a quadrant at every level end up in the
    // terminal region.
    let mask = MaskImage::from_fn(16, 16, |x, y| u8::from(x == 11 && y == 3)).unwrap();
    let res = CentroidSearch::default().search(&mask).unwrap();
    assert!(res.terminal.contains(11, 3), "{:?}", res.terminal);
}

#[test]
fn uniform_masks_both_resolve_to_one_one() {
    for value in [0u8, 1] {
        let mask = MaskImage::filled(8, 8, value).unwrap();
        let res = CentroidSearch::default().search(&mask).unwrap();
        assert_eq!(res.centroid, Centroid { x: 1, y: 1 });
        assert!(res.steps.iter().all(|s| s.winner == Quadrant::TopLeft));
    }
}

#[test]
fn invalid_inputs_fail_before_scanning() {
    let err = MaskView::new(0, 0, &[]).unwrap_err();
    assert!(matches!(err, CentroidError::InvalidMask { .. }));

    let bogus = MaskView {
        width: 3,
        height: 3,
        data: &[1, 2, 3],
    };
    assert!(find_centroid(&bogus).is_err());

    let mask = MaskImage::filled(4, 4, 1).unwrap();
    let err = CentroidSearch::default()
        .search_in(&mask, Region::new(0, 2, 4, 1))
        .unwrap_err();
    assert!(err.to_string().contains("invalid region"));
}

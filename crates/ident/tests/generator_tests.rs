use ident::{Id, IdGenerator};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_restored_ids_never_collide_with_fresh_ones() {
    let mut ids = IdGenerator::new();

    // Ids loaded from a stored session
    let restored: Vec<Id> = [3, 17, 9].iter().map(|&v| ids.generate_from(v)).collect();
    assert_eq!(restored, vec![Id::new(3), Id::new(17), Id::new(18)]);

    let fresh = ids.generate();
    assert_eq!(fresh, Id::new(19));
    assert!(!restored.contains(&fresh));
}

#[test]
fn test_independent_generators() {
    let mut a = IdGenerator::new();
    let mut b = IdGenerator::new();

    a.generate();
    a.generate();

    assert_eq!(b.generate(), Id::new(1));
    assert_eq!(a.high_water(), 2);
}

proptest! {
    #[test]
    fn prop_unseeded_generation_is_strictly_increasing(start in 0u64..1_000_000, n in 1usize..64) {
        let mut ids = IdGenerator::new();
        ids.generate_from(start);
        let mark = ids.high_water();

        let mut previous = mark;
        for _ in 0..n {
            let id = ids.generate().get();
            prop_assert!(id > previous);
            prop_assert_eq!(id, previous + 1);
            previous = id;
        }
    }

    #[test]
    fn prop_seeded_generation(seeds in proptest::collection::vec(0u64..1_000, 1..32)) {
        let mut ids = IdGenerator::new();

        for seed in seeds {
            let mark = ids.high_water();
            let id = ids.generate_from(seed).get();
            if seed > mark {
                prop_assert_eq!(id, seed);
            } else {
                prop_assert_eq!(id, mark + 1);
            }
            prop_assert_eq!(ids.high_water(), id);
        }
    }
}

//! Unit tests for petri-core primitives.

#[cfg(test)]
mod spatial {
    use crate::{Coordinates, Direction};

    #[test]
    fn display() {
        assert_eq!(Coordinates::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Direction::Up.to_string(), "up");
    }

    #[test]
    fn unit_steps() {
        assert_eq!((Direction::Up.dx(), Direction::Up.dy()), (0, -1));
        assert_eq!((Direction::Down.dx(), Direction::Down.dy()), (0, 1));
        assert_eq!((Direction::Left.dx(), Direction::Left.dy()), (-1, 0));
        assert_eq!((Direction::Right.dx(), Direction::Right.dy()), (1, 0));
    }

    #[test]
    fn four_right_turns_are_identity() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_right().turn_right().turn_right(), d);
        }
    }

    #[test]
    fn left_inverts_right() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_left(), d);
            assert_eq!(d.turn_left().turn_right(), d);
        }
    }

    #[test]
    fn opposite_negates_both_components() {
        for d in Direction::ALL {
            let o = d.opposite();
            assert_eq!(o.dx(), -d.dx());
            assert_eq!(o.dy(), -d.dy());
            assert_eq!(o.opposite(), d);
        }
    }

    #[test]
    fn two_right_turns_are_opposite() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_right(), d.opposite());
        }
    }
}

#[cfg(test)]
mod instruction {
    use crate::Instruction;
    use crate::instruction::program_string;

    #[test]
    fn char_roundtrip() {
        for i in Instruction::ALL {
            assert_eq!(Instruction::from_char(i.as_char()), Some(i));
        }
    }

    #[test]
    fn unknown_char_rejected() {
        assert_eq!(Instruction::from_char('x'), None);
        assert_eq!(Instruction::from_char(' '), None);
        assert_eq!(Instruction::from_char('I'), None);
    }

    #[test]
    fn program_rendering() {
        let prog = vec![Instruction::Move, Instruction::Move, Instruction::Sniff];
        assert_eq!(program_string(&prog), "iiw");
        assert_eq!(program_string(&[]), "");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: usize = rng.gen_range(0..7);
            assert!(v < 7);
        }
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

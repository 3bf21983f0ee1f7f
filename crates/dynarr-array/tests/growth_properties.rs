//! Integration test: growth and editing properties checked against `Vec`.
//!
//! Random operation sequences are applied to a `DynamicArray` and to a
//! `Vec` model side by side; after each step the two must hold the same
//! sequence and the array must respect `len <= capacity`.

use dynarr_array::{ArrayError, DynamicArray};
use dynarr_test_utils::DropCounter;
use proptest::prelude::*;

// ── Operation model ─────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PopBack,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
    ShrinkToFit,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        1 => Just(Op::PopBack),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..40).prop_map(Op::Resize),
        1 => (0usize..80).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
        1 => Just(Op::ShrinkToFit),
    ]
}

fn apply(array: &mut DynamicArray<i32>, model: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::PushBack(v) => {
            array.push_back(v);
            model.push(v);
        }
        Op::PopBack => assert_eq!(array.pop_back(), model.pop()),
        Op::Insert(p, v) => {
            let p = p % (model.len() + 1);
            assert_eq!(*array.insert(p, v), v);
            model.insert(p, v);
        }
        Op::Erase(p) => {
            if !model.is_empty() {
                let p = p % model.len();
                assert_eq!(array.erase(p), model.remove(p));
            }
        }
        Op::Resize(n) => {
            array.resize(n);
            model.resize(n, 0);
        }
        Op::Reserve(n) => {
            let before = array.capacity();
            array.reserve(n);
            assert_eq!(array.capacity(), before.max(n));
        }
        Op::Clear => {
            let before = array.capacity();
            array.clear();
            model.clear();
            assert_eq!(array.capacity(), before);
        }
        Op::ShrinkToFit => {
            array.shrink_to_fit();
            assert_eq!(array.capacity(), model.len());
        }
    }
}

fn array_of(values: &[i32]) -> DynamicArray<i32> {
    values.iter().copied().collect()
}

// ── Properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn random_edits_match_vec(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut array = DynamicArray::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut array, &mut model, op);
            prop_assert_eq!(array.as_slice(), model.as_slice());
            prop_assert!(array.len() <= array.capacity());
        }
    }

    #[test]
    fn appends_relocate_at_most_twice_n(n in 0usize..5_000) {
        let mut array = DynamicArray::new();
        let mut relocated = 0usize;
        let mut relocations = 0usize;
        for i in 0..n {
            let capacity = array.capacity();
            let ptr = array.as_ptr();
            let moved = array.len();
            array.push_back(i);
            if array.capacity() != capacity {
                prop_assert!(array.as_ptr() != ptr || moved == 0);
                relocations += 1;
                relocated += moved;
            } else {
                prop_assert_eq!(array.as_ptr(), ptr);
            }
        }
        prop_assert_eq!(array.len(), n);
        prop_assert!(relocations <= usize::BITS as usize);
        prop_assert!(relocated <= 2 * n, "relocated {} for {} appends", relocated, n);
    }

    #[test]
    fn checked_and_unchecked_access_agree(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let array = array_of(&values);
        for i in 0..array.len() {
            prop_assert_eq!(array.at(i), Ok(&array[i]));
            prop_assert_eq!(unsafe { array.get_unchecked(i) }, &values[i]);
        }
        for i in array.len()..array.len() + 3 {
            prop_assert_eq!(array.at(i), Err(ArrayError::OutOfRange { index: i, len: array.len() }));
        }
    }

    #[test]
    fn insert_then_erase_round_trips(
        values in prop::collection::vec(any::<i32>(), 0..32),
        pos in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut array = array_of(&values);
        let pos = pos % (values.len() + 1);
        array.insert(pos, value);
        prop_assert_eq!(array[pos], value);
        prop_assert_eq!(array.erase(pos), value);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn clone_is_independent(
        values in prop::collection::vec(any::<i32>(), 1..32),
        extra in any::<i32>(),
    ) {
        let original = array_of(&values);
        let mut copy = original.clone();
        copy.push_back(extra);
        copy[0] = copy[0].wrapping_add(1);
        copy.erase(copy.len() / 2);
        prop_assert_eq!(original.as_slice(), values.as_slice());
    }

    #[test]
    fn take_transfers_sequence(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut source = array_of(&values);
        let ptr = source.as_ptr();
        let destination = source.take();
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(source.capacity(), 0);
        prop_assert_eq!(destination.as_slice(), values.as_slice());
        prop_assert_eq!(destination.as_ptr(), ptr);
    }

    #[test]
    fn reserve_at_or_below_capacity_is_noop(
        values in prop::collection::vec(any::<i32>(), 0..32),
        slack in 0usize..8,
    ) {
        let mut array = array_of(&values);
        array.reserve(array.len() + slack);
        let capacity = array.capacity();
        let ptr = array.as_ptr();
        array.reserve(capacity.saturating_sub(slack));
        array.reserve(capacity);
        prop_assert_eq!(array.capacity(), capacity);
        prop_assert_eq!(array.as_ptr(), ptr);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn every_element_dropped_exactly_once(ops in prop::collection::vec(arb_op(), 0..48)) {
        let drops = DropCounter::new();
        let mut created = 0usize;
        {
            let mut array = DynamicArray::new();
            for op in &ops {
                match *op {
                    Op::PushBack(_) => {
                        array.push_back(drops.track(created));
                        created += 1;
                    }
                    Op::PopBack => drop(array.pop_back()),
                    Op::Insert(p, _) => {
                        let p = p % (array.len() + 1);
                        array.insert(p, drops.track(created));
                        created += 1;
                    }
                    Op::Erase(p) => {
                        if !array.is_empty() {
                            let p = p % array.len();
                            drop(array.erase(p));
                        }
                    }
                    Op::Resize(n) => {
                        let before = array.len();
                        array.resize_with(n, || drops.track(usize::MAX));
                        created += n.saturating_sub(before);
                    }
                    Op::Reserve(n) => array.reserve(n),
                    Op::Clear => array.clear(),
                    Op::ShrinkToFit => array.shrink_to_fit(),
                }
                prop_assert_eq!(drops.dropped() + array.len(), created);
            }
        }
        prop_assert_eq!(drops.dropped(), created);
    }
}

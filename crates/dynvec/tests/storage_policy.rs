//! Cross-operation storage-policy scenarios: growth amortization, shrink
//! reclamation, deep-copy independence, and boundary behavior.

use dynvec::{DynVec, VecError};

#[test]
fn pushing_n_elements_reallocates_log_n_times() {
    let n = 1000;
    let mut v = DynVec::new();
    let mut capacities = vec![0];
    for i in 0..n {
        v.push(i).unwrap();
        if v.capacity() != *capacities.last().unwrap() {
            capacities.push(v.capacity());
        }
    }
    // Capacity follows the doubling sequence 1, 2, 4, ... until >= n.
    assert_eq!(capacities, vec![0, 1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024]);
    // O(log n) reallocations for n pushes.
    assert!(capacities.len() <= (n as f64).log2().ceil() as usize + 2);
}

#[test]
fn bulk_deletion_reclaims_storage() {
    let n = 256;
    let mut v = DynVec::new();
    for i in 0..n {
        v.push(i).unwrap();
    }
    assert_eq!(v.capacity(), n);

    // Erase down to n/4. Capacity must track occupancy down, not stay at n.
    while v.len() > n / 4 {
        v.erase(v.len() - 1).unwrap();
    }
    assert_eq!(v.len(), n / 4);
    assert_eq!(v.capacity(), n / 2);
    assert!(v.capacity() < n);

    // Surviving elements are intact.
    let expected: Vec<usize> = (0..n / 4).collect();
    assert_eq!(v.as_slice(), expected.as_slice());
}

#[test]
fn erase_from_the_front_preserves_order_across_shrinks() {
    let mut v = DynVec::new();
    for i in 0..64 {
        v.push(i).unwrap();
    }
    for _ in 0..48 {
        v.erase(0).unwrap();
    }
    let expected: Vec<i32> = (48..64).collect();
    assert_eq!(v.as_slice(), expected.as_slice());
    assert!(v.capacity() >= v.len());
    assert!(v.capacity() <= 2 * v.len());
}

#[test]
fn deep_copy_of_string_vector_is_independent() {
    let mut v1 = DynVec::new();
    for word in ["one", "two", "three"] {
        v1.push(word.to_string()).unwrap();
    }

    let mut v2 = v1.clone();
    v2.push("four".to_string()).unwrap();
    v2.erase(0).unwrap();
    v2.get_mut(0).unwrap().make_ascii_uppercase();

    assert_eq!(v1.len(), 3);
    let got: Vec<&str> = v1.iter().map(String::as_str).collect();
    assert_eq!(got, vec!["one", "two", "three"]);
}

#[test]
fn copies_can_be_taken_from_a_shared_source() {
    let mut source = DynVec::new();
    for i in 0..32u64 {
        source.push(i).unwrap();
    }
    // Copying only reads the source; several copies from the same source
    // all come out identical and fully owned.
    let a = source.try_clone().unwrap();
    let b = source.try_clone().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_slice(), source.as_slice());
    drop(source);
    assert_eq!(a.len(), 32);
    assert_eq!(*b.get(31).unwrap(), 31);
}

#[test]
fn insert_at_every_position_then_erase_restores_sequence() {
    let base: Vec<i32> = (0..10).collect();
    for i in 0..=base.len() {
        let mut v = DynVec::from_slice(&base).unwrap();
        v.insert(-1, i).unwrap();
        assert_eq!(v.len(), base.len() + 1);
        assert_eq!(v.erase(i).unwrap(), -1);
        assert_eq!(v.as_slice(), base.as_slice());
    }
}

#[test]
fn boundary_scenarios() {
    // Insert into an empty vector at index 0.
    let mut v = DynVec::new();
    v.insert("only".to_string(), 0).unwrap();
    assert_eq!(v.len(), 1);
    assert_eq!(v.get(0).unwrap(), "only");

    // Erase on an empty vector signals out-of-range, size stays 0.
    let mut empty: DynVec<i32> = DynVec::new();
    assert!(matches!(
        empty.erase(0),
        Err(VecError::OutOfBounds { index: 0, len: 0 })
    ));
    assert_eq!(empty.len(), 0);

    // Indexed access at len() fails; it never yields a slot value.
    let mut v = DynVec::new();
    v.push(1).unwrap();
    assert!(matches!(
        v.get(v.len()),
        Err(VecError::OutOfBounds { index: 1, len: 1 })
    ));

    // A never-pushed vector reports size 0.
    let untouched: DynVec<String> = DynVec::new();
    assert_eq!(untouched.len(), 0);
}

#[test]
fn mixed_element_types_share_storage_behavior() {
    let mut strings = DynVec::new();
    let mut ints = DynVec::new();

    for i in 0..100u32 {
        strings.push(format!("item-{i}")).unwrap();
        ints.push(i).unwrap();
    }
    strings.insert("front".to_string(), 0).unwrap();
    ints.insert(999, 0).unwrap();
    while strings.len() > 10 {
        strings.erase(strings.len() / 2).unwrap();
        ints.erase(ints.len() / 2).unwrap();
    }

    // No type-specific special-casing: identical size/capacity evolution.
    assert_eq!(strings.len(), ints.len());
    assert_eq!(strings.capacity(), ints.capacity());
}

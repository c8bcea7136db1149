use tabvec::{Container, Error, Vector};

#[test]
fn yields_every_element_in_order() {
    let vector: Vector<_> = (0..10).collect();

    let mut count = 0;
    for (i, value) in vector.iter().enumerate() {
        assert_eq!(Ok(value), vector.element(i));
        count += 1;
    }

    assert_eq!(count, 10);
}

#[test]
fn empty_iteration_yields_nothing() {
    let vector: Vector<i32> = Vector::new();
    assert_eq!(vector.iter().next(), None);
}

#[test]
fn reports_exact_size() {
    let vector: Vector<_> = (0..4).collect();

    let mut iter = vector.iter();
    assert_eq!(iter.len(), 4);

    iter.next();
    assert_eq!(iter.len(), 3);
}

#[test]
fn iterates_from_both_ends() {
    let vector: Vector<_> = vec![1, 2, 3, 4].into();

    let mut iter = vector.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn mutates_through_iter_mut() {
    let mut vector: Vector<_> = vec![1, 2, 3].into();

    for value in vector.iter_mut() {
        *value *= 10;
    }

    assert_eq!(vector.as_slice(), &[10, 20, 30]);
}

#[test]
fn for_loops_over_references() {
    let mut vector: Vector<_> = vec![1, 2, 3].into();

    let mut total = 0;
    for value in &vector {
        total += value;
    }
    assert_eq!(total, 6);

    for value in &mut vector {
        *value += 1;
    }
    assert_eq!(vector.as_slice(), &[2, 3, 4]);
}

#[test]
fn owning_iteration_moves_elements_out() {
    let mut vector = Vector::new();
    vector.push_back("a".to_string());
    vector.push_back("b".to_string());

    let values: Vec<String> = vector.into_iter().collect();
    assert_eq!(values, ["a", "b"]);
}

#[test]
fn owning_iteration_from_both_ends() {
    let vector: Vector<_> = vec![1, 2, 3].into();

    let mut iter = vector.into_iter();
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
}

#[test]
fn partial_owning_iteration_drops_the_rest() {
    let vector: Vector<_> = vec!["a".to_string(), "b".to_string(), "c".to_string()].into();

    let mut iter = vector.into_iter();
    assert_eq!(iter.next().as_deref(), Some("a"));
    // The remaining elements are released when the iterator drops
    drop(iter);
}

#[test]
fn filtering_skips_non_matching() {
    let vector: Vector<_> = (0..10).collect();

    let even: Vec<_> = vector.iter_filtered(|value| value % 2 == 0).collect();
    assert_eq!(even, [&0, &2, &4, &6, &8]);
}

#[test]
fn filtering_can_reject_everything() {
    let vector: Vector<_> = (0..10).collect();

    let mut none = vector.iter_filtered(|_| false);
    assert_eq!(none.next(), None);
    assert_eq!(none.next(), None);
}

#[test]
fn filtering_can_accept_everything() {
    let vector: Vector<_> = vec![1, 2, 3].into();

    let all: Vec<_> = vector.iter_filtered(|_| true).collect();
    assert_eq!(all.len(), 3);
}

#[test]
fn cursor_walks_the_container() {
    let vector: Vector<_> = vec![1, 2, 3].into();
    let mut cursor = vector.cursor();

    let mut seen = Vec::new();
    while !cursor.done() {
        seen.push(*cursor.current().unwrap());
        cursor.advance().unwrap();
    }

    assert_eq!(seen, [1, 2, 3]);
}

#[test]
fn cursor_rejects_advancing_past_the_end() {
    let vector: Vector<_> = vec![1].into();
    let mut cursor = vector.cursor();

    cursor.advance().unwrap();
    assert!(cursor.done());
    assert_eq!(
        cursor.current(),
        Err(Error::OutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        cursor.advance(),
        Err(Error::OutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn cursor_on_empty_container_is_done_immediately() {
    let vector: Vector<i32> = Vector::new();
    let cursor = vector.cursor();

    assert!(cursor.done());
    assert_eq!(
        cursor.current(),
        Err(Error::OutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn collects_from_an_iterator() {
    let vector: Vector<_> = "abc".chars().collect();
    assert_eq!(vector.as_slice(), &['a', 'b', 'c']);

    let mut vector = vector;
    vector.extend("de".chars());
    assert_eq!(vector.len(), 5);
    assert_eq!(vector.back(), Ok(&'e'));
}

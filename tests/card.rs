//! Card source tests.

use bjlite::{CardSource, FACES, MAX_CARD_VALUE, MIN_CARD_VALUE, SeededCards, card_value};

#[test]
fn face_mapping() {
    assert_eq!(card_value(1), 11);
    for face in 2..=10 {
        assert_eq!(card_value(face), face);
    }
    for face in 11..=FACES {
        assert_eq!(card_value(face), 10);
    }
    assert_eq!(card_value(0), 0);
    assert_eq!(card_value(14), 0);
}

#[test]
fn draws_stay_in_range() {
    let mut cards = SeededCards::new(12_345);
    for _ in 0..10_000 {
        let value = cards.draw();
        assert!((MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value), "{value}");
    }
}

#[test]
fn every_face_comes_up() {
    let mut cards = SeededCards::new(8);
    let mut seen = [false; FACES as usize];
    for _ in 0..10_000 {
        let face = cards.face();
        assert!((1..=FACES).contains(&face));
        seen[usize::from(face - 1)] = true;
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn tens_are_most_common() {
    let mut cards = SeededCards::new(21);
    let mut counts = [0usize; 12];
    for _ in 0..13_000 {
        counts[usize::from(cards.draw())] += 1;
    }
    // Four faces map to 10; every other value has one face.
    let tens = counts[10];
    for value in 2..=11 {
        if value != 10 {
            assert!(tens > counts[value] * 2, "value {value}: {counts:?}");
        }
    }
}

#[test]
fn seed_is_reproducible() {
    let mut a = SeededCards::new(5);
    let mut b = SeededCards::new(5);
    let left: Vec<u8> = (0..50).map(|_| a.draw()).collect();
    let right: Vec<u8> = (0..50).map(|_| b.draw()).collect();
    assert_eq!(left, right);
}

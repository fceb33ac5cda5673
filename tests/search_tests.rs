use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use mstring::MString;

#[test]
fn test_compare_equal() {
    let left = MString::from_bytes(b"Hello").unwrap();
    let right = MString::from_bytes(b"Hello").unwrap();

    assert_eq!(left.compare(&right), Ordering::Equal);
    assert_eq!(left, right);
}

#[test]
fn test_compare_ordering() {
    let left = MString::from_bytes(b"abcd").unwrap();
    let right = MString::from_bytes(b"efgh").unwrap();

    assert_eq!(left.compare(&right), Ordering::Less);
    assert_eq!(right.compare(&left), Ordering::Greater);
    assert!(left < right);
}

#[test]
fn test_compare_prefix_sorts_first() {
    let short = MString::from_bytes(b"abc").unwrap();
    let long = MString::from_bytes(b"abcd").unwrap();

    assert_eq!(short.compare(&long), Ordering::Less);
    assert_eq!(long.compare(&short), Ordering::Greater);
}

#[test]
fn test_compare_is_bytewise() {
    let upper = MString::from_bytes(b"Z").unwrap();
    let lower = MString::from_bytes(b"a").unwrap();
    let high = MString::from_bytes(&[0xc3]).unwrap();

    assert_eq!(upper.compare(&lower), Ordering::Less);
    assert_eq!(lower.compare(&high), Ordering::Less);
}

#[test]
fn test_compare_ignores_capacity() {
    let exact = MString::from_bytes(b"same").unwrap();
    let mut roomy = MString::with_capacity(64).unwrap();
    roomy.push_str("same").unwrap();

    assert_ne!(exact.capacity(), roomy.capacity());
    assert_eq!(exact.compare(&roomy), Ordering::Equal);

    let mut set = HashSet::new();
    set.insert(exact);
    assert!(set.contains(&roomy));
    assert!(set.contains(&b"same"[..]));
}

#[test]
fn test_sorting() {
    let set: BTreeSet<MString> = ["pear", "apple", "fig"]
        .into_iter()
        .map(|word| MString::try_from(word).unwrap())
        .collect();

    let sorted: Vec<Vec<u8>> = set.into_iter().map(MString::into_bytes).collect();
    assert_eq!(sorted, [b"apple".to_vec(), b"fig".to_vec(), b"pear".to_vec()]);
}

#[test]
fn test_find_char() {
    let s = MString::from_bytes(b"hello world").unwrap();

    assert_eq!(s.find_char(b'h'), Some(0));
    assert_eq!(s.find_char(b'o'), Some(4));
    assert_eq!(s.find_char(b'd'), Some(10));
    assert_eq!(s.find_char(b'z'), None);
}

#[test]
fn test_find_char_ignores_spare_capacity() {
    let mut s = MString::from_bytes(b"abc").unwrap();
    s.reserve(16).unwrap();

    assert_eq!(s.find_char(0), None);

    s.resize(1).unwrap();
    assert_eq!(s.find_char(b'b'), None);
}

#[test]
fn test_find() {
    let s = MString::from_bytes(b"abcabcd").unwrap();

    assert_eq!(s.find(b"abc"), Some(0));
    assert_eq!(s.find(b"bca"), Some(1));
    assert_eq!(s.find(b"abcd"), Some(3));
    assert_eq!(s.find(b"abcde"), None);
    assert_eq!(s.find(b"x"), None);
    assert!(s.contains(b"cab"));
    assert!(!s.contains(b"dd"));
}

#[test]
fn test_find_empty_needle() {
    let s = MString::from_bytes(b"abc").unwrap();
    assert_eq!(s.find(b""), Some(0));

    let empty = MString::new().unwrap();
    assert_eq!(empty.find(b""), Some(0));
    assert_eq!(empty.find(b"a"), None);
    assert_eq!(empty.find_char(b'a'), None);
}

#[test]
fn test_find_needle_longer_than_content() {
    let s = MString::from_bytes(b"ab").unwrap();

    assert_eq!(s.find(b"abc"), None);
}

use infinite_stream::stream::{iterate, repeat, InfiniteStream};
use quickcheck::quickcheck;
use std::cell::Cell;
use std::rc::Rc;

fn naturals() -> InfiniteStream<u64> {
    iterate(0, |n| n + 1)
}

#[test]
fn test_head_and_tail() {
    let stream = naturals();
    assert_eq!(stream.head(), 0);
    assert_eq!(stream.tail().head(), 1);
    // the original value is untouched by advancing
    assert_eq!(stream.head(), 0);
}

#[test]
fn test_nth() {
    assert_eq!(naturals().nth(0), 0);
    assert_eq!(naturals().nth(42), 42);
}

#[test]
fn test_take_zero_is_empty() {
    assert_eq!(naturals().take(0), Vec::<u64>::new());
}

#[test]
fn test_skip() {
    let skipped = naturals().skip(3);
    assert_eq!(skipped.take(3), vec![3, 4, 5]);
}

#[test]
fn test_skip_large_does_not_overflow_stack() {
    assert_eq!(naturals().skip(200_000).head(), 200_000);
}

#[test]
fn test_split_at() {
    let (prefix, rest) = naturals().split_at(4);
    assert_eq!(prefix, vec![0, 1, 2, 3]);
    assert_eq!(rest.take(2), vec![4, 5]);
}

#[test]
fn test_split_at_zero() {
    let (prefix, rest) = naturals().split_at(0);
    assert!(prefix.is_empty());
    assert_eq!(rest.head(), 0);
}

#[test]
fn test_take_while() {
    let small = naturals().take_while(|&n| n < 5);
    assert_eq!(small, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_take_while_false_at_head() {
    let none = naturals().take_while(|&n| n > 100);
    assert!(none.is_empty());
}

#[test]
fn test_skip_while() {
    let rest = naturals().skip_while(|&n| n < 10);
    assert_eq!(rest.take(3), vec![10, 11, 12]);
}

#[test]
fn test_skip_while_is_deferred() {
    // An always-true predicate would never finish, but nothing is forced yet.
    let stream = repeat(1).skip_while(|_| true);
    drop(stream);
}

#[test]
fn test_filter() {
    let evens = naturals().filter(|n| n % 2 == 0);
    assert_eq!(evens.take(5), vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_filter_is_lazy() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let filtered = naturals().filter(move |n| {
        counter.set(counter.get() + 1);
        n % 3 == 0
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(filtered.head(), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_inits() {
    let prefixes = naturals().inits().take(4);
    assert_eq!(
        prefixes,
        vec![vec![], vec![0], vec![0, 1], vec![0, 1, 2]]
    );
}

#[test]
fn test_tails() {
    let suffixes = naturals().tails();
    let heads: Vec<u64> = suffixes.take(4).iter().map(|s| s.head()).collect();
    assert_eq!(heads, vec![0, 1, 2, 3]);
    assert_eq!(suffixes.nth(5).take(2), vec![5, 6]);
}

#[test]
fn test_iterator_bounded_by_take() {
    let collected: Vec<u64> = naturals().into_iter().skip(2).take(3).collect();
    assert_eq!(collected, vec![2, 3, 4]);
}

#[test]
fn test_iterator_for_loop_with_break() {
    let mut sum = 0;
    for n in naturals() {
        if n > 10 {
            break;
        }
        sum += n;
    }
    assert_eq!(sum, 55);
}

#[test]
fn prop_split_at_agrees_with_take_and_skip() {
    fn prop(start: u32, n: u8) -> bool {
        let stream = iterate(start as u64, |x| x + 1);
        let (prefix, rest) = stream.clone().split_at(n as usize);
        prefix == stream.take(n as usize) && rest.head() == stream.clone().skip(n as usize).head()
    }
    quickcheck(prop as fn(u32, u8) -> bool);
}

#[test]
fn prop_filter_only_keeps_matches() {
    fn prop(modulus: u8) -> bool {
        let modulus = (modulus as u64 % 7) + 1;
        naturals()
            .filter(move |n| n % modulus == 0)
            .take(10)
            .iter()
            .all(|n| n % modulus == 0)
    }
    quickcheck(prop as fn(u8) -> bool);
}

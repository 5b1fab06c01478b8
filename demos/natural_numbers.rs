use infinite_stream::stream::{cycle, iterate, zip_with, InfiniteStream};
use infinite_stream::StreamResult;

fn main() -> StreamResult<()> {
    let naturals = iterate(0u64, |n| n + 1);
    println!("naturals: {}", naturals);
    println!("first ten: {:?}", naturals.take(10));

    let primes = naturals
        .clone()
        .skip(2)
        .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0));
    println!("first primes: {:?}", primes.take(8));

    let triangular = naturals.clone().skip(1).scan1(|acc, n| acc + n);
    println!("triangular numbers: {:?}", triangular.take(6));

    let fibonacci = InfiniteStream::unfold((0u64, 1u64), |(a, b)| (a, (b, a + b)));
    let weekdays = cycle(vec!["mon", "tue", "wed", "thu", "fri", "sat", "sun"])?;
    let labelled = zip_with(|day, fib| format!("{day}:{fib}"), weekdays, fibonacci);
    println!("labelled fibonacci: {:?}", labelled.take(9));

    Ok(())
}

use infinite_stream::algebra::{Comonad, Copointed};
use infinite_stream::stream::{cycle, InfiniteStream};
use infinite_stream::{Evaluation, StreamConfig, StreamResult};

/// Moving average over a window of three readings.
fn moving_average(window: InfiniteStream<f64>) -> f64 {
    window.take(3).iter().sum::<f64>() / 3.0
}

fn main() -> StreamResult<()> {
    let config = StreamConfig::from_json(r#"{ "evaluation": "memoize" }"#)?;
    let readings = cycle(vec![10.0, 12.0, 11.0, 15.0, 9.0])?.configure(&config);

    println!("current reading: {}", readings.extract());

    let smoothed = readings.clone().extend(moving_average);
    println!("smoothed: {:?}", smoothed.take(5));

    let windows = readings.duplicate().map(|w| w.take(3));
    println!("windows: {:?}", windows.take(3));

    if config.evaluation == Evaluation::Memoize {
        println!("readings were memoized per node");
    }
    Ok(())
}

//! Bounded-concurrency fan-out for one base URL's candidate batch.

use std::future::Future;

use futures::future;
use futures::stream::{self, StreamExt};

use crate::probe::{ProbeRequest, ProbeResult};

/// Runs a candidate batch with at most `threads` executions in flight and
/// hands every outcome to `report`. Returns only once every candidate has
/// been executed and reported; completion order is whatever the network
/// gives us. Backpressure comes from the stream itself: a new candidate
/// is only pulled when a slot frees up.
pub async fn run<E, F, R>(probes: Vec<ProbeRequest>, threads: usize, execute: E, mut report: R)
where
    E: Fn(ProbeRequest) -> F,
    F: Future<Output = ProbeResult>,
    R: FnMut(ProbeResult),
{
    stream::iter(probes)
        .map(execute)
        .buffer_unordered(threads.max(1))
        .for_each(|result| {
            report(result);
            future::ready(())
        })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::delay_for;

    fn batch(n: usize) -> Vec<ProbeRequest> {
        (0..n)
            .map(|i| ProbeRequest::get(format!("http://target.example/{}", i)))
            .collect()
    }

    /// Executor double that tracks the in-flight high-water mark.
    fn tracking_executor(
        in_flight: Arc<AtomicUsize>,
        high_water: Arc<AtomicUsize>,
    ) -> impl Fn(ProbeRequest) -> futures::future::BoxFuture<'static, ProbeResult> {
        use futures::FutureExt;
        move |probe: ProbeRequest| {
            let in_flight = in_flight.clone();
            let high_water = high_water.clone();
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                high_water.fetch_max(now, Ordering::SeqCst);
                delay_for(Duration::from_millis(5)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                ProbeResult {
                    status: 200,
                    request: probe,
                }
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn in_flight_never_exceeds_threads() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let high_water = Arc::new(AtomicUsize::new(0));
        let mut reported = 0usize;

        run(
            batch(40),
            3,
            tracking_executor(in_flight.clone(), high_water.clone()),
            |_| reported += 1,
        )
        .await;

        assert!(high_water.load(Ordering::SeqCst) <= 3);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
        assert_eq!(reported, 40);
    }

    #[tokio::test]
    async fn every_candidate_is_reported_exactly_once() {
        let probes = batch(25);
        let expected: BTreeSet<String> = probes.iter().map(|p| p.url.clone()).collect();
        let mut seen: Vec<String> = Vec::new();

        run(
            probes,
            4,
            |probe| async move {
                ProbeResult {
                    status: 404,
                    request: probe,
                }
            },
            |result| seen.push(result.request.url),
        )
        .await;

        assert_eq!(seen.len(), 25);
        let unique: BTreeSet<String> = seen.into_iter().collect();
        assert_eq!(unique, expected);
    }

    #[tokio::test]
    async fn empty_batch_completes_without_reports() {
        let mut reported = 0usize;
        run(
            Vec::new(),
            4,
            |probe| async move {
                ProbeResult {
                    status: 200,
                    request: probe,
                }
            },
            |_| reported += 1,
        )
        .await;
        assert_eq!(reported, 0);
    }

    #[tokio::test]
    async fn single_candidate_completes() {
        let mut statuses = Vec::new();
        run(
            batch(1),
            4,
            |probe| async move {
                ProbeResult {
                    status: 301,
                    request: probe,
                }
            },
            |result| statuses.push(result.status),
        )
        .await;
        assert_eq!(statuses, vec![301]);
    }

    #[tokio::test]
    async fn zero_threads_is_clamped_to_one() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let high_water = Arc::new(AtomicUsize::new(0));
        let mut reported = 0usize;

        run(
            batch(5),
            0,
            tracking_executor(in_flight.clone(), high_water.clone()),
            |_| reported += 1,
        )
        .await;

        assert_eq!(high_water.load(Ordering::SeqCst), 1);
        assert_eq!(reported, 5);
    }
}

use futures::StreamExt;
use futures::stream::FuturesOrdered;
use log::debug;

use crate::core::types::ValidationSummary;
use crate::reporting::summary::{Aggregator, ProgressObserver};
use crate::validation::validator::ProbeUrl;

/// Validates URLs in fixed-size batches.
///
/// All URLs of a batch are probed concurrently and the batch is drained
/// completely before the next one starts, so at most `batch_size` probes are
/// ever in flight. Results come back in input order whatever order the
/// probes finish in.
#[derive(Debug)]
pub struct BatchValidator<P> {
    prober: P,
    batch_size: usize,
}

impl<P: ProbeUrl + Sync> BatchValidator<P> {
    /// A zero batch size is treated as one.
    pub fn new(prober: P, batch_size: usize) -> Self {
        Self {
            prober,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub async fn validate(
        &self,
        urls: &[String],
        observer: Option<&mut dyn ProgressObserver>,
    ) -> ValidationSummary {
        let mut aggregator = Aggregator::new(urls.len(), observer);

        for (batch_number, batch) in urls.chunks(self.batch_size).enumerate() {
            debug!(
                "Batch {} of {}: probing {} URL(s)",
                batch_number + 1,
                urls.len().div_ceil(self.batch_size),
                batch.len()
            );

            let mut in_flight: FuturesOrdered<_> =
                batch.iter().map(|url| self.prober.probe(url)).collect();

            while let Some(result) = in_flight.next().await {
                aggregator.record(result);
            }
        }

        aggregator.finish()
    }
}

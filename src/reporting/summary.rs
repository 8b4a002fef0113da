use crate::core::types::{ValidationResult, ValidationSummary};

/// Receives one notification per completed URL.
///
/// `current` counts results delivered so far (1-based) out of `total`.
pub trait ProgressObserver {
    fn on_result(&mut self, result: &ValidationResult, current: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ValidationResult, usize, usize),
{
    fn on_result(&mut self, result: &ValidationResult, current: usize, total: usize) {
        self(result, current, total)
    }
}

/// Collects validation results in order and notifies an optional observer.
pub struct Aggregator<'a> {
    total: usize,
    results: Vec<ValidationResult>,
    observer: Option<&'a mut dyn ProgressObserver>,
}

impl<'a> Aggregator<'a> {
    pub fn new(total: usize, observer: Option<&'a mut dyn ProgressObserver>) -> Self {
        Self {
            total,
            results: Vec::with_capacity(total),
            observer,
        }
    }

    pub fn record(&mut self, result: ValidationResult) {
        let current = self.results.len() + 1;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_result(&result, current, self.total);
        }
        self.results.push(result);
    }

    pub fn finish(self) -> ValidationSummary {
        ValidationSummary::from_results(self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(url: &str, success: bool) -> ValidationResult {
        ValidationResult::from_response(url.to_string(), success, None)
    }

    #[test]
    fn test_aggregator_without_observer() {
        let mut aggregator = Aggregator::new(2, None);
        aggregator.record(result("a", true));
        aggregator.record(result("b", false));

        let summary = aggregator.finish();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.results[0].url, "a");
        assert_eq!(summary.results[1].url, "b");
    }

    #[test]
    fn test_aggregator_notifies_observer_with_counter() {
        let mut calls = Vec::new();
        let mut observer = |r: &ValidationResult, current: usize, total: usize| {
            calls.push(format!("{}:{current}/{total}", r.url));
        };

        {
            let mut aggregator = Aggregator::new(3, Some(&mut observer));
            aggregator.record(result("a", true));
            aggregator.record(result("b", true));
            aggregator.record(result("c", false));
            aggregator.finish();
        }

        assert_eq!(calls, vec!["a:1/3", "b:2/3", "c:3/3"]);
    }

    #[test]
    fn test_struct_observer() {
        #[derive(Default)]
        struct Counter {
            failures: usize,
            last: Option<(usize, usize)>,
        }

        impl ProgressObserver for Counter {
            fn on_result(&mut self, result: &ValidationResult, current: usize, total: usize) {
                if result.is_not_ok() {
                    self.failures += 1;
                }
                self.last = Some((current, total));
            }
        }

        let mut counter = Counter::default();
        let mut aggregator = Aggregator::new(2, Some(&mut counter));
        aggregator.record(result("a", false));
        aggregator.record(result("b", false));
        let summary = aggregator.finish();

        assert_eq!(summary.failed, 2);
        assert_eq!(counter.failures, 2);
        assert_eq!(counter.last, Some((2, 2)));
    }
}

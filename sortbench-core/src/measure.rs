//! Per-trial timing record and metric-line parsing.

use crate::algorithm::Algorithm;
use crate::error::RunError;

/// One timing per algorithm, in milliseconds.
///
/// Created per trial from parsed output, then a second instance per sweep
/// configuration serves as the running total: fold trials in with [`add`],
/// convert to a mean in place with [`divide`]. Fields are never partially
/// updated; a `Measure` either comes out of a fully parsed run or starts
/// zeroed as an accumulator.
///
/// [`add`]: Measure::add
/// [`divide`]: Measure::divide
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measure {
    /// `std::sort` timing.
    pub cppsort: f64,
    /// libc `qsort` timing.
    pub qsort: f64,
    /// qqsort timing.
    pub qqsort: f64,
}

impl Measure {
    /// Construct a measure from per-algorithm timings.
    pub fn new(cppsort: f64, qsort: f64, qqsort: f64) -> Self {
        Self {
            cppsort,
            qsort,
            qqsort,
        }
    }

    /// Timing for one algorithm.
    pub fn value(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::CppSort => self.cppsort,
            Algorithm::Qsort => self.qsort,
            Algorithm::Qqsort => self.qqsort,
        }
    }

    /// Element-wise accumulation, in place.
    pub fn add(&mut self, other: &Measure) {
        self.cppsort += other.cppsort;
        self.qsort += other.qsort;
        self.qqsort += other.qqsort;
    }

    /// Element-wise division by the trial count, in place.
    ///
    /// `n` is the configured number of trials and is at least 1 by
    /// construction; a zero divisor is a defect in the caller.
    pub fn divide(&mut self, n: u32) {
        let divisor = f64::from(n);
        self.cppsort /= divisor;
        self.qsort /= divisor;
        self.qqsort /= divisor;
    }
}

/// Parse captured benchmark output into a [`Measure`].
///
/// Scans line by line for lines beginning with a recognized bracketed tag
/// and takes the third whitespace-separated token as an integer millisecond
/// value. The scan is deliberately permissive: metric lines may appear in
/// any order, interleaved with arbitrary diagnostic output. Each tag is
/// expected to appear exactly once; on a duplicate the last value wins.
///
/// Fails with [`RunError::MissingMetric`] if any tag never produced a
/// well-formed value.
pub fn parse_measure(text: &str) -> Result<Measure, RunError> {
    let mut observed: [Option<u64>; 3] = [None; 3];

    for line in text.lines() {
        for (slot, algorithm) in observed.iter_mut().zip(Algorithm::ALL) {
            if !line.starts_with(algorithm.line_prefix()) {
                continue;
            }
            // Third token is the value; a malformed token leaves the
            // metric unobserved rather than recording garbage.
            if let Some(value) = line
                .split_whitespace()
                .nth(2)
                .and_then(|token| token.parse::<u64>().ok())
            {
                *slot = Some(value);
            }
        }
    }

    for (slot, algorithm) in observed.iter().zip(Algorithm::ALL) {
        if slot.is_none() {
            return Err(RunError::MissingMetric(algorithm));
        }
    }

    let value = |i: usize| observed[i].unwrap_or_default() as f64;
    Ok(Measure::new(value(0), value(1), value(2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_all_fields() {
        let mut total = Measure::default();
        total.add(&Measure::new(10.0, 40.0, 8.0));
        total.add(&Measure::new(14.0, 50.0, 10.0));
        assert_eq!(total, Measure::new(24.0, 90.0, 18.0));
    }

    #[test]
    fn value_selects_the_algorithm_field() {
        let measure = Measure::new(12.0, 45.0, 9.0);
        assert_eq!(measure.value(Algorithm::CppSort), 12.0);
        assert_eq!(measure.value(Algorithm::Qsort), 45.0);
        assert_eq!(measure.value(Algorithm::Qqsort), 9.0);
    }

    #[test]
    fn divide_yields_arithmetic_mean() {
        // Two seeds yielding (10, 40, 8) and (14, 50, 10) average to (12, 45, 9).
        let mut total = Measure::default();
        total.add(&Measure::new(10.0, 40.0, 8.0));
        total.add(&Measure::new(14.0, 50.0, 10.0));
        total.divide(2);
        assert_eq!(total, Measure::new(12.0, 45.0, 9.0));
    }

    #[test]
    fn parse_canonical_output() {
        let out = "[cppsort] elapsed 12\n[qsort] elapsed 45\n[qqsort] elapsed 9\n";
        let measure = parse_measure(out).unwrap();
        assert_eq!(measure, Measure::new(12.0, 45.0, 9.0));
    }

    #[test]
    fn parse_is_order_independent() {
        let canonical = "[cppsort] elapsed 12\n[qsort] elapsed 45\n[qqsort] elapsed 9\n";
        let permuted = "[qqsort] elapsed 9\n[cppsort] elapsed 12\n[qsort] elapsed 45\n";
        assert_eq!(
            parse_measure(canonical).unwrap(),
            parse_measure(permuted).unwrap()
        );
    }

    #[test]
    fn parse_tolerates_interleaved_diagnostics() {
        let out = "\
generating 1000 elements
[cppsort] elapsed 12
note: cache warm
[qsort] elapsed 45
[unknown] elapsed 99
[qqsort] elapsed 9
done
";
        let measure = parse_measure(out).unwrap();
        assert_eq!(measure, Measure::new(12.0, 45.0, 9.0));
    }

    #[test]
    fn parse_splits_on_arbitrary_whitespace() {
        let out = "[cppsort]\telapsed\t 12\n[qsort]  took   45\n[qqsort] x 9\n";
        let measure = parse_measure(out).unwrap();
        assert_eq!(measure, Measure::new(12.0, 45.0, 9.0));
    }

    #[test]
    fn parse_fails_naming_the_missing_metric() {
        let out = "[cppsort] elapsed 12\n[qqsort] elapsed 9\n";
        match parse_measure(out) {
            Err(RunError::MissingMetric(algorithm)) => {
                assert_eq!(algorithm, Algorithm::Qsort);
            }
            other => panic!("expected MissingMetric, got {other:?}"),
        }
    }

    #[test]
    fn parse_treats_malformed_value_as_missing() {
        let out = "[cppsort] elapsed twelve\n[qsort] elapsed 45\n[qqsort] elapsed 9\n";
        assert!(matches!(
            parse_measure(out),
            Err(RunError::MissingMetric(Algorithm::CppSort))
        ));
    }

    #[test]
    fn parse_requires_third_token() {
        let out = "[cppsort] 12\n[qsort] elapsed 45\n[qqsort] elapsed 9\n";
        assert!(matches!(
            parse_measure(out),
            Err(RunError::MissingMetric(Algorithm::CppSort))
        ));
    }

    #[test]
    fn parse_empty_output_fails() {
        assert!(matches!(
            parse_measure(""),
            Err(RunError::MissingMetric(Algorithm::CppSort))
        ));
    }

    #[test]
    fn duplicate_metric_line_last_value_wins() {
        let out = "[cppsort] elapsed 12\n[cppsort] elapsed 20\n[qsort] x 45\n[qqsort] x 9\n";
        let measure = parse_measure(out).unwrap();
        assert_eq!(measure.cppsort, 20.0);
    }
}

//! Real-to-complex buffer packing for descriptor-based FFT execution.
//!
//! Complex transforms consume interleaved `(re, im)` pairs, so a length-N
//! real signal has to be widened into a 2N buffer with zero imaginary
//! slots before it can be handed to the transform. The packing here is
//! specified generatively: [`Interleaved`] presents the interleaved layout
//! as a lazy [`SampleSequence`] whose elements are computed on demand, and
//! a consumer that only needs a reduction over the packed values can fold
//! the sequence directly without the intermediate buffer ever existing.
//!
//! # Example
//!
//! ```
//! use mklfft_buffer::real_to_complex;
//!
//! let samples = [1.0, 2.0, 3.0];
//! let mut packed = [0.0f64; 6];
//! real_to_complex(&samples, &mut packed);
//! assert_eq!(packed, [1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
//! ```

/// A lazily evaluated `f64` sequence.
///
/// Exposes element-at-index access plus a fused [`fold`](Self::fold) so an
/// implementation can choose between materializing into a buffer and
/// streaming values straight into a reduction. The default `fold` walks
/// indices through [`get`](Self::get); overrides must produce the same
/// values in the same order.
pub trait SampleSequence {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Element at `idx`. `idx` must be below [`len`](Self::len).
    fn get(&self, idx: usize) -> f64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold every element into `acc` in index order.
    fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, f64) -> B,
    {
        let mut acc = init;
        for idx in 0..self.len() {
            acc = f(acc, self.get(idx));
        }
        acc
    }

    /// Iterator over the sequence, for std-style consumers.
    fn iter(&self) -> SequenceIter<'_, Self>
    where
        Self: Sized,
    {
        SequenceIter { seq: self, idx: 0 }
    }
}

/// Iterator adapter returned by [`SampleSequence::iter`].
pub struct SequenceIter<'a, S: SampleSequence> {
    seq: &'a S,
    idx: usize,
}

impl<S: SampleSequence> Iterator for SequenceIter<'_, S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.idx < self.seq.len() {
            let value = self.seq.get(self.idx);
            self.idx += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<S: SampleSequence> ExactSizeIterator for SequenceIter<'_, S> {}

/// Interleaved complex view of a real slice.
///
/// For N real samples this is a 2N-element sequence where element `2i` is
/// `real[i]` and element `2i + 1` is `0.0`. Nothing is allocated; values
/// are produced on demand.
pub struct Interleaved<'a> {
    real: &'a [f64],
}

impl<'a> Interleaved<'a> {
    pub fn new(real: &'a [f64]) -> Self {
        Self { real }
    }
}

impl SampleSequence for Interleaved<'_> {
    fn len(&self) -> usize {
        self.real.len() * 2
    }

    fn get(&self, idx: usize) -> f64 {
        if idx % 2 == 0 {
            self.real[idx / 2]
        } else {
            0.0
        }
    }

    // Fused reduction path: feed (sample, 0.0) pairs straight into the
    // closure instead of going through per-index dispatch.
    fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, f64) -> B,
    {
        let mut acc = init;
        for &sample in self.real {
            acc = f(acc, sample);
            acc = f(acc, 0.0);
        }
        acc
    }
}

/// Bulk range-fill of `dst[..seq.len()]` from a sequence.
///
/// Panics if `dst` is shorter than the sequence; sizing the destination is
/// the caller's responsibility.
pub fn fill(dst: &mut [f64], seq: &impl SampleSequence) {
    for idx in 0..seq.len() {
        dst[idx] = seq.get(idx);
    }
}

/// Pack `real` into positions `[0, 2N)` of `complex` as interleaved
/// `(re, 0.0)` pairs and return the buffer for chaining.
///
/// `complex` must hold at least `2 * real.len()` elements; anything past
/// position `2N` is left untouched.
pub fn real_to_complex<'a>(real: &[f64], complex: &'a mut [f64]) -> &'a mut [f64] {
    fill(&mut complex[..real.len() * 2], &Interleaved::new(real));
    complex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_slots_hold_samples_and_odd_slots_are_zero() {
        for n in [1usize, 2, 5, 17, 64] {
            let real: Vec<f64> = (0..n).map(|i| i as f64 + 0.5).collect();
            let mut packed = vec![f64::NAN; 2 * n];
            real_to_complex(&real, &mut packed);
            for i in 0..n {
                assert_eq!(packed[2 * i], real[i]);
                assert_eq!(packed[2 * i + 1], 0.0);
            }
        }
    }

    #[test]
    fn concrete_three_sample_layout() {
        let mut packed = [0.0f64; 6];
        real_to_complex(&[1.0, 2.0, 3.0], &mut packed);
        assert_eq!(packed, [1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn empty_input_fills_nothing() {
        let mut packed: [f64; 0] = [];
        real_to_complex(&[], &mut packed);

        // A longer destination must also stay untouched past 2N = 0.
        let mut untouched = [9.0f64; 4];
        real_to_complex(&[], &mut untouched);
        assert_eq!(untouched, [9.0; 4]);
    }

    #[test]
    fn packing_is_idempotent() {
        let real = [3.0, -1.0, 2.5, 8.0];
        let mut first = [f64::NAN; 8];
        let mut second = [f64::NAN; 8];
        real_to_complex(&real, &mut first);
        real_to_complex(&real, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn returned_reference_allows_chaining() {
        let mut packed = [0.0f64; 4];
        let sum: f64 = real_to_complex(&[1.0, 2.0], &mut packed).iter().sum();
        assert_eq!(sum, 3.0);
    }

    #[test]
    fn fused_reduction_matches_materialized_sum() {
        let real = [1.0, 2.0];
        let mut packed = [0.0f64; 4];
        real_to_complex(&real, &mut packed);
        let materialized: f64 = packed.iter().sum();

        let fused = Interleaved::new(&real).fold(0.0, |acc, v| acc + v);
        assert_eq!(fused, 3.0);
        assert_eq!(fused, materialized);
    }

    #[test]
    fn fused_reduction_observes_production_order() {
        let real = [1.0, 2.0, 3.0];
        let seq = Interleaved::new(&real);

        let order = seq.fold(Vec::new(), |mut acc, v| {
            acc.push(v);
            acc
        });
        assert_eq!(order, vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);

        // The default index-walking fold must agree with the override.
        let indexed: Vec<f64> = seq.iter().collect();
        assert_eq!(order, indexed);
    }

    #[test]
    fn interleaved_indexed_access() {
        let seq = Interleaved::new(&[4.0, 5.0]);
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.get(0), 4.0);
        assert_eq!(seq.get(1), 0.0);
        assert_eq!(seq.get(2), 5.0);
        assert_eq!(seq.get(3), 0.0);
    }

    #[test]
    fn iterator_reports_exact_size() {
        let real = [1.0, 2.0, 3.0];
        let seq = Interleaved::new(&real);
        let mut iter = seq.iter();
        assert_eq!(iter.len(), 6);
        iter.next();
        assert_eq!(iter.len(), 5);
    }
}

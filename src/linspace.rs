use num::Float;

/// `num` evenly spaced samples over `[min, max]`, like numpy.linspace.
#[derive(Clone, Debug)]
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            F::from(n - 1).map_or(F::zero(), |num_steps| (max - min) / num_steps)
        } else {
            F::zero()
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = F::from(self.index)?;
            self.index += 1;
            Some(self.start + self.step * i)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    assert_eq!(Linspace::new(0., 1., 5).collect::<Vec<f64>>(), vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Linspace::new(2.0f32, 3., 1).collect::<Vec<_>>(), vec![2.]);
    assert_eq!(Linspace::new(2.0f64, 3., 0).len(), 0);
}

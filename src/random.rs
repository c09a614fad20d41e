use crate::{Matrix, Scalar};
use rand::{distributions::Standard, prelude::Distribution, Rng};

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C>
where
    Standard: Distribution<T>,
{
    /// Fills every cell with a sample of the `Standard` distribution for `T`.
    pub fn random<G: Rng + ?Sized>(rng: &mut G) -> Self {
        log::trace!("sampling random {}x{} matrix", R, C);
        Self::from_fn(|_, _| rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn seeded_samples_repeat() {
        let a = Matrix::<f64, 3, 4>::random(&mut Pcg32::seed_from_u64(7));
        let b = Matrix::<f64, 3, 4>::random(&mut Pcg32::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}

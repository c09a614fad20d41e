use crate::{Error, Matrix};
use proptest::prelude::*;

type M3 = Matrix<i64, 3, 3>;

fn m3() -> impl Strategy<Value = M3> {
    prop::array::uniform3(prop::array::uniform3(-100_i64..100)).prop_map(M3::from)
}

fn m23_f64() -> impl Strategy<Value = Matrix<f64, 2, 3>> {
    prop::array::uniform2(prop::array::uniform3(-1e3_f64..1e3)).prop_map(Matrix::<f64, 2, 3>::from)
}

proptest! {
    /// Sums and differences are taken cell by cell.
    #[test]
    fn prop_add_sub_element_wise(a in m3(), b in m3()) {
        let sum = a + b;
        let diff = a - b;
        for i in 0..3 {
            for j in 0..3 {
                prop_assert_eq!(sum[i][j], a[i][j] + b[i][j]);
                prop_assert_eq!(diff[i][j], a[i][j] - b[i][j]);
            }
        }
        prop_assert_eq!(sum - b, a);
        prop_assert_eq!(M3::zero() + a, a);
    }

    #[test]
    fn prop_identity_is_neutral(a in m3()) {
        let i = M3::identity().unwrap();
        prop_assert_eq!(a * i, a);
        prop_assert_eq!(i * a, a);
    }

    #[test]
    fn prop_product_is_associative(a in m3(), b in m3(), c in m3()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn prop_product_transposes(a in m3(), b in m3()) {
        prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    /// Scaling then dividing by the same non-zero factor is lossless up to rounding.
    #[test]
    fn prop_scalar_round_trip(a in m23_f64(), k in 0.1_f64..100.0) {
        let back = (a * k) / k;
        for (x, y) in back.iter().zip(a.iter()) {
            prop_assert!((x - y).abs() <= 1e-9 * y.abs().max(1.0));
        }
    }

    #[test]
    fn prop_initializer_is_row_major(values in prop::collection::vec(-50_i32..50, 6)) {
        let mut m = Matrix::<i32, 2, 3>::new();
        m.push(values[0]).unwrap().extend(values[1..].iter().copied()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(m[(i / 3, i % 3)], v);
        }
    }

    #[test]
    fn prop_initializer_overflow(extra in 1_usize..5) {
        let mut m = Matrix::<i32, 2, 3>::new();
        let result = m.assign(core::iter::repeat(1).take(6 + extra));
        prop_assert_eq!(result.err(), Some(Error::Overflow { capacity: 6 }));
        prop_assert!(m.iter().all(|&v| v == 1));
    }
}

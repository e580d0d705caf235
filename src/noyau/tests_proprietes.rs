//! Lois algébriques (proptest) sur les f64 finis.
//!
//! NaN exclu : NaN != NaN casserait toute égalité.

use proptest::prelude::*;

use super::arith::{add, multiply};
use super::exact::{produit_exact, somme_exacte, vers_f64};

fn fini() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("doit être fini", |x| x.is_finite())
}

proptest! {
    #[test]
    fn add_commutative(a in fini(), b in fini()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn multiply_commutative(a in fini(), b in fini()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn add_neutre_zero(a in fini()) {
        prop_assert_eq!(add(a, 0.0), a);
    }

    #[test]
    fn multiply_neutre_un(a in fini()) {
        prop_assert_eq!(multiply(a, 1.0), a);
    }

    #[test]
    fn multiply_absorbant_zero(a in fini()) {
        // -0.0 == 0.0 en IEEE
        prop_assert_eq!(multiply(a, 0.0), 0.0);
    }

    #[test]
    fn exact_accord_sur_entiers(a in -(1i64 << 26)..(1i64 << 26), b in -(1i64 << 26)..(1i64 << 26)) {
        // |a*b| < 2^52 : aucun arrondi côté flottant
        let (fa, fb) = (a as f64, b as f64);
        prop_assert_eq!(vers_f64(&somme_exacte(fa, fb).unwrap()).unwrap(), add(fa, fb));
        prop_assert_eq!(vers_f64(&produit_exact(fa, fb).unwrap()).unwrap(), multiply(fa, fb));
    }

    #[test]
    fn purete(a in fini(), b in fini()) {
        prop_assert_eq!(add(a, b).to_bits(), add(a, b).to_bits());
        prop_assert_eq!(multiply(a, b).to_bits(), multiply(a, b).to_bits());
    }
}

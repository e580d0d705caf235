// src/noyau/exact.rs
//
// Couche exacte : un f64 fini est un rationnel dyadique, donc somme et produit
// de deux f64 sont représentables sans perte en BigRational.

use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::erreur::ErreurNoyau;

/// Valeur exacte (rationnel à précision arbitraire).
pub type Exact = BigRational;

/// Valeur binaire exacte d’un `f64` fini.
///
/// ```rust
/// # use calcul_elementaire::exact_depuis_f64;
/// # use num_rational::BigRational;
/// let r = exact_depuis_f64(0.5).unwrap();
/// assert_eq!(r, BigRational::new(1.into(), 2.into()));
/// assert!(exact_depuis_f64(f64::NAN).is_err());
/// ```
pub fn exact_depuis_f64(x: f64) -> Result<Exact, ErreurNoyau> {
    if !x.is_finite() {
        return Err(ErreurNoyau::NonFini(format!("{x}")));
    }
    BigRational::from_float(x).ok_or_else(|| ErreurNoyau::NonFini(format!("{x}")))
}

/// `a + b` sans arrondi.
pub fn somme_exacte(a: f64, b: f64) -> Result<Exact, ErreurNoyau> {
    Ok(exact_depuis_f64(a)? + exact_depuis_f64(b)?)
}

/// `a * b` sans arrondi.
pub fn produit_exact(a: f64, b: f64) -> Result<Exact, ErreurNoyau> {
    Ok(exact_depuis_f64(a)? * exact_depuis_f64(b)?)
}

/// Retour au `f64` le plus proche ; erreur si hors plage finie.
pub fn vers_f64(r: &Exact) -> Result<f64, ErreurNoyau> {
    match r.to_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(ErreurNoyau::HorsPlage(format!("{r}"))),
    }
}

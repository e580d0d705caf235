// src/noyau/arith.rs
//
// Opérations flottantes : fonctions totales, sans état, sans effet de bord.
// NaN / ±∞ suivent simplement IEEE-754 (pas d’erreur ici).

/// Somme `a + b` (arrondi IEEE-754 au plus proche).
///
/// ```rust
/// # use calcul_elementaire::add;
/// assert_eq!(add(-2.0, -3.0), -5.0);
/// assert_eq!(add(1.5, 2.5), 4.0);
/// ```
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Produit `a * b` (arrondi IEEE-754, règles de signe du zéro incluses).
///
/// ```rust
/// # use calcul_elementaire::multiply;
/// assert_eq!(multiply(-3.0, -4.0), 12.0);
/// assert!(multiply(-3.0, 0.0).is_sign_negative());
/// ```
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

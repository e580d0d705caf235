// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_traits::Signed;

use super::exact::Exact;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r -> entier “scalé” = r * 10^digits, tronqué vers zéro
fn rational_scaled(r: &Exact, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Lecture décimale d’un rationnel, tronquée à `digits` décimales.
///
/// `-1/3` à 2 décimales donne `-0.33` ; une valeur tronquée à zéro perd son signe.
///
/// ```rust
/// # use calcul_elementaire::{lecture_decimale, somme_exacte};
/// let s = somme_exacte(0.1, 0.2).unwrap();
/// assert_eq!(lecture_decimale(&s, 20), "0.30000000000000001665");
/// ```
pub fn lecture_decimale(r: &Exact, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}

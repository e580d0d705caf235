//! Noyau arithmétique
//!
//! Organisation interne :
//! - arith.rs    : add / multiply (IEEE-754, arrondi standard)
//! - exact.rs    : mêmes opérations sans arrondi (BigRational)
//! - lecture.rs  : lecture décimale tronquée d’un rationnel
//! - erreur.rs   : erreurs de la couche exacte

pub mod arith;
pub mod erreur;
pub mod exact;
pub mod lecture;


#[cfg(test)]
mod tests_proprietes;

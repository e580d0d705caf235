//! Calcul élémentaire
//!
//! Deux opérations pures sur `f64` (`add`, `multiply`) + une couche exacte
//! (rationnels) pour lire le résultat sans arrondi.
//!
//! ```rust
//! use calcul_elementaire::{add, multiply};
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(multiply(2.5, 4.0), 10.0);
//! ```

pub mod noyau;

// API publique minimale
pub use noyau::arith::{add, multiply};
pub use noyau::erreur::ErreurNoyau;
pub use noyau::exact::{exact_depuis_f64, produit_exact, somme_exacte, vers_f64, Exact};
pub use noyau::lecture::lecture_decimale;

// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs de la couche exacte (la couche flottante n’échoue jamais).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// NaN ou ±∞ : pas de valeur rationnelle.
    #[error("opérande non fini: {0}")]
    NonFini(String),

    /// Le rationnel dépasse la plage des `f64` finis.
    #[error("hors plage f64: {0}")]
    HorsPlage(String),
}

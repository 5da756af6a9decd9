// src/noyau/erreur.rs
//
// Erreurs du noyau. Toutes finissent au même endroit (calculer_resultat)
// et donnent le même flash "Error" à l’écran ; le détail sert au journal.

use thiserror::Error;

/// Échec d’une évaluation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    /// Caractère hors de l’alphabet autorisé (chiffres, opérateurs, ( ) . espace).
    #[error("caractère invalide: '{0}'")]
    CaractereInvalide(char),

    /// Le résultat n’est pas un nombre fini (division par zéro, débordement, NaN).
    #[error("erreur mathématique: résultat non fini")]
    Mathematique,

    /// Expression mal formée.
    #[error("erreur de syntaxe: {0}")]
    Syntaxe(#[from] ErreurSyntaxe),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("zéro initial interdit: {0:?}")]
    ZeroInitial(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,

    #[error("parenthèses vides")]
    ParenthesesVides,

    #[error("valeur inattendue")]
    ValeurInattendue,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("expression vide")]
    ExpressionVide,
}

//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (caractère, syntaxe, mathématique)
//! - jetons.rs   : alphabet + tokenisation
//! - rpn.rs      : shunting-yard (moins unaire, contrôle des parenthèses)
//! - eval.rs     : pipeline complet jusqu’à la valeur arrondie
//! - format.rs   : texte des nombres + arrondi
//! - minuteur.rs : rappels différés (retour après "Error")
//! - moteur.rs   : tampon de saisie et ses opérations

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod minuteur;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

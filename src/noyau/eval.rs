//! Noyau — évaluation (pipeline réel)
//!
//! caractères autorisés -> jetons -> RPN -> pile f64 -> fini ? -> arrondi
//!
//! Aucune exécution de code : seule la grammaire + - * / ( ) décimaux est lue.

use tracing::debug;

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::format::arrondir;
use super::jetons::{format_tokens, tokenize, verifier_caracteres, Tok};
use super::rpn::to_rpn;

/// API publique : évalue une expression et retourne la valeur arrondie à `decimales`.
///
/// Erreurs :
/// - `CaractereInvalide` si un caractère sort de l’alphabet
/// - `Syntaxe` si l’expression est mal construite
/// - `Mathematique` si le résultat n’est pas fini
pub fn eval_expression(expr_str: &str, decimales: u32) -> Result<f64, ErreurCalcul> {
    // 1) Alphabet
    verifier_caracteres(expr_str)?;

    // 2) Jetons
    let jetons = tokenize(expr_str)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "expression analysée"
    );

    // 4) Valeur
    let v = evaluer_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::Mathematique);
    }

    // 5) Arrondi d’affichage
    Ok(arrondir(v, decimales))
}

/// Évalue une RPN sur une pile de f64 (arithmétique IEEE : 1/0 donne l’infini).
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => st.push(v),

            Tok::Neg => {
                let a = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                st.push(-a);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                };
                st.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurSyntaxe::ValeurInattendue.into()),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        (None, _) => Err(ErreurSyntaxe::ExpressionVide.into()),
        (Some(_), false) => Err(ErreurSyntaxe::ValeurInattendue.into()),
    }
}

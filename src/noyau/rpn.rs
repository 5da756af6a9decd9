// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant les formes mal construites
//
// Règles:
// - * / avant + -, associativité à gauche
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur => Tok::Neg (préfixe, prioritaire)
//    - '+' dans la même position est neutre et disparaît
// - Une valeur suivie d’une valeur ou de '(' est une erreur (pas de multiplication implicite)

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Star, LPar, Num(1), Plus, Num(3), RPar]
///   rpn:    [Num(2), Neg, Num(1), Num(3), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurSyntaxe::ExpressionVide.into());
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions.
    let mut prev_was_value = false;
    let mut prev_was_lpar = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurSyntaxe::ValeurInattendue.into());
                }
                out.push(tok);
                prev_was_value = true;
                prev_was_lpar = false;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurSyntaxe::ValeurInattendue.into());
                }
                ops.push(tok);
                prev_was_value = false;
                prev_was_lpar = true;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(if prev_was_lpar {
                        ErreurSyntaxe::ParenthesesVides
                    } else {
                        ErreurSyntaxe::OperandeManquant
                    }
                    .into());
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurSyntaxe::ParentheseNonOuverte.into());
                }

                prev_was_value = true;
                prev_was_lpar = false;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler, il s’applique à ce qui suit
                ops.push(Tok::Neg);
                prev_was_lpar = false;
            }

            Tok::Plus if !prev_was_value => {
                // plus unaire : neutre
                prev_was_lpar = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurSyntaxe::OperandeManquant.into());
                }

                // dépile tant que la précédence (gauche) l’exige, sans traverser '('
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
                prev_was_lpar = false;
            }

            Tok::Neg => return Err(ErreurSyntaxe::ValeurInattendue.into()),
        }
    }

    if !prev_was_value {
        return Err(ErreurSyntaxe::OperandeManquant.into());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurSyntaxe::ParentheseNonFermee.into());
        }
        out.push(op);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, tokenize};

    fn rpn_txt(s: &str) -> String {
        let t = tokenize(s).unwrap();
        format_tokens(&to_rpn(&t).unwrap())
    }

    fn erreur(s: &str) -> ErreurCalcul {
        let t = tokenize(s).unwrap();
        to_rpn(&t).unwrap_err()
    }

    #[test]
    fn precedence_et_gauche() {
        assert_eq!(rpn_txt("1+2*3"), "1 2 3 * +");
        assert_eq!(rpn_txt("8/4/2"), "8 4 / 2 /");
        assert_eq!(rpn_txt("5-3-1"), "5 3 - 1 -");
    }

    #[test]
    fn parentheses_regroupent() {
        assert_eq!(rpn_txt("(1+2)*3"), "1 2 + 3 *");
    }

    #[test]
    fn moins_unaire_prioritaire() {
        assert_eq!(rpn_txt("-2*3"), "2 neg 3 *");
        assert_eq!(rpn_txt("2*(-3)"), "2 3 neg *");
        assert_eq!(rpn_txt("(+4)"), "4");
    }

    #[test]
    fn erreurs_de_structure() {
        assert_eq!(
            erreur("(1+2"),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::ParentheseNonFermee)
        );
        assert_eq!(
            erreur("1+2)"),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::ParentheseNonOuverte)
        );
        assert_eq!(
            erreur("()"),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::ParenthesesVides)
        );
        assert_eq!(
            erreur("2(3)"),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::ValeurInattendue)
        );
        assert_eq!(
            erreur("(1+)"),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::OperandeManquant)
        );
        assert_eq!(
            erreur("*2"),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::OperandeManquant)
        );
    }

    #[test]
    fn vide_refuse() {
        assert_eq!(
            to_rpn(&[]).unwrap_err(),
            ErreurCalcul::Syntaxe(ErreurSyntaxe::ExpressionVide)
        );
    }
}

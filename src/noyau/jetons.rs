// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, ErreurSyntaxe};
use super::format::format_nombre;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,
}

/// Opérateurs binaires reconnus par le tampon (+ - * /).
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Alphabet accepté à l’évaluation : chiffres, opérateurs, parenthèses, point, espace.
pub fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || est_operateur(c) || matches!(c, '(' | ')' | '.' | ' ')
}

/// Refuse tout caractère hors alphabet (premier fautif rapporté).
pub fn verifier_caracteres(s: &str) -> Result<(), ErreurCalcul> {
    match s.chars().find(|c| !est_autorise(*c)) {
        Some(c) => Err(ErreurCalcul::CaractereInvalide(c)),
        None => Ok(()),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 7.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = tok {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de points.
        // "1." et ".5" passent, "." ou "1.2.3" sont refusés par parse().
        // Un 0 suivi d’un chiffre ("05", "012", "00.5") est refusé.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if c == '0' && chars.get(start + 1).is_some_and(|d| d.is_ascii_digit()) {
                return Err(ErreurSyntaxe::ZeroInitial(txt).into());
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurSyntaxe::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalcul::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format_nombre(*v),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoupe_nombres_et_operateurs() {
        let t = tokenize("12.5 + (3*.5)").unwrap();
        assert_eq!(
            t,
            vec![
                Tok::Num(12.5),
                Tok::Plus,
                Tok::LPar,
                Tok::Num(3.0),
                Tok::Star,
                Tok::Num(0.5),
                Tok::RPar,
            ]
        );
        assert_eq!(format_tokens(&t), "12.5 + ( 3 * 0.5 )");
    }

    #[test]
    fn point_final_accepte() {
        assert_eq!(tokenize("7.").unwrap(), vec![Tok::Num(7.0)]);
    }

    #[test]
    fn point_seul_refuse() {
        let e = tokenize("1+.").unwrap_err();
        assert!(matches!(
            e,
            ErreurCalcul::Syntaxe(ErreurSyntaxe::NombreInvalide(_))
        ));
    }

    #[test]
    fn zero_initial_refuse() {
        for s in ["05+1", "012", "1+00.5", "(07)"] {
            assert!(
                matches!(
                    tokenize(s),
                    Err(ErreurCalcul::Syntaxe(ErreurSyntaxe::ZeroInitial(_)))
                ),
                "s={s:?}"
            );
        }
    }

    #[test]
    fn zero_seul_ou_decimal_accepte() {
        assert_eq!(tokenize("0").unwrap(), vec![Tok::Num(0.0)]);
        assert_eq!(tokenize("0.05").unwrap(), vec![Tok::Num(0.05)]);
        assert_eq!(tokenize("10.05").unwrap(), vec![Tok::Num(10.05)]);
        assert_eq!(tokenize("0.").unwrap(), vec![Tok::Num(0.0)]);
    }

    #[test]
    fn deux_points_refuses() {
        assert!(tokenize("1.2.3").is_err());
    }

    #[test]
    fn caracteres_hors_alphabet() {
        assert_eq!(
            verifier_caracteres("1e-7+1"),
            Err(ErreurCalcul::CaractereInvalide('e'))
        );
        assert_eq!(verifier_caracteres("(1 + 2.5) * 3 / 4 - 5"), Ok(()));
    }
}

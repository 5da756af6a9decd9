// src/app/routage.rs
//
// Routage des entrées (clics + clavier) vers le moteur.
// Aucune logique de calcul ici : on traduit, le moteur décide.

use crate::noyau::moteur::{Ecran, MoteurExpression};

/// Action nommée portée par un bouton (par opposition à une valeur littérale).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionNommee {
    Effacer,
    Supprimer,
    Egal,
    Pourcentage,
}

/// Contenu d’un clic sur le pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clic {
    Valeur(char),
    Action(ActionNommee),
}

/// Opération à appliquer au moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Ajouter(char),
    Effacer,
    Supprimer,
    Egal,
    Pourcentage,
}

impl Commande {
    pub fn appliquer<E: Ecran>(self, moteur: &mut MoteurExpression<E>) {
        match self {
            Commande::Ajouter(c) => moteur.ajouter_caractere(c),
            Commande::Effacer => moteur.effacer(),
            Commande::Supprimer => moteur.supprimer_dernier(),
            Commande::Egal => moteur.calculer_resultat(),
            Commande::Pourcentage => moteur.appliquer_pourcentage(),
        }
    }
}

pub fn depuis_clic(clic: Clic) -> Commande {
    match clic {
        Clic::Valeur(c) => Commande::Ajouter(c),
        Clic::Action(ActionNommee::Effacer) => Commande::Effacer,
        Clic::Action(ActionNommee::Supprimer) => Commande::Supprimer,
        Clic::Action(ActionNommee::Egal) => Commande::Egal,
        Clic::Action(ActionNommee::Pourcentage) => Commande::Pourcentage,
    }
}

/// Touche clavier (nom de touche façon navigateur : "5", "+", "Enter", "Escape"…).
/// Touche non reconnue => None (ignorée).
pub fn depuis_touche(touche: &str) -> Option<Commande> {
    match touche {
        "Enter" | "=" => return Some(Commande::Egal),
        "Backspace" => return Some(Commande::Supprimer),
        "Escape" | "Esc" => return Some(Commande::Effacer),
        "%" => return Some(Commande::Pourcentage),
        _ => {}
    }

    let mut chars = touche.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.') => {
            Some(Commande::Ajouter(c))
        }
        _ => None,
    }
}

//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, démarche)
//! et appliquer les messages venus de la vue.
//!
//! Contrats :
//! - `appliquer` est le SEUL chemin de mutation de l’entrée et du résultat.
//! - Le noyau n’est appelé que sur `Message::Egal`, avec un instantané de l’entrée.
//! - Un échec d’évaluation remplace l’entrée par "Error" et efface le résultat.

use crate::noyau::erreur::Categorie;
use crate::noyau::eval::Demarche;
use crate::noyau::eval_expression_detaillee;

/// Texte affiché dans l’entrée quand l’évaluation échoue.
pub const TEXTE_ERREUR: &str = "Error";

/// Affiché quand l’entrée est vide.
const ENTREE_VIDE: &str = "0";

/// Événements envoyés par la vue (boutons + clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// Chiffre, '.', ou opérateur : ajouté tel quel.
    Inserer(char),
    /// Bouton "()" : ouvre si tout est fermé, sinon ferme.
    Parentheses,
    /// Bouton "+/-".
    BasculerSigne,
    /// Bouton "C".
    Effacer,
    /// Backspace.
    Retour,
    /// Bouton "=".
    Egal,
}

#[derive(Clone, Default, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // vide => pas de résultat affiché

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl AppCalc {
    /// Texte de l’afficheur : "0" si l’entrée est vide.
    pub fn affichage(&self) -> &str {
        if self.entree.is_empty() {
            ENTREE_VIDE
        } else {
            &self.entree
        }
    }

    pub fn en_erreur(&self) -> bool {
        self.entree == TEXTE_ERREUR
    }

    /// Applique un message de la vue.
    pub fn appliquer(&mut self, msg: Message) {
        log::trace!("message: {msg:?}");

        match msg {
            Message::Inserer(c) => {
                self.sortir_de_l_erreur();
                self.entree.push(c);
            }
            Message::Parentheses => {
                self.sortir_de_l_erreur();
                let ouvertes = self.entree.matches('(').count();
                let fermees = self.entree.matches(')').count();
                self.entree.push(if ouvertes == fermees { '(' } else { ')' });
            }
            Message::BasculerSigne => {
                self.sortir_de_l_erreur();
                if self.entree.starts_with('-') {
                    self.entree.remove(0);
                } else {
                    self.entree.insert(0, '-');
                }
            }
            Message::Effacer => {
                self.entree.clear();
                self.resultat.clear();
                self.demarche = Demarche::default();
            }
            Message::Retour => {
                if self.en_erreur() {
                    self.entree.clear();
                } else {
                    self.entree.pop();
                }
            }
            Message::Egal => self.evaluer(),
        }
    }

    /// Une saisie après "Error" repart d’une entrée vide.
    fn sortir_de_l_erreur(&mut self) {
        if self.en_erreur() {
            self.entree.clear();
        }
    }

    /// Évalue l’instantané de l’entrée via le noyau.
    fn evaluer(&mut self) {
        match eval_expression_detaillee(&self.entree) {
            Ok(e) => {
                log::debug!("{:?} = {}", self.entree, e.texte);
                self.resultat = e.texte;
                self.demarche = e.demarche;
            }
            Err(err) => {
                let famille = match err.categorie() {
                    Categorie::ExpressionMalformee => "expression malformée",
                    Categorie::FormatNumerique => "format numérique",
                };
                log::warn!("évaluation de {:?} impossible ({famille}) : {err}", self.entree);
                self.entree = TEXTE_ERREUR.to_string();
                self.resultat.clear();
                self.demarche = Demarche::default();
            }
        }
    }
}

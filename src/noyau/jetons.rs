// src/noyau/jetons.rs

/// Associativité d’un opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Operateur {
    /// Classe un caractère : Some(op) si c’est un des cinq opérateurs.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Modulo => '%',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise | Self::Modulo => 2,
        }
    }

    /// Les cinq opérateurs sont associatifs à gauche.
    pub fn associativite(self) -> Associativite {
        Associativite::Gauche
    }

    /// a OP b en flottant IEEE : division/modulo par zéro => inf / NaN, jamais d’erreur.
    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => a / b,
            Self::Modulo => a % b,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Texte brut du nombre (chiffres + '.'), lu en f64 seulement à la réduction.
    Num(String),
    Op(Operateur),

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,

    LPar,
    RPar,
}

fn est_char_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne en jetons.
///
/// - chiffres et '.' consécutifs -> Num (texte brut, pas validé ici)
/// - + - * / % -> Op
/// - ( ) -> LPar / RPar
/// - tout autre caractère (espaces, lettres, …) est ignoré sans erreur
///
/// Un séparateur ignoré coupe quand même un nombre : "1 2" donne deux Num.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut tampon = String::new();

    for c in s.chars() {
        if est_char_nombre(c) {
            tampon.push(c);
            continue;
        }

        if !tampon.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut tampon)));
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {
                if let Some(op) = Operateur::depuis_char(c) {
                    out.push(Tok::Op(op));
                }
            }
        }
    }

    if !tampon.is_empty() {
        out.push(Tok::Num(tampon));
    }

    out
}

/// Format utilitaire (démarche / tests) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok], sep: &str) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(texte) => texte.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(sep)
}

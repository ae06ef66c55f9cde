// src/noyau/touches.rs
//
// Événement d’entrée unique (clavier + boutons)
// ---------------------------------------------
// La vue et le clavier produisent la même `Touche` : un seul chemin
// vers l’éditeur, donc un comportement identique quelle que soit la source.

/// Opérateurs binaires, tels qu’affichés dans l’expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ];

    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '−',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Puissance => '^',
        }
    }

    pub fn depuis_glyphe(c: char) -> Option<Self> {
        Self::TOUS.into_iter().find(|op| op.glyphe() == c)
    }
}

/// Fonctions qui attendent un argument : insérées avec leur '('.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Log10,
    Racine,
}

impl Fonction {
    pub const TOUTES: [Fonction; 6] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Log10,
        Fonction::Racine,
    ];

    /// Texte affiché (sans la parenthèse).
    pub fn glyphe(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Log10 => "log10",
            Fonction::Racine => "√",
        }
    }

    /// Nom côté évaluateur.
    pub fn nom_evaluateur(self) -> &'static str {
        match self {
            Fonction::Racine => "sqrt",
            autre => autre.glyphe(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn glyphe(self) -> char {
        match self {
            Constante::Pi => 'π',
            Constante::E => 'e',
        }
    }

    pub fn nom_evaluateur(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }
}

/// Une action logique de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Fonction(Fonction),
    Constante(Constante),
    Carre,
    ParOuvrante,
    ParFermante,
    Egal,
    Effacer,
    ToutEffacer,
    MemoirePlus,
    MemoireMoins,
    MemoireRappel,
    MemoireEfface,
}

impl Touche {
    /// Clavier : caractère tapé -> touche.
    /// Hors de l’ensemble reconnu : None (la touche n’est pas traitée).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' => Touche::Point,
            '+' => Touche::Operateur(Operateur::Plus),
            '-' => Touche::Operateur(Operateur::Moins),
            '*' => Touche::Operateur(Operateur::Fois),
            '/' => Touche::Operateur(Operateur::Divise),
            '(' => Touche::ParOuvrante,
            ')' => Touche::ParFermante,
            '=' => Touche::Egal,
            'c' | 'C' => Touche::ToutEffacer,
            _ => return None,
        };
        Some(t)
    }

    /// Libellé du bouton correspondant.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Point => ".".into(),
            Touche::Operateur(Operateur::Puissance) => "x^y".into(),
            Touche::Operateur(op) => op.glyphe().to_string(),
            Touche::Fonction(f) => f.glyphe().to_string(),
            Touche::Constante(c) => c.glyphe().to_string(),
            Touche::Carre => "x²".into(),
            Touche::ParOuvrante => "(".into(),
            Touche::ParFermante => ")".into(),
            Touche::Egal => "=".into(),
            Touche::Effacer => "DEL".into(),
            Touche::ToutEffacer => "C".into(),
            Touche::MemoirePlus => "M+".into(),
            Touche::MemoireMoins => "M−".into(),
            Touche::MemoireRappel => "MR".into(),
            Touche::MemoireEfface => "MC".into(),
        }
    }
}

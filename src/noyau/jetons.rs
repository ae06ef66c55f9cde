// src/noyau/jetons.rs
//
// Glyphes d’affichage -> syntaxe de l’évaluateur
// ----------------------------------------------
// Tokenisation explicite (pas de chaîne de remplacements):
// - un nombre est lu d’un bloc ("3.25"), donc jamais confondu avec 'e'
// - les noms de fonctions sont reconnus au plus long ("log10" avant "log")
// - 'e' isolé = constante d’Euler
// - juxtaposition (2π, 3(4), )( , 2sin(…)) => '*' explicite

use super::erreur::EchecEvaluation;
use super::touches::{Constante, Fonction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Texte ASCII canonique ("0.5", "12").
    Nombre(String),
    Constante(Constante),
    Fonction(Fonction),
    /// Opérateur déjà en ASCII : + - * / ^
    Operateur(char),
    Carre,
    ParOuvrante,
    ParFermante,
}

impl Jeton {
    fn termine_valeur(&self) -> bool {
        matches!(
            self,
            Jeton::Nombre(_) | Jeton::Constante(_) | Jeton::ParFermante | Jeton::Carre
        )
    }

    fn commence_valeur(&self) -> bool {
        matches!(
            self,
            Jeton::Nombre(_) | Jeton::Constante(_) | Jeton::Fonction(_) | Jeton::ParOuvrante
        )
    }
}

/// Noms ASCII reconnus, du plus long au plus court.
const NOMS: [(&str, Jeton); 8] = [
    ("log10", Jeton::Fonction(Fonction::Log10)),
    ("sqrt", Jeton::Fonction(Fonction::Racine)),
    ("sin", Jeton::Fonction(Fonction::Sin)),
    ("cos", Jeton::Fonction(Fonction::Cos)),
    ("tan", Jeton::Fonction(Fonction::Tan)),
    ("log", Jeton::Fonction(Fonction::Log)),
    ("pi", Jeton::Constante(Constante::Pi)),
    ("e", Jeton::Constante(Constante::E)),
];

/// Opérateur d’affichage (ou ASCII) -> opérateur ASCII.
fn operateur_ascii(c: char) -> Option<char> {
    match c {
        '+' => Some('+'),
        '−' | '-' => Some('-'),
        '×' | '*' => Some('*'),
        '÷' | '/' => Some('/'),
        '^' => Some('^'),
        _ => None,
    }
}

/// Tokenize l’expression affichée.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, EchecEvaluation> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if let Some(op) = operateur_ascii(c) {
            out.push(Jeton::Operateur(op));
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Jeton::ParOuvrante),
            ')' => out.push(Jeton::ParFermante),
            '²' => out.push(Jeton::Carre),
            'π' => out.push(Jeton::Constante(Constante::Pi)),
            '√' => out.push(Jeton::Fonction(Fonction::Racine)),
            _ if c.is_ascii_digit() || c == '.' => {
                out.push(Jeton::Nombre(lire_nombre(&chars, &mut i)?));
                continue;
            }
            _ if c.is_ascii_alphabetic() => {
                let (jeton, longueur) =
                    lire_nom(&chars[i..]).ok_or(EchecEvaluation::CaractereInattendu(c))?;
                out.push(jeton);
                i += longueur;
                continue;
            }
            _ => return Err(EchecEvaluation::CaractereInattendu(c)),
        }
        i += 1;
    }

    Ok(out)
}

/// Lit chiffres + au plus un point. ".5" -> "0.5", "3." -> "3".
fn lire_nombre(chars: &[char], i: &mut usize) -> Result<String, EchecEvaluation> {
    let start = *i;
    let mut point = false;

    while *i < chars.len() && (chars[*i].is_ascii_digit() || chars[*i] == '.') {
        if chars[*i] == '.' {
            if point {
                let brut: String = chars[start..=*i].iter().collect();
                return Err(EchecEvaluation::NombreInvalide(brut));
            }
            point = true;
        }
        *i += 1;
    }

    let brut: String = chars[start..*i].iter().collect();
    if !brut.chars().any(|c| c.is_ascii_digit()) {
        return Err(EchecEvaluation::NombreInvalide(brut));
    }

    let mut texte = brut;
    if texte.starts_with('.') {
        texte.insert(0, '0');
    }
    if texte.ends_with('.') {
        texte.pop();
    }
    Ok(texte)
}

/// Plus long nom connu en tête de `reste`.
fn lire_nom(reste: &[char]) -> Option<(Jeton, usize)> {
    NOMS.iter().find_map(|(nom, jeton)| {
        let n = nom.chars().count();
        let tete = reste.get(..n)?;
        tete.iter()
            .copied()
            .eq(nom.chars())
            .then(|| (jeton.clone(), n))
    })
}

/// Jetons -> texte pour l’évaluateur (ASCII, multiplications explicites).
pub fn vers_syntaxe(jetons: &[Jeton]) -> Result<String, EchecEvaluation> {
    let mut out = String::new();
    let mut precedent: Option<&Jeton> = None;

    for (k, j) in jetons.iter().enumerate() {
        let apres_valeur = precedent.is_some_and(Jeton::termine_valeur);

        if apres_valeur && j.commence_valeur() {
            out.push('*');
        }

        match j {
            Jeton::Nombre(n) => out.push_str(n),
            Jeton::Constante(c) => out.push_str(c.nom_evaluateur()),
            Jeton::Fonction(f) => {
                if jetons.get(k + 1) != Some(&Jeton::ParOuvrante) {
                    return Err(EchecEvaluation::JetonMalPlace(f.glyphe().to_string()));
                }
                out.push_str(f.nom_evaluateur());
            }
            Jeton::Operateur(op) => out.push(*op),
            Jeton::Carre => {
                if !apres_valeur {
                    return Err(EchecEvaluation::JetonMalPlace("²".into()));
                }
                out.push_str("^2");
            }
            Jeton::ParOuvrante => out.push('('),
            Jeton::ParFermante => out.push(')'),
        }

        precedent = Some(j);
    }

    Ok(out)
}

/// Raccourci : expression affichée -> syntaxe évaluateur.
pub fn traduire(s: &str) -> Result<String, EchecEvaluation> {
    vers_syntaxe(&tokenize(s)?)
}

use crate::select::CandidateSet;

/// Suffixes appended to every case and leet variant, in output order.
pub const SUFFIXES: [&str; 10] = ["", "1", "12", "123", "1234", "12345", "!", "2024", "#btc", "69"];

/// Upper bound of candidates a single term can produce (cases × suffixes × {base, leet}).
///
/// ASCII terms stay below it: the uppercase variant has nothing left to leetify.
pub const MAX_CANDIDATES_PER_TERM: usize = CaseVariant::ALL.len() * SUFFIXES.len() * 2;

/// Map a single character to its leet substitute, passing everything else through.
///
/// Only lowercase letters are mapped: `PASSWORD` stays `PASSWORD`, while the
/// capitalized `Admin` becomes `Adm1n`.
#[inline]
pub fn leet_char(c: char) -> char {
    match c {
        'a' => '@',
        'o' => '0',
        'e' => '3',
        'i' => '1',
        's' => '$',
        _ => c,
    }
}

/// Apply [`leet_char`] to every character of `word`.
#[inline]
pub fn leetify(word: &str) -> String {
    word.chars().map(leet_char).collect()
}

/// Casing applied to a seed term before leet substitution and suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseVariant {
    /// `admin`
    Lower,
    /// `ADMIN`
    Upper,
    /// `Admin`
    Capitalized,
}

impl CaseVariant {
    pub const ALL: [CaseVariant; 3] =
        [CaseVariant::Lower, CaseVariant::Upper, CaseVariant::Capitalized];

    pub fn apply(self, term: &str) -> String {
        match self {
            CaseVariant::Lower => term.to_lowercase(),
            CaseVariant::Upper => term.to_uppercase(),
            CaseVariant::Capitalized => {
                let mut chars = term.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out: String = first.to_uppercase().collect();
                        out.push_str(&chars.as_str().to_lowercase());
                        out
                    }
                    None => String::new(),
                }
            }
        }
    }
}

/// Expand one term into all its case, leet and suffix combinations.
///
/// Candidates are inserted case by case, suffix by suffix, with the plain variant
/// before its leet form. Collisions (e.g. digit-only terms where leet == base) are
/// dropped on insert.
pub fn expand(term: &str) -> CandidateSet {
    let mut out = CandidateSet::with_capacity(MAX_CANDIDATES_PER_TERM);
    expand_into(term, &mut out);
    out
}

/// Expand every term and union the results, keeping first-seen order.
pub fn expand_all<I, S>(terms: I) -> CandidateSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let terms = terms.into_iter();
    let mut out = CandidateSet::with_capacity(terms.size_hint().0 * MAX_CANDIDATES_PER_TERM);
    for term in terms {
        expand_into(term.as_ref(), &mut out);
    }
    out
}

fn expand_into(term: &str, out: &mut CandidateSet) {
    for case in CaseVariant::ALL {
        let base = case.apply(term);
        let leet = leetify(&base);
        for suffix in SUFFIXES {
            out.insert(format!("{base}{suffix}"));
            out.insert(format!("{leet}{suffix}"));
        }
    }
}

//! Paradigm enumeration and assembly.
//!
//! The cell space follows from the profile's typological switches: persons
//! `1`, `1i` (inclusive languages), `2`, `3` crossed with numbers `s`, `d`
//! (dual languages), `p`, minus the inclusive singular. Transitive profiles
//! add a subject × object matrix from which co-referent combinations (both
//! arguments include the speaker, or both include the addressee) are
//! excluded.

use std::fmt;

use crate::error::ParadigmResult;
use crate::profile::LanguageProfile;
use crate::realise::{realise_cell, spell_out};
use crate::structure::{Alignment, FeatureStructure, parse_features};
use crate::table::Table;
use crate::vocabulary::VocabularyItem;

/// Person of an agreement argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    /// Speaker and addressee
    Inclusive,
    Second,
    Third,
}

impl Person {
    /// Persons of a paradigm, in table order.
    pub fn enumerate(inclusive: bool) -> Vec<Person> {
        let mut persons = vec![Person::First];
        if inclusive {
            persons.push(Person::Inclusive);
        }
        persons.extend([Person::Second, Person::Third]);
        persons
    }

    pub fn token(&self) -> &'static str {
        match self {
            Person::First => "1",
            Person::Inclusive => "1i",
            Person::Second => "2",
            Person::Third => "3",
        }
    }

    pub fn includes_speaker(&self) -> bool {
        matches!(self, Person::First | Person::Inclusive)
    }

    pub fn includes_addressee(&self) -> bool {
        matches!(self, Person::Second | Person::Inclusive)
    }
}

/// Number of an agreement argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

impl Number {
    /// Numbers of a paradigm, in table order.
    pub fn enumerate(dual: bool) -> Vec<Number> {
        if dual {
            vec![Number::Singular, Number::Dual, Number::Plural]
        } else {
            vec![Number::Singular, Number::Plural]
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Number::Singular => "s",
            Number::Dual => "d",
            Number::Plural => "p",
        }
    }
}

/// A person/number combination, written `1s`, `1id`, `3p`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argument {
    pub person: Person,
    pub number: Number,
}

impl Argument {
    pub fn new(person: Person, number: Number) -> Self {
        Self { person, number }
    }

    /// Every argument a profile distinguishes, person-major. The inclusive
    /// has no singular.
    pub fn enumerate(profile: &LanguageProfile) -> Vec<Argument> {
        let numbers = Number::enumerate(profile.dual());
        Person::enumerate(profile.inclusive())
            .into_iter()
            .flat_map(|person| numbers.iter().map(move |number| Argument::new(person, *number)))
            .filter(|argument| {
                !(argument.person == Person::Inclusive && argument.number == Number::Singular)
            })
            .collect()
    }

    /// Whether `self` acting on `object` would violate disjoint reference.
    pub fn corefers_with(&self, object: &Argument) -> bool {
        (self.person.includes_speaker() && object.person.includes_speaker())
            || (self.person.includes_addressee() && object.person.includes_addressee())
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.person.token(), self.number.token())
    }
}

/// One position of the paradigm table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Ruled out by disjoint reference; never realised.
    Excluded,
    /// Realised; `items` is empty for a paradigm gap.
    Realised {
        /// The cell string, `"1s"` or `"1s>3p"`.
        input: String,
        items: Vec<VocabularyItem>,
    },
}

impl Cell {
    /// The concatenated forms, `None` for an excluded cell.
    pub fn spell_out(&self) -> Option<String> {
        match self {
            Cell::Excluded => None,
            Cell::Realised { items, .. } => Some(spell_out(items)),
        }
    }

    /// Whether the cell was realised with no items.
    pub fn is_gap(&self) -> bool {
        matches!(self, Cell::Realised { items, .. } if items.is_empty())
    }
}

/// A row of the paradigm: one subject, its intransitive cell and, for
/// transitive profiles, one cell per object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub subject: Argument,
    pub intransitive: Cell,
    pub objects: Vec<Cell>,
}

/// A computed paradigm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paradigm {
    pub arguments: Vec<Argument>,
    pub transitive: bool,
    pub rows: Vec<Row>,
}

impl Paradigm {
    /// Realise every admissible cell of `profile`.
    ///
    /// Cell strings are parsed before anything is realised, so a malformed
    /// cell aborts the whole build.
    pub fn build(profile: &LanguageProfile, alignment: Alignment) -> ParadigmResult<Self> {
        let arguments = Argument::enumerate(profile);

        let mut planned = Vec::with_capacity(arguments.len());
        for subject in &arguments {
            let intransitive = subject.to_string();
            let mut objects = Vec::new();
            if profile.transitive() {
                for object in &arguments {
                    if subject.corefers_with(object) {
                        objects.push(None);
                    } else {
                        let input = format!("{subject}>{object}");
                        let cell = parse_features(&input, alignment)?;
                        objects.push(Some((input, cell)));
                    }
                }
            }
            let cell = parse_features(&intransitive, alignment)?;
            planned.push((*subject, (intransitive, cell), objects));
        }

        let realise = |(input, cell): (String, FeatureStructure)| Cell::Realised {
            items: realise_cell(profile, &cell),
            input,
        };
        let rows: Vec<Row> = planned
            .into_iter()
            .map(|(subject, intransitive, objects)| Row {
                subject,
                intransitive: realise(intransitive),
                objects: objects
                    .into_iter()
                    .map(|object| object.map_or(Cell::Excluded, realise))
                    .collect(),
            })
            .collect();

        tracing::info!(
            language = %profile.name(),
            %alignment,
            arguments = arguments.len(),
            gaps = rows
                .iter()
                .flat_map(|row| std::iter::once(&row.intransitive).chain(&row.objects))
                .filter(|cell| cell.is_gap())
                .count(),
            "Built paradigm"
        );
        Ok(Self {
            arguments,
            transitive: profile.transitive(),
            rows,
        })
    }

    /// The cell for `subject` (intransitive when `object` is `None`).
    pub fn cell(&self, subject: &Argument, object: Option<&Argument>) -> Option<&Cell> {
        let row = self.rows.iter().find(|row| &row.subject == subject)?;
        match object {
            None => Some(&row.intransitive),
            Some(object) => {
                let index = self.arguments.iter().position(|argument| argument == object)?;
                row.objects.get(index)
            }
        }
    }

    /// Lay the paradigm out as a table. Excluded cells are blank; gaps show
    /// `gap_marker`.
    pub fn table(&self, gap_marker: &str) -> Table {
        let render = |cell: &Cell| cell.spell_out().map_or_else(String::new, |forms| {
            if forms.is_empty() {
                gap_marker.to_string()
            } else {
                forms
            }
        });

        let mut header = vec![String::new(), "intr".to_string()];
        if self.transitive {
            header.extend(self.arguments.iter().map(Argument::to_string));
        }
        let mut table = Table::new(header);
        for row in &self.rows {
            let mut cells = vec![row.subject.to_string(), render(&row.intransitive)];
            cells.extend(row.objects.iter().map(render));
            table.push_row(cells);
        }
        table
    }
}

/// Compute and render the paradigm of `profile` with blank gaps.
pub fn draw_paradigm(profile: &LanguageProfile, alignment: Alignment) -> ParadigmResult<String> {
    Ok(Paradigm::build(profile, alignment)?.table("").render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(arguments: &[Argument]) -> Vec<String> {
        arguments.iter().map(Argument::to_string).collect()
    }

    fn profile(dual: bool, inclusive: bool, transitive: bool) -> LanguageProfile {
        LanguageProfile::builder("Test")
            .dual(dual)
            .inclusive(inclusive)
            .transitive(transitive)
            .build()
            .unwrap()
    }

    #[test]
    fn it_enumerates_the_minimal_argument_set() {
        let arguments = Argument::enumerate(&profile(false, false, false));
        assert_eq!(tokens(&arguments), vec!["1s", "1p", "2s", "2p", "3s", "3p"]);
    }

    #[test]
    fn it_enumerates_dual_and_inclusive_arguments() {
        let arguments = Argument::enumerate(&profile(true, true, false));
        assert_eq!(
            tokens(&arguments),
            vec!["1s", "1d", "1p", "1id", "1ip", "2s", "2d", "2p", "3s", "3d", "3p"]
        );
    }

    #[test]
    fn it_applies_disjoint_reference() {
        let first = Argument::new(Person::First, Number::Singular);
        let inclusive = Argument::new(Person::Inclusive, Number::Dual);
        let second = Argument::new(Person::Second, Number::Plural);
        let third = Argument::new(Person::Third, Number::Singular);

        assert!(first.corefers_with(&first));
        assert!(first.corefers_with(&inclusive));
        assert!(inclusive.corefers_with(&second));
        assert!(second.corefers_with(&inclusive));
        assert!(second.corefers_with(&second));
        assert!(!first.corefers_with(&second));
        assert!(!second.corefers_with(&first));
        assert!(!third.corefers_with(&third));
        assert!(!inclusive.corefers_with(&third));
    }

    #[test]
    fn it_never_realises_excluded_cells() {
        let profile = LanguageProfile::builder("Anything")
            .inclusive(true)
            .transitive(true)
            .morpheme("x", "[]")
            .build()
            .unwrap();
        let paradigm = Paradigm::build(&profile, Alignment::Accusative).unwrap();
        let inclusive = Argument::new(Person::Inclusive, Number::Plural);
        let second = Argument::new(Person::Second, Number::Singular);
        let third = Argument::new(Person::Third, Number::Singular);

        assert_eq!(paradigm.cell(&inclusive, Some(&second)), Some(&Cell::Excluded));
        assert_eq!(
            paradigm
                .cell(&inclusive, Some(&third))
                .and_then(Cell::spell_out),
            Some("x".to_string())
        );
    }

    #[test]
    fn it_distinguishes_gaps_from_excluded_cells() {
        let profile = LanguageProfile::builder("Karuk")
            .transitive(true)
            .morpheme("-ap", "[[Acc +2 +pl]]")
            .build()
            .unwrap();
        let paradigm = Paradigm::build(&profile, Alignment::Accusative).unwrap();
        let first = Argument::new(Person::First, Number::Singular);
        let third = Argument::new(Person::Third, Number::Singular);

        let excluded = paradigm.cell(&first, Some(&first)).unwrap();
        let gap = paradigm.cell(&first, Some(&third)).unwrap();
        assert_eq!(excluded, &Cell::Excluded);
        assert!(!excluded.is_gap());
        assert!(gap.is_gap());
        assert_eq!(
            gap,
            &Cell::Realised {
                input: "1s>3s".into(),
                items: vec![]
            }
        );

        let table = paradigm.table("0");
        assert_eq!(table.rows()[0][2], "");
        assert_eq!(table.rows()[0][6], "0");
    }

    #[test]
    fn it_draws_an_intransitive_paradigm() {
        let profile = LanguageProfile::builder("Tiny")
            .morpheme("-m", "[[+1 +sg]]")
            .morpheme("-t", "[[+2]]")
            .build()
            .unwrap();
        assert_eq!(
            draw_paradigm(&profile, Alignment::Accusative).unwrap(),
            [
                "============",
                "      intr  ",
                "------------",
                "  1s  -m    ",
                "  1p        ",
                "  2s  -t    ",
                "  2p  -t    ",
                "  3s        ",
                "  3p        ",
                "============",
            ]
            .join("\n")
        );
    }
}

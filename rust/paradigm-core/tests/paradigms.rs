//! Integration tests drawing the built-in paradigms.
//!
//! The expected tables live in `fixtures/*.txt`.

use paradigm_core::languages::{self, Sample};
use paradigm_core::{Alignment, Cell, LanguageProfile, Paradigm, draw_paradigm};
use pretty_assertions::assert_eq;
use testresult::TestResult;

fn expected(key: &str) -> &'static str {
    match key {
        "ainu" => include_str!("fixtures/ainu.txt"),
        "karuk" => include_str!("fixtures/karuk.txt"),
        "karuk-negative" => include_str!("fixtures/karuk-negative.txt"),
        "kulung-predicted" => include_str!("fixtures/kulung-predicted.txt"),
        "kulung" => include_str!("fixtures/kulung.txt"),
        "limbu" => include_str!("fixtures/limbu.txt"),
        other => panic!("no fixture for {other}"),
    }
}

fn draw(sample: &Sample) -> TestResult<String> {
    Ok(draw_paradigm(&sample.profile, sample.alignment)?)
}

#[test]
fn it_draws_every_built_in_paradigm() -> TestResult {
    for sample in languages::catalogue()? {
        assert_eq!(draw(&sample)?, expected(sample.key).trim_end_matches('\n'), "{}", sample.key);
    }
    Ok(())
}

#[test]
fn it_draws_profiles_loaded_from_json() -> TestResult {
    let karuk: LanguageProfile = serde_json::from_str(include_str!("fixtures/karuk.json"))?;
    assert_eq!(karuk, languages::karuk_positive()?);
    assert_eq!(
        draw_paradigm(&karuk, Alignment::Accusative)?,
        expected("karuk").trim_end_matches('\n')
    );

    let ainu: LanguageProfile = serde_json::from_str(include_str!("fixtures/ainu.json"))?;
    assert_eq!(ainu, languages::ainu()?);
    Ok(())
}

#[test]
fn it_round_trips_profiles_through_json() -> TestResult {
    let kulung = languages::kulung()?;
    let json = serde_json::to_string(&kulung)?;
    assert_eq!(serde_json::from_str::<LanguageProfile>(&json)?, kulung);
    Ok(())
}

#[test]
fn it_leaves_inclusive_on_second_person_blank_in_limbu() -> TestResult {
    let limbu = languages::limbu()?;
    let paradigm = Paradigm::build(&limbu, Alignment::Ergative)?;
    let inclusive = paradigm
        .arguments
        .iter()
        .find(|argument| argument.to_string() == "1ip")
        .copied()
        .ok_or("no 1ip argument")?;
    for object in &paradigm.arguments {
        let cell = paradigm.cell(&inclusive, Some(object)).ok_or("no cell")?;
        let excluded = object.person.includes_speaker() || object.person.includes_addressee();
        assert_eq!(matches!(cell, Cell::Excluded), excluded, "1ip>{object}");
    }
    Ok(())
}

#[test]
fn it_switches_alignment_per_table() -> TestResult {
    // Limbu's a- needs an absolutive first person; with accusative alignment
    // no argument is ever absolutive.
    let limbu = languages::limbu()?;
    let paradigm = Paradigm::build(&limbu, Alignment::Accusative)?;
    let realised: Vec<String> = paradigm
        .rows
        .iter()
        .flat_map(|row| std::iter::once(&row.intransitive).chain(&row.objects))
        .filter_map(Cell::spell_out)
        .filter(|forms| !forms.is_empty())
        .collect();
    assert!(realised.is_empty(), "{realised:?}");
    Ok(())
}

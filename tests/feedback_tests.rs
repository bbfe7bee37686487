mod common;

use common::word;
use wordle_tiles::feedback::score;
use wordle_tiles::{LetterScore, ScoredRow, ScoringRule};

use LetterScore::{Absent, Exact, Present};

fn scores(guess: &str, secret: &str, rule: ScoringRule) -> [LetterScore; 5] {
    ScoredRow::score(word(guess), word(secret), rule).scores()
}

#[test]
fn test_all_exact() {
    for w in ["crane", "apple", "geese", "zzzzz"] {
        let row = score(word(w), word(w));
        assert!(row.is_win());
        assert_eq!(row.scores(), [Exact; 5]);
    }
}

#[test]
fn test_all_absent() {
    let row = score(word("quick"), word("dream"));
    assert_eq!(row.scores(), [Absent; 5]);
    assert!(!row.is_win());
}

#[test]
fn test_mixed_feedback() {
    for rule in [ScoringRule::Containment, ScoringRule::Standard] {
        assert_eq!(
            scores("crane", "charm", rule),
            [Exact, Present, Exact, Absent, Absent]
        );
    }
}

#[test]
fn test_repeated_guess_letter_marked_present_by_containment() {
    assert_eq!(
        scores("aaxxx", "abcde", ScoringRule::Containment),
        [Exact, Present, Absent, Absent, Absent]
    );
    assert_eq!(
        scores("geese", "creep", ScoringRule::Containment),
        [Absent, Present, Exact, Absent, Present]
    );
}

#[test]
fn test_repeated_guess_letter_consumed_by_standard() {
    assert_eq!(
        scores("aaxxx", "abcde", ScoringRule::Standard),
        [Exact, Absent, Absent, Absent, Absent]
    );
    assert_eq!(
        scores("geese", "creep", ScoringRule::Standard),
        [Absent, Present, Exact, Absent, Absent]
    );
}

#[test]
fn test_rules_agree_without_surplus_letters() {
    for rule in [ScoringRule::Containment, ScoringRule::Standard] {
        assert_eq!(
            scores("speed", "creep", rule),
            [Absent, Present, Exact, Exact, Absent]
        );
        assert_eq!(
            scores("arose", "creep", rule),
            [Absent, Exact, Absent, Absent, Present]
        );
    }
}

#[test]
fn test_default_rule_is_containment() {
    assert_eq!(ScoringRule::default(), ScoringRule::Containment);
    assert_eq!(
        score(word("aaxxx"), word("abcde")),
        ScoredRow::score(word("aaxxx"), word("abcde"), ScoringRule::Containment)
    );
}

#[test]
fn test_exact_ranks_above_present() {
    assert!(Exact > Present);
    assert!(Present > Absent);
}

#[test]
fn test_cells_pair_letters_with_scores() {
    let row = score(word("apply"), word("apple"));
    let cells: Vec<_> = row.cells().collect();
    assert_eq!(
        cells,
        vec![
            (b'a', Exact),
            (b'p', Exact),
            (b'p', Exact),
            (b'l', Exact),
            (b'y', Absent)
        ]
    );
    assert_eq!(row.guess(), word("apply"));
}

#[test]
fn test_emoji_string() {
    let row = score(word("crane"), word("charm"));
    assert_eq!(row.to_emoji_string(), "🟩🟨🟩⬛⬛");
    assert_eq!(row.to_string(), "🟩🟨🟩⬛⬛");
}

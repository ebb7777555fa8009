//! Card, deck and scoring tests.

use flip7::{
    Card, DECK_SIZE, Deck, DeckError, Draw, Hand, MAX_NUMBER, PlayerRound, PlayerStatus,
    SEVEN_UNIQUE_BONUS, scoring,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn n(value: u8) -> Card {
    Card::Number(value)
}

fn expected_copies(card: Card) -> usize {
    match card {
        Card::Number(0) => 1,
        Card::Number(value) => usize::from(value),
        Card::Additive(_) | Card::Multiplier => 1,
        Card::Freeze | Card::FlipThree | Card::SecondChance => 3,
    }
}

fn count(cards: &[Card], face: Card) -> usize {
    cards.iter().filter(|&&card| card == face).count()
}

fn every_face() -> Vec<Card> {
    let mut faces: Vec<Card> = (0..=MAX_NUMBER).map(n).collect();
    faces.extend([2, 4, 6, 8, 10].map(Card::Additive));
    faces.extend([
        Card::Multiplier,
        Card::Freeze,
        Card::FlipThree,
        Card::SecondChance,
    ]);
    faces
}

#[test]
fn identifiers_map_to_the_weighted_distribution() {
    let cards: Vec<Card> = (1..=DECK_SIZE as u8).filter_map(Card::from_id).collect();
    assert_eq!(cards.len(), DECK_SIZE);

    for face in every_face() {
        assert_eq!(count(&cards, face), expected_copies(face), "{face}");
    }

    assert_eq!(Card::from_id(0), None);
    assert_eq!(Card::from_id(95), None);
}

#[test]
fn identifier_boundaries() {
    assert_eq!(Card::from_id(1), Some(n(0)));
    assert_eq!(Card::from_id(2), Some(n(1)));
    assert_eq!(Card::from_id(3), Some(n(2)));
    assert_eq!(Card::from_id(4), Some(n(2)));
    assert_eq!(Card::from_id(5), Some(n(3)));
    assert_eq!(Card::from_id(67), Some(n(11)));
    assert_eq!(Card::from_id(68), Some(n(12)));
    assert_eq!(Card::from_id(79), Some(n(12)));
    assert_eq!(Card::from_id(80), Some(Card::Additive(2)));
    assert_eq!(Card::from_id(84), Some(Card::Additive(10)));
    assert_eq!(Card::from_id(85), Some(Card::Multiplier));
    assert_eq!(Card::from_id(86), Some(Card::Freeze));
    assert_eq!(Card::from_id(91), Some(Card::FlipThree));
    assert_eq!(Card::from_id(94), Some(Card::SecondChance));
}

#[test]
fn card_display_and_queries() {
    assert_eq!(n(7).to_string(), "7");
    assert_eq!(Card::Additive(4).to_string(), "+4");
    assert_eq!(Card::Multiplier.to_string(), "x2");
    assert_eq!(Card::FlipThree.to_string(), "Flip Three");
    assert_eq!(Card::SecondChance.to_string(), "Second Chance");

    assert_eq!(n(9).number(), Some(9));
    assert_eq!(Card::Multiplier.number(), None);
    assert!(Card::SecondChance.is_action());
    assert!(!Card::Additive(2).is_action());
    assert_eq!(Card::SecondChance.target_action(), None);
}

#[test]
fn deck_draws_each_identifier_once() {
    let mut deck = Deck::new(17);
    let mut drawn = Vec::with_capacity(DECK_SIZE);
    while let Ok(card) = deck.draw() {
        drawn.push(card);
    }

    assert_eq!(drawn.len(), DECK_SIZE);
    for face in every_face() {
        assert_eq!(count(&drawn, face), expected_copies(face), "{face}");
    }
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.drawn(), DECK_SIZE);

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn seeded_decks_draw_the_same_sequence() {
    let mut first = Deck::new(99);
    let mut second = Deck::with_rng(ChaCha8Rng::seed_from_u64(99));

    for _ in 0..DECK_SIZE {
        assert_eq!(first.draw(), second.draw());
    }
}

#[test]
fn stacked_cards_come_out_first_and_in_order() {
    let mut deck = Deck::new(3);
    deck.stack(&[Card::Freeze, n(0), n(12)]).unwrap();
    assert_eq!(deck.remaining(), DECK_SIZE);

    assert_eq!(deck.draw(), Ok(Card::Freeze));
    assert_eq!(deck.draw(), Ok(n(0)));
    assert_eq!(deck.draw(), Ok(n(12)));
    assert_eq!(deck.drawn(), 3);
}

#[test]
fn stacking_an_unavailable_face_reserves_nothing() {
    let mut deck = Deck::new(3);
    deck.stack(&[Card::Multiplier]).unwrap();
    assert_eq!(deck.draw(), Ok(Card::Multiplier));

    assert_eq!(
        deck.stack(&[n(1), Card::Multiplier]),
        Err(DeckError::CardUnavailable)
    );
    assert_eq!(deck.remaining(), DECK_SIZE - 1);

    // The single 1 was handed back.
    deck.stack(&[n(1)]).unwrap();
    assert_eq!(deck.draw(), Ok(n(1)));
}

#[test]
fn score_sums_then_doubles() {
    assert_eq!(scoring::score(&[]), 0);
    assert_eq!(scoring::score(&[n(3), n(5), Card::Additive(4)]), 12);
    assert_eq!(
        scoring::score(&[n(3), Card::Multiplier, n(5), Card::Additive(4)]),
        24
    );
    assert_eq!(
        scoring::score(&[n(3), Card::Multiplier, Card::Multiplier]),
        12
    );
    assert_eq!(
        scoring::score(&[n(10), Card::Freeze, Card::FlipThree, Card::SecondChance]),
        10
    );
}

#[test]
fn score_bonus_needs_exactly_seven_unique() {
    let seven: Vec<Card> = (0..7).map(n).collect();
    assert_eq!(scoring::score(&seven), 21 + SEVEN_UNIQUE_BONUS);

    let mut doubled = seven.clone();
    doubled.push(Card::Multiplier);
    assert_eq!(scoring::score(&doubled), 42 + SEVEN_UNIQUE_BONUS);

    let six: Vec<Card> = (0..6).map(n).collect();
    assert_eq!(scoring::score(&six), 15);

    let eight: Vec<Card> = (0..8).map(n).collect();
    assert_eq!(scoring::score(&eight), 28);
}

#[test]
fn duplicate_and_unique_queries() {
    let hand = Hand::from(vec![n(4), Card::Additive(2), n(9), n(4), Card::SecondChance]);
    assert!(hand.has_duplicate_number());
    assert_eq!(hand.unique_number_count(), 2);
    assert_eq!(hand.count_number(4), 2);
    assert!(hand.has_second_chance());

    let clean = Hand::from(vec![n(0), n(1), Card::Multiplier]);
    assert!(!clean.has_duplicate_number());
    assert_eq!(clean.unique_number_count(), 2);
}

#[test]
fn out_of_range_numbers_are_still_distinct() {
    assert!(!scoring::has_duplicate_number(&[n(40)]));
    assert!(scoring::has_duplicate_number(&[n(40), n(40)]));
    assert_eq!(scoring::unique_number_count(&[n(40), n(72), n(255)]), 3);
}

#[test]
fn spending_second_chance_removes_one_of_each() {
    let mut hand = Hand::from(vec![
        Card::SecondChance,
        n(6),
        Card::SecondChance,
        n(2),
        n(6),
    ]);
    assert!(hand.spend_second_chance(6));
    assert_eq!(hand.cards(), &[n(6), Card::SecondChance, n(2)]);

    let mut without = Hand::from(vec![n(6), n(6)]);
    assert!(!without.spend_second_chance(6));
    assert_eq!(without.len(), 2);
}

#[test]
fn player_round_resolves_draws() {
    let mut player = PlayerRound::new();
    assert_eq!(player.receive(Card::Additive(8)), Draw::Kept);
    assert_eq!(player.receive(n(5)), Draw::Kept);
    assert_eq!(player.round_score(), 13);

    assert_eq!(player.receive(n(5)), Draw::Busted);
    assert_eq!(player.status(), PlayerStatus::Busted);
    assert!(player.status().is_terminal());
    assert_eq!(player.round_score(), 0);

    player.clear();
    assert_eq!(player.status(), PlayerStatus::Active);
    assert!(player.hand().is_empty());

    for value in 1..7 {
        assert_eq!(player.receive(n(value)), Draw::Kept);
    }
    assert_eq!(player.receive(n(7)), Draw::SevenUnique(28 + SEVEN_UNIQUE_BONUS));
    assert!(player.status().is_terminal());
}

#[test]
fn stayed_score_is_fixed() {
    let mut player = PlayerRound::new();
    player.receive(n(9));
    assert_eq!(player.stay(), 9);
    assert_eq!(player.status(), PlayerStatus::Stayed);
    assert_eq!(player.round_score(), 9);
}

//! Round engine tests.

use guerra::{
    Card, DECK_SIZE, EndReason, GamePhase, InvalidArgument, Pile, PilePolicy, Rank,
    RoundOutcome, Side, Suit, Table, Winner,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn pile(cards: &[Card]) -> Pile {
    cards.iter().copied().collect()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn higher_card_wins_both_cards() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::SinglePile,
        pile(&[card(Suit::Oros, Rank::Rey), card(Suit::Oros, Rank::Two)]),
        vec![pile(&[card(Suit::Copas, Rank::Five), card(Suit::Copas, Rank::Six)])],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Won {
            winner: Side::Player,
            player_card: card(Suit::Oros, Rank::Rey),
            opponent_card: card(Suit::Copas, Rank::Five),
            cards_won: 2,
        }
    );

    let player: Vec<Card> = table.player_pile().cards().copied().collect();
    assert_eq!(
        player,
        vec![
            card(Suit::Oros, Rank::Two),
            card(Suit::Oros, Rank::Rey),
            card(Suit::Copas, Rank::Five),
        ]
    );
    assert_eq!(table.opponent_card_count(), 1);
    assert!(table.war_cards().is_empty());
    assert_eq!(table.phase(), GamePhase::Playing);
    assert_eq!(table.player_card(), Some(card(Suit::Oros, Rank::Rey)));
    assert_eq!(table.opponent_card(), Some(card(Suit::Copas, Rank::Five)));
}

#[test]
fn lower_card_loses_to_single_opponent_pile() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::SinglePile,
        pile(&[card(Suit::Oros, Rank::Four), card(Suit::Oros, Rank::Sota)]),
        vec![pile(&[card(Suit::Bastos, Rank::As), card(Suit::Bastos, Rank::Seven)])],
    )
    .unwrap();

    table.play_round(&mut rng);

    let opponent: Vec<Card> = table.opponent_piles()[0].cards().copied().collect();
    assert_eq!(
        opponent,
        vec![
            card(Suit::Bastos, Rank::Seven),
            card(Suit::Oros, Rank::Four),
            card(Suit::Bastos, Rank::As),
        ]
    );
    assert_eq!(table.player_pile().len(), 1);
}

#[test]
fn tie_keeps_both_cards_in_contention() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::MultiPile,
        pile(&[card(Suit::Oros, Rank::Seven), card(Suit::Oros, Rank::Rey)]),
        vec![pile(&[card(Suit::Copas, Rank::Seven), card(Suit::Copas, Rank::Two)])],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::War {
            player_card: card(Suit::Oros, Rank::Seven),
            opponent_card: card(Suit::Copas, Rank::Seven),
            hidden_cards: 0,
        }
    );
    assert_eq!(table.phase(), GamePhase::War);
    assert_eq!(
        table.war_cards(),
        &[card(Suit::Oros, Rank::Seven), card(Suit::Copas, Rank::Seven)]
    );

    // The next comparison takes everything in contention.
    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::Won {
            winner: Side::Player,
            cards_won: 4,
            ..
        }
    ));
    assert_eq!(table.phase(), GamePhase::GameOver);
    assert_eq!(table.player_pile().len(), 4);
}

#[test]
fn single_pile_war_adds_hidden_cards() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::SinglePile,
        pile(&[
            card(Suit::Oros, Rank::Five),
            card(Suit::Oros, Rank::Two),
            card(Suit::Oros, Rank::Rey),
            card(Suit::Oros, Rank::Six),
        ]),
        vec![pile(&[
            card(Suit::Copas, Rank::Five),
            card(Suit::Copas, Rank::As),
            card(Suit::Copas, Rank::Four),
            card(Suit::Copas, Rank::Six),
        ])],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(outcome, RoundOutcome::War { hidden_cards: 2, .. }));
    assert_eq!(table.war_cards().len(), 4);
    assert_eq!(table.player_pile().len(), 2);
    assert_eq!(table.opponent_card_count(), 2);

    // The hidden ace is never compared; the rey beats the four.
    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::Won {
            winner: Side::Player,
            cards_won: 6,
            ..
        }
    ));
    assert_eq!(table.player_pile().len(), 7);
    assert_eq!(table.opponent_card_count(), 1);
    assert_eq!(table.phase(), GamePhase::Playing);
}

#[test]
fn single_pile_war_without_stake_ends_game() {
    let cases = [
        (1, 3, Winner::Opponent),
        (3, 1, Winner::Player),
        (1, 1, Winner::Draw),
        (2, 2, Winner::Draw),
    ];

    for (player_cards, opponent_cards, expected) in cases {
        let mut rng = rng();
        let player: Pile = core::iter::repeat_n(card(Suit::Oros, Rank::Sota), player_cards).collect();
        let opponent: Pile =
            core::iter::repeat_n(card(Suit::Espadas, Rank::Sota), opponent_cards).collect();
        let mut table = Table::in_play(PilePolicy::SinglePile, player, vec![opponent]).unwrap();

        let outcome = table.play_round(&mut rng).unwrap();
        assert!(matches!(outcome, RoundOutcome::War { hidden_cards: 0, .. }));

        let result = table.result().unwrap();
        assert_eq!(result.winner, expected, "{player_cards} vs {opponent_cards}");
        assert_eq!(result.reason, EndReason::WarUnresolvable);
        assert_eq!(table.phase(), GamePhase::GameOver);
    }
}

#[test]
fn player_sweeps_eight_rounds() {
    let mut rng = rng();
    let high: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| [card(suit, Rank::As), card(suit, Rank::Three)])
        .collect();
    let low: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| [card(suit, Rank::Two), card(suit, Rank::Four)])
        .collect();

    let mut table =
        Table::in_play(PilePolicy::SinglePile, pile(&high), vec![pile(&low)]).unwrap();

    for round in 0..8 {
        assert_eq!(table.phase(), GamePhase::Playing, "round {round}");
        let outcome = table.play_round(&mut rng).unwrap();
        assert!(matches!(
            outcome,
            RoundOutcome::Won {
                winner: Side::Player,
                ..
            }
        ));
    }

    assert_eq!(table.player_pile().len(), 16);
    assert_eq!(table.opponent_card_count(), 0);
    assert_eq!(table.phase(), GamePhase::GameOver);
    let result = table.result().unwrap();
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.reason, EndReason::OpponentExhausted);
}

#[test]
fn game_over_ignores_further_rounds() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::SinglePile,
        pile(&[card(Suit::Oros, Rank::As)]),
        vec![pile(&[card(Suit::Copas, Rank::Two)])],
    )
    .unwrap();

    table.play_round(&mut rng);
    assert_eq!(table.phase(), GamePhase::GameOver);

    let before = table.clone();
    assert_eq!(table.play_round(&mut rng), None);
    assert_eq!(table, before);
    assert_eq!(table.choose_pile(0, &mut rng), Ok(None));
    assert_eq!(table, before);
}

#[test]
fn empty_player_pile_ends_without_drawing() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::SinglePile,
        Pile::new(),
        vec![pile(&[card(Suit::Copas, Rank::Two)])],
    )
    .unwrap();

    assert_eq!(table.play_round(&mut rng), Some(RoundOutcome::Exhausted));
    let result = table.result().unwrap();
    assert_eq!(result.winner, Winner::Opponent);
    assert_eq!(result.reason, EndReason::PlayerExhausted);
    assert_eq!(table.opponent_card_count(), 1);
}

#[test]
fn in_play_checks_opponent_piles() {
    assert_eq!(
        Table::in_play(PilePolicy::SinglePile, Pile::new(), vec![]).unwrap_err(),
        InvalidArgument::OpponentPiles(0)
    );
    assert_eq!(
        Table::in_play(PilePolicy::SinglePile, Pile::new(), vec![Pile::new(), Pile::new()])
            .unwrap_err(),
        InvalidArgument::OpponentPiles(2)
    );
    assert_eq!(
        Table::in_play(PilePolicy::MultiPile, Pile::new(), vec![]).unwrap_err(),
        InvalidArgument::OpponentPiles(0)
    );
    assert!(Table::in_play(PilePolicy::MultiPile, Pile::new(), vec![Pile::new(); 3]).is_ok());
}

#[test]
fn multi_pile_draws_from_first_nonempty_pile() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::MultiPile,
        pile(&[card(Suit::Oros, Rank::As), card(Suit::Oros, Rank::Two)]),
        vec![
            Pile::new(),
            pile(&[card(Suit::Copas, Rank::Rey)]),
            pile(&[card(Suit::Bastos, Rank::Caballo)]),
        ],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::Won {
            winner: Side::Player,
            opponent_card: Card {
                rank: Rank::Rey,
                ..
            },
            ..
        }
    ));
    let sizes: Vec<usize> = table.opponent_piles().iter().map(Pile::len).collect();
    assert_eq!(sizes, vec![0, 0, 1]);
    assert_eq!(table.phase(), GamePhase::Playing);
}

#[test]
fn multi_pile_opponent_winnings_stay_with_opponent() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::MultiPile,
        pile(&[card(Suit::Oros, Rank::Two), card(Suit::Oros, Rank::Four)]),
        vec![
            pile(&[card(Suit::Copas, Rank::Rey)]),
            pile(&[card(Suit::Bastos, Rank::Caballo)]),
        ],
    )
    .unwrap();

    table.play_round(&mut rng);

    assert_eq!(table.opponent_piles().len(), 2);
    assert_eq!(table.opponent_card_count(), 3);
    assert_eq!(table.player_pile().len(), 1);
    assert_eq!(table.card_count(), 4);
}

#[test]
fn multi_pile_opponent_winnings_go_to_any_pile() {
    let winnings = [card(Suit::Oros, Rank::Two), card(Suit::Copas, Rank::Rey)];
    // Opponent piles once the rey has been drawn.
    let remaining = [
        Vec::new(),
        Vec::new(),
        vec![card(Suit::Bastos, Rank::Caballo)],
    ];
    let mut hits = [0; 3];

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut table = Table::in_play(
            PilePolicy::MultiPile,
            pile(&[card(Suit::Oros, Rank::Two), card(Suit::Oros, Rank::Four)]),
            vec![
                pile(&[card(Suit::Copas, Rank::Rey)]),
                Pile::new(),
                pile(&[card(Suit::Bastos, Rank::Caballo)]),
            ],
        )
        .unwrap();

        let outcome = table.play_round(&mut rng).unwrap();
        assert!(matches!(
            outcome,
            RoundOutcome::Won {
                winner: Side::Opponent,
                cards_won: 2,
                ..
            }
        ));

        let piles = table.opponent_piles();
        let target = (0..3)
            .find(|&index| piles[index].len() != remaining[index].len())
            .unwrap();
        hits[target] += 1;

        for (index, pile) in piles.iter().enumerate() {
            let mut expected = remaining[index].clone();
            if index == target {
                expected.extend(winnings);
            }
            let cards: Vec<Card> = pile.cards().copied().collect();
            assert_eq!(cards, expected, "seed {seed} pile {index}");
        }
    }

    assert!(hits.iter().all(|&count| count > 0), "{hits:?}");
}

#[test]
fn two_pile_multi_deal_leaves_opponent_one_pile() {
    let mut rng = rng();
    let mut table = Table::deal(PilePolicy::MultiPile, 2, &mut rng).unwrap();
    table.choose_pile(1, &mut rng).unwrap();

    assert_eq!(table.opponent_piles().len(), 1);
    assert_eq!(table.opponent_card_count(), 20);

    for _ in 0..2_000 {
        if table.play_round(&mut rng).is_none() {
            break;
        }
        assert_eq!(table.opponent_piles().len(), 1);
        assert_eq!(table.card_count(), DECK_SIZE);
    }
}

#[test]
fn multi_pile_ties_chain_into_one_war() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::MultiPile,
        pile(&[
            card(Suit::Oros, Rank::Seven),
            card(Suit::Oros, Rank::Sota),
            card(Suit::Oros, Rank::Rey),
            card(Suit::Oros, Rank::Two),
        ]),
        vec![pile(&[
            card(Suit::Copas, Rank::Seven),
            card(Suit::Copas, Rank::Sota),
            card(Suit::Copas, Rank::Five),
            card(Suit::Copas, Rank::Two),
        ])],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(outcome, RoundOutcome::War { hidden_cards: 0, .. }));
    assert_eq!(table.war_cards().len(), 2);

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(outcome, RoundOutcome::War { hidden_cards: 0, .. }));
    assert_eq!(table.phase(), GamePhase::War);
    assert_eq!(
        table.war_cards(),
        &[
            card(Suit::Oros, Rank::Seven),
            card(Suit::Copas, Rank::Seven),
            card(Suit::Oros, Rank::Sota),
            card(Suit::Copas, Rank::Sota),
        ]
    );

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::Won {
            winner: Side::Player,
            cards_won: 6,
            ..
        }
    ));

    let player: Vec<Card> = table.player_pile().cards().copied().collect();
    assert_eq!(
        player,
        vec![
            card(Suit::Oros, Rank::Two),
            card(Suit::Oros, Rank::Seven),
            card(Suit::Copas, Rank::Seven),
            card(Suit::Oros, Rank::Sota),
            card(Suit::Copas, Rank::Sota),
            card(Suit::Oros, Rank::Rey),
            card(Suit::Copas, Rank::Five),
        ]
    );
    assert_eq!(table.opponent_card_count(), 1);
    assert!(table.war_cards().is_empty());
    assert_eq!(table.phase(), GamePhase::Playing);
}

#[test]
fn single_pile_war_inside_war_stacks_hidden_cards() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::SinglePile,
        pile(&[
            card(Suit::Oros, Rank::Six),
            card(Suit::Oros, Rank::Two),
            card(Suit::Oros, Rank::Sota),
            card(Suit::Oros, Rank::Three),
            card(Suit::Oros, Rank::Rey),
            card(Suit::Oros, Rank::Four),
        ]),
        vec![pile(&[
            card(Suit::Copas, Rank::Six),
            card(Suit::Copas, Rank::As),
            card(Suit::Copas, Rank::Sota),
            card(Suit::Copas, Rank::Seven),
            card(Suit::Copas, Rank::Five),
            card(Suit::Copas, Rank::Four),
        ])],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(outcome, RoundOutcome::War { hidden_cards: 2, .. }));
    assert_eq!(table.war_cards().len(), 4);

    // The sotas tie again while the first war is still open.
    let outcome = table.play_round(&mut rng).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::War {
            player_card: card(Suit::Oros, Rank::Sota),
            opponent_card: card(Suit::Copas, Rank::Sota),
            hidden_cards: 2,
        }
    );
    assert_eq!(table.phase(), GamePhase::War);
    assert_eq!(table.war_cards().len(), 8);
    assert_eq!(table.player_pile().len(), 2);
    assert_eq!(table.opponent_card_count(), 2);

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(
        outcome,
        RoundOutcome::Won {
            winner: Side::Player,
            cards_won: 10,
            ..
        }
    ));
    assert_eq!(table.player_pile().len(), 11);
    assert_eq!(table.opponent_card_count(), 1);
    assert_eq!(table.phase(), GamePhase::Playing);
    assert_eq!(table.card_count(), 12);
}

#[test]
fn multi_pile_last_cards_tie_is_a_draw() {
    let mut rng = rng();
    let mut table = Table::in_play(
        PilePolicy::MultiPile,
        pile(&[card(Suit::Oros, Rank::Rey)]),
        vec![pile(&[card(Suit::Copas, Rank::Rey)]), Pile::new()],
    )
    .unwrap();

    let outcome = table.play_round(&mut rng).unwrap();
    assert!(matches!(outcome, RoundOutcome::War { .. }));

    let result = table.result().unwrap();
    assert_eq!(result.winner, Winner::Draw);
    assert_eq!(result.reason, EndReason::BothExhausted);
    assert_eq!(table.war_cards().len(), 2);
    assert_eq!(table.card_count(), 2);
}

#[test]
fn single_pile_choice_discards_the_rest() {
    let mut rng = rng();
    let mut table = Table::deal(PilePolicy::SinglePile, 5, &mut rng).unwrap();
    assert_eq!(table.phase(), GamePhase::Choosing);
    assert_eq!(table.offered_piles(), vec![8; 5]);

    let chosen = table.choose_pile(3, &mut rng).unwrap().unwrap();
    assert_eq!(chosen.index, 3);
    let opponent_pile = chosen.opponent_pile.unwrap();
    assert_ne!(opponent_pile, 3);
    assert!(opponent_pile < 5);
    assert_eq!(chosen.discarded, 24);

    assert_eq!(table.phase(), GamePhase::Playing);
    assert!(table.offered_piles().is_empty());
    assert_eq!(table.player_pile().len(), 8);
    assert_eq!(table.opponent_piles().len(), 1);
    assert_eq!(table.opponent_card_count(), 8);
    assert_eq!(table.card_count(), DECK_SIZE);
}

#[test]
fn single_pile_choice_reports_opponent_offer_index() {
    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut table = Table::deal(PilePolicy::SinglePile, 5, &mut rng).unwrap();
        // Choosing the last pile of an identical deal leaves the first four
        // piles, in offer order, with the opponent.
        let mut replay = ChaCha8Rng::seed_from_u64(seed);
        let mut copy = Table::deal(PilePolicy::MultiPile, 5, &mut replay).unwrap();
        copy.choose_pile(4, &mut replay).unwrap();
        let offered = copy.opponent_piles().to_vec();

        let chosen = table.choose_pile(4, &mut rng).unwrap().unwrap();
        let index = chosen.opponent_pile.unwrap();
        assert_eq!(&table.opponent_piles()[0], &offered[index], "seed {seed}");
    }
}

#[test]
fn multi_pile_choice_keeps_every_pile() {
    let mut rng = rng();
    let mut table = Table::deal(PilePolicy::MultiPile, 5, &mut rng).unwrap();

    let chosen = table.choose_pile(0, &mut rng).unwrap().unwrap();
    assert_eq!(chosen.opponent_pile, None);
    assert_eq!(chosen.discarded, 0);
    assert_eq!(table.opponent_piles().len(), 4);
    assert_eq!(table.opponent_card_count(), 32);
    assert_eq!(table.card_count(), DECK_SIZE);
}

#[test]
fn choose_pile_rejects_out_of_range_index() {
    let mut rng = rng();
    let mut table = Table::deal(PilePolicy::SinglePile, 5, &mut rng).unwrap();
    let before = table.clone();

    assert_eq!(
        table.choose_pile(5, &mut rng),
        Err(InvalidArgument::PileIndex {
            index: 5,
            available: 5
        })
    );
    assert_eq!(table, before);
}

#[test]
fn choose_pile_ignored_outside_choosing() {
    let mut rng = rng();
    let mut table = Table::new(PilePolicy::SinglePile);
    assert_eq!(table.phase(), GamePhase::Initial);
    assert_eq!(table.choose_pile(0, &mut rng), Ok(None));
    assert_eq!(table.play_round(&mut rng), None);

    let mut table = Table::deal(PilePolicy::SinglePile, 5, &mut rng).unwrap();
    table.choose_pile(1, &mut rng).unwrap();
    let before = table.clone();
    assert_eq!(table.choose_pile(1, &mut rng), Ok(None));
    assert_eq!(table, before);
}

#[test]
fn choosing_an_empty_pile_ends_the_game() {
    let mut rng = rng();
    // 40 cards in 9 piles of 5 leaves the last pile empty.
    let mut table = Table::deal(PilePolicy::MultiPile, 9, &mut rng).unwrap();
    assert_eq!(table.offered_piles()[8], 0);

    table.choose_pile(8, &mut rng).unwrap();
    assert_eq!(table.phase(), GamePhase::GameOver);
    let result = table.result().unwrap();
    assert_eq!(result.winner, Winner::Opponent);
    assert_eq!(result.reason, EndReason::PlayerExhausted);
}

#[test]
fn cards_are_conserved_through_whole_games() {
    for policy in [PilePolicy::SinglePile, PilePolicy::MultiPile] {
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut table = Table::deal(policy, 5, &mut rng).unwrap();
            table.choose_pile((seed % 5) as usize, &mut rng).unwrap();

            for _ in 0..5_000 {
                if table.play_round(&mut rng).is_none() {
                    break;
                }
                assert_eq!(table.card_count(), DECK_SIZE, "{policy:?} seed {seed}");
            }
        }
    }
}

use pokerarena_engine::cards::parse_cards;
use pokerarena_engine::hand::{compare_hands, evaluate_hand, Category, HandValue};
use std::cmp::Ordering;

fn eval(s: &str) -> HandValue {
    evaluate_hand(&parse_cards(s).unwrap())
}

#[test]
fn detects_royal_flush_among_seven() {
    let v = eval("Th Jh Qh Kh Ah 2c 3d");
    assert_eq!(v.category, Category::RoyalFlush);
    assert_eq!(v.tiebreak, vec![14]);
}

#[test]
fn category_ordering_is_total() {
    let ladder = [
        eval("2c 5d 9h Jc Ks"),
        eval("2c 2d 9h Jc Ks"),
        eval("2c 2d 9h 9c Ks"),
        eval("2c 2d 2h 9c Ks"),
        eval("5c 6d 7h 8c 9s"),
        eval("2h 5h 9h Jh Kh"),
        eval("2c 2d 2h 9c 9s"),
        eval("2c 2d 2h 2s Ks"),
        eval("5h 6h 7h 8h 9h"),
        eval("Th Jh Qh Kh Ah"),
    ];
    for pair in ladder.windows(2) {
        assert_eq!(compare_hands(&pair[0], &pair[1]), Ordering::Less, "{:?}", pair);
    }
}

#[test]
fn wheel_ranks_below_six_high_straight() {
    let wheel = eval("Ac 2d 3h 4c 5s");
    let six_high = eval("2c 3d 4h 5c 6s");
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.tiebreak, vec![5]);
    assert!(wheel < six_high);
    assert_eq!(wheel.describe(), "Straight to Five");
}

#[test]
fn steel_wheel_is_five_high_straight_flush() {
    let v = eval("Ah 2h 3h 4h 5h");
    assert_eq!(v.category, Category::StraightFlush);
    assert_eq!(v.tiebreak, vec![5]);
}

#[test]
fn kickers_break_pair_ties() {
    let a = eval("Ac Ad Kh 7c 2s");
    let b = eval("As Ah Qh 7d 2c");
    assert_eq!(a.tiebreak, vec![14, 13, 7, 2]);
    assert!(a > b);
}

#[test]
fn two_pair_kicker_decides() {
    let a = eval("Jc Jd 4h 4c As");
    let b = eval("Js Jh 4d 4s Ks");
    assert_eq!(a.tiebreak, vec![11, 4, 14]);
    assert!(a > b);
    assert_eq!(a.describe(), "Two Pair (Jacks and Fours)");
}

#[test]
fn identical_ranks_in_other_suits_tie() {
    let a = eval("Ac Kd 9h 7c 2s");
    let b = eval("Ad Kh 9s 7d 2c");
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn best_five_of_seven_picks_full_house_over_flush_draw() {
    let v = eval("Th Tc Td 2h 2c 7h 9h");
    assert_eq!(v.category, Category::FullHouse);
    assert_eq!(v.tiebreak, vec![10, 2]);
    assert_eq!(v.describe(), "Full House (Tens over Twos)");
}

#[test]
fn fewer_than_five_cards_preview_as_high_card() {
    let v = eval("4c Kd");
    assert_eq!(v.category, Category::HighCard);
    assert_eq!(v.tiebreak, vec![13, 4]);
    assert_eq!(eval("").category, Category::NoHand);
}

#[test]
fn descriptions_name_the_ranks() {
    assert_eq!(eval("Kc Kd Kh Ks 2c").describe(), "Four of Kings");
    assert_eq!(eval("Qc Qd Qh 3s 2c").describe(), "Three of Queens");
    assert_eq!(eval("Ac Ad 9h 3s 2c").describe(), "Pair of Aces");
    assert_eq!(eval("Kc 9d 7h 3s 2c").describe(), "High Card King");
    assert_eq!(eval("Ah 9h 7h 3h 2h").describe(), "Flush (Ace high)");
    assert_eq!(eval("5s 6s 7s 8s 9s").describe(), "Straight Flush (Nine high)");
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Nothing to score.
    NoHand = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
            Category::NoHand => "No Hand",
        }
    }
}

/// Totally ordered hand value: category first, then the tiebreak values
/// compared element by element. Field order matters for the derived `Ord`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandValue {
    pub category: Category,
    // ordered high -> low, layout depends on category
    pub tiebreak: Vec<u8>,
}

impl HandValue {
    /// Human-readable name such as "Full House (Tens over Twos)".
    pub fn describe(&self) -> String {
        let first = self.tiebreak.first().copied().unwrap_or(0);
        let second = self.tiebreak.get(1).copied().unwrap_or(0);
        match self.category {
            Category::RoyalFlush | Category::NoHand => self.category.label().to_string(),
            Category::StraightFlush => format!("Straight Flush ({} high)", value_name(first)),
            Category::FourOfAKind => format!("Four of {}", plural_name(first)),
            Category::FullHouse => format!(
                "Full House ({} over {})",
                plural_name(first),
                plural_name(second)
            ),
            Category::Flush => format!("Flush ({} high)", value_name(first)),
            Category::Straight => format!("Straight to {}", value_name(first)),
            Category::ThreeOfAKind => format!("Three of {}", plural_name(first)),
            Category::TwoPair => format!(
                "Two Pair ({} and {})",
                plural_name(first),
                plural_name(second)
            ),
            Category::OnePair => format!("Pair of {}", plural_name(first)),
            Category::HighCard => format!("High Card {}", value_name(first)),
        }
    }
}

/// Scores 5 to 7 cards. With more than five, every 5-card subset is scored
/// and the greatest kept. With fewer than five (previews before the river)
/// the result is `HighCard` over the available values, or `NoHand` when empty.
pub fn evaluate_hand(cards: &[Card]) -> HandValue {
    let n = cards.len();
    if n < 5 {
        let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        let category = if values.is_empty() {
            Category::NoHand
        } else {
            Category::HighCard
        };
        return HandValue {
            category,
            tiebreak: values,
        };
    }

    let mut best: Option<HandValue> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let value = evaluate_five(&five);
                        if best.as_ref().is_none_or(|b| value > *b) {
                            best = Some(value);
                        }
                    }
                }
            }
        }
    }
    // n >= 5 guarantees at least one subset
    best.unwrap_or(HandValue {
        category: Category::NoHand,
        tiebreak: Vec::new(),
    })
}

pub fn evaluate_five(cards: &[Card; 5]) -> HandValue {
    let values: Vec<u8> = cards.iter().map(Card::value).collect();
    let mut sorted_desc = values.clone();
    sorted_desc.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight_high(&values);

    // (value, count) sorted by count desc, then value desc
    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (v, counts[v as usize]))
        .collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    let top = groups[0].1;
    let second = groups.get(1).map(|g| g.1).unwrap_or(0);

    let hand = |category, tiebreak| HandValue { category, tiebreak };
    let kickers_without = |skip: &[u8]| -> Vec<u8> {
        sorted_desc
            .iter()
            .copied()
            .filter(|v| !skip.contains(v))
            .collect()
    };

    if let (true, Some(high)) = (is_flush, straight_high) {
        return if high == 14 {
            hand(Category::RoyalFlush, vec![14])
        } else {
            hand(Category::StraightFlush, vec![high])
        };
    }
    if top == 4 {
        let quad = groups[0].0;
        let mut t = vec![quad];
        t.extend(kickers_without(&[quad]).first());
        return hand(Category::FourOfAKind, t);
    }
    if top == 3 && second == 2 {
        return hand(Category::FullHouse, vec![groups[0].0, groups[1].0]);
    }
    if is_flush {
        return hand(Category::Flush, sorted_desc.clone());
    }
    if let Some(high) = straight_high {
        return hand(Category::Straight, vec![high]);
    }
    if top == 3 {
        let trip = groups[0].0;
        let mut t = vec![trip];
        t.extend(kickers_without(&[trip]));
        return hand(Category::ThreeOfAKind, t);
    }
    if top == 2 && second == 2 {
        let (high_pair, low_pair) = (groups[0].0, groups[1].0);
        let mut t = vec![high_pair, low_pair];
        t.extend(kickers_without(&[high_pair, low_pair]).first());
        return hand(Category::TwoPair, t);
    }
    if top == 2 {
        let pair = groups[0].0;
        let mut t = vec![pair];
        t.extend(kickers_without(&[pair]));
        return hand(Category::OnePair, t);
    }
    hand(Category::HighCard, sorted_desc.clone())
}

pub fn compare_hands(a: &HandValue, b: &HandValue) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

/// High card of a 5-card straight; the wheel A-2-3-4-5 counts as 5 high.
fn detect_straight_high(values: &[u8]) -> Option<u8> {
    let mut uniq = values.to_vec();
    uniq.sort_unstable();
    uniq.dedup();
    if uniq.len() != 5 {
        return None;
    }
    if uniq == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    if uniq.windows(2).all(|w| w[1] == w[0] + 1) {
        Some(uniq[4])
    } else {
        None
    }
}

fn value_name(v: u8) -> &'static str {
    match v {
        14 => "Ace",
        13 => "King",
        12 => "Queen",
        11 => "Jack",
        10 => "Ten",
        9 => "Nine",
        8 => "Eight",
        7 => "Seven",
        6 => "Six",
        5 => "Five",
        4 => "Four",
        3 => "Three",
        2 => "Two",
        _ => "?",
    }
}

fn plural_name(v: u8) -> String {
    match v {
        6 => "Sixes".to_string(),
        _ => format!("{}s", value_name(v)),
    }
}

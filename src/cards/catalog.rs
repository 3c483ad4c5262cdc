//! Classic Chance and Community Chest card lists.
//!
//! Cards whose effect depends on buildings or other players are left out;
//! everything here is expressible with `CardTask`.

use super::card::{Card, CardId, CardTask, DeckKind};
use super::deck::Deck;
use crate::board::PropertyGroup;

fn card(id: u16, deck: DeckKind, title: &str, task: CardTask) -> Card {
    Card::new(CardId::new(id), deck, title).with_task(task)
}

/// The classic Chance deck, unshuffled.
pub fn classic_chance() -> Deck {
    use CardTask::*;
    let d = DeckKind::Chance;

    Deck::new(
        d,
        [
            card(0, d, "Advance to Boardwalk", AdvanceTo(39)),
            card(1, d, "Advance to Go (Collect $200)", AdvanceTo(0)),
            card(2, d, "Advance to Illinois Avenue", AdvanceTo(24)),
            card(3, d, "Advance to St. Charles Place", AdvanceTo(11)),
            card(4, d, "Advance to the nearest Railroad", AdvanceToNearest(PropertyGroup::Railroad)),
            card(5, d, "Advance to the nearest Railroad", AdvanceToNearest(PropertyGroup::Railroad)),
            card(6, d, "Advance to the nearest Utility", AdvanceToNearest(PropertyGroup::Utility)),
            card(7, d, "Bank pays you dividend of $50", Collect(50)),
            Card::get_out_of_jail(CardId::new(8), d),
            card(9, d, "Go Back 3 Spaces", GoBack(3)),
            card(10, d, "Go to Jail", GoToJail),
            card(11, d, "Speeding fine $15", Pay(15)),
            card(12, d, "Take a trip to Reading Railroad", AdvanceTo(5)),
            card(13, d, "Your building loan matures. Collect $150", Collect(150)),
        ],
    )
}

/// The classic Community Chest deck, unshuffled.
pub fn classic_chest() -> Deck {
    use CardTask::*;
    let d = DeckKind::Chest;

    Deck::new(
        d,
        [
            card(0, d, "Advance to Go (Collect $200)", AdvanceTo(0)),
            card(1, d, "Bank error in your favor. Collect $200", Collect(200)),
            card(2, d, "Doctor's fee. Pay $50", Pay(50)),
            card(3, d, "From sale of stock you get $50", Collect(50)),
            Card::get_out_of_jail(CardId::new(4), d),
            card(5, d, "Go to Jail", GoToJail),
            card(6, d, "Holiday fund matures. Receive $100", Collect(100)),
            card(7, d, "Income tax refund. Collect $20", Collect(20)),
            card(8, d, "Life insurance matures. Collect $100", Collect(100)),
            card(9, d, "Pay hospital fees of $100", Pay(100)),
            card(10, d, "Pay school fees of $50", Pay(50)),
            card(11, d, "Receive $25 consultancy fee", Collect(25)),
            card(12, d, "You have won second prize in a beauty contest. Collect $10", Collect(10)),
            card(13, d, "You inherit $100", Collect(100)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_deck_has_one_jail_card() {
        for deck in [classic_chance(), classic_chest()] {
            let mut rng = crate::core::GameRng::new(0);
            let mut deck = deck;
            let mut jail_cards = 0;
            while deck.draw_pile_len() > 0 {
                let card = deck.draw(&mut rng).unwrap();
                assert_eq!(card.deck, deck.kind());
                if card.is_get_out_of_jail() {
                    jail_cards += 1;
                }
            }
            assert_eq!(jail_cards, 1);
        }
    }
}

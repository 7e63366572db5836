use crate::domain::{Card, CardId, List, ListId};

/// Returns the seed lists for a fresh board
///
/// Every call allocates new instances; the result is never cached or shared,
/// so callers are free to mutate what they get back. List IDs count from 1
/// and card IDs run in one sequence (1..=4) across both lists.
pub fn initial_lists() -> Vec<List> {
    let mut list1 = List::new(ListId::new(1), "リスト1".to_string());
    list1.add_card(Card::new(CardId::new(1), "タスク1".to_string()));
    list1.add_card(Card::new(CardId::new(2), "タスク2".to_string()));

    let mut list2 = List::new(ListId::new(2), "リスト2".to_string());
    list2.add_card(Card::new(CardId::new(3), "タスク3".to_string()));
    list2.add_card(Card::new(CardId::new(4), "タスク4".to_string()));

    vec![list1, list2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_two_lists() {
        let lists = initial_lists();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, ListId::new(1));
        assert_eq!(lists[1].id, ListId::new(2));
    }

    #[test]
    fn test_seed_card_ids_are_global_and_ordered() {
        let lists = initial_lists();

        let first: Vec<u64> = lists[0].cards.iter().map(|c| c.id.value()).collect();
        let second: Vec<u64> = lists[1].cards.iter().map(|c| c.id.value()).collect();

        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3, 4]);
    }

    #[test]
    fn test_seed_card_ids_are_distinct() {
        let lists = initial_lists();
        let ids: HashSet<CardId> = lists
            .iter()
            .flat_map(|list| list.cards.iter().map(|card| card.id))
            .collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_seed_literals() {
        let lists = initial_lists();

        assert_eq!(lists[0].name, "リスト1");
        assert_eq!(lists[1].name, "リスト2");

        let texts: Vec<&str> = lists
            .iter()
            .flat_map(|list| list.cards.iter().map(|card| card.text.as_str()))
            .collect();
        assert_eq!(texts, vec!["タスク1", "タスク2", "タスク3", "タスク4"]);
        assert!(texts.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(initial_lists(), initial_lists());
    }

    #[test]
    fn test_seed_calls_are_independent_instances() {
        let mut first = initial_lists();
        first[0].rename("changed".to_string());
        first[1].cards.clear();

        let second = initial_lists();
        assert_eq!(second[0].name, "リスト1");
        assert_eq!(second[1].cards.len(), 2);
    }

    #[test]
    fn test_seed_serialization_shape() {
        let lists = initial_lists();
        let json = serde_json::to_value(&lists).unwrap();

        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["cards"][1]["id"], 2);
        assert_eq!(json[1]["cards"][0]["text"], "タスク3");

        let round_trip: Vec<List> = serde_json::from_value(json).unwrap();
        assert_eq!(round_trip, lists);
    }
}

//! Tests for the block collection engine
//!
//! Covers hydration tolerance, every mutation, selection tracking and the
//! order rewrite performed on serialize.

#[cfg(test)]
mod tests {
    use crate::collection::{ordering, BlockCollection};
    use crate::models::{
        Alignment, BlockId, BlockProps, BlockType, ButtonSize, ButtonVariant, TextAlignment,
    };
    use serde_json::{json, Map, Value};
    use std::collections::HashSet;

    fn patch(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn ids(collection: &BlockCollection) -> Vec<BlockId> {
        collection.iter().map(|block| block.id().clone()).collect()
    }

    fn sample() -> BlockCollection {
        BlockCollection::new()
            .add_block(BlockType::Heading)
            .add_block(BlockType::Text)
            .add_block(BlockType::Image)
            .add_block(BlockType::Button)
            .add_block(BlockType::Spacer)
    }

    // ========================================================================
    // hydrate() Tests
    // ========================================================================

    #[test]
    fn test_hydrate_drops_unknown_types() {
        let collection = BlockCollection::hydrate(&json!({
            "blocks": [
                {"type": "unknown", "id": "u1", "order": 0, "props": {}},
                {"type": "heading", "id": "h1", "order": 0,
                 "props": {"text": "Hi", "level": 1, "alignment": "left"}}
            ]
        }));

        assert_eq!(collection.len(), 1);
        let block = &collection.blocks()[0];
        assert_eq!(block.id(), &BlockId::from("h1"));
        match block.props() {
            BlockProps::Heading(props) => {
                assert_eq!(props.text, "Hi");
                assert_eq!(props.level.get(), 1);
            }
            other => panic!("expected heading props, got {:?}", other),
        }
        assert_eq!(collection.selected_id(), None);
    }

    #[test]
    fn test_hydrate_tolerates_malformed_roots() {
        for raw in [
            Value::Null,
            json!("text"),
            json!([1, 2, 3]),
            json!({}),
            json!({"blocks": "nope"}),
            json!({"blocks": {"0": {"type": "text"}}}),
        ] {
            assert!(BlockCollection::hydrate(&raw).is_empty(), "{}", raw);
        }
    }

    #[test]
    fn test_hydrate_str_with_invalid_json_is_empty() {
        assert!(BlockCollection::hydrate_str("{not json").is_empty());
        assert_eq!(
            BlockCollection::hydrate_str(r#"{"blocks":[{"type":"spacer","id":"s"}]}"#).len(),
            1
        );
    }

    #[test]
    fn test_hydrate_preserves_relative_order_of_survivors() {
        let (collection, report) = BlockCollection::hydrate_with_report(&json!({
            "blocks": [
                {"type": "text", "id": "a"},
                42,
                {"id": "no-type"},
                {"type": "spacer", "id": "b"},
                {"type": "TEXT", "id": "c"},
                {"type": "button", "id": "d"}
            ]
        }));

        assert_eq!(
            ids(&collection),
            vec![BlockId::from("a"), BlockId::from("b"), BlockId::from("d")]
        );
        assert_eq!(report.dropped, vec![1, 2, 4]);
    }

    #[test]
    fn test_hydrate_reassigns_missing_and_duplicate_ids() {
        let (collection, report) = BlockCollection::hydrate_with_report(&json!({
            "blocks": [
                {"type": "text", "id": "dup"},
                {"type": "text", "id": "dup"},
                {"type": "image"},
                {"type": "spacer", "id": ""}
            ]
        }));

        assert_eq!(collection.len(), 4);
        assert_eq!(report.reassigned_ids.len(), 3);
        let unique: HashSet<_> = ids(&collection).into_iter().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(collection.blocks()[0].id(), &BlockId::from("dup"));
        assert!(collection.blocks()[2].id().as_str().starts_with("image-"));
    }

    #[test]
    fn test_hydrate_fills_props_leniently() {
        let collection = BlockCollection::hydrate(&json!({
            "blocks": [
                {"type": "heading", "id": "h", "props": {"level": 12, "alignment": "center"}},
                {"type": "text", "id": "t", "props": "not an object"}
            ]
        }));

        match collection.blocks()[0].props() {
            BlockProps::Heading(props) => {
                assert_eq!(props.level.get(), 2);
                assert_eq!(props.alignment, Alignment::Center);
            }
            other => panic!("expected heading props, got {:?}", other),
        }
        match collection.blocks()[1].props() {
            BlockProps::Text(props) => assert_eq!(props.alignment, TextAlignment::Left),
            other => panic!("expected text props, got {:?}", other),
        }
    }

    #[test]
    fn test_hydrate_keeps_stale_order_until_serialize() {
        let collection = BlockCollection::hydrate(&json!({
            "blocks": [
                {"type": "text", "id": "a", "order": 5},
                {"type": "text", "id": "b", "order": -1}
            ]
        }));

        assert_eq!(collection.blocks()[0].order(), 5);
        assert_eq!(collection.blocks()[1].order(), 1);

        let content = collection.serialize();
        assert_eq!(content.blocks[0].order(), 0);
        assert_eq!(content.blocks[1].order(), 1);
    }

    // ========================================================================
    // add_block() Tests
    // ========================================================================

    #[test]
    fn test_add_block_appends_and_selects() {
        let collection = BlockCollection::new().add_block(BlockType::Heading);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.blocks()[0].order(), 0);
        assert_eq!(collection.selected_id(), Some(collection.blocks()[0].id()));

        let collection = collection.add_block(BlockType::Text);
        assert_eq!(collection.blocks()[1].order(), 1);
        assert_eq!(collection.selected_block().unwrap().block_type(), BlockType::Text);
    }

    #[test]
    fn test_add_block_ids_are_pairwise_distinct() {
        let mut collection = BlockCollection::new();
        for i in 0..500 {
            collection = collection.add_block(BlockType::ALL[i % BlockType::ALL.len()]);
        }

        let unique: HashSet<_> = ids(&collection).into_iter().collect();
        assert_eq!(unique.len(), 500);
    }

    // ========================================================================
    // delete_block() Tests
    // ========================================================================

    #[test]
    fn test_delete_block_removes_by_id() {
        let collection = sample();
        let target = collection.blocks()[2].id().clone();

        let after = collection.delete_block(&target);
        assert_eq!(after.len(), 4);
        assert!(!after.contains(&target));
    }

    #[test]
    fn test_delete_block_is_idempotent() {
        let collection = sample();
        let target = collection.blocks()[1].id().clone();

        let once = collection.clone().delete_block(&target);
        let twice = once.clone().delete_block(&target);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let collection = sample();
        let after = collection.clone().delete_block(&BlockId::from("missing"));
        assert_eq!(after, collection);
    }

    #[test]
    fn test_delete_selected_block_clears_selection() {
        let collection = sample();
        let selected = collection.selected_id().cloned().unwrap();

        let after = collection.delete_block(&selected);
        assert_eq!(after.selected_id(), None);
    }

    #[test]
    fn test_delete_other_block_keeps_selection() {
        let collection = sample();
        let selected = collection.selected_id().cloned().unwrap();
        let other = collection.blocks()[0].id().clone();

        let after = collection.delete_block(&other);
        assert_eq!(after.selected_id(), Some(&selected));
    }

    // ========================================================================
    // reorder() / move_block() Tests
    // ========================================================================

    #[test]
    fn test_reorder_heading_text_scenario() {
        let collection = BlockCollection::new()
            .add_block(BlockType::Heading)
            .add_block(BlockType::Text)
            .reorder(0, 1);

        let content = collection.serialize();
        assert_eq!(content.blocks[0].block_type(), BlockType::Text);
        assert_eq!(content.blocks[0].order(), 0);
        assert_eq!(content.blocks[1].block_type(), BlockType::Heading);
        assert_eq!(content.blocks[1].order(), 1);
    }

    #[test]
    fn test_reorder_round_trip_restores_sequence() {
        let collection = sample();
        for (i, j) in [(0, 4), (4, 0), (1, 3), (2, 1), (3, 2)] {
            let restored = collection.clone().reorder(i, j).reorder(j, i);
            assert_eq!(ids(&restored), ids(&collection), "reorder {} <-> {}", i, j);
        }
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let collection = sample();
        assert_eq!(collection.clone().reorder(5, 0), collection);
        assert_eq!(collection.clone().reorder(0, 5), collection);
        assert_eq!(collection.clone().reorder(usize::MAX, 1), collection);
        assert_eq!(BlockCollection::new().reorder(0, 0), BlockCollection::new());
    }

    #[test]
    fn test_move_block_matches_array_move() {
        let collection = sample();
        let before = ids(&collection);

        let after = collection.move_block(&before[0], &before[3]);
        assert_eq!(
            ids(&after),
            vec![
                before[1].clone(),
                before[2].clone(),
                before[3].clone(),
                before[0].clone(),
                before[4].clone()
            ]
        );
    }

    #[test]
    fn test_move_block_with_unknown_or_same_id_is_noop() {
        let collection = sample();
        let first = collection.blocks()[0].id().clone();

        assert_eq!(collection.clone().move_block(&first, &first), collection);
        assert_eq!(
            collection.clone().move_block(&first, &BlockId::from("gone")),
            collection
        );
    }

    // ========================================================================
    // update_props() Tests
    // ========================================================================

    #[test]
    fn test_update_props_button_scenario() {
        let collection = BlockCollection::new().add_block(BlockType::Button);
        let id = collection.blocks()[0].id().clone();

        let collection =
            collection.update_props(&id, &patch(json!({"text": "Click me", "href": "/go"})));
        let content = collection.serialize();

        match content.blocks[0].props() {
            BlockProps::Button(props) => {
                assert_eq!(props.text, "Click me");
                assert_eq!(props.href, "/go");
                assert_eq!(props.variant, ButtonVariant::Primary);
                assert_eq!(props.size, ButtonSize::Md);
                assert_eq!(props.alignment, Alignment::Center);
            }
            other => panic!("expected button props, got {:?}", other),
        }
    }

    #[test]
    fn test_update_props_preserves_type_id_and_order() {
        let collection = sample();
        for block in collection.blocks() {
            let after = collection
                .clone()
                .update_props(block.id(), &patch(json!({"text": "x"})));
            let updated = after.get(block.id()).unwrap();

            assert_eq!(updated.block_type(), block.block_type());
            assert_eq!(updated.id(), block.id());
            assert_eq!(updated.order(), block.order());
        }
    }

    #[test]
    fn test_update_props_unknown_id_is_noop() {
        let collection = sample();
        let after = collection
            .clone()
            .update_props(&BlockId::from("nope"), &patch(json!({"text": "x"})));
        assert_eq!(after, collection);
    }

    #[test]
    fn test_update_props_ignores_fields_outside_schema() {
        let collection = BlockCollection::new().add_block(BlockType::Heading);
        let id = collection.blocks()[0].id().clone();

        let after = collection.update_props(
            &id,
            &patch(json!({"level": 7, "color": "#333", "href": "/ignored"})),
        );

        let value = serde_json::to_value(after.get(&id).unwrap()).unwrap();
        assert_eq!(value["props"]["level"], 2);
        assert_eq!(value["props"]["color"], "#333");
        assert!(value["props"].get("href").is_none());
    }

    // ========================================================================
    // select() Tests
    // ========================================================================

    #[test]
    fn test_select_existing_and_none() {
        let collection = sample();
        let first = collection.blocks()[0].id().clone();

        let collection = collection.select(Some(&first));
        assert_eq!(collection.selected_id(), Some(&first));

        let collection = collection.select(None);
        assert_eq!(collection.selected_id(), None);
    }

    #[test]
    fn test_select_absent_id_clears_selection() {
        let collection = sample().select(Some(&BlockId::from("ghost")));
        assert_eq!(collection.selected_id(), None);
    }

    // ========================================================================
    // serialize() Tests
    // ========================================================================

    #[test]
    fn test_serialize_orders_match_index_after_mutations() {
        let collection = sample();
        let second = collection.blocks()[1].id().clone();
        let collection = collection
            .delete_block(&second)
            .add_block(BlockType::Text)
            .reorder(4, 0)
            .reorder(1, 3)
            .add_block(BlockType::Heading);

        let content = collection.serialize();
        assert!(ordering::is_contiguous(&content.blocks));
        for (index, block) in content.blocks.iter().enumerate() {
            assert_eq!(block.order() as usize, index);
        }
    }

    #[test]
    fn test_serialize_then_hydrate_preserves_blocks() {
        let collection = sample().reorder(0, 2);
        let content = collection.serialize();

        let rehydrated = BlockCollection::hydrate(&content.to_value());
        assert_eq!(rehydrated.blocks(), content.blocks.as_slice());
    }

    #[test]
    fn test_from_blocks_reassigns_duplicate_ids() {
        let content = sample().serialize();
        let mut blocks = content.blocks.clone();
        blocks.push(content.blocks[0].clone());

        let collection = BlockCollection::from_blocks(blocks);
        assert_eq!(collection.len(), 6);
        let unique: HashSet<BlockId> = ids(&collection).into_iter().collect();
        assert_eq!(unique.len(), 6);
        assert_eq!(collection.blocks()[5].props(), content.blocks[0].props());
        assert_ne!(collection.blocks()[5].id(), content.blocks[0].id());
    }

    // ========================================================================
    // Randomized mutation sequences
    // ========================================================================

    mod sequences {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Step {
            Add(usize),
            Delete(usize),
            Reorder(usize, usize),
            Move(usize, usize),
            Update(usize),
            Select(usize),
        }

        fn step() -> impl Strategy<Value = Step> {
            prop_oneof![
                (0..BlockType::ALL.len()).prop_map(Step::Add),
                (0..8usize).prop_map(Step::Delete),
                (0..8usize, 0..8usize).prop_map(|(from, to)| Step::Reorder(from, to)),
                (0..8usize, 0..8usize).prop_map(|(active, over)| Step::Move(active, over)),
                (0..8usize).prop_map(Step::Update),
                (0..8usize).prop_map(Step::Select),
            ]
        }

        /// Id at `index`, or an id that is not in the collection
        fn id_at(collection: &BlockCollection, index: usize) -> BlockId {
            collection
                .blocks()
                .get(index)
                .map(|block| block.id().clone())
                .unwrap_or_else(|| BlockId::from("absent"))
        }

        proptest! {
            #[test]
            fn test_invariants_hold_after_any_sequence(
                steps in prop::collection::vec(step(), 0..60)
            ) {
                let mut collection = BlockCollection::new();
                let mut expected_len = 0usize;

                for step in steps {
                    collection = match step {
                        Step::Add(kind) => {
                            expected_len += 1;
                            collection.add_block(BlockType::ALL[kind])
                        }
                        Step::Delete(index) => {
                            if index < collection.len() {
                                expected_len -= 1;
                            }
                            let id = id_at(&collection, index);
                            collection.delete_block(&id)
                        }
                        Step::Reorder(from, to) => collection.reorder(from, to),
                        Step::Move(active, over) => {
                            let active = id_at(&collection, active);
                            let over = id_at(&collection, over);
                            collection.move_block(&active, &over)
                        }
                        Step::Update(index) => {
                            let id = id_at(&collection, index);
                            collection.update_props(&id, &patch(json!({"text": "Edited", "height": "8px"})))
                        }
                        Step::Select(index) => {
                            let id = id_at(&collection, index);
                            collection.select(Some(&id))
                        }
                    };

                    prop_assert_eq!(collection.len(), expected_len);

                    let unique: HashSet<BlockId> = ids(&collection).into_iter().collect();
                    prop_assert_eq!(unique.len(), collection.len());

                    if let Some(selected) = collection.selected_id() {
                        prop_assert!(collection.contains(selected));
                    }

                    let content = collection.serialize();
                    prop_assert!(ordering::is_contiguous(&content.blocks));
                    prop_assert_eq!(content.blocks.len(), collection.len());
                }
            }
        }
    }
}

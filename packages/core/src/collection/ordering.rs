//! Sequence ordering helpers
//!
//! Position in the block vector is the only ordering the engine trusts.
//! These helpers move items within a sequence and rewrite the informational
//! `order` field so it matches position again.

use crate::models::Block;

/// Move the item at `from` to `to` (remove, then insert into the shorter list)
///
/// Returns `false` without touching `items` when either index is out of
/// range or both are equal.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    let len = items.len();
    if from >= len || to >= len || from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Rewrite every block's order to its 0-based index
pub fn renumber(blocks: &mut [Block]) {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.set_order(u32::try_from(index).unwrap_or(u32::MAX));
    }
}

/// Whether every block's order already equals its index
pub fn is_contiguous(blocks: &[Block]) -> bool {
    blocks
        .iter()
        .enumerate()
        .all(|(index, block)| block.order() as usize == index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockType;

    #[test]
    fn test_move_item_forward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut items, 0, 2));
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_item_backward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut items, 3, 1));
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_item_out_of_range_is_noop() {
        let mut items = vec!['a', 'b'];
        assert!(!move_item(&mut items, 2, 0));
        assert!(!move_item(&mut items, 0, 2));
        assert!(!move_item(&mut items, 1, 1));
        assert_eq!(items, vec!['a', 'b']);
    }

    #[test]
    fn test_move_item_on_empty() {
        let mut items: Vec<u8> = Vec::new();
        assert!(!move_item(&mut items, 0, 0));
    }

    #[test]
    fn test_renumber_makes_orders_contiguous() {
        let mut blocks = vec![
            Block::new_default(BlockType::Text, 7),
            Block::new_default(BlockType::Spacer, 7),
            Block::new_default(BlockType::Image, 0),
        ];
        assert!(!is_contiguous(&blocks));

        renumber(&mut blocks);
        assert!(is_contiguous(&blocks));
        assert_eq!(blocks[2].order(), 2);
    }
}

//! Ordered list of videos under user reordering.

use rand::Rng;

use crate::models::VideoItem;
use crate::shuffle::shuffled;

/// Move the element at `from` to `to`, shifting the ones in between.
///
/// Out-of-range indices leave the list unchanged.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from < items.len() && to < items.len() && from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
}

/// The working list being ranked.
///
/// Rank is never stored: an item's rank is its position plus one.
#[derive(Debug, Clone, Default)]
pub struct RankedList {
    /// Items in current rank order.
    items: Vec<VideoItem>,
    /// Message shown under the list (e.g. after finalizing).
    status: Option<String>,
}

impl RankedList {
    /// Create a list in the given order.
    pub fn new(items: Vec<VideoItem>) -> Self {
        Self {
            items,
            status: None,
        }
    }

    /// Replace the whole order. No implicit shuffle.
    pub fn initialize(&mut self, items: Vec<VideoItem>) {
        self.items = items;
        self.status = None;
    }

    /// Items in rank order.
    pub fn items(&self) -> &[VideoItem] {
        &self.items
    }

    /// `(rank, item)` pairs in order, rank starting at 1.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &VideoItem)> {
        self.items.iter().enumerate().map(|(idx, item)| (idx + 1, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Position of an item by identity.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// 1-based rank of an item.
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|idx| idx + 1)
    }

    /// Move `moved_id` to the position currently held by `target_id`.
    ///
    /// Returns false (and changes nothing) when the ids are equal or either
    /// is not in the list.
    pub fn reorder_by_identity(&mut self, moved_id: &str, target_id: &str) -> bool {
        if moved_id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(moved_id), self.index_of(target_id)) else {
            return false;
        };

        array_move(&mut self.items, from, to);
        self.status = None;
        tracing::debug!("Moved {} from rank {} to rank {}", moved_id, from + 1, to + 1);
        true
    }

    /// Move an item one rank towards the top.
    pub fn move_up(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(idx) if idx > 0 => {
                let target = self.items[idx - 1].id.clone();
                self.reorder_by_identity(id, &target)
            }
            _ => false,
        }
    }

    /// Move an item one rank towards the bottom.
    pub fn move_down(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(idx) if idx + 1 < self.items.len() => {
                let target = self.items[idx + 1].id.clone();
                self.reorder_by_identity(id, &target)
            }
            _ => false,
        }
    }

    /// Replace the order with a random permutation of the current items.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items = shuffled(&self.items, rng);
        self.status = None;
    }

    /// Confirm the current order without changing it.
    ///
    /// Returns false for an empty list.
    pub fn finalize(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.status = Some(format!(
            "Sorting finalized! You ranked {} videos from least complex (top/left) to most complex (bottom/right).",
            self.items.len()
        ));
        tracing::info!("Ranking finalized with {} videos", self.items.len());
        true
    }
}

//! # Review Queue
//!
//! Ordered batch of deals awaiting a manual rating, plus the cursor into it.
//!
//! `0 <= cursor <= len` always holds. `cursor == len` means the queue is
//! exhausted and needs a refill.

use shared::Deal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQueue {
    deals: Vec<Deal>,
    cursor: usize,
}

impl ReviewQueue {
    pub fn new(deals: Vec<Deal>) -> Self {
        Self { deals, cursor: 0 }
    }

    /// Swap in a fresh batch and rewind the cursor.
    pub fn replace(&mut self, deals: Vec<Deal>) {
        self.deals = deals;
        self.cursor = 0;
    }

    /// Deal under the cursor, if any.
    pub fn current(&self) -> Option<&Deal> {
        self.deals.get(self.cursor)
    }

    /// Move past the current deal. Returns false when already exhausted.
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// 1-based position of the current deal and the batch size.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current().map(|_| (self.cursor + 1, self.deals.len()))
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.deals.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(id: i64) -> Deal {
        Deal {
            id,
            merchant_name: format!("Merchant {}", id),
            offer_title: "10% off".to_string(),
            discount_value: None,
            category: None,
            description: None,
            valid_until: None,
            applicable_cards: None,
        }
    }

    #[test]
    fn test_empty_queue_is_exhausted() {
        let queue = ReviewQueue::default();
        assert!(queue.is_exhausted());
        assert!(queue.current().is_none());
        assert!(queue.position().is_none());
        assert_eq!(queue.cursor(), 0);
    }

    #[test]
    fn test_advance_walks_to_exhaustion_and_stops() {
        let mut queue = ReviewQueue::new(vec![deal(1), deal(2), deal(3)]);

        for expected in 1..=3 {
            assert_eq!(queue.current().map(|d| d.id), Some(expected));
            assert_eq!(queue.position(), Some((expected as usize, 3)));
            let before = queue.cursor();
            assert!(queue.advance());
            assert_eq!(queue.cursor(), before + 1);
        }

        assert!(queue.is_exhausted());
        assert!(!queue.advance());
        assert_eq!(queue.cursor(), 3);
    }

    #[test]
    fn test_replace_rewinds_cursor() {
        let mut queue = ReviewQueue::new(vec![deal(1), deal(2)]);
        queue.advance();
        queue.advance();
        assert!(queue.is_exhausted());

        queue.replace(vec![deal(10)]);
        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.current().map(|d| d.id), Some(10));

        queue.replace(Vec::new());
        assert_eq!(queue.cursor(), 0);
        assert!(queue.is_exhausted());
    }
}

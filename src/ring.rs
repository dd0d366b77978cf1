//! Four-slot ring of lit/unlit markers addressed by a push cursor and a pop
//! cursor.
//!
//! Overflow and underflow are both silent: pushing into a full ring
//! overwrites the oldest slot, popping an empty ring does nothing.

use crate::config::SLOT_COUNT;

/// State of one ring slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied,
}

impl Slot {
    pub fn is_occupied(self) -> bool {
        self == Slot::Occupied
    }
}

/// RingBuffer struct declaration: Note all fields are private
///
/// 1. slots: slot states, index equals LED position
/// 2. push_index: next slot `push` writes
/// 3. pop_index: next slot `pop` clears
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer {
    slots: [Slot; SLOT_COUNT],
    push_index: usize,
    pop_index: usize,
}

impl RingBuffer {
    /// Creates an empty ring with both cursors on slot 0.
    pub const fn new() -> Self {
        RingBuffer {
            slots: [Slot::Empty; SLOT_COUNT],
            push_index: 0,
            pop_index: 0,
        }
    }

    /// Marks the slot under the push cursor as occupied and advances it.
    ///
    /// When the cursors coincide and the slot after the push cursor is
    /// already occupied, the pop cursor is dragged forward one slot so it
    /// keeps pointing at the oldest marker once the ring starts wrapping.
    pub fn push(&mut self) {
        self.slots[self.push_index] = Slot::Occupied;

        if self.push_index == self.pop_index
            && self.slots[Self::advance(self.push_index)].is_occupied()
        {
            self.pop_index = Self::advance(self.pop_index);
        }

        self.push_index = Self::advance(self.push_index);
    }

    /// Clears the slot under the pop cursor and advances it. No-op when that
    /// slot is already empty.
    pub fn pop(&mut self) {
        if !self.slots[self.pop_index].is_occupied() {
            return;
        }

        self.slots[self.pop_index] = Slot::Empty;
        self.pop_index = Self::advance(self.pop_index);
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn push_index(&self) -> usize {
        self.push_index
    }

    pub fn pop_index(&self) -> usize {
        self.pop_index
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == SLOT_COUNT
    }

    const fn advance(index: usize) -> usize {
        if index < SLOT_COUNT - 1 { index + 1 } else { 0 }
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        RingBuffer::new()
    }
}

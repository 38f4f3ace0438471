//! Slot labels and their check flags, kept together.
//!
//! Holding both lists in one value means a reload cannot leave the flags
//! indexed against a stale slot list.

use std::collections::{HashMap, VecDeque};

use crate::error::{Result, SlotError};
use crate::resolver::selected_slots_from_checklist;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotChecklist {
    slots: Vec<String>,
    checked: Vec<bool>,
}

impl SlotChecklist {
    /// All slots start unchecked.
    pub fn new(slots: Vec<String>) -> Self {
        let checked = vec![false; slots.len()];
        Self { slots, checked }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn flags(&self) -> &[bool] {
        &self.checked
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, checked: bool) -> Result<()> {
        let len = self.checked.len();
        let flag = self
            .checked
            .get_mut(index)
            .ok_or(SlotError::SlotIndexOutOfRange { index, len })?;
        *flag = checked;
        Ok(())
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let next = !self.is_checked(index);
        self.set(index, next)?;
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.checked.iter_mut().for_each(|flag| *flag = false);
    }

    pub fn any_checked(&self) -> bool {
        self.checked.iter().any(|&flag| flag)
    }

    /// Checked slot labels, in display order.
    pub fn selected(&self) -> Vec<String> {
        // slots and checked always have equal length.
        selected_slots_from_checklist(&self.slots, &self.checked).unwrap_or_default()
    }

    /// Swap in a freshly loaded slot list. Ticks carry over by label and
    /// occurrence: the n-th copy of a label is checked iff the n-th copy was
    /// checked before. Everything else starts unchecked.
    pub fn replace_slots(&mut self, slots: Vec<String>) {
        let mut previous: HashMap<&str, VecDeque<bool>> = HashMap::new();
        for (slot, &flag) in self.slots.iter().zip(&self.checked) {
            previous.entry(slot.as_str()).or_default().push_back(flag);
        }
        let checked = slots
            .iter()
            .map(|slot| {
                previous
                    .get_mut(slot.as_str())
                    .and_then(VecDeque::pop_front)
                    .unwrap_or(false)
            })
            .collect();
        self.checked = checked;
        self.slots = slots;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

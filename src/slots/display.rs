use dioxus::prelude::*;

/// Write `values[i]` into `elements[i]` for every slot
///
/// Both slices must be the same length; a mismatch is a caller bug.
pub fn display_slot_values<T: Clone>(elements: &mut [T], values: &[T]) {
    assert_eq!(
        elements.len(),
        values.len(),
        "slot display and value row differ in length"
    );
    elements.clone_from_slice(values);
}

/// Something that shows one symbol per slot
pub trait SlotDisplay {
    fn slot_count(&self) -> usize;

    /// Overwrite the slots from `from` to the end with `values`.
    /// Slots before `from` are left as they are.
    fn show(&mut self, from: usize, values: &[String]);

    /// Current symbols, in slot order
    fn symbols(&self) -> Vec<String>;
}

impl SlotDisplay for Vec<String> {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn show(&mut self, from: usize, values: &[String]) {
        display_slot_values(&mut self[from..], values);
    }

    fn symbols(&self) -> Vec<String> {
        self.clone()
    }
}

/// The rendered reel row; writing it re-renders the slot spans
impl SlotDisplay for Signal<Vec<String>> {
    fn slot_count(&self) -> usize {
        self.peek().len()
    }

    fn show(&mut self, from: usize, values: &[String]) {
        display_slot_values(&mut self.write()[from..], values);
    }

    fn symbols(&self) -> Vec<String> {
        self.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_display_writes_every_slot() {
        let mut elements = row(&["a", "b", "c"]);
        display_slot_values(&mut elements, &row(&["x", "y", "z"]));
        assert_eq!(elements, row(&["x", "y", "z"]));
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn test_display_rejects_length_mismatch() {
        let mut elements = row(&["a", "b", "c"]);
        display_slot_values(&mut elements, &row(&["x", "y"]));
    }

    #[test]
    fn test_show_leaves_leading_slots_frozen() {
        let mut display = row(&["a", "b", "c", "d"]);
        display.show(2, &row(&["y", "z"]));
        assert_eq!(display.symbols(), row(&["a", "b", "y", "z"]));
        assert_eq!(display.slot_count(), 4);
    }
}

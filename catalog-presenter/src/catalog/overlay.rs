//! Dish detail overlay state
//!
//! Closing keeps the last dish so the overlay can animate out with its
//! content still in place.

use shared::models::Dish;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishOverlay {
    selected: Option<Dish>,
    open: bool,
}

impl DishOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, dish: Dish) {
        self.selected = Some(dish);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last opened dish, still set after close
    pub fn selected(&self) -> Option<&Dish> {
        self.selected.as_ref()
    }

    /// Dish to render in the overlay, `None` while closed
    pub fn current(&self) -> Option<&Dish> {
        self.selected.as_ref().filter(|_| self.open)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle() {
        let mut overlay = DishOverlay::new();
        assert!(!overlay.is_open());
        assert!(overlay.selected().is_none());

        overlay.open(Dish::new("1", "Борщ"));
        assert!(overlay.is_open());
        assert_eq!(overlay.current().map(|d| d.id.as_str()), Some("1"));

        overlay.close();
        assert!(!overlay.is_open());
        assert!(overlay.current().is_none());
        assert_eq!(overlay.selected().map(|d| d.id.as_str()), Some("1"));

        overlay.open(Dish::new("2", "Плов"));
        assert!(overlay.is_open());
        assert_eq!(overlay.selected().map(|d| d.id.as_str()), Some("2"));
    }

    #[test]
    fn test_open_replaces_while_open() {
        let mut overlay = DishOverlay::new();
        overlay.open(Dish::new("1", "Борщ"));
        overlay.open(Dish::new("2", "Плов"));

        assert!(overlay.is_open());
        assert_eq!(overlay.current().map(|d| d.name.as_str()), Some("Плов"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut overlay = DishOverlay::new();
        overlay.close();
        assert_eq!(overlay, DishOverlay::default());
    }
}

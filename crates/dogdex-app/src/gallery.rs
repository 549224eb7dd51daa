//! Dogs currently on screen plus the selection cursor

use dogdex_core::Dog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    dogs: Vec<Dog>,
    selected: usize,
}

impl GalleryState {
    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_dog(&self) -> Option<&Dog> {
        self.dogs.get(self.selected)
    }

    /// Show a fresh result set with the cursor on the first dog
    pub fn replace(&mut self, dogs: Vec<Dog>) {
        self.dogs = dogs;
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Drop a dog from the listing, keeping the cursor in range
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.dogs.len();
        self.dogs.retain(|dog| dog.id != id);
        if self.selected >= self.dogs.len() {
            self.selected = self.dogs.len().saturating_sub(1);
        }
        self.dogs.len() != before
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.dogs.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.dogs.len().saturating_sub(1);
    }

    /// Move the cursor by `delta` dogs, clamped to the listing
    pub fn select_by(&mut self, delta: isize) {
        if self.dogs.is_empty() {
            return;
        }
        let last = self.dogs.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, last) as usize;
    }
}

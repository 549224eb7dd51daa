//! Session-local favorites
//!
//! Favorites live only as long as the signed-in session; nothing is
//! persisted. Insertion order is kept so paging through favorites is stable.

/// Outcome of [`FavoriteSet::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Ordered set of favorite dog ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it otherwise
    pub fn toggle(&mut self, id: &str) -> FavoriteToggle {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            FavoriteToggle::Removed
        } else {
            self.ids.push(id.to_string());
            FavoriteToggle::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Ids on the 1-based `page` when split into pages of `per_page`
    pub fn page(&self, page: u32, per_page: u32) -> Vec<String> {
        let per_page = per_page as usize;
        let start = (page.max(1) as usize - 1).saturating_mul(per_page);
        if per_page == 0 || start >= self.ids.len() {
            return Vec::new();
        }
        let end = (start + per_page).min(self.ids.len());
        self.ids[start..end].to_vec()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

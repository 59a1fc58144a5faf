//! Client-side listing: category/search filtering and page slicing over a
//! fully materialized post list.

use serde::Serialize;

use crate::domain::{CategoryFilter, Post};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Combined listing filter. Both predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl PostFilter {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Category matches (or is `All`) and the search text is empty or found in
    /// the title or excerpt, ignoring case.
    pub fn matches(&self, post: &Post) -> bool {
        if !self.category.matches(post.category) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        post.title.to_lowercase().contains(&needle) || post.excerpt.to_lowercase().contains(&needle)
    }

    pub fn apply<'a, I>(&self, posts: I) -> Vec<Post>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        posts.into_iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// One page of a listing. Pages are 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice `items` into the requested page. Page 0 is treated as page 1;
/// a page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page);

    Page {
        items: items.into_iter().skip(start).take(per_page).collect(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

/// Listing state held by a browsing view: active filter plus current page.
///
/// Changing the category or the search text sends the view back to page 1.
#[derive(Debug, Clone)]
pub struct BrowseState {
    filter: PostFilter,
    page: usize,
    per_page: usize,
}

impl BrowseState {
    pub fn new(per_page: usize) -> Self {
        Self {
            filter: PostFilter::default(),
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn filter(&self) -> &PostFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.filter.category != category {
            self.filter.category = category;
            self.page = 1;
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.filter.search != search {
            self.filter.search = search;
            self.page = 1;
        }
    }

    /// Jump to a page. Bounds are applied when the view is built.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Filter `posts` and cut out the current page.
    pub fn view(&self, posts: &[Post]) -> Page<Post> {
        paginate(self.filter.apply(posts), self.page, self.per_page)
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

//! Pure filtering and pagination over lead collections.
//!
//! List displays are computed from the full lead collection and a filter
//! spec; nothing here touches persistence. The repository port exposes
//! the same algorithm through [`crate::lead::ports::LeadRepository`].

use super::{Lead, LeadSource, OwnerName, StageKind};
use serde::{Deserialize, Serialize};

/// Page size used when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter spec for lead list queries.
///
/// The text search and the three exact-match filters combine with logical
/// AND; an unset exact-match filter passes every lead through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFilter {
    /// Case-insensitive substring query matched against client name,
    /// email, mobile, WhatsApp, desired service, and owner; a lead
    /// matches when any of those fields matches. Empty matches all.
    pub search: String,
    /// Exact stage match; `None` matches every stage.
    pub stage: Option<StageKind>,
    /// Exact source match; `None` matches every source.
    pub source: Option<LeadSource>,
    /// Exact owner match; `None` matches every owner.
    pub owner: Option<String>,
}

impl LeadFilter {
    /// Returns `true` when the lead satisfies all four predicates.
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        self.matches_search(lead)
            && self.stage.is_none_or(|stage| lead.stage().kind() == stage)
            && self.source.is_none_or(|source| lead.source() == source)
            && self
                .owner
                .as_deref()
                .is_none_or(|owner| lead.owner().as_str() == owner)
    }

    fn matches_search(&self, lead: &Lead) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let fields = [
            Some(lead.client_name().as_str()),
            lead.contact().email.as_deref(),
            lead.contact().mobile.as_deref(),
            lead.contact().whatsapp.as_deref(),
            Some(lead.desired_service()),
            Some(lead.owner().as_str()),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// One-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a request for the given one-based page.
    ///
    /// A zero page size is raised to one. Page zero is out of range and
    /// yields an empty page; the layer never clamps an out-of-range page
    /// back into range, that is the caller's concern.
    #[must_use]
    pub const fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// Creates a request for the given page at the default page size.
    #[must_use]
    pub const fn for_page(page: usize) -> Self {
        Self::new(page, DEFAULT_PAGE_SIZE)
    }

    /// Returns the one-based page index.
    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::for_page(1)
    }
}

/// One page of a filtered collection, with pagination totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the one-based page index that was requested.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size that was requested.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of items across all pages.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the number of pages at this page size.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns `true` when this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cuts one page out of an already-filtered collection.
///
/// An out-of-range page (including page zero) yields an empty item set
/// without error; the totals still describe the whole collection.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(request.page_size());
    let offset = request
        .page()
        .checked_sub(1)
        .and_then(|page| page.checked_mul(request.page_size()));
    let page_items = offset.map_or_else(Vec::new, |skip| {
        items
            .iter()
            .skip(skip)
            .take(request.page_size())
            .cloned()
            .collect()
    });
    Page {
        items: page_items,
        page: request.page(),
        page_size: request.page_size(),
        total_items,
        total_pages,
    }
}

/// Returns the distinct owners of the full collection, sorted
/// lexicographically.
///
/// Owner filter choices are derived from the unfiltered collection, so a
/// narrowed list never hides an owner option.
#[must_use]
pub fn distinct_owners(leads: &[Lead]) -> Vec<OwnerName> {
    let mut owners: Vec<OwnerName> = leads.iter().map(|lead| lead.owner().clone()).collect();
    owners.sort();
    owners.dedup();
    owners
}

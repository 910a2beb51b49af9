//! Member directory view state
//!
//! One collection drives the members screen: the full membership stays in
//! insertion order, and search, tribe filter, and pagination are lenses on
//! top of it. Changing any input snaps the page back to 1 inside the same
//! mutation, so a watcher never observes a stale page against new inputs.

use dime_core::{Member, MemberId, NewMember, Tribe};
use serde::{Deserialize, Serialize};

/// Page size used until the operator picks another one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Tribe restriction applied on top of the text search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TribeFilter {
    /// No restriction
    #[default]
    All,
    /// Only members of one tribe
    Only(Tribe),
}

/// Directory of members with its search and pagination inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembersState {
    /// Insertion order is presentation order; additions append at the tail
    pub members: Vec<Member>,
    pub search_query: String,
    pub tribe_filter: TribeFilter,
    /// 1-based current page
    pub page: usize,
    pub page_size: usize,
}

impl Default for MembersState {
    fn default() -> Self {
        Self::with_members(Vec::new())
    }
}

impl MembersState {
    /// Directory over an existing collection, inputs at their defaults
    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members,
            search_query: String::new(),
            tribe_filter: TribeFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Members passing the current search and tribe filter, in insertion
    /// order
    ///
    /// The text search matches the name case-insensitively or the contact
    /// case-sensitively, substring semantics either way; an empty query
    /// passes everyone. The tribe filter applies on top.
    pub fn filtered(&self) -> Vec<&Member> {
        let query_lower = self.search_query.to_lowercase();
        self.members
            .iter()
            .filter(|member| self.matches(member, &query_lower))
            .collect()
    }

    fn matches(&self, member: &Member, query_lower: &str) -> bool {
        let text_hit = query_lower.is_empty()
            || member.name.to_lowercase().contains(query_lower)
            || member.contact.contains(&self.search_query);
        let tribe_hit = match self.tribe_filter {
            TribeFilter::All => true,
            TribeFilter::Only(tribe) => member.tribe == tribe,
        };
        text_hit && tribe_hit
    }

    /// The current page window of [`filtered`](Self::filtered)
    ///
    /// A page past the end yields an empty list.
    pub fn page_items(&self) -> Vec<&Member> {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Number of pages over the filtered collection
    ///
    /// `ceil(filtered / page_size)`: an empty filtered view has no pages.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    /// Look up one member; absence is an ordinary outcome
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    /// Directory size; every registered member counts as active
    pub fn active_count(&self) -> usize {
        self.members.len()
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Append a new member at the tail, minting their identifier
    ///
    /// Returns the stored record, id included. Search, filter, and page
    /// inputs are left untouched.
    pub fn add(&mut self, draft: NewMember) -> Member {
        let member = draft.with_id(MemberId::generate());
        self.members.push(member.clone());
        member
    }

    /// Change the text search; resets to page 1
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page = 1;
    }

    /// Change the tribe filter; resets to page 1
    pub fn set_tribe_filter(&mut self, filter: TribeFilter) {
        self.tribe_filter = filter;
        self.page = 1;
    }

    /// Change the page size; resets to page 1
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Navigate to a page; never resets anything else
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

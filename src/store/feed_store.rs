use chrono::Utc;

use super::intent::Intent;
use super::mutation::{Effect, Mutation, TabSet};
use super::reducer::reduce;
use super::state::{FeedState, PreviewPatch, PreviewState};
use crate::api::{ApiError, FeedPayload, ListParams, NewsApi};
use crate::config::StoreConfig;
use crate::feed::{FeedEntry, LoadStatus};
use crate::storage::TabStorage;
use crate::tabs::{default_menu_tabs, default_other_menu_tabs, load_tabs, mark_active, save_tabs, Tab};

/// Handle for one in-flight news list request.
///
/// Issued by [`FeedStore::begin_news_list`]; only the most recently issued
/// ticket can still change the lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTicket {
    pub generation: u64,
    pub params: ListParams,
}

/// What happened to a news list response.
#[derive(Debug)]
pub enum ListOutcome {
    /// The batch was merged into the lists.
    Applied,
    /// The API call failed; state is unchanged.
    Failed(ApiError),
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

impl ListOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ListOutcome::Applied)
    }
}

/// Feed state container.
///
/// Owns the state, the news API client and the tab storage. Every change goes
/// through [`reduce`]; storage writes requested by a transition run right
/// after it and never fail the operation.
pub struct FeedStore<A, S> {
    api: A,
    storage: S,
    config: StoreConfig,
    state: FeedState,
    /// Bumped on every list request; responses carrying an older value are stale.
    list_generation: u64,
}

impl<A: NewsApi, S: TabStorage> FeedStore<A, S> {
    /// Build a store, restoring both tab sequences from `storage`.
    ///
    /// Missing or unreadable tab data falls back to the built-in ordering.
    pub async fn new(api: A, storage: S, config: StoreConfig) -> Self {
        let menu_tabs = load_tabs(&storage, &config.menu_tabs_key, default_menu_tabs).await;
        let other_menu_tabs =
            load_tabs(&storage, &config.other_menu_tabs_key, default_other_menu_tabs).await;

        let state = FeedState {
            menu_tabs: mark_active(menu_tabs, &config.default_category),
            other_menu_tabs,
            category: config.default_category.clone(),
            ..FeedState::default()
        };

        tracing::debug!(
            category = %state.category,
            menu = state.menu_tabs.len(),
            other = state.other_menu_tabs.len(),
            "Feed store initialized"
        );

        Self {
            api,
            storage,
            config,
            state,
            list_generation: 0,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn loaded(&self) -> LoadStatus {
        self.state.loaded
    }

    pub fn news_list(&self) -> &[FeedEntry] {
        &self.state.news_list
    }

    pub fn topic_list(&self) -> &[FeedEntry] {
        &self.state.topic_list
    }

    pub fn banner_list(&self) -> &[FeedEntry] {
        &self.state.banner_list
    }

    pub fn category(&self) -> &str {
        &self.state.category
    }

    pub fn news_detail(&self) -> Option<&FeedEntry> {
        self.state.news_detail.as_ref()
    }

    pub fn last_list_len(&self) -> usize {
        self.state.last_list_len
    }

    pub fn menu_tabs(&self) -> &[Tab] {
        &self.state.menu_tabs
    }

    pub fn other_menu_tabs(&self) -> &[Tab] {
        &self.state.other_menu_tabs
    }

    pub fn preview(&self) -> &PreviewState {
        &self.state.preview
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Run an intent. Returns the list outcome for `GetNewsList`, `None` otherwise.
    pub async fn dispatch(&mut self, intent: Intent) -> Option<ListOutcome> {
        match intent {
            Intent::GetNewsList(params) => return Some(self.get_news_list(params).await),
            Intent::GetNewsDetail { nid } => {
                self.get_news_detail(&nid);
            }
            Intent::ShowPreview(entry) => self.show_preview(&entry),
            Intent::ClosePreview => self.close_preview(),
            Intent::AddCategory { value } => self.add_category(&value).await,
            Intent::DelCategory(tab) => self.del_category(&tab).await,
        }
        None
    }

    /// Select `params.category` and fetch a page of its news.
    pub async fn get_news_list(&mut self, params: ListParams) -> ListOutcome {
        let ticket = self.begin_news_list(params);
        let result = self.api.fetch_news_feed(&ticket.params).await;
        self.finish_news_list(ticket, result)
    }

    /// First half of [`get_news_list`](Self::get_news_list): select the
    /// category and issue a ticket. The caller performs the API call.
    pub fn begin_news_list(&mut self, params: ListParams) -> ListTicket {
        self.apply(Mutation::SetNewsActiveTab(params.category.clone()));
        self.list_generation = self.list_generation.wrapping_add(1);

        tracing::debug!(
            category = %params.category,
            change = params.change,
            generation = self.list_generation,
            "News list requested"
        );

        ListTicket {
            generation: self.list_generation,
            params,
        }
    }

    /// Second half of [`get_news_list`](Self::get_news_list): merge the
    /// response unless a newer request has been issued since `ticket`.
    pub fn finish_news_list(
        &mut self,
        ticket: ListTicket,
        result: Result<FeedPayload, ApiError>,
    ) -> ListOutcome {
        if ticket.generation != self.list_generation {
            tracing::debug!(
                category = %ticket.params.category,
                generation = ticket.generation,
                latest = self.list_generation,
                "Dropping stale news list response"
            );
            return ListOutcome::Stale;
        }

        match result {
            Ok(payload) => {
                self.apply(Mutation::SetNewsList {
                    news: payload.news,
                    topic: payload.topic,
                    banner: payload.banner,
                    change: ticket.params.change,
                    received_at: Utc::now(),
                });
                tracing::debug!(
                    category = %ticket.params.category,
                    total = self.state.news_list.len(),
                    loaded = ?self.state.loaded,
                    "News list merged"
                );
                ListOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(category = %ticket.params.category, error = %e, "Failed to fetch news list");
                ListOutcome::Failed(e)
            }
        }
    }

    /// Look up a loaded entry, searching banners, then topics, then news.
    pub fn get_news_detail(&mut self, nid: &str) -> Option<&FeedEntry> {
        let found = self
            .state
            .banner_list
            .iter()
            .chain(&self.state.topic_list)
            .chain(&self.state.news_list)
            .find(|entry| entry.nid == nid)
            .cloned();

        if found.is_none() {
            tracing::debug!(nid = %nid, "News detail not found in loaded lists");
        }

        self.apply(Mutation::SetNewsDetail(found));
        self.state.news_detail.as_ref()
    }

    pub fn show_preview(&mut self, entry: &FeedEntry) {
        self.apply(Mutation::SetPreviewData(PreviewPatch::open(entry)));
    }

    pub fn close_preview(&mut self) {
        self.apply(Mutation::SetPreviewData(PreviewPatch::close()));
    }

    /// Move an overflow tab to the end of the menu.
    pub async fn add_category(&mut self, value: &str) {
        self.commit(Mutation::AddCategory(value.to_string())).await;
    }

    /// Move a menu tab to the front of the overflow set.
    pub async fn del_category(&mut self, tab: &Tab) {
        self.commit(Mutation::DelCategory(tab.value.clone())).await;
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn apply(&mut self, mutation: Mutation) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let transition = reduce(state, mutation, self.config.persist_policy);
        self.state = transition.state;
        transition.effects
    }

    async fn commit(&mut self, mutation: Mutation) {
        for effect in self.apply(mutation) {
            self.run_effect(effect).await;
        }
    }

    async fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::PersistTabs(TabSet::Menu) => {
                save_tabs(&self.storage, &self.config.menu_tabs_key, &self.state.menu_tabs).await
            }
            Effect::PersistTabs(TabSet::Other) => {
                save_tabs(
                    &self.storage,
                    &self.config.other_menu_tabs_key,
                    &self.state.other_menu_tabs,
                )
                .await
            }
        }
    }
}

//! Pure reducer: `(FeedState, Mutation) -> Transition`.
//!
//! No I/O happens here. Storage writes come back as [`Effect`]s for the
//! store to run once the new state is in place.

use super::mutation::{Effect, Mutation, TabSet, Transition};
use super::state::FeedState;
use crate::config::PersistPolicy;
use crate::feed::{ingest, merge_news};
use crate::tabs::{mark_active, move_tab, Placement};

pub fn reduce(state: FeedState, mutation: Mutation, policy: PersistPolicy) -> Transition {
    match mutation {
        Mutation::SetNewsList {
            news,
            topic,
            banner,
            change,
            received_at,
        } => {
            let news = ingest(news, received_at);
            let topic = topic.map(|t| ingest(t, received_at)).unwrap_or_default();
            let banner = ingest(banner, received_at);

            let last_list_len = state.news_list.len();
            let (news_list, loaded) = merge_news(state.news_list, news, change);

            Transition::pure(FeedState {
                loaded,
                news_list,
                topic_list: topic,
                banner_list: banner,
                last_list_len,
                ..state
            })
        }

        Mutation::SetNewsDetail(news_detail) => Transition::pure(FeedState {
            news_detail,
            ..state
        }),

        Mutation::SetNewsActiveTab(category) => Transition::pure(FeedState {
            menu_tabs: mark_active(state.menu_tabs, &category),
            category,
            ..state
        }),

        Mutation::SetPreviewData(patch) => Transition::pure(FeedState {
            preview: state.preview.apply(patch),
            ..state
        }),

        Mutation::DelCategory(value) => {
            let m = move_tab(state.menu_tabs, state.other_menu_tabs, &value, Placement::Front);
            let effects = persist_effects(policy, m.moved, TabSet::Other, TabSet::Menu);
            Transition {
                state: FeedState {
                    menu_tabs: m.source,
                    other_menu_tabs: m.dest,
                    ..state
                },
                effects,
            }
        }

        Mutation::AddCategory(value) => {
            let m = move_tab(state.other_menu_tabs, state.menu_tabs, &value, Placement::Back);
            let effects = persist_effects(policy, m.moved, TabSet::Menu, TabSet::Other);
            // A tab coming back may still carry the flag from before it left.
            let menu_tabs = mark_active(m.dest, &state.category);
            Transition {
                state: FeedState {
                    menu_tabs,
                    other_menu_tabs: m.source,
                    ..state
                },
                effects,
            }
        }
    }
}

/// Writes for a tab move: `dest` first (only on a match under
/// [`PersistPolicy::Observed`]), then `source` unconditionally.
fn persist_effects(policy: PersistPolicy, moved: bool, dest: TabSet, source: TabSet) -> Vec<Effect> {
    let write_dest = moved || policy == PersistPolicy::Always;
    let mut effects = Vec::with_capacity(2);
    if write_dest {
        effects.push(Effect::PersistTabs(dest));
    }
    effects.push(Effect::PersistTabs(source));
    effects
}

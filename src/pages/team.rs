//! Team page: every member with social links and an email link.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use content::{Envelope, Member};
use leptos::prelude::*;

use crate::components::member_card::MemberCard;
use crate::net::api::ContentApi;
use crate::util::scroll::schedule_reveal;

/// Subtitle under the page heading.
pub fn member_count_label(count: usize) -> String {
    match count {
        1 => "1 member".to_owned(),
        n => format!("{n} members"),
    }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let api = expect_context::<ContentApi>();
    let members = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_members().await }
    });

    let count = move || {
        members
            .get()
            .and_then(|env| env.into_data())
            .map(|list| member_count_label(list.len()))
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Our team"</h1>
                <p class="page-subtitle">{count}</p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <Suspense fallback=|| view! { <div class="loading-state"><div class="spinner"></div></div> }>
                    {move || members.get().map(render_members)}
                </Suspense>
            </div>
        </section>
    }
}

fn render_members(envelope: Envelope<Vec<Member>>) -> AnyView {
    if !envelope.success {
        log::warn!("team: failed to load members: {}", envelope.message);
        return view! {
            <div class="error-state">
                <span class="state-icon">"!"</span>
                <p>"Failed to load the team, please refresh and try again"</p>
            </div>
        }
        .into_any();
    }
    let members = envelope.data.unwrap_or_default();
    if members.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"No team members yet"</p>
            </div>
        }
        .into_any();
    }

    schedule_reveal();
    view! {
        <div class="members-grid" id="members-grid">
            {members
                .into_iter()
                .enumerate()
                .map(|(index, member)| view! { <MemberCard member=member index=index/> })
                .collect_view()}
        </div>
    }
    .into_any()
}

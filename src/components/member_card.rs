//! Team member cards: the compact home-page variant and the full team-page card.

#[cfg(test)]
#[path = "member_card_test.rs"]
mod member_card_test;

use content::{Member, SocialLinks};
use leptos::prelude::*;

use crate::components::post_card::animation_delay;

/// `(label, url)` for each social profile that is set, in display order.
pub fn social_links(social: &SocialLinks) -> Vec<(&'static str, String)> {
    [
        ("GitHub", &social.github),
        ("Twitter", &social.twitter),
        ("LinkedIn", &social.linkedin),
        ("Weibo", &social.weibo),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.as_ref().filter(|u| !u.is_empty()).map(|u| (label, u.clone())))
    .collect()
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

fn social_view(social: &SocialLinks) -> AnyView {
    social_links(social)
        .into_iter()
        .map(|(label, url)| {
            view! {
                <a href=url class="social-link" title=label target="_blank" rel="noopener noreferrer">
                    {label}
                </a>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn TeamCard(member: Member, index: usize) -> impl IntoView {
    view! {
        <div class="team-card reveal-on-scroll" style=animation_delay(index)>
            <div class="team-avatar">
                <img src=member.avatar alt=member.name.clone() loading="lazy"/>
            </div>
            <h3 class="team-name">{member.name}</h3>
            <p class="team-role">{member.role}</p>
            <p class="team-bio">{member.bio}</p>
            <div class="team-social">{social_view(&member.social)}</div>
        </div>
    }
}

#[component]
pub fn MemberCard(member: Member, index: usize) -> impl IntoView {
    view! {
        <div class="member-card reveal-on-scroll" style=animation_delay(index)>
            <div class="member-avatar">
                <img src=member.avatar alt=member.name.clone() loading="lazy"/>
            </div>
            <div class="member-info">
                <h3 class="member-name">{member.name}</h3>
                <p class="member-role">{member.role}</p>
                <p class="member-bio">{member.bio}</p>
                <div class="member-social">
                    {social_view(&member.social)}
                    <a href=mailto_href(&member.email) class="social-link" title="Email">
                        "Email"
                    </a>
                </div>
            </div>
        </div>
    }
}

//! Sample dataset standing in for a real backend.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::types::{Author, Category, Member, Post, PostCategory, SiteInfo, SocialLinks, Tag};

/// Read-only fixture collections served by [`crate::ContentService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixtures {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub members: Vec<Member>,
    pub site: SiteInfo,
}

const ARTICLE_BODY: &str = "<p>We started this series to write down the small decisions that shape how the team works day to day.</p>\
<h2>Where we started</h2>\
<p>Most of our habits grew out of short experiments. Some stuck, many did not, and the ones that stuck are described below.</p>\
<h3>What we measured</h3>\
<p>We kept notes on review time, time to first draft, and how often a design came back for another round.</p>\
<h2>What we changed</h2>\
<p>Fewer meetings, shorter documents, and a standing rule that every proposal ships with a rollback plan.</p>";

struct PostSeed {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    author: usize,
    category: usize,
    tags: &'static [&'static str],
    views: u32,
    likes: u32,
    comments: u32,
    created_at: &'static str,
}

const POST_SEEDS: [PostSeed; 5] = [
    PostSeed {
        id: 1,
        title: "Designing a calmer reading experience",
        excerpt: "Typography, spacing, and color choices behind the new article layout.",
        author: 0,
        category: 0,
        tags: &["tag1", "tag2", "tag3"],
        views: 1234,
        likes: 56,
        comments: 78,
        created_at: "2026-03-02T10:30:00Z",
    },
    PostSeed {
        id: 2,
        title: "Moving our build tooling to Rust",
        excerpt: "Why the asset pipeline was rewritten and what we learned along the way.",
        author: 1,
        category: 1,
        tags: &["tag2", "tag4"],
        views: 2048,
        likes: 131,
        comments: 24,
        created_at: "2026-03-09T08:15:00Z",
    },
    PostSeed {
        id: 3,
        title: "Running weekly design critiques",
        excerpt: "A lightweight format for giving feedback without slowing the team down.",
        author: 0,
        category: 0,
        tags: &["tag1", "tag5"],
        views: 876,
        likes: 42,
        comments: 9,
        created_at: "2026-03-16T14:00:00Z",
    },
    PostSeed {
        id: 4,
        title: "Planning a remote team offsite",
        excerpt: "Logistics, agenda templates, and the parts of the week that mattered most.",
        author: 1,
        category: 2,
        tags: &["tag3", "tag6"],
        views: 654,
        likes: 31,
        comments: 12,
        created_at: "2026-03-23T09:45:00Z",
    },
    PostSeed {
        id: 5,
        title: "Notes on writing essays that teach",
        excerpt: "Drafting habits for long-form posts that readers actually finish.",
        author: 0,
        category: 4,
        tags: &["tag7", "tag8"],
        views: 1520,
        likes: 88,
        comments: 17,
        created_at: "2026-03-30T18:20:00Z",
    },
];

impl Fixtures {
    /// The built-in sample dataset. Category counts are derived from posts.
    #[must_use]
    pub fn sample() -> Self {
        let members = sample_members();
        let mut categories = sample_categories();

        let posts: Vec<Post> = POST_SEEDS
            .iter()
            .map(|seed| {
                let member = &members[seed.author];
                let category = &categories[seed.category];
                Post {
                    id: seed.id,
                    title: seed.title.to_owned(),
                    excerpt: seed.excerpt.to_owned(),
                    content: ARTICLE_BODY.to_owned(),
                    author: Author {
                        id: member.id,
                        name: member.name.clone(),
                        avatar: member.avatar.clone(),
                    },
                    category: PostCategory {
                        id: category.id,
                        name: category.name.clone(),
                        slug: category.slug.clone(),
                    },
                    tags: seed.tags.iter().map(|t| (*t).to_owned()).collect(),
                    cover: format!("https://picsum.photos/800/400?random={}", seed.id),
                    views: seed.views,
                    likes: seed.likes,
                    comments: seed.comments,
                    created_at: seed.created_at.to_owned(),
                    updated_at: seed.created_at.to_owned(),
                }
            })
            .collect();

        for category in &mut categories {
            let count = posts.iter().filter(|p| p.category.slug == category.slug).count();
            category.count = u32::try_from(count).unwrap_or(u32::MAX);
        }

        let tags = (1..=8)
            .map(|n| Tag { id: n, name: format!("Tag {n}"), slug: format!("tag{n}") })
            .collect();

        let site = SiteInfo {
            name: "Team Blog".to_owned(),
            description: "Notes on design, engineering, and working together.".to_owned(),
            logo: "/assets/images/favicon.svg".to_owned(),
            favicon: "/assets/images/favicon.svg".to_owned(),
            social: SocialLinks {
                github: Some("https://github.com".to_owned()),
                twitter: Some("https://twitter.com".to_owned()),
                linkedin: None,
                weibo: Some("https://weibo.com".to_owned()),
            },
        };

        Self { posts, categories, tags, members, site }
    }
}

fn sample_categories() -> Vec<Category> {
    [(1, "Design", "design"), (2, "Engineering", "tech"), (3, "Management", "management"), (4, "Life", "life"), (5, "Essays", "essay")]
        .into_iter()
        .map(|(id, name, slug)| Category { id, name: name.to_owned(), slug: slug.to_owned(), count: 0 })
        .collect()
}

fn sample_members() -> Vec<Member> {
    vec![
        Member {
            id: 1,
            name: "Lin Zhang".to_owned(),
            role: "Founder / Designer".to_owned(),
            bio: "Cares about user experience and interface design.".to_owned(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=1".to_owned(),
            email: "lin@example.com".to_owned(),
            social: SocialLinks {
                github: Some("https://github.com".to_owned()),
                twitter: Some("https://twitter.com".to_owned()),
                linkedin: Some("https://linkedin.com".to_owned()),
                weibo: None,
            },
        },
        Member {
            id: 2,
            name: "Sam Li".to_owned(),
            role: "Engineer".to_owned(),
            bio: "Builds the tooling that keeps the site fast and boring.".to_owned(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=2".to_owned(),
            email: "sam@example.com".to_owned(),
            social: SocialLinks {
                github: Some("https://github.com".to_owned()),
                twitter: None,
                linkedin: Some("https://linkedin.com".to_owned()),
                weibo: None,
            },
        },
    ]
}

//! The built-in sample bundle.
//!
//! Stands in for a backend: a morning's worth of threads, stories,
//! conversations, and clips from a small cast of authors.

use jiff::{Timestamp, ToSpan};

use crate::model::{
    Author, ChatMessage, Clip, ContentItem, Conversation, DeliveryStatus, Media, MediaKind,
    MessageBody, Post, PostStats, Profile, Sender, Story, StoryCatalog, StoryId, SuggestedUser,
    Thread, TrendingTopic,
};

use super::Feed;

pub fn feed() -> Feed {
    Feed {
        threads: threads(),
        stories: stories(),
        conversations: conversations(),
        clips: clips(),
        trending: trending(),
        suggested: suggested(),
        profile: profile(),
        own_posts: own_posts(),
    }
}

fn minutes_ago(mins: i64) -> Timestamp {
    Timestamp::now() - (mins * 60).seconds()
}

fn hours_ago(hours: i64) -> Timestamp {
    minutes_ago(hours * 60)
}

fn author(id: u64, handle: &str, name: &str, verified: bool) -> Author {
    Author {
        id,
        handle: handle.to_string(),
        name: name.to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/150?img={id}")),
        verified,
    }
}

fn stats(likes: u64, comments: u64, reposts: u64) -> PostStats {
    PostStats {
        likes,
        comments,
        reposts,
    }
}

fn image(url: &str) -> Option<Media> {
    Some(Media {
        kind: MediaKind::Image,
        url: url.to_string(),
    })
}

fn video(url: &str) -> Option<Media> {
    Some(Media {
        kind: MediaKind::Video,
        url: url.to_string(),
    })
}

// ── Threads ──

fn threads() -> Vec<Thread> {
    let chris = author(4, "chris.codes", "Chris Developer", true);

    vec![
        Thread {
            root: Post {
                id: 1,
                author: chris.clone(),
                body: "What's your favorite programming language this year, and why? \
                       Still a TypeScript fan here but curious what everyone else is \
                       reaching for these days."
                    .to_string(),
                media: None,
                posted_at: hours_ago(8),
                stats: stats(215, 118, 26),
            },
            replies: vec![
                Post {
                    id: 2,
                    author: author(5, "dev.ninja", "Dev Ninja", false),
                    body: "Rust has been incredible for performance-critical work. \
                           Steep learning curve, but worth every minute."
                        .to_string(),
                    media: None,
                    posted_at: hours_ago(7),
                    stats: stats(43, 5, 2),
                },
                Post {
                    id: 3,
                    author: author(6, "sarah_j", "Sarah Johnson", false),
                    body: "Python for me. The data ecosystem is still unmatched."
                        .to_string(),
                    media: None,
                    posted_at: hours_ago(6),
                    stats: stats(38, 7, 1),
                },
            ],
        },
        Thread {
            root: Post {
                id: 4,
                author: author(1, "alex_design", "Alex Johnson", true),
                body: "Just launched my new design system! Months of work — take a \
                       look and tell me what you think."
                    .to_string(),
                media: image("https://images.example.com/design-system.jpg"),
                posted_at: minutes_ago(15),
                stats: stats(147, 32, 8),
            },
            replies: Vec::new(),
        },
        Thread {
            root: Post {
                id: 5,
                author: author(8, "tech_lisa", "Lisa Tech", false),
                body: "The future of AI is not replacing people but augmenting what \
                       they can do. Which jobs change first?"
                    .to_string(),
                media: None,
                posted_at: hours_ago(2),
                stats: stats(89, 54, 12),
            },
            replies: Vec::new(),
        },
        Thread {
            root: Post {
                id: 6,
                author: author(2, "maria", "Maria Rodriguez", true),
                body: "New video on sustainable fashion is up! 🌿 #SustainableFashion"
                    .to_string(),
                media: video("https://videos.example.com/sustainable-fashion.mp4"),
                posted_at: hours_ago(5),
                stats: stats(423, 86, 42),
            },
            replies: Vec::new(),
        },
    ]
}

// ── Stories ──

fn story(id: u64, handle: &str, seen: bool, items: Vec<ContentItem>) -> Story {
    Story {
        id: StoryId(id),
        author_handle: handle.to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/150?img={id}")),
        seen,
        items,
    }
}

fn item_image(url: &str) -> ContentItem {
    ContentItem::Image {
        media_url: url.to_string(),
    }
}

fn item_video(url: &str) -> ContentItem {
    ContentItem::Video {
        media_url: url.to_string(),
    }
}

fn item_text(text: &str) -> ContentItem {
    ContentItem::Text {
        text: text.to_string(),
    }
}

fn stories() -> StoryCatalog {
    StoryCatalog {
        own: story(
            0,
            "you",
            false,
            vec![
                item_text("Working on something new 👀"),
                item_image("https://images.example.com/own-desk.jpg"),
            ],
        ),
        stories: vec![
            story(
                1,
                "alex_design",
                false,
                vec![
                    item_image("https://images.example.com/sketches.jpg"),
                    item_text("Design system drops Friday."),
                    item_image("https://images.example.com/palette.jpg"),
                ],
            ),
            story(
                2,
                "maria",
                false,
                vec![
                    item_video("https://videos.example.com/thrift-haul.mp4"),
                    item_image("https://images.example.com/fabric.jpg"),
                ],
            ),
            story(
                3,
                "chris.codes",
                false,
                vec![item_text("Shipping day. Wish me luck.")],
            ),
            story(
                4,
                "taylor42",
                true,
                vec![item_image("https://images.example.com/trail.jpg")],
            ),
            story(
                5,
                "dev.ninja",
                false,
                vec![
                    item_image("https://images.example.com/mech-keyboard.jpg"),
                    item_text("Cargo build times: fixed."),
                ],
            ),
            story(
                6,
                "sarah_j",
                true,
                vec![item_text("Conference talk accepted!")],
            ),
            story(
                7,
                "mike_visuals",
                false,
                vec![
                    item_image("https://images.example.com/rooftop-1.jpg"),
                    item_image("https://images.example.com/rooftop-2.jpg"),
                    item_image("https://images.example.com/rooftop-3.jpg"),
                ],
            ),
            story(
                8,
                "tech_lisa",
                true,
                vec![item_video("https://videos.example.com/demo-day.mp4")],
            ),
        ],
    }
}

// ── Conversations ──

fn text_msg(sender: Sender, text: &str, mins_ago: i64, status: DeliveryStatus) -> ChatMessage {
    ChatMessage {
        sender,
        body: MessageBody::Text {
            text: text.to_string(),
        },
        sent_at: minutes_ago(mins_ago),
        status,
    }
}

fn conversations() -> Vec<Conversation> {
    use DeliveryStatus::{Delivered, Read, Sent};
    use Sender::{Peer, You};

    vec![
        Conversation {
            id: 1,
            peer: author(1, "alex_design", "Alex Johnson", true),
            online: true,
            unread: 3,
            messages: vec![
                text_msg(You, "Hey, how are you doing?", 67, Read),
                text_msg(
                    Peer,
                    "Doing great! Just finished that project we talked about.",
                    66,
                    Sent,
                ),
                text_msg(You, "That sounds awesome! Can you share some photos?", 65, Read),
                text_msg(Peer, "Sure, here you go!", 64, Sent),
                ChatMessage {
                    sender: Peer,
                    body: MessageBody::Image {
                        media_url: "https://images.example.com/workbench.jpg".to_string(),
                    },
                    sent_at: minutes_ago(64),
                    status: Sent,
                },
                text_msg(You, "Wow, that looks amazing. Great work!", 63, Sent),
                text_msg(Peer, "Thanks! Put a lot of hours into it.", 62, Sent),
                ChatMessage {
                    sender: You,
                    body: MessageBody::Voice { duration_secs: 12 },
                    sent_at: minutes_ago(61),
                    status: Sent,
                },
                text_msg(Peer, "Got your voice message. Catch up later today!", 60, Sent),
            ],
        },
        Conversation {
            id: 2,
            peer: author(21, "morgan_s", "Morgan Smith", false),
            online: true,
            unread: 0,
            messages: vec![text_msg(Peer, "Did you see the new post?", 10, Delivered)],
        },
        Conversation {
            id: 3,
            peer: author(22, "taylor.ross", "Taylor Ross", false),
            online: false,
            unread: 1,
            messages: vec![ChatMessage {
                sender: Peer,
                body: MessageBody::Image {
                    media_url: "https://images.example.com/beach.jpg".to_string(),
                },
                sent_at: hours_ago(1),
                status: Sent,
            }],
        },
        Conversation {
            id: 4,
            peer: author(23, "jamiew", "Jamie Wilson", false),
            online: false,
            unread: 0,
            messages: vec![text_msg(Peer, "Let's meet tomorrow!", 120, Delivered)],
        },
        Conversation {
            id: 5,
            peer: author(24, "casey.b", "Casey Brooks", false),
            online: true,
            unread: 0,
            messages: vec![
                text_msg(You, "Here's the link you wanted.", 25 * 60, Read),
                text_msg(Peer, "Thanks for the help!", 24 * 60, Sent),
            ],
        },
        Conversation {
            id: 6,
            peer: author(25, "rileygreen", "Riley Green", false),
            online: false,
            unread: 0,
            messages: vec![ChatMessage {
                sender: Peer,
                body: MessageBody::Voice { duration_secs: 34 },
                sent_at: hours_ago(26),
                status: Sent,
            }],
        },
        Conversation {
            id: 7,
            peer: author(26, "jordan.lee", "Jordan Lee", false),
            online: true,
            unread: 0,
            messages: vec![text_msg(Peer, "Can you share that link again?", 48 * 60, Delivered)],
        },
        Conversation {
            id: 8,
            peer: author(27, "quinnt", "Quinn Taylor", false),
            online: false,
            unread: 0,
            messages: vec![text_msg(Peer, "See you at the event!", 72 * 60, Delivered)],
        },
    ]
}

// ── Clips ──

fn clips() -> Vec<Clip> {
    vec![
        Clip {
            id: 1,
            author: author(31, "tech_tutorials", "Tech Tutorials", false),
            caption: "Infinite scroll in sixty seconds.".to_string(),
            media_url: "https://videos.example.com/infinite-scroll.mp4".to_string(),
            stats: stats(723, 94, 57),
        },
        Clip {
            id: 2,
            author: author(32, "design_daily", "Design Daily", false),
            caption: "Glass morphism, start to finish.".to_string(),
            media_url: "https://videos.example.com/glass-morphism.mp4".to_string(),
            stats: stats(518, 63, 38),
        },
        Clip {
            id: 3,
            author: author(7, "mike_visuals", "Mike Alvarez", false),
            caption: "Rooftop timelapse from last night's shoot.".to_string(),
            media_url: "https://videos.example.com/rooftop-timelapse.mp4".to_string(),
            stats: stats(1_204, 131, 88),
        },
    ]
}

// ── Explore ──

fn trending() -> Vec<TrendingTopic> {
    let topics = [
        ("Generative Art", 2_453),
        ("Rust 2024", 1_872),
        ("Remote Work", 1_543),
        ("Web Development", 1_325),
        ("Terminal UIs", 1_122),
        ("Machine Learning", 987),
    ];
    topics
        .into_iter()
        .map(|(name, post_count)| TrendingTopic {
            name: name.to_string(),
            post_count,
        })
        .collect()
}

fn suggested() -> Vec<SuggestedUser> {
    let users = [
        (11, "react_ninja", "Alex Chen", 12_500),
        (12, "design_master", "Sofia Rodriguez", 9_800),
        (13, "code.with.james", "James Wilson", 8_700),
        (14, "ui_sarah", "Sarah Johnson", 7_400),
        (15, "tech_maria", "Maria Garcia", 6_300),
    ];
    users
        .into_iter()
        .map(|(id, handle, name, followers)| SuggestedUser {
            author: author(id, handle, name, false),
            followers,
        })
        .collect()
}

// ── Profile ──

fn profile() -> Profile {
    Profile {
        author: author(1, "alexjohnson", "Alex Johnson", true),
        bio: "Digital creator | Photography enthusiast | Travel lover\n\
              Exploring the world one click at a time ✨"
            .to_string(),
        followers: 2_547,
        following: 584,
        post_count: 142,
    }
}

fn own_posts() -> Vec<Post> {
    let me = author(1, "alexjohnson", "Alex Johnson", true);

    vec![
        Post {
            id: 101,
            author: me.clone(),
            body: "Finished an amazing photo shoot downtown. Thoughts?".to_string(),
            media: image("https://images.example.com/downtown-shoot.jpg"),
            posted_at: hours_ago(20),
            stats: stats(412, 28, 12),
        },
        Post {
            id: 102,
            author: me.clone(),
            body: "Morning coffee and code. Perfect start to any day. #devlife".to_string(),
            media: None,
            posted_at: hours_ago(70),
            stats: stats(254, 15, 5),
        },
        Post {
            id: 103,
            author: me.clone(),
            body: "Timelapse of yesterday's sunset.".to_string(),
            media: video("https://videos.example.com/sunset-timelapse.mp4"),
            posted_at: hours_ago(110),
            stats: stats(876, 52, 31),
        },
        Post {
            id: 104,
            author: me,
            body: "New mobile UI explorations. Simplicity is key.".to_string(),
            media: image("https://images.example.com/mobile-ui.jpg"),
            posted_at: hours_ago(160),
            stats: stats(693, 41, 18),
        },
    ]
}

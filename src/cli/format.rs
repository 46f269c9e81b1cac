//! Output formatting for CLI display.

use jiff::Timestamp;

use crate::model::{MediaKind, Post, Story, Thread};
use crate::text::{compact_count, relative_time};

/// Format a thread for human-readable display: the root post followed by
/// its replies, indented one level.
pub(super) fn format_thread(thread: &Thread, now: Timestamp) -> String {
    let mut out = format_post(&thread.root, now, "");
    for reply in &thread.replies {
        out.push_str(&format_post(reply, now, "    "));
    }
    out
}

fn format_post(post: &Post, now: Timestamp, indent: &str) -> String {
    let mut out = String::new();

    let verified = if post.author.verified { " ✓" } else { "" };
    out.push_str(&format!(
        "{indent}@{} ({}){verified} · {}\n",
        post.author.handle,
        post.author.name,
        relative_time(post.posted_at, now)
    ));

    for line in post.body.lines() {
        out.push_str(&format!("{indent}  {line}\n"));
    }

    if let Some(media) = &post.media {
        let kind = match media.kind {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        };
        out.push_str(&format!("{indent}  [{kind}] {}\n", media.url));
    }

    out.push_str(&format!(
        "{indent}  {} likes · {} comments · {} reposts\n",
        compact_count(post.stats.likes),
        compact_count(post.stats.comments),
        compact_count(post.stats.reposts)
    ));

    out
}

/// One line per story: marker, author, item count, seen flag.
pub(super) fn format_story_line(story: &Story) -> String {
    let marker = if story.seen { "○" } else { "●" };
    let items = if story.items.len() == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", story.items.len())
    };
    let seen = if story.seen { "  (seen)" } else { "" };
    format!("{marker} {} — {items}{seen}", story.author_handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Author, ContentItem, Media, PostStats, StoryId};

    fn ts(second: i64) -> Timestamp {
        Timestamp::new(second, 0).unwrap()
    }

    fn sample_post() -> Post {
        Post {
            id: 1,
            author: Author {
                id: 1,
                handle: "alex_design".into(),
                name: "Alex Johnson".into(),
                avatar_url: None,
                verified: true,
            },
            body: "Hello feed".into(),
            media: Some(Media {
                kind: MediaKind::Image,
                url: "https://images.example.com/a.jpg".into(),
            }),
            posted_at: ts(1_000_000_000 - 900),
            stats: PostStats {
                likes: 2_453,
                comments: 32,
                reposts: 8,
            },
        }
    }

    #[test]
    fn thread_includes_header_body_media_and_stats() {
        let thread = Thread {
            root: sample_post(),
            replies: Vec::new(),
        };

        let out = format_thread(&thread, ts(1_000_000_000));

        assert!(out.contains("@alex_design (Alex Johnson) ✓ · 15m"));
        assert!(out.contains("  Hello feed"));
        assert!(out.contains("  [image] https://images.example.com/a.jpg"));
        assert!(out.contains("  2.4k likes · 32 comments · 8 reposts"));
    }

    #[test]
    fn replies_are_indented() {
        let mut reply = sample_post();
        reply.author.handle = "dev.ninja".into();
        reply.author.verified = false;
        reply.media = None;
        let thread = Thread {
            root: sample_post(),
            replies: vec![reply],
        };

        let out = format_thread(&thread, ts(1_000_000_000));

        assert!(out.contains("    @dev.ninja"));
    }

    #[test]
    fn story_lines_mark_seen_state() {
        let mut story = Story {
            id: StoryId(1),
            author_handle: "maria".into(),
            avatar_url: None,
            seen: false,
            items: vec![
                ContentItem::Text { text: "a".into() },
                ContentItem::Text { text: "b".into() },
            ],
        };

        assert_eq!(format_story_line(&story), "● maria — 2 items");

        story.seen = true;
        story.items.truncate(1);
        assert_eq!(format_story_line(&story), "○ maria — 1 item  (seen)");
    }
}

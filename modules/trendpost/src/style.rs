//! Per-platform style directives appended to every prompt.

pub const TWITTER_STYLE: &str = "Keep it concise, under 280 characters. Twitter is all about quick, catchy, and sharable content.";
pub const INSTAGRAM_STYLE: &str = "Instagram posts should be engaging, with a balance of casual language and professionalism. Use hashtags creatively.";
pub const TIKTOK_STYLE: &str = "TikTok content is often more fun, casual, and energetic. Focus on making the post catchy and relatable.";
pub const BLOG_POST_STYLE: &str = "A blog post can be longer and more detailed. Focus on providing value and creating an engaging narrative.";
pub const DEFAULT_STYLE: &str = "Keep it suitable for the chosen platform, keeping in mind its unique style and tone.";

/// Style directive for a platform. Matching is exact and case-sensitive;
/// anything unrecognized gets [`DEFAULT_STYLE`].
pub fn style_for(platform: &str) -> &'static str {
    match platform {
        "twitter" => TWITTER_STYLE,
        "instagram" => INSTAGRAM_STYLE,
        "tiktok" => TIKTOK_STYLE,
        "blog post" => BLOG_POST_STYLE,
        _ => DEFAULT_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_platforms_are_distinct() {
        let styles: HashSet<&str> = ["twitter", "instagram", "tiktok", "blog post"]
            .into_iter()
            .map(style_for)
            .collect();
        assert_eq!(styles.len(), 4);
        assert!(styles.iter().all(|s| !s.is_empty()));
        assert!(!styles.contains(DEFAULT_STYLE));
    }

    #[test]
    fn test_unknown_platforms_fall_back() {
        for platform in ["", "Twitter", "TIKTOK", "blog_post", "Blog Post", "myspace", "twiter"] {
            assert_eq!(style_for(platform), DEFAULT_STYLE, "platform {platform:?}");
        }
    }
}

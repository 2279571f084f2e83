use crate::style::style_for;
use crate::types::GenerationRequest;

/// Fill the post template from a request and append the platform's style
/// directive. Field contents are passed through as-is.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let song_title = request.song_title();
    let platform = request.platform();
    let tone = request.tone();
    let length = request.length_class();
    let hashtags = request.hashtags().join(", ");
    let style = style_for(platform);

    format!(
        "Write a {length} post for {platform} about the song \"{song_title}\" with the following tone:\n\
         \n\
         - Tone: {tone}\n\
         - Hashtags: {hashtags}\n\
         \n\
         The post should be engaging, clear, and concise, and it should fit the typical style of {platform}. \
         Keep the length under {length} words. \
         The tone and content should be appropriate for the {platform} platform. \
         {style}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DEFAULT_STYLE, TIKTOK_STYLE};

    fn request(platform: &str, hashtags: Vec<String>) -> GenerationRequest {
        GenerationRequest::builder()
            .song_title("Midnight Drive")
            .platform(platform)
            .tone("energetic")
            .length_class("medium")
            .hashtags(hashtags)
            .build()
    }

    #[test]
    fn test_prompt_contains_fields_and_ends_with_style() {
        let prompt = build_prompt(&request("tiktok", vec!["#newmusic".into(), "#pop".into()]));
        assert!(prompt.contains("\"Midnight Drive\""));
        assert!(prompt.contains("for tiktok"));
        assert!(prompt.contains("- Tone: energetic"));
        assert!(prompt.contains("Write a medium post"));
        assert!(prompt.contains("- Hashtags: #newmusic, #pop\n"));
        assert!(prompt.ends_with(TIKTOK_STYLE));
    }

    #[test]
    fn test_empty_hashtags_render_empty() {
        let prompt = build_prompt(&request("tiktok", vec![]));
        assert!(prompt.contains("- Hashtags: \n"));
    }

    #[test]
    fn test_unknown_platform_gets_default_style() {
        let prompt = build_prompt(&request("myspace", vec![]));
        assert!(prompt.contains("typical style of myspace"));
        assert!(prompt.ends_with(DEFAULT_STYLE));
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let request = GenerationRequest::builder()
            .song_title("")
            .platform("")
            .tone("")
            .length_class("")
            .build();
        let prompt = build_prompt(&request);
        assert!(prompt.contains("about the song \"\""));
        assert!(prompt.ends_with(DEFAULT_STYLE));
    }
}

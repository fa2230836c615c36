// Video identifier extraction
// Patterns are tried in a fixed order and the first match wins, even when
// it occurs inside longer non-URL text; that ambiguity is accepted rather
// than second-guessed here

use crate::models::video::VideoReference;

/// Canonical video IDs are exactly 11 characters
const ID_LEN: usize = 11;

/// URL markers tried in order before the bare-token form
const URL_MARKERS: [&str; 4] = ["v=", "youtu.be/", "embed/", "shorts/"];

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Capture an ID when the 11 characters right after `pos` are all valid
fn token_at(input: &str, pos: usize) -> Option<String> {
    let token: String = input[pos..]
        .chars()
        .take_while(|&c| is_id_char(c))
        .take(ID_LEN)
        .collect();

    (token.len() == ID_LEN).then_some(token)
}

/// Extract a video reference from free-form input text
///
/// Recognized forms: `watch?v=` query parameter, `youtu.be/` short link,
/// `embed/` path, `shorts/` path, and a bare 11-character token. Returns
/// `None` when nothing matches; callers surface that as a validation
/// error, never a fault.
pub fn extract(raw: &str) -> Option<VideoReference> {
    let input = raw.trim();

    for marker in URL_MARKERS {
        for (pos, _) in input.match_indices(marker) {
            if let Some(id) = token_at(input, pos + marker.len()) {
                return Some(VideoReference::new(id, raw));
            }
        }
    }

    if input.len() == ID_LEN && input.chars().all(is_id_char) {
        return Some(VideoReference::new(input, raw));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(input: &str) -> Option<String> {
        extract(input).map(|r| r.id)
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            id_of("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            id_of("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            id_of("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            id_of("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_bare_id() {
        assert_eq!(id_of("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id_of("  dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(id_of("hello world"), None);
        assert_eq!(id_of("not a url"), None);
        assert_eq!(id_of(""), None);
        // ten valid characters is one too few
        assert_eq!(id_of("dQw4w9WgXc"), None);
        // twelve-character bare token is not an ID
        assert_eq!(id_of("dQw4w9WgXcQQ"), None);
    }

    #[test]
    fn test_first_match_wins_in_longer_text() {
        assert_eq!(
            id_of("check this out: https://youtu.be/dQw4w9WgXcQ please"),
            Some("dQw4w9WgXcQ".to_string())
        );
        // v= is tried before shorts/, so it wins regardless of position
        assert_eq!(
            id_of("https://www.youtube.com/shorts/aaaaaaaaaaa?v=bbbbbbbbbbb"),
            Some("bbbbbbbbbbb".to_string())
        );
    }

    #[test]
    fn test_later_marker_occurrence_matches() {
        // the first "v=" is followed by too few valid characters
        assert_eq!(
            id_of("v=short and https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_raw_input_preserved() {
        let raw = "https://youtu.be/dQw4w9WgXcQ";
        let reference = extract(raw).unwrap();
        assert_eq!(reference.raw, raw);
        assert_eq!(reference.id, "dQw4w9WgXcQ");
    }
}

use regex::Regex;
use std::sync::LazyLock;

const DIRECT_VIEW: &str = "https://drive.google.com/uc?export=view&id=";

static SHARE_LINK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"drive\.google\.com/file/d/([A-Za-z0-9_-]+)",
        r"drive\.google\.com/open\?(?:[^#]*&)?id=([A-Za-z0-9_-]+)",
        r"drive\.google\.com/uc\?(?:[^#]*&)?id=([A-Za-z0-9_-]+)",
        r"(?:drive|docs)\.google\.com/(?:[^/?#]+/)*d/([A-Za-z0-9_-]+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Rewrites Google Drive share links to a directly embeddable URL.
///
/// Anything that is not a recognised share link comes back unchanged.
pub fn convert_google_drive_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return url.to_string();
    }

    SHARE_LINK_PATTERNS
        .iter()
        .find_map(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{DIRECT_VIEW}{}", id.as_str()))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "https://drive.google.com/uc?export=view&id=1AbC_d-9";

    #[test]
    fn file_share_link() {
        assert_eq!(
            convert_google_drive_url("https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing"),
            EXPECTED
        );
    }

    #[test]
    fn open_link() {
        assert_eq!(
            convert_google_drive_url("https://drive.google.com/open?id=1AbC_d-9"),
            EXPECTED
        );
    }

    #[test]
    fn uc_link_with_other_params_first() {
        assert_eq!(
            convert_google_drive_url("https://drive.google.com/uc?export=download&id=1AbC_d-9"),
            EXPECTED
        );
    }

    #[test]
    fn docs_host_d_link() {
        assert_eq!(
            convert_google_drive_url("https://docs.google.com/presentation/d/1AbC_d-9/edit"),
            EXPECTED
        );
    }

    #[test]
    fn other_urls_are_untouched() {
        for url in [
            "",
            "   ",
            "https://example.com/d/123",
            "https://i.ibb.co/abc/photo.jpg",
            "not a url at all",
        ] {
            assert_eq!(convert_google_drive_url(url), url);
        }
    }

    #[test]
    fn converted_url_is_stable() {
        assert_eq!(convert_google_drive_url(EXPECTED), EXPECTED);
    }
}

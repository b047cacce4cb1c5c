//! Neutralizes user-supplied text before it is spliced into letter HTML.
//!
//! Output never contains `<`, so it cannot open a tag, and running it through
//! `sanitize` a second time returns it unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// Elements dropped together with everything inside them.
const CONTENT_DROPPING_ELEMENTS: &[&str] = &[
    "script", "style", "textarea", "noscript", "iframe", "object", "title",
];

static DROPPED_ELEMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CONTENT_DROPPING_ELEMENTS
        .iter()
        .map(|name| {
            // An unclosed element swallows the rest of the text.
            Regex::new(&format!(r"(?is)<{name}\b[^>]*>.*?(?:</{name}\s*>|$)")).unwrap()
        })
        .collect()
});

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|$)").unwrap());

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>").unwrap());

static CHAR_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]{1,31}|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});").unwrap()
});

/// Strips markup from `input` and escapes what is left for use as HTML text.
pub fn sanitize(input: &str) -> String {
    let mut text = input.to_string();

    for element in DROPPED_ELEMENTS.iter() {
        text = element.replace_all(&text, "").into_owned();
    }
    text = COMMENT.replace_all(&text, "").into_owned();
    text = TAG.replace_all(&text, "").into_owned();

    escape_text(&text)
}

/// Sanitizes an optional field; `None` when nothing readable survives.
pub fn sanitize_present(value: Option<&str>) -> Option<String> {
    let cleaned = sanitize(value?);
    if cleaned.trim().is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Escapes HTML-significant characters. An `&` that already starts a character
/// reference is left alone so escaped text stays stable.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, ch) in text.char_indices() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '&' if CHAR_REFERENCE.is_match(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(sanitize("Universitas Indonesia"), "Universitas Indonesia");
    }

    #[test]
    fn test_script_element_removed_with_content() {
        let out = sanitize("Halo<script>alert('x')</script> dunia");
        assert_eq!(out, "Halo dunia");
    }

    #[test]
    fn test_script_is_case_insensitive_and_multiline() {
        let out = sanitize("a<SCRIPT type=\"text/javascript\">\nsteal()\n</Script>b");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_unclosed_script_drops_remainder() {
        assert_eq!(sanitize("aman<script>alert(1)"), "aman");
    }

    #[test]
    fn test_formatting_tags_keep_text() {
        assert_eq!(sanitize("<b>Rust</b> &amp; <i>Go</i>"), "Rust &amp; Go");
    }

    #[test]
    fn test_event_handler_attribute_removed() {
        let out = sanitize(r#"<img src=x onerror="alert(1)">Foto"#);
        assert_eq!(out, "Foto");
    }

    #[test]
    fn test_comment_removed() {
        assert_eq!(sanitize("a<!-- <script>x</script> -->b"), "ab");
    }

    #[test]
    fn test_stray_angle_brackets_escaped() {
        assert_eq!(sanitize("3 < 5 > 2"), "3 &lt; 5 &gt; 2");
    }

    #[test]
    fn test_quotes_escaped() {
        assert_eq!(sanitize(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn test_bare_ampersand_escaped() {
        assert_eq!(sanitize("R&D"), "R&amp;D");
        assert_eq!(sanitize("PT A & B"), "PT A &amp; B");
    }

    #[test]
    fn test_existing_references_preserved() {
        assert_eq!(sanitize("&lt;b&gt; &#169; &#x2764;"), "&lt;b&gt; &#169; &#x2764;");
    }

    #[test]
    fn test_reassembled_tag_cannot_go_live() {
        let out = sanitize("<<b>script>alert(1)<</b>/script>");
        assert!(!out.contains('<'));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "plain",
            "R&D <b>bold</b>",
            "<script>x</script>tail",
            "3 < 5 & \"quoted\" 'single'",
            "<<b>script>alert(1)<</b>/script>",
            "&amp;amp; &#xZZ; &;",
            "<a href='javascript:alert(1)'>klik</a>",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_never_contains_angle_bracket() {
        for input in ["<svg/onload=alert(1)>", "<<<>>>", "<script", "x</p>y"] {
            assert!(!sanitize(input).contains('<'), "{input:?}");
        }
    }

    #[test]
    fn test_sanitize_present_none_for_absent_or_emptied() {
        assert_eq!(sanitize_present(None), None);
        assert_eq!(sanitize_present(Some("<script>x</script>")), None);
        assert_eq!(sanitize_present(Some("<br>  ")), None);
    }

    #[test]
    fn test_sanitize_present_keeps_text() {
        assert_eq!(
            sanitize_present(Some("Jl. Merdeka <b>10</b>")),
            Some("Jl. Merdeka 10".to_string())
        );
    }
}

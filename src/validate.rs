use lazy_static::lazy_static;
use regex::Regex;

// Input validation
//------------------------------------------------------------------------------

lazy_static! {
    // Optional scheme, dotted domain with a 2-6 char top-level label, optional path.
    static ref URL_PATTERN: Regex =
        Regex::new(r"^(https?://)?([\w.-]+)\.([a-z.]{2,6})([/\w .-]*)/?$").unwrap();
}

/// Best-effort format check of a link. Nothing is resolved or fetched.
pub fn validate_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

pub fn validate_label(label: &str) -> bool {
    !label.is_empty()
}

#[cfg(test)]
mod validate_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{validate_label, validate_url};

    #[test_case("https://example.com"; "https")]
    #[test_case("http://example.com"; "http")]
    #[test_case("example.com"; "no scheme")]
    #[test_case("www.example.co.uk"; "multi level domain")]
    #[test_case("https://my-site.example.org/some/path/"; "path with trailing slash")]
    #[test_case("https://example.com/docs/v1.2/index.html"; "path with dots")]
    #[test_case("sub_domain.example.info/a b"; "path with space")]
    fn test_accepted_urls(url: &str) {
        assert!(validate_url(url), "{url} should be accepted");
    }

    #[test_case(""; "empty")]
    #[test_case("not a url"; "words")]
    #[test_case("notaurl"; "no dot")]
    #[test_case("https://localhost"; "no top level label")]
    #[test_case("example.c"; "one letter top level label")]
    #[test_case("https://example.com:8080"; "port")]
    #[test_case("ftp://example.com"; "unsupported scheme")]
    #[test_case("https://example.com/search?q=1"; "query string")]
    #[test_case("https://example.COM"; "uppercase top level label")]
    fn test_rejected_urls(url: &str) {
        assert!(!validate_url(url), "{url} should be rejected");
    }

    #[test]
    fn test_empty_label() {
        assert!(!validate_label(""));
    }

    #[test_case("MyQR")]
    #[test_case("Gift card 2024")]
    #[test_case(" ")]
    fn test_non_empty_label(label: &str) {
        assert!(validate_label(label));
    }

    proptest! {
        #[test]
        fn proptest_generated_urls(
            scheme in "(https?://)?",
            domain in "[a-z0-9][a-z0-9-]{0,20}",
            tld in "[a-z]{2,6}",
            path in "(/[a-z0-9_.-]{1,10}){0,3}/?",
        ) {
            let url = format!("{scheme}{domain}.{tld}{path}");
            prop_assert!(validate_url(&url), "{} should be accepted", url);
        }

        #[test]
        fn proptest_dotless_strings_rejected(s in "[^.]*") {
            prop_assert!(!validate_url(&s));
        }

        #[test]
        fn proptest_any_non_empty_label(s in ".+") {
            prop_assert!(validate_label(&s));
        }
    }
}

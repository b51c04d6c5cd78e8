//! Display label for a download, taken from the URL path.

const DEFAULT_LABEL: &str = "download";

/// Extracts the last path segment of `url` for progress output.
///
/// Falls back to `"download"` when the URL cannot be parsed or the path is
/// empty/root.
pub fn label_for_url(url: &str) -> String {
    filename_from_url_path(url).unwrap_or_else(|| DEFAULT_LABEL.to_string())
}

fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            label_for_url("https://cotonoha-dic.s3.amazonaws.com/unidic-3.1.0.zip"),
            "unidic-3.1.0.zip"
        );
        assert_eq!(label_for_url("https://example.com/a/b/dict.zip?token=abc"), "dict.zip");
    }

    #[test]
    fn root_or_unparseable() {
        assert_eq!(label_for_url("https://example.com/"), "download");
        assert_eq!(label_for_url("not a url"), "download");
    }
}

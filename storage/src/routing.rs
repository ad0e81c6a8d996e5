//! Builders for the `x-goog-request-params` routing header.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters stay as they are, everything else is escaped.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Joins `key=value` pairs with `&`, skipping empty values.
pub fn params(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, ENCODE_SET)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Returns the `projects/*/buckets/*` prefix of a resource name.
pub fn bucket_prefix(name: &str) -> Option<&str> {
    let mut segments = name.splitn(5, '/');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some("projects"), Some(project), Some("buckets"), Some(bucket)) if !project.is_empty() && !bucket.is_empty() => {
            let len = "projects/".len() + project.len() + "/buckets/".len() + bucket.len();
            Some(&name[..len])
        }
        _ => None,
    }
}

/// Routing value for a field annotated `{bucket=projects/*/buckets/*}/**`.
pub fn bucket_of(name: &str) -> &str {
    bucket_prefix(name).unwrap_or_default()
}

/// Routing value for a field annotated with both `{bucket=**}` and `{bucket=projects/*/buckets/*}/**`.
pub fn bucket_or_prefix(name: &str) -> &str {
    bucket_prefix(name).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use crate::routing::{bucket_of, bucket_or_prefix, bucket_prefix, params};

    #[test]
    fn test_params() {
        assert_eq!(
            params(&[("bucket", "projects/_/buckets/my-bucket")]),
            "bucket=projects%2F_%2Fbuckets%2Fmy-bucket"
        );
        assert_eq!(
            params(&[("source_bucket", "projects/_/buckets/a"), ("bucket", "projects/_/buckets/b")]),
            "source_bucket=projects%2F_%2Fbuckets%2Fa&bucket=projects%2F_%2Fbuckets%2Fb"
        );
        assert_eq!(params(&[("project", ""), ("bucket", "")]), "");
        assert_eq!(params(&[("project", "projects/my project")]), "project=projects%2Fmy%20project");
    }

    #[test]
    fn test_bucket_prefix() {
        assert_eq!(
            bucket_prefix("projects/_/buckets/b/notificationConfigs/n"),
            Some("projects/_/buckets/b")
        );
        assert_eq!(bucket_prefix("projects/_/buckets/b"), Some("projects/_/buckets/b"));
        assert_eq!(
            bucket_prefix("projects/_/buckets/b/folders/a/b/"),
            Some("projects/_/buckets/b")
        );
        assert_eq!(bucket_prefix("projects/_/buckets"), None);
        assert_eq!(bucket_prefix("projects/_/buckets/"), None);
        assert_eq!(bucket_prefix("projects//buckets/b"), None);
        assert_eq!(bucket_prefix("folders/1/buckets/b"), None);
        assert_eq!(bucket_prefix("upload-id-without-bucket"), None);

        assert_eq!(bucket_of("opaque"), "");
        assert_eq!(bucket_or_prefix("opaque"), "opaque");
        assert_eq!(
            bucket_or_prefix("projects/_/buckets/b/managedFolders/m/"),
            "projects/_/buckets/b"
        );
    }
}

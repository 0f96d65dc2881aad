use uuid::Uuid;

/// Object path of a stored image, recovered from its public URL.
///
/// `prefix` is the bucket's public URL prefix. URLs outside it have no path.
/// Query strings and fragments are dropped.
pub fn storage_path_from_url(url: &str, prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    let without_query = url.trim().split(['?', '#']).next().unwrap_or_default();

    let path = without_query.strip_prefix(prefix)?.trim_matches('/');
    (!path.is_empty()).then(|| path.to_string())
}

/// Fresh object path for a compressed upload.
pub fn new_object_path() -> String {
    format!("{}.jpg", Uuid::new_v4())
}

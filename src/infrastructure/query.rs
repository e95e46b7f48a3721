//! Query-string encoding for search parameters.

use url::form_urlencoded;

/// Encode key/value pairs into a query string, percent-encoding values.
/// Pairs whose value is `None` or empty are dropped entirely.
pub fn build_query<'a>(params: &[(&'a str, Option<String>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            if !value.is_empty() {
                serializer.append_pair(key, value);
            }
        }
    }
    serializer.finish()
}

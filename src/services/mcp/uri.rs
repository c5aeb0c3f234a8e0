/// Path part of a `<scheme>://dir/<path>` URI, taken verbatim.
///
/// Returns `None` when the prefix does not match exactly or nothing follows it.
pub fn extract_dir_path<'a>(scheme: &str, uri: &'a str) -> Option<&'a str> {
    let rest = uri.strip_prefix(scheme)?.strip_prefix("://dir/")?;
    (!rest.is_empty()).then_some(rest)
}

pub fn dir_uri_template(scheme: &str) -> String {
    format!("{scheme}://dir/{{path}}")
}

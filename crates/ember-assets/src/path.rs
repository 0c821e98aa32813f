use ember_core::DisplayProfile;

/// Map a logical asset path to the physical path to request.
///
/// When the display profile requires resolution variants, the variant
/// marker is inserted immediately before the file extension; a trailing
/// query string is preserved. Paths without an extension come back
/// unchanged.
pub fn resolve_variant(path: &str, display: &DisplayProfile) -> String {
    if !display.variant_required() {
        return path.to_string();
    }

    let (base, query) = split_query(path);
    match base.rfind('.') {
        Some(dot) => format!(
            "{}{}{}{}",
            &base[..dot],
            display.variant_marker(),
            &base[dot..],
            query
        ),
        None => path.to_string(),
    }
}

/// Extract the lowercased file extension, ignoring any query string.
pub fn file_extension(path: &str) -> Option<String> {
    let (base, _) = split_query(path);
    base.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

fn split_query(path: &str) -> (&str, &str) {
    match path.find('?') {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

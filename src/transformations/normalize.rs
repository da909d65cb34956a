use unicode_normalization::UnicodeNormalization;

/// Reduces a string to the normalized token form used for blacklist
/// membership tests: NFKC composition, internal whitespace runs collapsed
/// to a single space, trimmed, lower-cased.
///
/// The result is only ever compared against pre-normalized denylist
/// entries; it is never stored back into the table.
///
/// # Examples
///
/// ```
/// use csv_transcoder::transformations::normalize_token;
///
/// assert_eq!(normalize_token("  FÖRCH  "), "förch");
/// assert_eq!(normalize_token("Top\t Marken"), "top marken");
/// ```
pub fn normalize_token(raw: &str) -> String {
    let composed: String = raw.nfkc().collect();
    let collapsed = composed.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

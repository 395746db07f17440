/// Prefix marker stripped from entity names before any other derivation.
pub const REF_MARKER: &str = "Ref_";

/// Strip a leading `Ref_` marker (ASCII case-insensitive)
/// "Ref_Product" -> "Product"
/// "ref_Product" -> "Product"
/// "Product" -> "Product"
pub fn normalize(raw: &str) -> String {
    match raw.get(..REF_MARKER.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(REF_MARKER) => {
            raw[REF_MARKER.len()..].to_string()
        }
        _ => raw.to_string(),
    }
}

/// Suffix-based pluralization, first matching rule wins:
/// "Category" -> "Categories"
/// "Status" -> "Status" (already ends with "s")
/// "Product" -> "Products"
///
/// Only the "y" -> "ies" rule is applied, regardless of the preceding letter,
/// so "Key" becomes "Keies".
pub fn pluralize(name: &str) -> String {
    let lower = name.to_ascii_lowercase();

    if lower.ends_with('y') && !lower.ends_with("sy") {
        return format!("{}ies", &name[..name.len() - 1]);
    }

    if lower.ends_with('s') {
        return name.to_string();
    }

    format!("{}s", name)
}

/// Lower-case the first character, leaving the rest untouched
/// "CampaignAttribute" -> "campaignAttribute"
/// "A" -> "a"
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(name.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Split a PascalCase name into lower-cased words
/// "CampaignAttribute" -> "campaign attribute"
/// "Order2Line" -> "order2 line"
/// "HTTPRequest" -> "httprequest"
pub fn to_spaced_lower(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        // Only a lowercase/digit -> uppercase transition opens a new word
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push(' ');
        }
        result.push(c);
        prev = Some(c);
    }

    result.to_ascii_lowercase()
}

//! Named-site optimizer for catalogs that embed a numeric style identifier in
//! each filename (`...-9543169179678.jpg`) and publish several resolutions of
//! the same shot.

use std::cmp::Ordering;

use regex::Regex;

use crate::config::SiteProfile;

/// One URL per style identifier, identifiers ordered reserved-prefix first and
/// then descending. Empty when no URL carries an identifier or none of the
/// preferred widths exist; callers fall back to generic ranking.
pub fn optimize_for_site(urls: &[String], site: &SiteProfile) -> Vec<String> {
    let pattern = format!(r"-(\d{{{}}})\.jpg", site.id_digits);
    let id_re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    // Identifier groups in first-seen order.
    let mut groups: Vec<(&str, Vec<&String>)> = Vec::new();
    for url in urls {
        let Some(id) = id_re.captures(url).and_then(|c| c.get(1)) else {
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| *existing == id.as_str()) {
            Some((_, members)) => members.push(url),
            None => groups.push((id.as_str(), vec![url])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| compare_ids(a, b, site.reserved_prefix.as_deref()));

    groups
        .into_iter()
        .filter_map(|(_, members)| pick_variant(&members, &site.width_preference))
        .collect()
}

fn compare_ids(a: &str, b: &str, reserved_prefix: Option<&str>) -> Ordering {
    let reserved = |id: &str| reserved_prefix.is_some_and(|p| id.starts_with(p));
    match (reserved(a), reserved(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.cmp(a),
    }
}

// First width token that any member carries wins. Without a preference list
// the first variant is kept.
fn pick_variant(members: &[&String], width_preference: &[String]) -> Option<String> {
    if width_preference.is_empty() {
        return members.first().map(|url| url.to_string());
    }

    width_preference.iter().find_map(|width| {
        members
            .iter()
            .find(|url| url.contains(width.as_str()))
            .map(|url| url.to_string())
    })
}

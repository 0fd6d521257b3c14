use std::collections::HashSet;

/// Lower-cased set of a word list, built once before any intersection
#[inline]
pub fn normalized_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|item| item.to_lowercase()).collect()
}

/// Number of distinct words shared by both lists, ignoring case
#[inline]
pub fn overlap_count(a: &[String], b: &[String]) -> usize {
    normalized_set(a).intersection(&normalized_set(b)).count()
}

/// Number of distinct words shared by both lists, case-sensitive
#[inline]
pub fn exact_overlap_count(a: &[String], b: &[String]) -> usize {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    set_a.intersection(&set_b).count()
}

#[inline]
pub fn intersects(a: &[String], b: &[String]) -> bool {
    let set_b = normalized_set(b);
    a.iter().any(|item| set_b.contains(&item.to_lowercase()))
}

/// Words of `a` that also appear in `b`, in `a`'s order and casing
///
/// Repeated words (ignoring case) are reported once.
pub fn shared_in_order(a: &[String], b: &[String]) -> Vec<String> {
    let set_b = normalized_set(b);
    let mut seen = HashSet::new();

    a.iter()
        .filter(|item| {
            let key = item.to_lowercase();
            set_b.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}

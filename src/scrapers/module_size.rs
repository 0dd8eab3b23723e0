use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "8GB", "8 GB": the size immediately preceding each "GB" unit.
    static ref SIZE_RE: Regex = Regex::new(r"(\d+)\s*GB").unwrap();
}

/// Extract a canonical module-size token from a retail product name.
///
/// `"4GB"` → `"4"`; a kit like `"16GB (2 x 8GB)"` → `"2x8"` from the first
/// two sizes found (total over per-module); equal repeated sizes collapse to
/// the size itself. `None` when the name carries no `GB` size at all.
pub fn parse_module_size(description: &str) -> Option<String> {
    let sizes: Vec<i64> = SIZE_RE
        .captures_iter(description)
        .filter_map(|cap| cap[1].parse().ok())
        .collect();

    match sizes.as_slice() {
        [] => None,
        [size] => Some(size.to_string()),
        [first, second, ..] => {
            if first == second {
                Some(first.to_string())
            } else {
                let total = first.max(second);
                let per_module = first.min(second);
                Some(format!("{}x{}", total / per_module, per_module))
            }
        }
    }
}

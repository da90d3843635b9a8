//! Field-set reconciliation

/// Fields of `source` that do not appear in `target`, in `source` order.
/// Always computed and reported, whatever the comparison mode.
pub fn absent_fields(source: &[String], target: &[String]) -> Vec<String> {
    source
        .iter()
        .filter(|f| !target.contains(f))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_headers_yield_empty_sets() {
        let a = names(&["id", "name"]);
        assert!(absent_fields(&a, &a).is_empty());
    }

    #[test]
    fn preserves_source_order() {
        let a = names(&["id", "x", "y"]);
        let b = names(&["id"]);
        assert_eq!(absent_fields(&a, &b), names(&["x", "y"]));
    }
}

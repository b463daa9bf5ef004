//! # Well-Known Routes

/// The landing page. Always visible, whatever the permission set.
pub const INDEX_ROUTE: &str = "/index";

/// Where an expired session is sent.
pub const ROOT_ROUTE: &str = "/";

/// Whether `key` is the always-visible landing route.
pub fn is_index_route(key: &str) -> bool {
    key == INDEX_ROUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_route_detection() {
        assert!(is_index_route("/index"));
        assert!(!is_index_route("/index/"));
        assert!(!is_index_route("/"));
    }
}

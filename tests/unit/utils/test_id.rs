use oanda_mcp_server::utils::id::request_id;
use std::collections::HashSet;

#[test]
fn test_request_id_format() {
    let id = request_id();
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_request_ids_are_unique() {
    let ids: HashSet<String> = (0..1000).map(|_| request_id()).collect();
    assert_eq!(ids.len(), 1000);
}

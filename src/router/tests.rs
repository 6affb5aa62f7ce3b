use super::Router;
use crate::spec::{routes, DELETE_PET, FIND_PETS_BY_STATUS, FIND_PET_BY_ID, UPDATE_PET};
use http::Method;

#[test]
fn test_root_path() {
    let (re, params) = Router::path_to_regex("/").unwrap();
    assert!(re.is_match("/"));
    assert!(params.is_empty());
}

#[test]
fn test_parameterized_path() {
    let (re, params) = Router::path_to_regex("/pet/{petId}").unwrap();
    assert!(re.is_match("/pet/123"));
    assert!(!re.is_match("/pet/123/extra"));
    assert_eq!(params, vec!["petId"]);
}

#[test]
fn test_literal_segments_are_escaped() {
    let (re, _) = Router::path_to_regex("/pet.json").unwrap();
    assert!(re.is_match("/pet.json"));
    assert!(!re.is_match("/petxjson"));
}

#[test]
fn test_literal_route_beats_template() {
    let router = Router::new(routes());
    let m = router.route(Method::GET, "/pet/findByStatus").unwrap();
    assert_eq!(m.handler_name, FIND_PETS_BY_STATUS);
    assert!(m.path_params.is_empty());

    let m = router.route(Method::GET, "/pet/findByStatusX").unwrap();
    assert_eq!(m.handler_name, FIND_PET_BY_ID);
    assert_eq!(m.get_path_param("petId"), Some("findByStatusX"));
}

#[test]
fn test_method_selects_route() {
    let router = Router::new(routes());
    assert_eq!(router.route(Method::DELETE, "/pet/5").unwrap().handler_name, DELETE_PET);
    assert_eq!(router.route(Method::PUT, "/pet").unwrap().handler_name, UPDATE_PET);
    assert!(router.route(Method::PATCH, "/pet").is_none());
    assert!(router.route(Method::GET, "/pet").is_none());
}

#[test]
fn test_trailing_slash_tolerated() {
    let router = Router::new(routes());
    let m = router.route(Method::GET, "/pet/7/").unwrap();
    assert_eq!(m.get_path_param("petId"), Some("7"));
}

#[test]
fn test_unknown_path() {
    let router = Router::new(routes());
    assert!(router.route(Method::GET, "/store/inventory").is_none());
    assert!(router.route(Method::GET, "/").is_none());
}

#[test]
fn test_routes_in_match_order() {
    let router = Router::new(routes());
    let order: Vec<&str> = router.routes().map(|r| r.path_pattern.as_str()).collect();
    assert_eq!(order.len(), 6);
    assert!(order.iter().position(|p| *p == "/pet/findByTags") < order.iter().position(|p| *p == "/pet/{petId}"));
}

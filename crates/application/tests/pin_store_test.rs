use rebind_dns_application::PinStore;
use std::net::Ipv4Addr;
use std::time::Duration;
use tokio::time::sleep;

fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_lookup_on_empty_store_misses() {
    let store = PinStore::new();
    assert_eq!(store.lookup(ip("192.168.2.1")).await, None);
}

#[tokio::test]
async fn test_add_then_lookup_hits() {
    let store = PinStore::new();
    store
        .add(ip("192.168.2.1"), ip("3.2.4.5"), Duration::from_secs(30))
        .await;

    assert_eq!(store.lookup(ip("192.168.2.1")).await, Some(ip("3.2.4.5")));
}

#[tokio::test]
async fn test_lookup_other_key_misses() {
    let store = PinStore::new();
    store
        .add(ip("192.168.2.1"), ip("3.2.4.5"), Duration::from_secs(30))
        .await;

    assert_eq!(store.lookup(ip("192.168.2.2")).await, None);
}

#[tokio::test]
async fn test_pin_expires_after_lifetime() {
    let store = PinStore::new();
    store
        .add(ip("10.0.0.1"), ip("10.0.0.2"), Duration::from_millis(100))
        .await;

    assert_eq!(store.lookup(ip("10.0.0.1")).await, Some(ip("10.0.0.2")));

    sleep(Duration::from_millis(300)).await;
    assert_eq!(store.lookup(ip("10.0.0.1")).await, None);
}

#[tokio::test]
async fn test_readd_overwrites_value_immediately() {
    let store = PinStore::new();
    store
        .add(ip("10.0.0.1"), ip("10.0.0.2"), Duration::from_secs(30))
        .await;
    store
        .add(ip("10.0.0.1"), ip("10.0.0.3"), Duration::from_secs(30))
        .await;

    assert_eq!(store.lookup(ip("10.0.0.1")).await, Some(ip("10.0.0.3")));
}

#[tokio::test]
async fn test_readd_does_not_extend_first_expiry() {
    // Both adds arm their own timer; the first one to fire deletes the key
    // even though the second installation asked for a much longer lifetime.
    let store = PinStore::new();
    store
        .add(ip("10.0.0.1"), ip("10.0.0.2"), Duration::from_millis(100))
        .await;
    store
        .add(ip("10.0.0.1"), ip("10.0.0.3"), Duration::from_secs(30))
        .await;

    assert_eq!(store.lookup(ip("10.0.0.1")).await, Some(ip("10.0.0.3")));

    sleep(Duration::from_millis(300)).await;
    assert_eq!(store.lookup(ip("10.0.0.1")).await, None);
}

#[tokio::test]
async fn test_keys_expire_independently() {
    let store = PinStore::new();
    store
        .add(ip("10.0.0.1"), ip("10.0.0.2"), Duration::from_millis(100))
        .await;
    store
        .add(ip("10.0.0.3"), ip("10.0.0.4"), Duration::from_secs(30))
        .await;

    sleep(Duration::from_millis(300)).await;

    assert_eq!(store.lookup(ip("10.0.0.1")).await, None);
    assert_eq!(store.lookup(ip("10.0.0.3")).await, Some(ip("10.0.0.4")));
}

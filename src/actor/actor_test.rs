// ABOUTME: Tests for the producer and consumer actors.
// ABOUTME: Covers clean cancellation, conservation, and config bounds.

use std::sync::Arc;
use std::time::Duration;

use super::actor::Actor;
use super::config::ActorConfig;
use super::consumer::Consumer;
use super::producer::Producer;
use super::shutdown::Shutdown;
use crate::account::Account;

fn fast_config() -> ActorConfig {
    ActorConfig::default().pace(Duration::from_millis(1))
}

#[tokio::test]
async fn test_producer_deposits_until_cancelled() {
    let account = Arc::new(Account::new());
    let producer = Producer::new(Arc::clone(&account), fast_config());
    let shutdown = Shutdown::new();

    let signal = shutdown.clone();
    let handle = tokio::spawn(async move { producer.run(signal).await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.cancel();

    let report = handle.await.unwrap().unwrap();
    assert!(report.iterations > 0, "producer should have deposited");
    assert_eq!(report.name, "producer");
    // With no consumer, everything deposited is still in the account.
    assert_eq!(account.balance().await, report.total_amount);
}

#[tokio::test]
async fn test_consumer_exits_cleanly_when_cancelled_while_blocked() {
    let account = Arc::new(Account::new());
    let consumer = Consumer::new(Arc::clone(&account), fast_config());
    let shutdown = Shutdown::new();

    let signal = shutdown.clone();
    let handle = tokio::spawn(async move { consumer.run(signal).await });

    // The consumer blocks immediately on the empty account. Cancellation
    // must unblock it and end the loop with a clean report, not an error.
    tokio::time::sleep(Duration::from_millis(20)).await;
    shutdown.cancel();

    let report = tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("cancelled consumer should not hang")
        .unwrap()
        .unwrap();
    assert_eq!(report.iterations, 0);
    assert_eq!(report.total_amount, 0);
    assert_eq!(account.balance().await, 0);
}

#[tokio::test]
async fn test_consumer_withdraws_available_funds() {
    let account = Arc::new(Account::with_balance(1000));
    let consumer = Consumer::new(Arc::clone(&account), fast_config());
    let shutdown = Shutdown::new();

    let signal = shutdown.clone();
    let handle = tokio::spawn(async move { consumer.run(signal).await });

    tokio::time::sleep(Duration::from_millis(20)).await;
    shutdown.cancel();

    let report = handle.await.unwrap().unwrap();
    assert!(report.iterations > 0, "consumer should have withdrawn");
    assert_eq!(account.balance().await, 1000 - report.total_amount);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_producer_and_consumer_conserve_balance() {
    let account = Arc::new(Account::new());
    let config = fast_config();
    let shutdown = Shutdown::new();

    let producer = Producer::new(Arc::clone(&account), config.clone());
    let consumer = Consumer::new(Arc::clone(&account), config);

    let producer_signal = shutdown.clone();
    let producer_handle = tokio::spawn(async move { producer.run(producer_signal).await });
    let consumer_signal = shutdown.clone();
    let consumer_handle = tokio::spawn(async move { consumer.run(consumer_signal).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();

    let produced = producer_handle.await.unwrap().unwrap();
    let consumed = consumer_handle.await.unwrap().unwrap();

    // No lost or duplicated updates: the final balance is exactly deposits
    // minus withdrawals.
    assert_eq!(
        account.balance().await,
        produced.total_amount - consumed.total_amount
    );
    assert!(account.balance().await >= 0);
}

#[tokio::test]
async fn test_actors_have_distinct_ids() {
    let account = Arc::new(Account::new());
    let producer = Producer::new(Arc::clone(&account), ActorConfig::default());
    let consumer = Consumer::new(account, ActorConfig::default());

    assert_ne!(producer.actor_id(), consumer.actor_id());
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let account = Arc::new(Account::new());
    let producer = Producer::new(account, fast_config());
    let shutdown = Shutdown::new();
    shutdown.cancel();

    let report = producer.run(shutdown).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["name"], "producer");
    assert_eq!(json["iterations"], 0);
}

#[test]
fn test_draw_amount_respects_bounds() {
    let config = ActorConfig::default().amounts(1, 10);
    for _ in 0..200 {
        let amount = config.draw_amount();
        assert!((1..=10).contains(&amount), "amount {} out of range", amount);
    }
}

#[test]
fn test_draw_amount_single_value_range() {
    let config = ActorConfig::default().amounts(7, 7);
    assert_eq!(config.draw_amount(), 7);
}

#[test]
#[should_panic(expected = "min amount must be positive")]
fn test_config_rejects_non_positive_min() {
    let _ = ActorConfig::default().amounts(0, 10);
}

#[test]
#[should_panic(expected = "max amount must be at least min")]
fn test_config_rejects_inverted_bounds() {
    let _ = ActorConfig::default().amounts(5, 4);
}

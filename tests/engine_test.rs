mod common;

use common::fresh_engine;
use fruit_compute::domain::command::CostOutcome;
use fruit_compute::error::EngineError;
use rust_decimal_macros::dec;

/// The cashier-facing scenario from end to end: stock an item, price a
/// basket, hand over cash, reprice, and retire the item.
#[tokio::test]
async fn test_full_checkout_scenario() {
    let engine = fresh_engine();

    engine.add_price("apple", dec!(50.0)).await.unwrap();
    assert_eq!(
        engine.calculate_cost("apple", 3).await.unwrap(),
        CostOutcome::Found(dec!(150.0))
    );

    let receipt = engine
        .generate_receipt("cashier1", dec!(150.0), dec!(200.0))
        .await
        .unwrap();
    assert_eq!(receipt.change_due, dec!(50.0));

    engine.update_price("apple", dec!(60.0)).await.unwrap();
    assert_eq!(
        engine.calculate_cost("apple", 3).await.unwrap(),
        CostOutcome::Found(dec!(180.0))
    );

    engine.delete_price("apple").await.unwrap();
    assert_eq!(
        engine.calculate_cost("apple", 1).await.unwrap(),
        CostOutcome::NotFound
    );
}

#[tokio::test]
async fn test_cost_without_prior_add() {
    let engine = fresh_engine();
    assert_eq!(
        engine.calculate_cost("banana", 2).await.unwrap(),
        CostOutcome::NotFound
    );
}

#[tokio::test]
async fn test_readd_overwrites_existing_price() {
    let engine = fresh_engine();
    engine.add_price("apple", dec!(50.0)).await.unwrap();
    engine.add_price("apple", dec!(45.0)).await.unwrap();
    assert_eq!(
        engine.calculate_cost("apple", 1).await.unwrap(),
        CostOutcome::Found(dec!(45.0))
    );
}

#[tokio::test]
async fn test_receipt_rendering() {
    let engine = fresh_engine();
    engine.add_price("mango", dec!(33.5)).await.unwrap();
    let receipt = engine
        .checkout("mango", 2, "jane", dec!(100.0))
        .await
        .unwrap();
    assert_eq!(
        receipt.to_string(),
        "Total Cost: $67.00\nAmount Given: $100.00\nChange Due: $33.00\nCashier: jane"
    );
}

#[tokio::test]
async fn test_failed_mutation_leaves_catalog_untouched() {
    let engine = fresh_engine();
    engine.add_price("apple", dec!(50.0)).await.unwrap();

    let result = engine.update_price("apple", dec!(-2.0)).await;
    assert!(matches!(result, Err(EngineError::Validation(_))));

    assert_eq!(
        engine.calculate_cost("apple", 1).await.unwrap(),
        CostOutcome::Found(dec!(50.0))
    );
}

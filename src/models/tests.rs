use super::Transaction;

use std::str::FromStr;

use anyhow::Result;

use crate::types::Amount;

#[test]
fn test_transaction_deserializes_all_fields() -> Result<()> {
    let json = r#"{
        "mtn": 663458,
        "amount": 430.2,
        "senderFullName": "Tom Shelby",
        "senderAge": 22,
        "beneficiaryFullName": "Alfie Solomons",
        "beneficiaryAge": 33,
        "issueId": 1,
        "issueSolved": false,
        "issueMessage": "Looks like money laundering"
    }"#;

    let transaction: Transaction = serde_json::from_str(json)?;

    assert_eq!(transaction.transaction_number, 663458);
    assert_eq!(transaction.amount, Amount::from_str("430.2")?);
    assert_eq!(transaction.sender_full_name, "Tom Shelby");
    assert_eq!(transaction.sender_age, Some(22));
    assert_eq!(transaction.beneficiary_full_name, "Alfie Solomons");
    assert_eq!(transaction.beneficiary_age, Some(33));
    assert_eq!(transaction.issue_id, Some(1));
    assert_eq!(transaction.issue_solved, Some(false));
    assert_eq!(transaction.issue_message.as_deref(), Some("Looks like money laundering"));

    Ok(())
}

#[test]
fn test_transaction_treats_null_and_missing_optionals_as_absent() -> Result<()> {
    let with_nulls = r#"{
        "mtn": 1284564,
        "amount": 150.2,
        "senderFullName": "Tom Shelby",
        "senderAge": null,
        "beneficiaryFullName": "Arthur Shelby",
        "beneficiaryAge": null,
        "issueId": null,
        "issueSolved": null,
        "issueMessage": null
    }"#;
    let without_fields = r#"{
        "mtn": 1284564,
        "amount": 150.2,
        "senderFullName": "Tom Shelby",
        "beneficiaryFullName": "Arthur Shelby"
    }"#;

    let first: Transaction = serde_json::from_str(with_nulls)?;
    let second: Transaction = serde_json::from_str(without_fields)?;

    assert_eq!(first, second);
    assert_eq!(first.issue_solved, None);
    assert!(!first.has_unsolved_issue());
    assert!(!first.has_solved_issue());

    Ok(())
}

#[test]
fn test_transaction_rejects_negative_amount() {
    let json = r#"{"mtn": 1, "amount": -5, "senderFullName": "a", "beneficiaryFullName": "b"}"#;

    assert!(serde_json::from_str::<Transaction>(json).is_err());
}

#[test]
fn test_transaction_rejects_missing_required_fields() {
    let json = r#"{"mtn": 1, "amount": 5, "senderFullName": "a"}"#;

    assert!(serde_json::from_str::<Transaction>(json).is_err());
}

#[test]
fn test_transaction_serialization_omits_absent_fields() -> Result<()> {
    let json = r#"{"mtn":42347,"amount":210.6,"senderFullName":"ravi","beneficiaryFullName":"sami","issueSolved":true}"#;
    let transaction: Transaction = serde_json::from_str(json)?;

    assert_eq!(serde_json::to_string(&transaction)?, json);

    Ok(())
}

#[test]
fn test_transaction_involves_sender_and_beneficiary_only() -> Result<()> {
    let json = r#"{"mtn": 1, "amount": 5, "senderFullName": "ali", "beneficiaryFullName": "junaid"}"#;
    let transaction: Transaction = serde_json::from_str(json)?;

    assert!(transaction.involves("ali"));
    assert!(transaction.involves("junaid"));
    assert!(!transaction.involves("Ali"));

    Ok(())
}

//! Typed parsing of the transaction wire shapes.
//!
//! Each asset kind has a parse function that either yields a fully typed
//! value or a list of field-level violations, so a caller can report every
//! problem in a malformed payload at once rather than one at a time.
//!
//! Wire shapes:
//! - `{"lock":   {"timelock": uint, "hashlock": hex64, "claimAddress": address}}`
//! - `{"claim":  {"lockTransactionId": string, "preimage": string(1..64)}}`
//! - `{"refund": {"lockTransactionId": string}}`

use serde_json::Value;

use openswap_types::constants::{MAX_PREIMAGE_LEN, MIN_PREIMAGE_LEN};
use openswap_types::{
    Address, Amount, ClaimAsset, Hashlock, LockAsset, OpenswapError, RefundAsset, Timestamp,
    Transaction, TransactionAsset, TxId,
};

fn violation(field: &str, expected: &str, actual: &impl ToString) -> OpenswapError {
    OpenswapError::SchemaViolation {
        field: field.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

fn str_field<'a>(
    obj: &'a Value,
    key: &str,
    path: &str,
    errors: &mut Vec<OpenswapError>,
) -> Option<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            errors.push(violation(path, "string", other));
            None
        }
        None => {
            errors.push(violation(path, "string", &"missing"));
            None
        }
    }
}

fn uint_field(obj: &Value, key: &str, path: &str, errors: &mut Vec<OpenswapError>) -> Option<u64> {
    match obj.get(key) {
        Some(value) => match value.as_u64() {
            Some(n) => Some(n),
            None => {
                errors.push(violation(path, "integer >= 0", value));
                None
            }
        },
        None => {
            errors.push(violation(path, "integer >= 0", &"missing"));
            None
        }
    }
}

fn parse_lock(lock: &Value) -> Result<LockAsset, Vec<OpenswapError>> {
    if !lock.is_object() {
        return Err(vec![violation("asset.lock", "object", lock)]);
    }
    let mut errors = Vec::new();

    let timelock = uint_field(lock, "timelock", "asset.lock.timelock", &mut errors).map(Timestamp);

    let hashlock = match str_field(lock, "hashlock", "asset.lock.hashlock", &mut errors) {
        Some(s) => match Hashlock::parse(s) {
            Ok(hashlock) => Some(hashlock),
            Err(_) => {
                errors.push(violation("asset.lock.hashlock", "64 hex characters", &s));
                None
            }
        },
        None => None,
    };

    let claim_address = match str_field(lock, "claimAddress", "asset.lock.claimAddress", &mut errors)
    {
        Some(s) => match Address::parse(s) {
            Ok(address) => Some(address),
            Err(_) => {
                errors.push(violation(
                    "asset.lock.claimAddress",
                    "address (digits followed by 'L')",
                    &s,
                ));
                None
            }
        },
        None => None,
    };

    match (timelock, hashlock, claim_address) {
        (Some(timelock), Some(hashlock), Some(claim_address)) if errors.is_empty() => {
            Ok(LockAsset {
                timelock,
                hashlock,
                claim_address,
            })
        }
        _ => Err(errors),
    }
}

fn parse_claim(claim: &Value) -> Result<ClaimAsset, Vec<OpenswapError>> {
    if !claim.is_object() {
        return Err(vec![violation("asset.claim", "object", claim)]);
    }
    let mut errors = Vec::new();

    let lock_transaction_id = match str_field(
        claim,
        "lockTransactionId",
        "asset.claim.lockTransactionId",
        &mut errors,
    ) {
        Some(s) => match TxId::parse(s) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(violation(
                    "asset.claim.lockTransactionId",
                    "non-empty string",
                    &s,
                ));
                None
            }
        },
        None => None,
    };

    let preimage = match str_field(claim, "preimage", "asset.claim.preimage", &mut errors) {
        Some(s) => {
            let len = s.chars().count();
            if (MIN_PREIMAGE_LEN..=MAX_PREIMAGE_LEN).contains(&len) {
                Some(s.to_string())
            } else {
                errors.push(violation(
                    "asset.claim.preimage",
                    "string of 1..64 characters",
                    &s,
                ));
                None
            }
        }
        None => None,
    };

    match (lock_transaction_id, preimage) {
        (Some(lock_transaction_id), Some(preimage)) if errors.is_empty() => Ok(ClaimAsset {
            lock_transaction_id,
            preimage,
        }),
        _ => Err(errors),
    }
}

fn parse_refund(refund: &Value) -> Result<RefundAsset, Vec<OpenswapError>> {
    if !refund.is_object() {
        return Err(vec![violation("asset.refund", "object", refund)]);
    }
    let mut errors = Vec::new();

    let lock_transaction_id = match str_field(
        refund,
        "lockTransactionId",
        "asset.refund.lockTransactionId",
        &mut errors,
    ) {
        Some(s) => match TxId::parse(s) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(violation(
                    "asset.refund.lockTransactionId",
                    "non-empty string",
                    &s,
                ));
                None
            }
        },
        None => None,
    };

    match lock_transaction_id {
        Some(lock_transaction_id) if errors.is_empty() => Ok(RefundAsset {
            lock_transaction_id,
        }),
        _ => Err(errors),
    }
}

/// Parse an asset envelope into its typed form.
///
/// # Errors
/// Returns every field-level violation found in the payload.
pub fn parse_asset(value: &Value) -> Result<TransactionAsset, Vec<OpenswapError>> {
    let Some(obj) = value.as_object() else {
        return Err(vec![violation("asset", "object", value)]);
    };

    if let Some(lock) = obj.get("lock") {
        return parse_lock(lock).map(TransactionAsset::Lock);
    }
    if let Some(claim) = obj.get("claim") {
        return parse_claim(claim).map(TransactionAsset::Claim);
    }
    if let Some(refund) = obj.get("refund") {
        return parse_refund(refund).map(TransactionAsset::Refund);
    }

    let found = obj.keys().cloned().collect::<Vec<_>>().join(",");
    Err(vec![OpenswapError::UnknownAssetKind { found }])
}

/// Parse a full transaction: common envelope plus the kind-specific asset.
///
/// # Errors
/// Returns every field-level violation found in the payload.
pub fn parse_transaction(value: &Value) -> Result<Transaction, Vec<OpenswapError>> {
    if !value.is_object() {
        return Err(vec![violation("transaction", "object", value)]);
    }
    let mut errors = Vec::new();

    let id = match str_field(value, "id", "id", &mut errors) {
        Some(s) => match TxId::parse(s) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(violation("id", "non-empty string", &s));
                None
            }
        },
        None => None,
    };

    let sender_id = match str_field(value, "senderId", "senderId", &mut errors) {
        Some(s) => match Address::parse(s) {
            Ok(address) => Some(address),
            Err(_) => {
                errors.push(violation("senderId", "address (digits followed by 'L')", &s));
                None
            }
        },
        None => None,
    };

    let fee = match str_field(value, "fee", "fee", &mut errors) {
        Some(s) => match Amount::parse(s) {
            Ok(fee) => Some(fee),
            Err(_) => {
                errors.push(violation("fee", "base-10 digit string", &s));
                None
            }
        },
        None => None,
    };

    let amount = match str_field(value, "amount", "amount", &mut errors) {
        Some(s) => match Amount::parse(s) {
            Ok(amount) => Some(amount),
            Err(_) => {
                errors.push(violation("amount", "base-10 digit string", &s));
                None
            }
        },
        None => None,
    };

    let asset = match value.get("asset") {
        Some(asset_value) => match parse_asset(asset_value) {
            Ok(asset) => Some(asset),
            Err(mut asset_errors) => {
                errors.append(&mut asset_errors);
                None
            }
        },
        None => {
            errors.push(violation("asset", "object", &"missing"));
            None
        }
    };

    match (id, sender_id, fee, amount, asset) {
        (Some(id), Some(sender_id), Some(fee), Some(amount), Some(asset))
            if errors.is_empty() =>
        {
            Ok(Transaction {
                id,
                sender_id,
                fee,
                amount,
                asset,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn secret_hashlock() -> String {
        Hashlock::of_preimage("secret").as_str().to_string()
    }

    #[test]
    fn parses_valid_lock_asset() {
        let value = json!({
            "lock": {
                "timelock": 1_700_000_000u64,
                "hashlock": secret_hashlock(),
                "claimAddress": "16313739661670634666L",
            }
        });
        let asset = parse_asset(&value).unwrap();
        let TransactionAsset::Lock(lock) = asset else {
            panic!("expected lock asset");
        };
        assert_eq!(lock.timelock, Timestamp(1_700_000_000));
        assert!(lock.hashlock.matches("secret"));
    }

    #[test]
    fn lock_asset_aggregates_all_violations() {
        let value = json!({
            "lock": {
                "timelock": -5,
                "hashlock": "nothex",
                "claimAddress": "bogus",
            }
        });
        let errors = parse_asset(&value).unwrap_err();
        assert_eq!(errors.len(), 3);
        for err in &errors {
            assert!(matches!(err, OpenswapError::SchemaViolation { .. }));
        }
    }

    #[test]
    fn lock_asset_reports_missing_fields() {
        let errors = parse_asset(&json!({"lock": {}})).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors
            .iter()
            .map(|e| match e {
                OpenswapError::SchemaViolation { field, .. } => field.clone(),
                other => panic!("unexpected: {other}"),
            })
            .collect();
        assert!(fields.contains(&"asset.lock.timelock".to_string()));
        assert!(fields.contains(&"asset.lock.hashlock".to_string()));
        assert!(fields.contains(&"asset.lock.claimAddress".to_string()));
    }

    #[test]
    fn parses_valid_claim_asset() {
        let value = json!({
            "claim": {
                "lockTransactionId": "15150779193594545094",
                "preimage": "secret",
            }
        });
        let asset = parse_asset(&value).unwrap();
        let TransactionAsset::Claim(claim) = asset else {
            panic!("expected claim asset");
        };
        assert_eq!(claim.preimage, "secret");
    }

    #[test]
    fn claim_preimage_length_bounds() {
        let too_long = "x".repeat(65);
        for bad in ["", too_long.as_str()] {
            let value = json!({
                "claim": {
                    "lockTransactionId": "15150779193594545094",
                    "preimage": bad,
                }
            });
            let errors = parse_asset(&value).unwrap_err();
            assert!(
                errors.iter().any(|e| matches!(
                    e,
                    OpenswapError::SchemaViolation { field, .. }
                        if field == "asset.claim.preimage"
                )),
                "no preimage violation for {bad:?}"
            );
        }

        let max_len = "x".repeat(64);
        let value = json!({
            "claim": {
                "lockTransactionId": "15150779193594545094",
                "preimage": max_len,
            }
        });
        assert!(parse_asset(&value).is_ok());
    }

    #[test]
    fn parses_valid_refund_asset() {
        let value = json!({"refund": {"lockTransactionId": "15150779193594545094"}});
        let asset = parse_asset(&value).unwrap();
        assert!(matches!(asset, TransactionAsset::Refund(_)));
    }

    #[test]
    fn unknown_asset_kind_rejected() {
        let errors = parse_asset(&json!({"stake": {}})).unwrap_err();
        assert!(matches!(
            errors[0],
            OpenswapError::UnknownAssetKind { ref found } if found == "stake"
        ));
    }

    #[test]
    fn parses_full_transaction() {
        let value = json!({
            "id": "11638403401011060422",
            "senderId": "16313739661670634666L",
            "fee": "10000000",
            "amount": "100000000000",
            "asset": {
                "lock": {
                    "timelock": 1_700_000_000u64,
                    "hashlock": secret_hashlock(),
                    "claimAddress": "10881167371402274308L",
                }
            }
        });
        let tx = parse_transaction(&value).unwrap();
        assert_eq!(tx.amount, Amount::new(100_000_000_000));
        assert_eq!(tx.sender_id.as_str(), "16313739661670634666L");
        assert!(matches!(tx.asset, TransactionAsset::Lock(_)));
    }

    #[test]
    fn transaction_envelope_violations_aggregate_with_asset_violations() {
        let value = json!({
            "id": "",
            "senderId": "nope",
            "fee": "ten",
            "amount": "-1",
            "asset": {"refund": {"lockTransactionId": ""}}
        });
        let errors = parse_transaction(&value).unwrap_err();
        assert!(errors.len() >= 5, "got {} errors: {errors:?}", errors.len());
    }
}

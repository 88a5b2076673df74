//! Action-kind classification tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use catwalk_core::error::{CatwalkError, ClientCode};
use catwalk_core::model::ActionKind;

#[test]
fn safe_and_write_partition() {
    assert!(ActionKind::List.is_safe());
    assert!(ActionKind::Retrieve.is_safe());
    assert!(!ActionKind::Create.is_safe());

    assert!(ActionKind::Update.is_write());
    assert!(ActionKind::PartialUpdate.is_write());
    assert!(ActionKind::Delete.is_write());

    // Creation is neither safe nor a write on an existing instance.
    assert!(!ActionKind::Create.is_write());
}

#[test]
fn rejection_codes_are_distinct() {
    let throttled = CatwalkError::RateLimited { retry_after_secs: 30 };
    let forbidden = CatwalkError::Forbidden;
    let missing = CatwalkError::NotFound;

    assert_eq!(throttled.client_code(), ClientCode::RateLimited);
    assert_eq!(forbidden.client_code(), ClientCode::Forbidden);
    assert_eq!(missing.client_code(), ClientCode::NotFound);
    assert_ne!(throttled.client_code().as_str(), forbidden.client_code().as_str());
    assert_ne!(forbidden.client_code().as_str(), missing.client_code().as_str());
}

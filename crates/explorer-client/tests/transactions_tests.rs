// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the transaction endpoints

use explorer_client::{ExplorerError, MethodFilter, TransactionType};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path, query_param},
};

mod fixtures;
use fixtures::*;

#[tokio::test]
async fn status_filter_is_sent_without_cursor() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("filter", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            json!([{"hash": hex(test_hash()), "status": null}]),
            json!(null),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client
        .transactions()
        .get_transactions(&["pending"], &[], &[], None)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn status_filters_are_pipe_joined() {
    let (mock_server, client) = setup().await;

    mount_json(&mock_server, "/transactions", page_body(json!([]), json!(null))).await;

    client
        .transactions()
        .get_transactions(&["pending", "validated"], &[], &[], None)
        .await
        .unwrap();

    assert_eq!(
        single_request_query(&mock_server).await,
        pairs(&[("filter", "pending | validated")])
    );
}

#[tokio::test]
async fn type_and_method_filters_are_comma_joined() {
    let (mock_server, client) = setup().await;

    mount_json(&mock_server, "/transactions", page_body(json!([]), json!(null))).await;

    client
        .transactions()
        .get_transactions(
            &[],
            &[
                TransactionType::TokenTransfer.as_str(),
                TransactionType::ContractCall.as_str(),
            ],
            &[MethodFilter::Approve.as_str(), "multicall"],
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        single_request_query(&mock_server).await,
        pairs(&[
            ("method", "approve,multicall"),
            ("tx_type", "token_transfer,contract_call"),
        ])
    );
}

#[tokio::test]
async fn filters_are_applied_alongside_cursor() {
    let (mock_server, client) = setup().await;

    mount_json(
        &mock_server,
        "/transactions",
        page_body(
            json!([{"block_number": 19_000_000}]),
            json!({"block_number": 18_999_999, "index": 3, "items_count": 100}),
        ),
    )
    .await;

    let cursor = cursor(json!({"block_number": 19_000_000, "index": 0, "items_count": 50}));
    let page = client
        .transactions()
        .get_transactions(&["validated"], &["coin_transfer"], &[], Some(&cursor))
        .await
        .unwrap();

    assert_eq!(
        single_request_query(&mock_server).await,
        pairs(&[
            ("block_number", "19000000"),
            ("filter", "validated"),
            ("index", "0"),
            ("items_count", "50"),
            ("tx_type", "coin_transfer"),
        ])
    );
    assert_eq!(page.next_page_params.unwrap()["items_count"], json!(100));
}

#[tokio::test]
async fn invalid_filters_name_their_rule() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(json!([]), json!(null))))
        .expect(0)
        .mount(&mock_server)
        .await;

    let cases: [(&[&str], &[&str], &[&str], &str); 3] = [
        (
            &["failed"],
            &[],
            &[],
            "txn_filter must be either 'pending' or 'validated'",
        ),
        (
            &[],
            &["token_burn"],
            &[],
            "txn_type must be one of 'token_transfer', 'contract_creation', 'contract_call', \
             'coin_transfer', or 'token_creation'",
        ),
        (
            &[],
            &[],
            &["swap"],
            "method must be either 'approve', 'transfer', 'multicall', 'mint', or 'commit'",
        ),
    ];

    for (txn_filter, txn_type, methods, expected) in cases {
        let error = client
            .transactions()
            .get_transactions(txn_filter, txn_type, methods, None)
            .await
            .unwrap_err();
        match error {
            ExplorerError::BadParam { message } => assert_eq!(message, expected),
            other => panic!("Expected BadParam error, got: {other:?}"),
        }
    }
}

#[tokio::test]
async fn transaction_info_is_a_single_record() {
    let (mock_server, client) = setup().await;
    let hash = test_hash();

    mount_json(
        &mock_server,
        format!("/transactions/{}", hex(hash)),
        json!({"hash": hex(hash), "status": "ok", "value": "0"}),
    )
    .await;

    let info = client
        .transactions()
        .get_transaction_info(hash)
        .await
        .unwrap();

    assert_eq!(info.items.len(), 1);
    assert_eq!(info.items[0]["status"], json!("ok"));
}

#[tokio::test]
async fn per_transaction_pages() {
    let (mock_server, client) = setup().await;
    let hash = test_hash();
    let next = json!({"index": 1, "items_count": 50});

    for endpoint in [
        "token-transfers",
        "internal-transactions",
        "logs",
        "state-changes",
    ] {
        mount_json(
            &mock_server,
            format!("/transactions/{}/{endpoint}", hex(hash)),
            page_body(json!([{"endpoint": endpoint}]), next.clone()),
        )
        .await;
    }

    let transactions = client.transactions();
    let pages = [
        transactions.get_token_transfers(hash, None).await.unwrap(),
        transactions.get_internal_transactions(hash, None).await.unwrap(),
        transactions.get_logs(hash, None).await.unwrap(),
        transactions.get_state_changes(hash, None).await.unwrap(),
    ];

    let endpoints: Vec<_> = pages
        .iter()
        .map(|page| page.items[0]["endpoint"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        endpoints,
        ["token-transfers", "internal-transactions", "logs", "state-changes"]
    );
    assert!(pages.iter().all(|page| page.has_next_page()));
}

#[tokio::test]
async fn raw_trace_accepts_bare_list() {
    let (mock_server, client) = setup().await;
    let hash = test_hash();

    mount_json(
        &mock_server,
        format!("/transactions/{}/raw-trace", hex(hash)),
        json!([
            {"action": {"callType": "call"}, "type": "call"},
            {"action": {"callType": "delegatecall"}, "type": "call"}
        ]),
    )
    .await;

    let trace = client.transactions().get_raw_trace(hash).await.unwrap();

    assert_eq!(trace.items.len(), 2);
    assert_eq!(trace.items[1]["action"]["callType"], json!("delegatecall"));
}

#[tokio::test]
async fn missing_items_is_invalid_response() {
    let (mock_server, client) = setup().await;
    let hash = test_hash();

    mount_json(
        &mock_server,
        format!("/transactions/{}/logs", hex(hash)),
        json!({"next_page_params": null}),
    )
    .await;

    let error = client.transactions().get_logs(hash, None).await.unwrap_err();
    match error {
        ExplorerError::InvalidResponse { message } => {
            assert!(message.contains("has no 'items' field"));
        }
        other => panic!("Expected InvalidResponse error, got: {other:?}"),
    }
}

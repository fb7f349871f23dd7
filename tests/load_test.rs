//! Concurrent load against a running service.

use std::collections::HashSet;
use std::time::Instant;

use contacts_service::{ContactRepository, InMemoryContactRepository};

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_ids() {
    let service = common::start_service(InMemoryContactRepository::new()).await;
    let url = format!("{}/contacts", service.url());

    let concurrency = 20;
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;

    let client = common::http_client();
    let start = Instant::now();

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for i in 0..requests_per_task {
                let res = client
                    .post(&url)
                    .json(&serde_json::json!({
                        "name": format!("load-{}-{}", task, i),
                        "email": "load@x.com",
                    }))
                    .send()
                    .await
                    .unwrap();
                assert_eq!(res.status(), 201);
                let body: serde_json::Value = res.json().await.unwrap();
                ids.push(body["id"].as_i64().unwrap());
            }
            ids
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.await.unwrap() {
            assert!(ids.insert(id), "id {} issued twice", id);
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{} creates in {:?} ({:.0} req/s)",
        total_requests,
        elapsed,
        total_requests as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(ids.len(), total_requests);
    assert_eq!(service.contacts.len(), total_requests);
    assert_eq!(ids.iter().copied().max(), Some(total_requests as i64));
}

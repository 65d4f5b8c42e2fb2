use std::collections::HashSet;

use smart_url::state::AppState;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shortening_of_one_url_yields_one_code() {
    let state = AppState::new();

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .link_service
                    .create_short_link("https://race.example/x".to_string())
                    .await
                    .unwrap()
                    .code
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), 1);

    let top = state.stats_service.top_domains().await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shortening_counts_every_new_url() {
    let state = AppState::new();

    let handles: Vec<_> = (0..200)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                let link = state
                    .link_service
                    .create_short_link(format!("https://busy.example/{i}"))
                    .await
                    .unwrap();

                let resolved = state
                    .link_service
                    .get_link_by_code(&link.code)
                    .await
                    .unwrap();
                assert_eq!(resolved.long_url, format!("https://busy.example/{i}"));
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let top = state.stats_service.top_domains().await.unwrap();
    assert_eq!(top[0].domain, "busy.example");
    assert_eq!(top[0].count, 200);
    assert_eq!(state.link_service.link_count().await.unwrap(), 200);
}

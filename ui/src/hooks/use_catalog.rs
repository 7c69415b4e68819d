use crate::query::{use_query, with_retry, QueryCache, QueryKey, QueryStatus, RetryPolicy};
use api::product::Product;
use api::StoreClient;
use dioxus::prelude::*;

/// Everything the catalog queries share: the store client, one cache per
/// result type, and the retry policy.
#[derive(Clone)]
pub struct QueryClient {
    store: StoreClient,
    retry: RetryPolicy,
    categories: QueryCache<Vec<String>>,
    products: QueryCache<Vec<Product>>,
}

impl QueryClient {
    pub fn new(store: StoreClient, retry: RetryPolicy) -> Self {
        Self {
            store,
            retry,
            categories: QueryCache::default(),
            products: QueryCache::default(),
        }
    }
}

pub fn use_query_client_provider(store: StoreClient) -> QueryClient {
    use_context_provider(|| QueryClient::new(store, RetryPolicy::default()))
}

/// The category list, cached under a constant key.
pub fn use_categories() -> QueryStatus<Vec<String>> {
    let client = use_context::<QueryClient>();
    let store = client.store.clone();
    let retry = client.retry;

    use_query(client.categories, QueryKey::Categories, move |_| {
        let store = store.clone();
        async move { with_retry(retry, || store.categories()).await }
    })
}

/// Products of `category`, or all products when `None`.
pub fn use_products(category: Option<String>) -> QueryStatus<Vec<Product>> {
    let client = use_context::<QueryClient>();
    let store = client.store.clone();
    let retry = client.retry;

    let key = QueryKey::Products(category.clone());
    use_query(client.products, key, move |_| {
        let store = store.clone();
        let category = category.clone();
        async move { with_retry(retry, || store.products(category.as_deref())).await }
    })
}

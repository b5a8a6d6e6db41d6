use std::cell::Cell;

use arenadeck_core::pagination::{PagedList, PageRequest};
use arenadeck_utils::errors::AppError;

#[test]
fn test_begin_load_claims_the_gate() {
    let mut list = PagedList::<String>::new(12);

    let request = list.begin_load().expect("first begin_load should yield a request");
    assert_eq!(request, PageRequest { page: 1, page_size: 12 });
    assert_eq!(list.is_loading(), true);

    // a second caller while the fetch is in flight gets nothing
    assert_eq!(list.begin_load(), None);
}

#[test]
fn test_complete_load_full_batch_advances_page() {
    let mut list = PagedList::<i64>::new(3);

    let request = list.begin_load().expect("should begin");
    assert_eq!(request.page, 1);
    let appended = list.complete_load(Ok(vec![1, 2, 3])).expect("full batch should succeed");

    assert_eq!(appended, 3);
    assert_eq!(list.items(), &[1, 2, 3]);
    assert_eq!(list.next_page(), 2);
    assert_eq!(list.is_loading(), false);
    assert_eq!(list.is_finished(), false);
}

#[test]
fn test_complete_load_short_batch_finishes_list() {
    let mut list = PagedList::<i64>::new(3);

    list.begin_load().expect("should begin");
    list.complete_load(Ok(vec![1, 2])).expect("short batch should succeed");

    assert_eq!(list.is_finished(), true);
    assert_eq!(list.items(), &[1, 2]);
    // the list has ended, no further request is handed out
    assert_eq!(list.begin_load(), None);
}

#[test]
fn test_complete_load_empty_batch_finishes_without_advancing() {
    let mut list = PagedList::<i64>::new(3);

    list.begin_load().expect("should begin");
    let appended = list.complete_load(Ok(Vec::new())).expect("empty batch should succeed");

    assert_eq!(appended, 0);
    assert_eq!(list.next_page(), 1);
    assert_eq!(list.is_finished(), true);
}

#[test]
fn test_complete_load_error_finishes_list() {
    let mut list = PagedList::<i64>::new(3);

    list.begin_load().expect("should begin");
    let error = list.complete_load(Err(AppError::Network(String::from("connection refused"))));

    assert_eq!(error, Err(AppError::Network(String::from("connection refused"))));
    assert_eq!(list.is_loading(), false);
    assert_eq!(list.is_finished(), true);
    assert_eq!(list.begin_load(), None);
}

#[test]
fn test_reset_rewinds_the_list() {
    let mut list = PagedList::<i64>::new(2);
    list.begin_load().expect("should begin");
    list.complete_load(Ok(vec![1])).expect("batch should succeed");
    assert_eq!(list.is_finished(), true);

    list.reset();

    assert_eq!(list.is_empty(), true);
    assert_eq!(list.is_finished(), false);
    assert_eq!(list.begin_load(), Some(PageRequest { page: 1, page_size: 2 }));
}

#[tokio::test]
async fn test_load_next_page_terminates_after_short_batch() {
    // page_size 2, the server has [a, b] then nothing
    let mut list = PagedList::<String>::new(2);
    let fetches = Cell::new(0u32);

    let fetch = |request: PageRequest| {
        fetches.set(fetches.get() + 1);
        async move {
            match request.page {
                1 => Ok(vec![String::from("a"), String::from("b")]),
                _ => Ok(Vec::new()),
            }
        }
    };

    assert_eq!(list.load_next_page(fetch).await, Ok(2));
    assert_eq!(list.is_finished(), false);
    assert_eq!(list.load_next_page(fetch).await, Ok(0));
    assert_eq!(list.is_finished(), true);

    // finished: no further fetch happens
    assert_eq!(list.load_next_page(fetch).await, Ok(0));
    assert_eq!(fetches.get(), 2);
    assert_eq!(list.items(), &[String::from("a"), String::from("b")]);
}

#[tokio::test]
async fn test_load_next_page_accumulates_pages() {
    let mut list = PagedList::<i64>::new(2);
    let fetch = |request: PageRequest| async move {
        match request.page {
            1 => Ok(vec![1, 2]),
            2 => Ok(vec![3]),
            _ => panic!("list should have finished"),
        }
    };

    list.load_next_page(fetch).await.expect("page 1 should load");
    list.load_next_page(fetch).await.expect("page 2 should load");

    assert_eq!(list.items(), &[1, 2, 3]);
    assert_eq!(list.is_finished(), true);
}

#[tokio::test]
async fn test_load_next_page_error_is_terminal() {
    let mut list = PagedList::<i64>::new(2);
    let fetches = Cell::new(0u32);

    let failing_fetch = |_request: PageRequest| {
        fetches.set(fetches.get() + 1);
        async { Err(AppError::Api { status: 500, detail: String::from("boom") }) }
    };

    let result = list.load_next_page(failing_fetch).await;
    assert_eq!(result, Err(AppError::Api { status: 500, detail: String::from("boom") }));

    // the error marked the list finished, the fetch is not retried
    assert_eq!(list.load_next_page(failing_fetch).await, Ok(0));
    assert_eq!(fetches.get(), 1);
}

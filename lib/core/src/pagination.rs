use std::future::Future;

use arenadeck_utils::constants::SCROLL_LOAD_MARGIN_PX;
use arenadeck_utils::errors::AppError;

/// The page a list wants fetched next, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: usize,
}

/// Accumulating state of one incrementally loaded list.
///
/// The `loading` flag is the re-entrancy gate guaranteeing at most one fetch
/// in flight per list: scheduling is a single-threaded cooperative event
/// loop, so a plain bool suffices. There is no cancellation and no retry; a
/// fetch error ends the list.
#[derive(Clone, Debug)]
pub struct PagedList<T> {
    items: Vec<T>,
    page: u32,
    page_size: usize,
    loading: bool,
    finished: bool,
}

impl<T> PagedList<T> {
    pub fn new(page_size: usize) -> PagedList<T> {
        PagedList {
            items: Vec::new(),
            page: 1,
            page_size,
            loading: false,
            finished: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn next_page(&self) -> u32 {
        self.page
    }

    /// Claims the loading gate. Returns the request to perform, or `None`
    /// when a fetch is already in flight or the list has ended.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.loading || self.finished {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            page: self.page,
            page_size: self.page_size,
        })
    }

    /// Releases the gate and folds the fetched batch into the list.
    ///
    /// A batch shorter than the page size ends the list; so does a fetch
    /// error, which is passed through once to the caller. Returns the number
    /// of appended items.
    pub fn complete_load(&mut self, result: Result<Vec<T>, AppError>) -> Result<usize, AppError> {
        self.loading = false;
        match result {
            Ok(batch) => {
                let count = batch.len();
                if count < self.page_size {
                    self.finished = true;
                }
                if count > 0 {
                    self.page += 1;
                    self.items.extend(batch);
                }
                Ok(count)
            }
            Err(error) => {
                self.finished = true;
                Err(error)
            }
        }
    }

    /// Drives one `begin_load`/`complete_load` round around `fetch_page`.
    /// A no-op returning `Ok(0)` when the gate is already claimed or the
    /// list has ended.
    pub async fn load_next_page<F, Fut>(&mut self, fetch_page: F) -> Result<usize, AppError>
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, AppError>>,
    {
        match self.begin_load() {
            Some(request) => {
                let result = fetch_page(request).await;
                self.complete_load(result)
            }
            None => Ok(0),
        }
    }

    /// Discards accumulated items and rewinds to the first page, used when
    /// the filters feeding the list change. An in-flight fetch keeps its
    /// gate until it completes.
    pub fn reset(&mut self) {
        self.items.clear();
        self.page = 1;
        self.finished = false;
    }
}

/// Passive load trigger: true once the scroll position is within
/// [`SCROLL_LOAD_MARGIN_PX`] of the bottom of the content.
pub fn has_reached_scroll_load_threshold(scroll_top: f64, viewport_height: f64, content_height: f64) -> bool {
    scroll_top + viewport_height >= content_height - SCROLL_LOAD_MARGIN_PX
}

//! Cursor pagination driver shared by the list endpoints.

use cairn_common::PagedRequest;
use cairn_common::http_client::HttpClient;

use crate::client::CloudClient;
use crate::error::Result;

/// Walks a cursor-paginated list endpoint page by page.
///
/// Every list endpoint follows the same shape — fetch, collect items, carry
/// an opaque continuation cursor into the next fetch, stop when the cursor
/// runs out. `Pages` drives that loop for any [`PagedRequest`].
///
/// ```no_run
/// # use cairn::{CloudClient, UniverseId};
/// # async fn run() -> Result<(), cairn::Error> {
/// # let client = CloudClient::new("API_KEY");
/// let mut pages = client.data_stores(UniverseId(1)).list();
/// while let Some(stores) = pages.next_page().await? {
///     for store in stores {
///         println!("{}", store.name);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Pages<C, R> {
    client: CloudClient<C>,
    request: R,
    finished: bool,
}

impl<C, R> Pages<C, R>
where
    C: HttpClient + Sync,
    R: PagedRequest + Clone + Send + Sync,
{
    /// Start walking from the given list request.
    ///
    /// Public so custom-tuned requests (filters, page sizes, scopes) can be
    /// paginated the same way as the ones the service handles produce.
    pub fn new(client: CloudClient<C>, request: R) -> Self {
        Self {
            client,
            request,
            finished: false,
        }
    }

    /// Fetch the next page of items.
    ///
    /// Returns `Ok(None)` once the listing is exhausted; further calls keep
    /// returning `Ok(None)` without touching the network. The final page of
    /// a listing may be empty when the item count divides evenly.
    pub async fn next_page(&mut self) -> Result<Option<Vec<R::Item>>> {
        if self.finished {
            return Ok(None);
        }

        let response = self.client.send(self.request.clone()).await?;
        let output = response.parse()?;
        let (items, cursor) = R::split(output);

        // An absent or empty cursor both mean the listing is done.
        match cursor.filter(|c| !c.is_empty()) {
            Some(cursor) => self.request.set_cursor(cursor),
            None => self.finished = true,
        }

        Ok(Some(items))
    }

    /// Whether the listing has been exhausted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

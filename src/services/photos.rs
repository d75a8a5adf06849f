use crate::api::{ApiClient, Endpoint};
use crate::error::Result;
use crate::models::{Listing, Photo, TokenRequest};

/// Album photos visible to the logged-in account
pub struct PhotoLister<'a> {
    api: &'a ApiClient,
    user_token: &'a str,
}

impl<'a> PhotoLister<'a> {
    pub fn new(api: &'a ApiClient, user_token: &'a str) -> Self {
        Self { api, user_token }
    }

    /// All photos, newest first as the service returns them
    pub fn list_all_photos(&self) -> Result<Vec<Photo>> {
        let request = TokenRequest {
            user_token: self.user_token.to_string(),
        };
        let listing: Listing<Photo> = self.api.post(Endpoint::AllPhotos, &request)?;
        Ok(listing.into_entries())
    }

    /// URLs of the `n` most recent photos, oldest first
    pub fn last_n_photos(&self, n: usize) -> Result<Vec<String>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        tracing::info!(count = n, "getting last photos");
        let photos = self.list_all_photos()?;
        Ok(oldest_first(photos, n))
    }
}

/// Take the `n` newest entries of a newest-first listing, in chronological order
fn oldest_first(photos: Vec<Photo>, n: usize) -> Vec<String> {
    let mut urls: Vec<String> = photos.into_iter().take(n).map(|p| p.url).collect();
    urls.reverse();
    urls
}

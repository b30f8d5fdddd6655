//! Customer review adapter

use shared::ApiResponse;
use shared::models::{Review, ReviewCreate};

use super::{Ack, ack, list, with_query};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/review`
pub struct ReviewsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> ReviewsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Review>> {
        let resp: ApiResponse<Vec<Review>> = self.http.get("/review").await?;
        list(resp, "Không thể tải đánh giá")
    }

    /// The backend takes the review as query parameters, not a body
    pub async fn submit(&self, review: &ReviewCreate) -> ClientResult<()> {
        let rating = review.rating_star.to_string();
        let path = with_query(
            "/review",
            &[
                ("userId", review.user_id.as_str()),
                ("content", review.content.as_str()),
                ("ratingStar", rating.as_str()),
            ],
        )?;
        let resp: Ack = self.http.post_empty(&path).await?;
        ack(resp, "Không thể gửi đánh giá")?;
        Ok(())
    }
}

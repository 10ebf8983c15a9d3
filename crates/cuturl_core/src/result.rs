/// One completed shortening, as shown in the result card and kept in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    /// Opaque identifier assigned when the result was created.
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    /// Alias portion of `short_url`.
    pub short_code: String,
    /// RFC 3339 timestamp. Refreshed when the same URL is shortened again.
    pub created_at: String,
}

/// Supplies the cross-origin headers attached to every proxy response.
pub trait CorsProvider: Send + Sync {
    fn allowed_origin(&self) -> &str;
    fn allowed_methods(&self) -> &str;
    fn allowed_headers(&self) -> &str;
}

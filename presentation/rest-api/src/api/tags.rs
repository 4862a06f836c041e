use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness
    Health,
    /// Catalog products
    Products,
}

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct CustomerDoc {
    pub customerId: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// `YYYY-MM-DD`
    pub registrationDate: String,
    /// RFC 3339, UTC
    pub createdAt: String,
    /// RFC 3339, UTC
    pub updatedAt: String,
}

#[derive(ToSchema)]
pub struct CustomerInputDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list_customers,
        crate::routes::customers::create_customer,
        crate::routes::customers::get_customer,
        crate::routes::customers::update_customer,
        crate::routes::customers::delete_customer,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            CustomerDoc,
            CustomerInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_customer_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/customers"));
        assert!(paths.contains_key("/customers/{customerId}"));
        assert!(paths["/customers/{customerId}"].get("delete").is_some());
    }
}

pub mod listing_routes;
pub mod swagger_routes;

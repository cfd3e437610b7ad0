pub mod error;
pub mod fallback;
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;

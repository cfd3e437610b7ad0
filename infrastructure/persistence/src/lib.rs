pub mod store_file;
pub mod product {
    pub mod entity;
    pub mod repository;
}

pub mod client;
pub mod utils;
pub mod checkpoint {
    pub mod model;
    pub mod pretty;
    pub mod store;
}
pub mod processed {
    pub mod model;
    pub mod pretty;
    pub mod store;
}

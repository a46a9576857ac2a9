pub mod paginator;
pub mod request_queue;

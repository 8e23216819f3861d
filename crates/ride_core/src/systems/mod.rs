pub mod batch_matching;
pub mod request_inbound;
pub mod trip_completed;
pub mod trip_started;

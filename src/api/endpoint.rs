pub mod batches_endpoint;

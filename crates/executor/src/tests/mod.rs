mod batch;
mod serialization;

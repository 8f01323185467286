mod aggregator;
mod common;
mod router;

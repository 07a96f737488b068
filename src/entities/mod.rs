pub mod bundle_arrival;

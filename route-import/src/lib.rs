//! client-side pre-processing for transit route administration screens:
//! shapefile-to-GeoJSON geometry ingestion and validity window overlap
//! checking. both operations are pure and advisory; the backend service
//! that persists routes and assignments remains the source of truth.
pub mod app;
pub mod geometry;
pub mod validity;

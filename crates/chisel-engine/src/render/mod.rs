//! GPU-facing records.
//!
//! Every draw is a unit quad ([`QUAD_VERTICES`]) at location 0, instanced
//! with one record per border corner or blur target rect. Records are plain
//! `Pod` structs uploaded with `bytemuck::cast_slice`.

mod instance;

pub use instance::{BlurInstance, BorderCornerInstance, QuadVertex, QUAD_INDICES, QUAD_VERTICES};

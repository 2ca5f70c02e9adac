//! QR rendering for qrmedia.
//!
//! One job: turn a text payload (in practice a storage URL) into a
//! fixed-size PNG, deterministically.

pub mod qr;

pub use qr::{render_qr_png, QrError};

pub mod download_qr;
pub mod generate_qr;
pub mod health;
pub mod index;

mod client_id;

pub use client_id::ClientId;

pub mod envelope;
pub mod verify;
pub mod webhook;

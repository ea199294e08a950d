//! Yandex Practicum homework-status API adapter.

mod client;

pub use client::PracticumClient;

// src/services/mod.rs
//
// Services Module - typed access to the encyclopedia API

pub mod encyclopedia_service;

pub use encyclopedia_service::EncyclopediaService;

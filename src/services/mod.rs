pub mod bookmark_service;

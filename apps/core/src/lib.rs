pub mod catalog;
pub mod config;
pub mod contract;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod scroll_spy;
pub mod search;
pub mod search_session;
pub mod service;
pub mod storage;
pub mod theme;
pub mod transport;

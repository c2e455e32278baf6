pub mod daily_log {
    pub mod repository;
}

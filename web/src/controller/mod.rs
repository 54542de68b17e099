pub(crate) mod analysis_controller;
pub(crate) mod chat_history_controller;
pub(crate) mod diagnostic_controller;
pub(crate) mod health_check_controller;

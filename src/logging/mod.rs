pub use self::logger::{
    log_error, log_info, log_section, log_success, log_transition, log_warning,
};

mod logger;

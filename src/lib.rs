pub mod dwt_filter;
pub mod logger;
pub mod tool_config;

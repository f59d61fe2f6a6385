pub mod mood_config;

use std::env;

pub fn env_file() -> String {
    if let Ok(v) = env::var("SCHEMA_ENV_FILE") {
        if !v.is_empty() {
            return v;
        }
    }

    ".env".to_string()
}

pub fn output_file() -> String {
    if let Ok(v) = env::var("SCHEMA_OUTPUT_FILE") {
        if !v.is_empty() {
            return v;
        }
    }

    "docs/prism.sql".to_string()
}

pub fn dump_image() -> String {
    if let Ok(v) = env::var("SCHEMA_DUMP_IMAGE") {
        if !v.is_empty() {
            return v;
        }
    }

    "postgres:16".to_string()
}

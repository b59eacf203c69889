use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe (BACKEND_URL_*, REQUEST_TIMEOUT_MS, ...)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Las variables del entorno real tienen prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ENVIRONMENT");
    println!("cargo:rerun-if-env-changed=BACKEND_URL_DEVELOPMENT");
    println!("cargo:rerun-if-env-changed=BACKEND_URL_PRODUCTION");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
    println!("cargo:rerun-if-env-changed=REQUEST_TIMEOUT_MS");
    println!("cargo:rerun-if-env-changed=GALLERY_RETRY_ATTEMPTS");
}

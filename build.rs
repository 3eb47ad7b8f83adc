fn main() {
    println!("cargo:rerun-if-changed=src/secrets.rs");
    println!("cargo:rerun-if-env-changed=RTDB_ACCESS_MODE");
    println!("cargo::rustc-check-cfg=cfg(rtdb_fallback_secrets)");
    if !std::path::Path::new("src/secrets.rs").is_file() {
        println!("cargo::rustc-cfg=rtdb_fallback_secrets");
    }
}

use std::fs;

fn main() {
    // 读取 VERSION 文件，缺失时退回 Cargo.toml 中的版本
    let version = fs::read_to_string("VERSION")
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    // 设置环境变量，供编译时使用
    println!("cargo:rustc-env=APP_VERSION={}", version);

    // VERSION 或内嵌检查单变更时重新运行 build.rs
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-changed=embedded/checklist.json");
}

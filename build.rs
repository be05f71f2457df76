use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY_STYLESHEET: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT_BUNDLE: &str = "assets/dist/bundle.css";
const ADMIN_CONFIG: &str = "assets/admin.json";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    println!("cargo:rerun-if-changed={ADMIN_CONFIG}");

    embed_admin_config();

    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    // main.css pulls the shell, sidebar, view and toast sheets in through @import
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY_STYLESHEET))
        .expect("Failed to bundle admin stylesheets");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify admin stylesheets");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to print admin stylesheet bundle");

    fs::write(OUTPUT_BUNDLE, css.code).expect("Failed to write bundle.css");
}

/// Copy the optional config overrides into OUT_DIR, or an empty object when absent
fn embed_admin_config() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let overrides = fs::read_to_string(ADMIN_CONFIG).unwrap_or_else(|_| "{}".to_string());
    fs::write(Path::new(&out_dir).join("admin.json"), overrides)
        .expect("Failed to write embedded admin.json");
}

use std::io::Write;
use std::path::PathBuf;

use libs::env_logger;
use libs::log;

pub fn root_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR")))
        .parent()
        .unwrap()
        .to_path_buf()
}

pub fn tests_path() -> PathBuf {
    root_path().join("crates").join("sharelink").join("tests")
}

pub fn testdata_path() -> PathBuf {
    tests_path().join("testdata")
}

/// Installs a test logger honouring `RUST_LOG`. Safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log::LevelFilter::Warn.to_string()),
    )
    .format(|buf, record| {
        let mut target = record.target().to_string();
        if let Some(line_no) = record.line() {
            target.push(':');
            target.push_str(&line_no.to_string());
        }
        writeln!(buf, "{} - {} - {}", record.level(), target, record.args())
    })
    .is_test(true)
    .try_init();
}
